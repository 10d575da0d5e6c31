//! Chat-completion request and response bodies.

use serde::{Deserialize, Serialize};

use crate::config::OracleConfig;

/// Text used when the service answers without any content.
pub const NO_ANSWER: &str = "No answer 🤷‍♂️";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions for the model.
    System,
    /// End-user turn.
    User,
    /// Model turn.
    Assistant,
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote it.
    pub role: Role,
    /// The message text.
    pub content: String,
}

/// Body of a `POST /chat/completions` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Nucleus sampling mass.
    pub top_p: f32,
    /// Frequency penalty.
    pub frequency_penalty: f32,
    /// Presence penalty.
    pub presence_penalty: f32,
}

impl CompletionRequest {
    /// Wrap a prompt as a single system message with the configured
    /// sampling parameters.
    pub fn from_prompt(config: &OracleConfig, prompt: &str) -> Self {
        Self {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: Role::System,
                content: prompt.to_string(),
            }],
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
            frequency_penalty: config.frequency_penalty,
            presence_penalty: config.presence_penalty,
        }
    }
}

/// The parts of a completion response Augur reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Candidate answers, best first.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One candidate answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The generated message, if any.
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// Generated message of a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    /// Generated text; `null` for some refusals and tool calls.
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// A response with one candidate carrying `text`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                message: Some(ChoiceMessage {
                    content: Some(text.into()),
                }),
            }],
        }
    }

    /// Text of the first candidate, if it has any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
            .filter(|text| !text.is_empty())
    }

    /// The prophecy text: the first candidate's text, or [`NO_ANSWER`].
    pub fn into_prophecy(self) -> String {
        self.first_text().unwrap_or(NO_ANSWER).to_string()
    }
}
