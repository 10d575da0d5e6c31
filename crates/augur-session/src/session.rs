//! Prophecy session management.
//!
//! `ProphecySession` holds the whole state of one reading and moves it
//! through named transitions. The initial draw is a separate step so the
//! caller can render the empty table before any card appears.

use augur_core::{
    ChosenHistory, Deck, Direction, SwipeOutcome, apply_swipe, build_prompt, render_lines,
};
use augur_oracle::{CompletionClient, OracleConfig, OracleResult, ProphecyRequester};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info};

use crate::command::{Command, HELP};
use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::journal::{Journal, JournalEntry};

/// Everything a front-end needs to render a reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Cards still to be swiped.
    pub deck: Deck,
    /// Cards swiped right, in order.
    pub chosen: ChosenHistory,
    /// Last prophecy text; empty until one arrives.
    pub prophecy: String,
    /// A prophecy request is in flight.
    pub loading: bool,
    /// The last prophecy request failed.
    pub error: bool,
}

/// Result of collecting a prophecy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProphecyUpdate {
    /// The prophecy arrived, split into paragraphs.
    Received(Vec<String>),
    /// The request failed; the previous prophecy text is kept.
    Failed,
}

/// An interactive tarot reading.
pub struct ProphecySession<C> {
    state: SessionState,
    requester: ProphecyRequester<C>,
    config: SessionConfig,
    rng: StdRng,
    drawn: bool,
    journal: Journal,
}

impl<C: CompletionClient> ProphecySession<C> {
    /// Create a session with an empty deck. Call
    /// [`draw_initial`](Self::draw_initial) to lay out the cards.
    pub fn new(config: SessionConfig, client: C, oracle: OracleConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            state: SessionState::default(),
            requester: ProphecyRequester::new(client, oracle),
            config,
            rng,
            drawn: false,
            journal: Journal::new(),
        }
    }

    /// Get the full session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Get the deck.
    pub fn deck(&self) -> &Deck {
        &self.state.deck
    }

    /// Get the chosen cards.
    pub fn chosen(&self) -> &ChosenHistory {
        &self.state.chosen
    }

    /// Get the raw prophecy text.
    pub fn prophecy(&self) -> &str {
        &self.state.prophecy
    }

    /// Whether a prophecy request is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    /// Whether the last prophecy request failed.
    pub fn has_error(&self) -> bool {
        self.state.error
    }

    /// Whether the initial draw has happened.
    pub fn is_drawn(&self) -> bool {
        self.drawn
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Get the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Lay out the initial cards. Allowed once per session.
    pub fn draw_initial(&mut self) -> SessionResult<&Deck> {
        if self.drawn {
            return Err(SessionError::AlreadyDrawn);
        }
        self.drawn = true;
        self.state.deck = Deck::draw(self.config.initial_draw, &mut self.rng);

        let cards: Vec<String> = self.state.deck.iter().map(|c| c.name.to_string()).collect();
        debug!(?cards, "initial draw");
        self.journal.append(JournalEntry::Drawn {
            cards,
            timestamp: Utc::now(),
        });

        Ok(&self.state.deck)
    }

    /// Apply a completed swipe.
    pub fn swipe(&mut self, direction: Direction) -> SwipeOutcome {
        let outcome = apply_swipe(direction, &mut self.state.deck, &mut self.state.chosen);
        debug!(%direction, ?outcome, "swipe");

        if let Some(card) = outcome.card() {
            self.journal.append(JournalEntry::Swiped {
                direction,
                card: card.name.to_string(),
                timestamp: Utc::now(),
            });
        }
        outcome
    }

    /// Discard the offered card.
    pub fn swipe_left(&mut self) -> SwipeOutcome {
        self.swipe(Direction::Left)
    }

    /// Choose the offered card.
    pub fn swipe_right(&mut self) -> SwipeOutcome {
        self.swipe(Direction::Right)
    }

    /// A swipe was released before it committed. Nothing changes.
    pub fn snap_back(&self) {
        debug!("snap back");
    }

    /// Start a prophecy request for the chosen cards.
    ///
    /// Fails if nothing has been chosen or a request is already in flight;
    /// neither failure touches the state. Must be called from within a
    /// tokio runtime.
    pub fn request_prophecy(&mut self) -> SessionResult<()> {
        if self.state.chosen.is_empty() {
            return Err(SessionError::NoCardsChosen);
        }
        let prompt = build_prompt(self.state.chosen.cards())?;
        self.requester.start(&prompt)?;

        self.state.loading = true;
        self.state.error = false;
        self.journal.append(JournalEntry::ProphecyRequested {
            cards: self.state.chosen.names().iter().map(|n| n.to_string()).collect(),
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Collect the pending prophecy if it is ready, without waiting.
    pub fn poll_prophecy(&mut self) -> Option<ProphecyUpdate> {
        let result = self.requester.try_finish()?;
        Some(self.apply(result))
    }

    /// Wait for the pending prophecy and apply it.
    pub async fn settle_prophecy(&mut self) -> SessionResult<ProphecyUpdate> {
        let result = self
            .requester
            .finish()
            .await
            .ok_or(SessionError::NoPendingProphecy)?;
        Ok(self.apply(result))
    }

    /// The prophecy split into display paragraphs; empty while there is no
    /// prophecy text.
    pub fn prophecy_lines(&self) -> Vec<String> {
        if self.state.prophecy.is_empty() {
            return Vec::new();
        }
        render_lines(&self.state.prophecy)
    }

    fn apply(&mut self, result: OracleResult<String>) -> ProphecyUpdate {
        self.state.loading = false;
        match result {
            Ok(text) => {
                self.state.prophecy = text;
                self.state.error = false;
                let paragraphs = self.prophecy_lines();
                info!(paragraphs = paragraphs.len(), "prophecy received");
                self.journal.append(JournalEntry::ProphecyReceived {
                    paragraphs: paragraphs.clone(),
                    timestamp: Utc::now(),
                });
                ProphecyUpdate::Received(paragraphs)
            }
            Err(e) => {
                error!(error = %e, "prophecy request failed");
                self.state.error = true;
                self.journal.append(JournalEntry::ProphecyFailed {
                    reason: e.to_string(),
                    timestamp: Utc::now(),
                });
                ProphecyUpdate::Failed
            }
        }
    }

    /// Process a line of user input and return a response.
    pub async fn process(&mut self, input: &str) -> SessionResult<String> {
        match Command::parse(input)? {
            Some(command) => self.execute(command).await,
            None => Ok(String::new()),
        }
    }

    /// Run a parsed command and return a response.
    pub async fn execute(&mut self, command: Command) -> SessionResult<String> {
        match command {
            Command::Swipe(direction) => {
                let outcome = self.swipe(direction);
                Ok(self.describe_swipe(outcome))
            }
            Command::SnapBack => {
                self.snap_back();
                Ok("The card slides back into place.".to_string())
            }
            Command::Send => self.do_send().await,
            Command::Status => Ok(self.do_status()),
            Command::Journal => Ok(self.do_journal_show()),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok("Farewell.".to_string()),
        }
    }

    async fn do_send(&mut self) -> SessionResult<String> {
        self.request_prophecy()?;
        match self.settle_prophecy().await? {
            ProphecyUpdate::Received(paragraphs) => Ok(paragraphs.join("\n\n")),
            ProphecyUpdate::Failed => {
                Ok("The spirits are silent. The prophecy could not be read.".to_string())
            }
        }
    }

    fn describe_swipe(&self, outcome: SwipeOutcome) -> String {
        let action = match outcome {
            SwipeOutcome::Chosen(card) => format!("Chosen: {card}"),
            SwipeOutcome::Discarded(card) => format!("Discarded: {card}"),
            SwipeOutcome::Ignored => "Nothing happens.".to_string(),
            SwipeOutcome::Empty => return "The deck is empty.".to_string(),
        };
        format!("{action}\n{}", self.describe_next())
    }

    fn describe_next(&self) -> String {
        match self.state.deck.front() {
            Some(card) => format!("Next card: {card} ({} left)", self.state.deck.len()),
            None => "No cards left.".to_string(),
        }
    }

    fn do_status(&self) -> String {
        let deck = if self.drawn {
            self.describe_next()
        } else {
            "The cards have not been drawn yet.".to_string()
        };

        let chosen = if self.state.chosen.is_empty() {
            "no cards".to_string()
        } else {
            self.state.chosen.names().join(", ")
        };

        let prophecy = if self.state.loading {
            "Please wait, I'm thinking".to_string()
        } else if self.state.error {
            "failed".to_string()
        } else if self.state.prophecy.is_empty() {
            "none".to_string()
        } else {
            format!("{} paragraphs", self.prophecy_lines().len())
        };

        format!(
            "{deck}\nChosen ({}): {chosen}\nProphecy: {prophecy}",
            self.state.chosen.len()
        )
    }

    fn do_journal_show(&self) -> String {
        if self.journal.is_empty() {
            return "Journal is empty.".to_string();
        }
        self.journal.export_text().trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use augur_core::CATALOG;
    use augur_oracle::{CompletionRequest, CompletionResponse, OracleError};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    /// Replies with queued answers in order (`None` = transport failure),
    /// optionally holding each request until the gate is opened.
    #[derive(Default)]
    struct FakeClient {
        replies: Mutex<VecDeque<Option<String>>>,
        gate: Option<Arc<Notify>>,
    }

    impl FakeClient {
        fn replying(replies: &[Option<&str>]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().map(|r| r.map(str::to_string)).collect()),
                gate: None,
            }
        }

        fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }
    }

    impl CompletionClient for FakeClient {
        async fn complete(&self, _request: CompletionRequest) -> OracleResult<CompletionResponse> {
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            let reply = self.replies.lock().unwrap().pop_front().flatten();
            reply.map(CompletionResponse::from_text).ok_or(OracleError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    fn session_with(client: FakeClient) -> ProphecySession<FakeClient> {
        ProphecySession::new(
            SessionConfig::default().with_seed(42),
            client,
            OracleConfig::default(),
        )
    }

    fn drawn_session(client: FakeClient) -> ProphecySession<FakeClient> {
        let mut s = session_with(client);
        s.draw_initial().unwrap();
        s
    }

    #[test]
    fn starts_with_empty_deck() {
        let s = session_with(FakeClient::default());
        assert!(s.deck().is_empty());
        assert!(s.chosen().is_empty());
        assert!(!s.is_drawn());
        assert_eq!(s.prophecy(), "");
        assert!(!s.is_loading());
        assert!(!s.has_error());
    }

    #[test]
    fn initial_draw_lays_out_three_catalog_cards() {
        let mut s = session_with(FakeClient::default());
        let deck = s.draw_initial().unwrap();
        assert_eq!(deck.len(), 3);
        assert!(deck.iter().all(|c| CATALOG.contains(c)));
        assert_eq!(s.journal().len(), 1);
    }

    #[test]
    fn initial_draw_only_once() {
        let mut s = drawn_session(FakeClient::default());
        assert!(matches!(s.draw_initial(), Err(SessionError::AlreadyDrawn)));
        assert_eq!(s.deck().len(), 3);
    }

    #[test]
    fn seeded_draws_repeat() {
        let a = drawn_session(FakeClient::default());
        let b = drawn_session(FakeClient::default());
        assert_eq!(a.deck(), b.deck());
    }

    #[test]
    fn configurable_draw_size() {
        let mut s = ProphecySession::new(
            SessionConfig::default().with_seed(1).with_initial_draw(5),
            FakeClient::default(),
            OracleConfig::default(),
        );
        assert_eq!(s.draw_initial().unwrap().len(), 5);
    }

    #[test]
    fn swipe_right_moves_front_to_history() {
        let mut s = drawn_session(FakeClient::default());
        let front = *s.deck().front().unwrap();

        assert_eq!(s.swipe_right(), SwipeOutcome::Chosen(front));
        assert_eq!(s.chosen().cards(), &[front]);
        assert_eq!(s.deck().len(), 2);
    }

    #[test]
    fn swipe_left_discards_front() {
        let mut s = drawn_session(FakeClient::default());
        let front = *s.deck().front().unwrap();

        assert_eq!(s.swipe_left(), SwipeOutcome::Discarded(front));
        assert!(s.chosen().is_empty());
        assert_eq!(s.deck().len(), 2);
    }

    #[test]
    fn vertical_swipes_and_snap_back_change_nothing() {
        let mut s = drawn_session(FakeClient::default());
        let before = s.state().clone();

        assert_eq!(s.swipe(Direction::Up), SwipeOutcome::Ignored);
        assert_eq!(s.swipe(Direction::Down), SwipeOutcome::Ignored);
        s.snap_back();

        assert_eq!(s.state(), &before);
        assert_eq!(s.journal().len(), 1);
    }

    #[test]
    fn exhausted_deck_reports_empty() {
        let mut s = drawn_session(FakeClient::default());
        for _ in 0..3 {
            s.swipe_right();
        }
        assert_eq!(s.swipe_right(), SwipeOutcome::Empty);
        assert_eq!(s.swipe_left(), SwipeOutcome::Empty);
        assert_eq!(s.chosen().len(), 3);
    }

    #[test]
    fn request_without_chosen_cards() {
        let mut s = drawn_session(FakeClient::default());
        assert!(matches!(
            s.request_prophecy(),
            Err(SessionError::NoCardsChosen)
        ));
        assert!(!s.is_loading());
    }

    #[tokio::test]
    async fn prophecy_arrives_and_is_split() {
        let mut s = drawn_session(FakeClient::replying(&[Some("\n\nA\n\nB\n\nC")]));
        s.swipe_right();

        s.request_prophecy().unwrap();
        assert!(s.is_loading());

        let update = s.settle_prophecy().await.unwrap();
        assert_eq!(
            update,
            ProphecyUpdate::Received(vec!["A".into(), "B".into(), "C".into()])
        );
        assert!(!s.is_loading());
        assert!(!s.has_error());
        assert_eq!(s.prophecy(), "\n\nA\n\nB\n\nC");
        assert_eq!(s.prophecy_lines(), vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn failure_sets_error_and_keeps_empty_text() {
        let mut s = drawn_session(FakeClient::replying(&[None]));
        s.swipe_right();

        s.request_prophecy().unwrap();
        assert_eq!(s.settle_prophecy().await.unwrap(), ProphecyUpdate::Failed);

        assert!(s.has_error());
        assert!(!s.is_loading());
        assert_eq!(s.prophecy(), "");
        assert!(s.prophecy_lines().is_empty());
    }

    #[tokio::test]
    async fn failure_keeps_previous_prophecy() {
        let mut s = drawn_session(FakeClient::replying(&[Some("The sun rises."), None]));
        s.swipe_right();

        s.request_prophecy().unwrap();
        s.settle_prophecy().await.unwrap();
        s.swipe_right();
        s.request_prophecy().unwrap();
        s.settle_prophecy().await.unwrap();

        assert!(s.has_error());
        assert_eq!(s.prophecy(), "The sun rises.");
    }

    #[tokio::test]
    async fn new_request_clears_error() {
        let mut s = drawn_session(FakeClient::replying(&[None, Some("Better now.")]));
        s.swipe_right();

        s.request_prophecy().unwrap();
        s.settle_prophecy().await.unwrap();
        assert!(s.has_error());

        s.request_prophecy().unwrap();
        assert!(!s.has_error());
        s.settle_prophecy().await.unwrap();
        assert_eq!(s.prophecy(), "Better now.");
    }

    #[tokio::test]
    async fn second_request_rejected_while_pending() {
        let gate = Arc::new(Notify::new());
        let client = FakeClient::replying(&[Some("first"), Some("second")]).gated(Arc::clone(&gate));
        let mut s = drawn_session(client);
        s.swipe_right();

        s.request_prophecy().unwrap();
        let err = s.request_prophecy().unwrap_err();
        assert!(matches!(
            err,
            SessionError::Oracle(OracleError::RequestPending)
        ));
        assert!(s.is_loading());

        gate.notify_one();
        s.settle_prophecy().await.unwrap();
        assert_eq!(s.prophecy(), "first");
        assert!(!s.is_loading());
    }

    #[tokio::test]
    async fn poll_collects_only_when_ready() {
        let gate = Arc::new(Notify::new());
        let client = FakeClient::replying(&[Some("Patience.")]).gated(Arc::clone(&gate));
        let mut s = drawn_session(client);
        s.swipe_right();

        assert!(s.poll_prophecy().is_none());
        s.request_prophecy().unwrap();
        assert!(s.poll_prophecy().is_none());

        // Swipes still apply while the request is in flight.
        s.swipe_left();
        assert_eq!(s.deck().len(), 1);

        gate.notify_one();
        let mut update = None;
        for _ in 0..100 {
            tokio::task::yield_now().await;
            update = s.poll_prophecy();
            if update.is_some() {
                break;
            }
        }
        assert_eq!(update, Some(ProphecyUpdate::Received(vec!["Patience.".into()])));
        assert!(!s.is_loading());
    }

    #[tokio::test]
    async fn settle_without_request() {
        let mut s = drawn_session(FakeClient::default());
        assert!(matches!(
            s.settle_prophecy().await,
            Err(SessionError::NoPendingProphecy)
        ));
    }

    #[tokio::test]
    async fn process_swipes_and_status() {
        let mut s = drawn_session(FakeClient::default());
        let first = *s.deck().front().unwrap();

        let output = s.process("right").await.unwrap();
        assert!(output.starts_with(&format!("Chosen: {first}")));
        assert!(output.contains("(2 left)"));

        let status = s.process("status").await.unwrap();
        assert!(status.contains(&format!("Chosen (1): {first}")));
        assert!(status.contains("Prophecy: none"));

        assert_eq!(s.process("up").await.unwrap().lines().next(), Some("Nothing happens."));
    }

    #[tokio::test]
    async fn process_send() {
        let mut s = drawn_session(FakeClient::replying(&[Some("One.\n\nTwo."), None]));

        assert!(matches!(
            s.process("send").await,
            Err(SessionError::NoCardsChosen)
        ));

        s.process("r").await.unwrap();
        assert_eq!(s.process("send").await.unwrap(), "One.\n\nTwo.");

        let output = s.process("send").await.unwrap();
        assert!(output.contains("spirits are silent"));
        assert!(s.process("status").await.unwrap().contains("Prophecy: failed"));
    }

    #[tokio::test]
    async fn process_journal_help_quit() {
        let mut s = session_with(FakeClient::default());
        assert_eq!(s.process("journal").await.unwrap(), "Journal is empty.");
        assert!(s.process("status").await.unwrap().contains("not been drawn"));

        s.draw_initial().unwrap();
        s.process("left").await.unwrap();
        let journal = s.process("journal").await.unwrap();
        assert!(journal.contains("Drawn: "));
        assert!(journal.contains("Discarded: "));

        assert!(s.process("help").await.unwrap().contains("Reading Commands"));
        assert_eq!(s.process("quit").await.unwrap(), "Farewell.");
        assert_eq!(s.process("").await.unwrap(), "");
        assert!(matches!(
            s.process("shuffle").await,
            Err(SessionError::UnknownCommand(_))
        ));
    }
}
