use crate::art;
use crossterm::event::{KeyCode, KeyEvent};
use shoecount_core::{
    parse_deck_count, Card, CountSession, CountingSystem, DealResult, Event, EventBus, RngState,
    SessionError, TallySummary,
};
use std::collections::VecDeque;

const MAX_EVENT_LOG: usize = 200;
const DEFAULT_DECK_ENTRY: &str = "1";
const MAX_DECK_ENTRY_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Info,
    Error,
}

/// Blocking notice rendered as a centered popup; any key dismisses it.
#[derive(Debug, Clone)]
pub struct Modal {
    pub kind: ModalKind,
    pub title: String,
    pub body: String,
}

impl Modal {
    fn info(title: &str, body: impl Into<String>) -> Self {
        Self {
            kind: ModalKind::Info,
            title: title.to_string(),
            body: body.into(),
        }
    }

    fn error(title: &str, body: impl Into<String>) -> Self {
        Self {
            kind: ModalKind::Error,
            title: title.to_string(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsView {
    /// Read the live session counters at draw time.
    Live,
    /// Frozen end-of-shoe summary, shown behind the completion notice and
    /// cleared when the notice is dismissed.
    Final(TallySummary),
}

pub struct App {
    pub seed: u64,
    pub session: CountSession,
    pub events: EventBus,
    pub deck_entry: String,
    pub system_cursor: usize,
    pub revealed: Option<Card>,
    pub results: Option<ResultsView>,
    pub modal: Option<Modal>,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(seed: Option<u64>, decks: Option<u32>, system: Option<&str>) -> Self {
        let rng = match seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let session = CountSession::new(rng);
        Self {
            seed: session.rng_seed(),
            session,
            events: EventBus::default(),
            deck_entry: decks
                .map(|decks| decks.to_string())
                .unwrap_or_else(|| DEFAULT_DECK_ENTRY.to_string()),
            system_cursor: system.and_then(system_index).unwrap_or(0),
            revealed: None,
            results: None,
            modal: None,
            event_log: VecDeque::new(),
            status_line: "ready".to_string(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn on_tick(&mut self) {}

    pub fn selected_system(&self) -> CountingSystem {
        CountingSystem::ALL[self.system_cursor.min(CountingSystem::ALL.len() - 1)]
    }

    pub fn cycle_system(&mut self, forward: bool) {
        let len = CountingSystem::ALL.len();
        self.system_cursor = if forward {
            (self.system_cursor + 1) % len
        } else {
            (self.system_cursor + len - 1) % len
        };
    }

    pub fn hint(&self) -> &'static str {
        if self.modal.is_some() {
            "enter dismiss"
        } else if self.session.is_active() {
            "n next card | r results | q quit"
        } else {
            "digits decks | up/down system | enter start | q quit"
        }
    }

    /// Modal notices swallow every key, mirroring a message box.
    pub fn handle_modal_key(&mut self, _key: KeyEvent) -> bool {
        if self.modal.is_none() {
            return false;
        }
        self.modal = None;
        // The end-of-shoe summary lives only as long as its notice.
        if matches!(self.results, Some(ResultsView::Final(_))) {
            self.results = None;
        }
        true
    }

    /// Setup-form editing while idle: the deck-count entry and the system
    /// selector. Returns true when the key was consumed.
    pub fn handle_setup_key(&mut self, key: KeyEvent) -> bool {
        if self.session.is_active() {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if self.deck_entry.len() < MAX_DECK_ENTRY_LEN {
                    self.deck_entry.push(ch);
                }
                true
            }
            KeyCode::Backspace => {
                self.deck_entry.pop();
                true
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.cycle_system(false);
                true
            }
            KeyCode::Down | KeyCode::Tab => {
                self.cycle_system(true);
                true
            }
            KeyCode::Enter => {
                self.start_practice();
                true
            }
            _ => false,
        }
    }

    /// StartPractice intent: validate the entry, build a fresh shoe, and
    /// reveal the first card right away.
    pub fn start_practice(&mut self) {
        let decks = match parse_deck_count(&self.deck_entry) {
            Ok(decks) => decks,
            Err(err) => {
                self.modal = Some(Modal::error("Invalid Input", err.to_string()));
                return;
            }
        };
        let system = self.selected_system();
        if let Err(err) = self.session.start(decks, system, &mut self.events) {
            self.modal = Some(Modal::error("Invalid Input", err.to_string()));
            return;
        }
        self.revealed = None;
        self.results = None;
        self.push_status(format!("practice started: {}", system.label()));
        self.flush_events();
        self.next_card();
    }

    /// NextCard intent.
    pub fn next_card(&mut self) {
        if !self.session.is_active() {
            self.push_status("start a practice run first");
            return;
        }
        match self.session.deal_next(&mut self.events) {
            Ok(DealResult::Dealt { card, .. }) => {
                self.revealed = Some(card);
                self.results = None;
                self.push_status(format!("revealed {card}"));
            }
            Ok(DealResult::Complete) => {
                let summary = self.session.summary();
                self.results = Some(ResultsView::Final(summary));
                self.revealed = None;
                self.session.reset();
                self.modal = Some(Modal::info(
                    "Practice Complete",
                    "You have gone through the entire shoe.",
                ));
                self.push_status("practice complete");
            }
            Err(err) => self.push_error(err),
        }
        self.flush_events();
    }

    /// ToggleResults intent: a pure read plus a visibility flip.
    pub fn toggle_results(&mut self) {
        if !self.session.is_active() {
            self.push_status("start a practice run first");
            return;
        }
        self.results = match self.results {
            Some(_) => None,
            None => Some(ResultsView::Live),
        };
    }

    pub fn live_summary(&self) -> TallySummary {
        self.session.summary()
    }

    pub fn card_face_lines(&self) -> Vec<String> {
        art::face_lines(self.revealed)
    }

    pub fn push_status(&mut self, value: impl Into<String>) {
        self.status_line = value.into();
    }

    pub fn push_error(&mut self, err: SessionError) {
        self.status_line = format!("error: {err}");
    }

    pub fn flush_events(&mut self) {
        let drained: Vec<_> = self.events.drain().collect();
        for event in drained {
            self.push_event_line(format_event(&event));
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

fn system_index(name: &str) -> Option<usize> {
    let wanted = normalize_system_name(name);
    CountingSystem::ALL
        .iter()
        .position(|system| normalize_system_name(system.name()) == wanted)
}

fn normalize_system_name(name: &str) -> String {
    name.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn format_event(event: &Event) -> String {
    match event {
        Event::PracticeStarted {
            decks,
            system,
            shoe_size,
        } => format!(
            "practice started {} x{decks} ({shoe_size} cards)",
            system.name()
        ),
        Event::CardDealt {
            card,
            running_count,
            cards_remaining,
        } => format!("dealt {card} rc {running_count} left {cards_remaining}"),
        Event::ShoeExhausted {
            cards_dealt,
            running_count,
            true_count,
        } => format!(
            "shoe exhausted after {cards_dealt} rc {running_count} tc {true_count:.2}"
        ),
    }
}
