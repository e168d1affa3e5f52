use crate::{Card, CountingSystem, Event, EventBus, RngState, Shoe};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid deck count '{0}': number of decks must be a positive integer")]
    InvalidDeckCount(String),
    #[error("no practice run in progress")]
    NotStarted,
}

/// Outcome of asking for the next card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DealResult {
    Dealt {
        card: Card,
        running_count: f64,
        cards_remaining: usize,
    },
    Complete,
}

/// Snapshot of the counters shown in the results panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TallySummary {
    pub running_count: f64,
    pub true_count: f64,
    pub cards_dealt: usize,
    pub cards_remaining: usize,
}

/// Parses the deck-count entry. The one user-facing validation in the
/// trainer: anything that is not a positive integer is rejected.
pub fn parse_deck_count(input: &str) -> Result<u32, SessionError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(decks) if decks > 0 => Ok(decks),
        _ => Err(SessionError::InvalidDeckCount(trimmed.to_string())),
    }
}

/// The stateful core of the trainer. Idle until a shoe is built; Active
/// while dealing. One instance, owned by the UI controller.
#[derive(Debug)]
pub struct CountSession {
    rng: RngState,
    system: CountingSystem,
    shoe: Option<Shoe>,
    shoe_size: usize,
    cards_dealt: usize,
    running_count: f64,
    exhausted_reported: bool,
}

impl CountSession {
    pub fn new(rng: RngState) -> Self {
        Self {
            rng,
            system: CountingSystem::HiLo,
            shoe: None,
            shoe_size: 0,
            cards_dealt: 0,
            running_count: 0.0,
            exhausted_reported: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.shoe.is_some()
    }

    pub fn system(&self) -> CountingSystem {
        self.system
    }

    pub fn running_count(&self) -> f64 {
        self.running_count
    }

    pub fn cards_dealt(&self) -> usize {
        self.cards_dealt
    }

    pub fn cards_remaining(&self) -> usize {
        self.shoe_size - self.cards_dealt
    }

    /// Total card count across all decks in the shoe, fixed at start.
    pub fn shoe_size(&self) -> usize {
        self.shoe_size
    }

    /// Seed behind this session's shuffles, surfaced in the UI header.
    pub fn rng_seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Builds and shuffles a fresh shoe and begins a run.
    pub fn start(
        &mut self,
        num_decks: u32,
        system: CountingSystem,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        if num_decks == 0 {
            return Err(SessionError::InvalidDeckCount(num_decks.to_string()));
        }
        let mut shoe = Shoe::new(num_decks);
        shoe.shuffle(&mut self.rng);
        self.begin(shoe, system);
        events.push(Event::PracticeStarted {
            decks: num_decks,
            system,
            shoe_size: self.shoe_size,
        });
        Ok(())
    }

    /// Begins a run over a prearranged shoe, dealt in the order given.
    /// A partial deck still counts as one for the announcement.
    pub fn start_with_shoe(&mut self, shoe: Shoe, system: CountingSystem, events: &mut EventBus) {
        let decks = shoe.len().div_ceil(52) as u32;
        self.begin(shoe, system);
        events.push(Event::PracticeStarted {
            decks,
            system,
            shoe_size: self.shoe_size,
        });
    }

    fn begin(&mut self, shoe: Shoe, system: CountingSystem) {
        self.shoe_size = shoe.len();
        self.shoe = Some(shoe);
        self.system = system;
        self.cards_dealt = 0;
        self.running_count = 0.0;
        self.exhausted_reported = false;
    }

    /// Reveals the next card and folds its value into the running count.
    /// Once the shoe is exhausted the call reports `Complete` without
    /// mutating anything further; the caller then moves back to Idle via
    /// [`CountSession::reset`].
    pub fn deal_next(&mut self, events: &mut EventBus) -> Result<DealResult, SessionError> {
        let shoe = self.shoe.as_ref().ok_or(SessionError::NotStarted)?;
        if self.cards_dealt >= self.shoe_size {
            // Reported once per run, however often the caller polls.
            if !self.exhausted_reported {
                self.exhausted_reported = true;
                events.push(Event::ShoeExhausted {
                    cards_dealt: self.cards_dealt,
                    running_count: self.running_count,
                    true_count: self.true_count(),
                });
            }
            return Ok(DealResult::Complete);
        }
        let card = shoe
            .card_at(self.cards_dealt)
            .ok_or(SessionError::NotStarted)?;
        self.cards_dealt += 1;
        self.running_count += self.system.value(card.rank);
        let cards_remaining = self.cards_remaining();
        events.push(Event::CardDealt {
            card,
            running_count: self.running_count,
            cards_remaining,
        });
        Ok(DealResult::Dealt {
            card,
            running_count: self.running_count,
            cards_remaining,
        })
    }

    /// Running count normalized by shoe depletion. Divides by the remaining
    /// fraction of the whole shoe rather than by remaining 52-card decks;
    /// kept that way so readouts match the trainer's established behavior.
    /// Returns exactly 0 once the shoe is out.
    pub fn true_count(&self) -> f64 {
        if self.shoe_size == 0 {
            return 0.0;
        }
        let decks_remaining = self.cards_remaining() as f64 / self.shoe_size as f64;
        if decks_remaining > 0.0 {
            self.running_count / decks_remaining
        } else {
            0.0
        }
    }

    pub fn summary(&self) -> TallySummary {
        TallySummary {
            running_count: self.running_count,
            true_count: self.true_count(),
            cards_dealt: self.cards_dealt,
            cards_remaining: self.cards_remaining(),
        }
    }

    /// Drops the shoe and returns to Idle. Counters clear so the next run
    /// starts from a blank slate.
    pub fn reset(&mut self) {
        self.shoe = None;
        self.shoe_size = 0;
        self.cards_dealt = 0;
        self.running_count = 0.0;
        self.exhausted_reported = false;
    }
}
