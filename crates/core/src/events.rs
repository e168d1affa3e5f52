use crate::{Card, CountingSystem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    PracticeStarted {
        decks: u32,
        system: CountingSystem,
        shoe_size: usize,
    },
    CardDealt {
        card: Card,
        running_count: f64,
        cards_remaining: usize,
    },
    ShoeExhausted {
        cards_dealt: usize,
        running_count: f64,
        true_count: f64,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
