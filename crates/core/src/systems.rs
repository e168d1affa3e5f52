use crate::Rank;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn word(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// The five supported counting systems. New systems are added here as
/// variants, each carrying its own rank table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CountingSystem {
    HiLo,
    Ko,
    OmegaII,
    Halves,
    ZenCount,
}

impl CountingSystem {
    pub const ALL: [CountingSystem; 5] = [
        CountingSystem::HiLo,
        CountingSystem::Ko,
        CountingSystem::OmegaII,
        CountingSystem::Halves,
        CountingSystem::ZenCount,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CountingSystem::HiLo => "Hi-Lo",
            CountingSystem::Ko => "KO",
            CountingSystem::OmegaII => "Omega II",
            CountingSystem::Halves => "Halves",
            CountingSystem::ZenCount => "Zen Count",
        }
    }

    pub fn difficulty(self) -> Difficulty {
        match self {
            CountingSystem::HiLo | CountingSystem::Ko => Difficulty::Beginner,
            CountingSystem::ZenCount => Difficulty::Intermediate,
            CountingSystem::OmegaII | CountingSystem::Halves => Difficulty::Advanced,
        }
    }

    /// Selector label, e.g. `Hi-Lo (Beginner)`.
    pub fn label(self) -> String {
        format!("{} ({})", self.name(), self.difficulty().word())
    }

    /// Point value assigned to a rank. Halves is the only fractional table;
    /// every value is a multiple of 0.5, so f64 accumulation stays exact.
    pub fn value(self, rank: Rank) -> f64 {
        match self {
            CountingSystem::HiLo => match rank {
                Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1.0,
                Rank::Seven | Rank::Eight | Rank::Nine => 0.0,
                Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1.0,
            },
            CountingSystem::Ko => match rank {
                Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six | Rank::Seven => 1.0,
                Rank::Eight | Rank::Nine => 0.0,
                Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1.0,
            },
            CountingSystem::OmegaII => match rank {
                Rank::Two | Rank::Three | Rank::Seven => 1.0,
                Rank::Four | Rank::Five | Rank::Six => 2.0,
                Rank::Eight | Rank::Ace => 0.0,
                Rank::Nine => -1.0,
                Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => -2.0,
            },
            CountingSystem::Halves => match rank {
                Rank::Two | Rank::Seven => 0.5,
                Rank::Three | Rank::Four | Rank::Six => 1.0,
                Rank::Five => 1.5,
                Rank::Eight => 0.0,
                Rank::Nine => -0.5,
                Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1.0,
            },
            CountingSystem::ZenCount => match rank {
                Rank::Two | Rank::Three | Rank::Seven => 1.0,
                Rank::Four | Rank::Five | Rank::Six => 2.0,
                Rank::Eight | Rank::Nine => 0.0,
                Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => -2.0,
                Rank::Ace => -1.0,
            },
        }
    }
}
