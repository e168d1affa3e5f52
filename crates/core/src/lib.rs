//! Core counting-trainer logic. Keep this crate free of IO and platform
//! concerns.

pub mod cards;
pub mod events;
pub mod rng;
pub mod session;
pub mod shoe;
pub mod systems;

pub use cards::*;
pub use events::*;
pub use rng::*;
pub use session::*;
pub use shoe::*;
pub use systems::*;
