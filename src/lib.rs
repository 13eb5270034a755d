pub mod cards;
pub mod config;
pub mod error;
pub mod gameplay;

pub type Utility = f32;
pub type Position = usize;

/// The engine is heads-up. Opponent resolution and the betting-line
/// closure patterns assume exactly two live seats, whatever seat count
/// the configuration declares.
pub const SEATS: usize = 2;
