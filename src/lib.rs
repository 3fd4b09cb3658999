// Library crate for the poker hand comparison engine
// This file exposes the public API for integration tests

pub mod game;
pub mod poker;

// Re-export commonly used types for easier access in tests
pub use game::{Game, GameError, HandSummary, Showdown, Tally, Winner};
pub use poker::{Card, CardError, Category, Hand, HandError, Rank, Suit};
