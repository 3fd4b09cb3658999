// Public API
pub use card::{Card, CardError, Rank, Suit};
pub use hand::{Category, Hand, HandError, HAND_SIZE};

// Internal modules
mod card;
mod hand;
