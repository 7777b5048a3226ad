//! Rules engine and state for draw-three Klondike.
//!
//! A [`Game`] owns the stock, waste, discard, seven tableau piles and four
//! foundations. Moves that break a placement rule return `Ok(false)` and
//! leave the game untouched; pile indices out of range return
//! [`InvalidIndex`].

pub mod card;
pub mod config;
pub mod deck;
pub mod display;
pub mod error;
pub mod game;
pub mod moves;


pub use card::{Card, Color, Rank, Suit};
pub use config::DealConfig;
pub use deck::Deck;
pub use error::InvalidIndex;
pub use game::{Game, DRAW_COUNT, NUM_FOUNDATIONS, NUM_TABLEAUS};
pub use moves::{CardPosition, Move};
