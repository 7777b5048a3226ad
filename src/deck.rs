use crate::card::*;
use rand::{seq::SliceRandom, Rng};

/// The 52-card universe, top of the deck at the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// Every (suit, rank) pair in suit-major order, all face-down.
    pub fn new() -> Self {
        Self(
            Suit::ALL
                .iter()
                .flat_map(|suit| Rank::all().map(move |rank| Card::new(*suit, rank)))
                .collect(),
        )
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_cards(self) -> Vec<Card> {
        self.0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
