use crate::{
    card::*,
    config::DealConfig,
    deck::Deck,
    error::InvalidIndex,
};
use arrayvec::ArrayVec;
use log::debug;
use rand::{rngs::StdRng, thread_rng, SeedableRng};
use serde::Serialize;

pub const NUM_TABLEAUS: usize = 7;
pub const NUM_FOUNDATIONS: usize = 4;
pub const DRAW_COUNT: usize = 3;
const FOUNDATION_CAPACITY: usize = NUM_RANKS as usize;

/// Full state of one game. Every pile is owned here and addressed by index;
/// cards only move between piles by value.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: ArrayVec<Card, DRAW_COUNT>,
    pub(crate) discard: Vec<Card>,
    pub(crate) tableaus: [Vec<Card>; NUM_TABLEAUS],
    pub(crate) foundations: [ArrayVec<Card, FOUNDATION_CAPACITY>; NUM_FOUNDATIONS],
}

impl Game {
    /// Deals a freshly shuffled deck.
    pub fn new() -> Self {
        Self::deal(Deck::shuffled(&mut thread_rng()))
    }

    pub fn with_config(config: &DealConfig) -> Self {
        match config.seed {
            Some(seed) => {
                debug!("dealing seeded game {}", seed);
                Self::deal(Deck::shuffled(&mut StdRng::seed_from_u64(seed)))
            }
            None => Self::new(),
        }
    }

    /// Pile `i` takes `i + 1` cards off the top of the deck, the last one
    /// face-up. The rest of the deck becomes the stock.
    pub fn deal(deck: Deck) -> Self {
        let mut cards = deck.into_cards();
        let mut tableaus: [Vec<Card>; NUM_TABLEAUS] = Default::default();
        for (tableau_idx, tableau) in tableaus.iter_mut().enumerate() {
            let mut dealt = cards.split_off(cards.len() - (tableau_idx + 1));
            dealt.reverse();
            if let Some(top) = dealt.last_mut() {
                top.flip_up();
            }
            *tableau = dealt;
        }
        debug!("dealt tableau, {} cards left in stock", cards.len());
        Self {
            stock: cards,
            waste: ArrayVec::new(),
            discard: Vec::new(),
            tableaus,
            foundations: Default::default(),
        }
    }

    /// Retires the waste to the discard pile and turns up to three new cards
    /// from the stock. Returns whether any card reached the waste.
    ///
    /// Discarded cards never return to the stock, so once the stock runs dry
    /// this only empties the waste.
    pub fn draw(&mut self) -> bool {
        for mut card in self.waste.drain(..) {
            card.turn_face_down();
            self.discard.push(card);
        }
        while !self.waste.is_full() {
            match self.stock.pop() {
                Some(card) => self.waste.push(card),
                None => break,
            }
        }
        match self.waste.last_mut() {
            Some(top) => {
                top.flip_up();
                debug!("drew {} card(s), {} left in stock", self.waste.len(), self.stock.len());
                true
            }
            None => {
                debug!("draw from empty stock");
                false
            }
        }
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    pub fn tableau(&self, tableau_idx: usize) -> Result<&[Card], InvalidIndex> {
        Ok(&self.tableaus[check_tableau_idx(tableau_idx)?])
    }

    pub fn foundation(&self, foundation_idx: usize) -> Result<&[Card], InvalidIndex> {
        Ok(&self.foundations[check_foundation_idx(foundation_idx)?])
    }

    pub fn tableaus(&self) -> impl Iterator<Item = &[Card]> {
        self.tableaus.iter().map(|tableau| tableau.as_slice())
    }

    pub fn foundations(&self) -> impl Iterator<Item = &[Card]> {
        self.foundations.iter().map(|foundation| foundation.as_slice())
    }

    /// Cards across every pile; always 52.
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.discard.len()
            + self.tableaus.iter().map(Vec::len).sum::<usize>()
            + self.foundations.iter().map(|foundation| foundation.len()).sum::<usize>()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_tableau_idx(tableau_idx: usize) -> Result<usize, InvalidIndex> {
    if tableau_idx < NUM_TABLEAUS {
        Ok(tableau_idx)
    } else {
        Err(InvalidIndex::Tableau(tableau_idx))
    }
}

pub(crate) fn check_foundation_idx(foundation_idx: usize) -> Result<usize, InvalidIndex> {
    if foundation_idx < NUM_FOUNDATIONS {
        Ok(foundation_idx)
    } else {
        Err(InvalidIndex::Foundation(foundation_idx))
    }
}
