use crate::{
    card::*,
    error::InvalidIndex,
    game::{check_foundation_idx, check_tableau_idx, Game, NUM_FOUNDATIONS, NUM_TABLEAUS},
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardPosition {
    Stock,
    Waste,
    Foundation(u8),
    // tableau_idx, card_idx
    Tableau((u8, u8)),
}

/// One of the game's commands, named by where the moving card starts and
/// where it lands. `Stock -> Waste` is a draw.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: CardPosition,
    pub to: CardPosition,
}

impl Move {
    pub fn pretty_string(&self, game: &Game) -> String {
        let from_card = match self.from {
            CardPosition::Stock => game.stock().last(),
            CardPosition::Waste => game.waste_top(),
            CardPosition::Foundation(idx) => game
                .foundation(idx as usize)
                .ok()
                .and_then(|foundation| foundation.last()),
            CardPosition::Tableau((tableau_idx, card_idx)) => game
                .tableau(tableau_idx as usize)
                .ok()
                .and_then(|tableau| tableau.get(card_idx as usize)),
        };
        let to_card = match self.to {
            CardPosition::Stock => game.stock().last(),
            CardPosition::Waste => game.waste_top(),
            CardPosition::Foundation(idx) => game
                .foundation(idx as usize)
                .ok()
                .and_then(|foundation| foundation.last()),
            CardPosition::Tableau((tableau_idx, _)) => game
                .tableau(tableau_idx as usize)
                .ok()
                .and_then(|tableau| tableau.last()),
        };
        format!(
            "From: {:?} - {}\tTo: {:?} - {}",
            self.from,
            from_card.map_or_else(|| " ".to_string(), Card::pretty_string),
            self.to,
            to_card.map_or_else(|| " ".to_string(), Card::pretty_string)
        )
    }

    pub fn is_draw(&self) -> bool {
        matches!((self.from, self.to), (CardPosition::Stock, CardPosition::Waste))
    }

    pub fn is_to_foundation(&self) -> bool {
        matches!(self.to, CardPosition::Foundation(_))
    }
}

fn can_be_placed_on_top_of(bottom: &Card, top: &Card) -> bool {
    are_card_ranks_sequential(bottom, top) && are_card_colors_different(bottom, top)
}

fn tableau_accepts(tableau_top: Option<&Card>, card: &Card) -> bool {
    match tableau_top {
        Some(tableau_card) => can_be_placed_on_top_of(tableau_card, card),
        None => is_king(card),
    }
}

fn foundation_accepts(foundation_top: Option<&Card>, card: &Card) -> bool {
    match foundation_top {
        Some(foundation_card) => {
            are_card_suits_the_same(foundation_card, card)
                && are_card_ranks_sequential(card, foundation_card)
        }
        None => is_ace(card),
    }
}

impl Game {
    /// An empty pile takes only a King; otherwise the card must be the
    /// opposite color and one rank below the pile's top card.
    pub fn can_place_on_tableau(&self, card: &Card, tableau_idx: usize) -> Result<bool, InvalidIndex> {
        let tableau_idx = check_tableau_idx(tableau_idx)?;
        Ok(tableau_accepts(self.tableaus[tableau_idx].last(), card))
    }

    /// An empty foundation takes only an Ace; otherwise the card must share
    /// the top card's suit and be one rank above it.
    pub fn can_place_on_foundation(&self, card: &Card, foundation_idx: usize) -> Result<bool, InvalidIndex> {
        let foundation_idx = check_foundation_idx(foundation_idx)?;
        Ok(foundation_accepts(self.foundations[foundation_idx].last(), card))
    }

    pub fn move_waste_to_tableau(&mut self, tableau_idx: usize) -> Result<bool, InvalidIndex> {
        let tableau_idx = check_tableau_idx(tableau_idx)?;
        let legal = self
            .waste
            .last()
            .map_or(false, |card| tableau_accepts(self.tableaus[tableau_idx].last(), card));
        if !legal {
            trace!("rejected waste -> tableau {}", tableau_idx);
            return Ok(false);
        }
        if let Some(card) = self.take_waste_top() {
            debug!("waste -> tableau {}: {}", tableau_idx, card.pretty_string());
            self.tableaus[tableau_idx].push(card);
        }
        Ok(true)
    }

    /// Moves the face-up run starting at `card_idx` of one tableau pile onto
    /// another. Only the run's bottom card is checked against the target.
    pub fn move_tableau_run(
        &mut self,
        from_tableau_idx: usize,
        card_idx: usize,
        to_tableau_idx: usize,
    ) -> Result<bool, InvalidIndex> {
        let from_tableau_idx = check_tableau_idx(from_tableau_idx)?;
        let to_tableau_idx = check_tableau_idx(to_tableau_idx)?;
        let len = self.tableaus[from_tableau_idx].len();
        if len == 0 {
            trace!("rejected run from empty tableau {}", from_tableau_idx);
            return Ok(false);
        }
        if card_idx >= len {
            return Err(InvalidIndex::RunOffset {
                pile: from_tableau_idx,
                offset: card_idx,
                len,
            });
        }

        let bottom = &self.tableaus[from_tableau_idx][card_idx];
        if from_tableau_idx == to_tableau_idx
            || !bottom.is_face_up()
            || !tableau_accepts(self.tableaus[to_tableau_idx].last(), bottom)
        {
            trace!(
                "rejected run tableau {}[{}] -> tableau {}",
                from_tableau_idx,
                card_idx,
                to_tableau_idx
            );
            return Ok(false);
        }

        // The run leaves the source as its own Vec before touching the target.
        let run = self.tableaus[from_tableau_idx].split_off(card_idx);
        debug!(
            "tableau {} -> tableau {}: {} card(s)",
            from_tableau_idx,
            to_tableau_idx,
            run.len()
        );
        self.tableaus[to_tableau_idx].extend(run);
        self.expose_tableau_top(from_tableau_idx);
        Ok(true)
    }

    pub fn move_tableau_to_foundation(
        &mut self,
        from_tableau_idx: usize,
        foundation_idx: usize,
    ) -> Result<bool, InvalidIndex> {
        let from_tableau_idx = check_tableau_idx(from_tableau_idx)?;
        let foundation_idx = check_foundation_idx(foundation_idx)?;
        let legal = self.tableaus[from_tableau_idx]
            .last()
            .map_or(false, |card| foundation_accepts(self.foundations[foundation_idx].last(), card));
        if !legal {
            trace!("rejected tableau {} -> foundation {}", from_tableau_idx, foundation_idx);
            return Ok(false);
        }
        if let Some(card) = self.tableaus[from_tableau_idx].pop() {
            debug!(
                "tableau {} -> foundation {}: {}",
                from_tableau_idx,
                foundation_idx,
                card.pretty_string()
            );
            self.foundations[foundation_idx].push(card);
        }
        self.expose_tableau_top(from_tableau_idx);
        Ok(true)
    }

    pub fn move_waste_to_foundation(&mut self, foundation_idx: usize) -> Result<bool, InvalidIndex> {
        let foundation_idx = check_foundation_idx(foundation_idx)?;
        let legal = self
            .waste
            .last()
            .map_or(false, |card| foundation_accepts(self.foundations[foundation_idx].last(), card));
        if !legal {
            trace!("rejected waste -> foundation {}", foundation_idx);
            return Ok(false);
        }
        if let Some(card) = self.take_waste_top() {
            debug!("waste -> foundation {}: {}", foundation_idx, card.pretty_string());
            self.foundations[foundation_idx].push(card);
        }
        Ok(true)
    }

    /// Applies `mv` through the matching command. Position pairs that name no
    /// command, and tableau-to-foundation moves of a buried card, are illegal.
    pub fn handle_move(&mut self, mv: &Move) -> Result<bool, InvalidIndex> {
        match (mv.from, mv.to) {
            (CardPosition::Stock, CardPosition::Waste) => Ok(self.draw()),
            (CardPosition::Waste, CardPosition::Tableau((tableau_idx, _))) => {
                self.move_waste_to_tableau(tableau_idx as usize)
            }
            (CardPosition::Waste, CardPosition::Foundation(foundation_idx)) => {
                self.move_waste_to_foundation(foundation_idx as usize)
            }
            (
                CardPosition::Tableau((from_tableau_idx, card_idx)),
                CardPosition::Tableau((to_tableau_idx, _)),
            ) => self.move_tableau_run(
                from_tableau_idx as usize,
                card_idx as usize,
                to_tableau_idx as usize,
            ),
            (CardPosition::Tableau((from_tableau_idx, card_idx)), CardPosition::Foundation(foundation_idx)) => {
                let tableau = self.tableau(from_tableau_idx as usize)?;
                if card_idx as usize + 1 != tableau.len() {
                    return Ok(false);
                }
                self.move_tableau_to_foundation(from_tableau_idx as usize, foundation_idx as usize)
            }
            _ => Ok(false),
        }
    }

    /// Every move that would currently succeed, foundation targets first in
    /// each group. A draw is listed while the stock has cards.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        moves.extend(self.get_moves_from_waste());
        moves.extend(self.get_moves_from_tableau());
        if !self.stock.is_empty() {
            moves.push(Move {
                from: CardPosition::Stock,
                to: CardPosition::Waste,
            });
        }
        moves
    }

    fn get_moves_from_waste(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some(card) = self.waste.last() {
            for foundation_idx in 0..NUM_FOUNDATIONS {
                if foundation_accepts(self.foundations[foundation_idx].last(), card) {
                    moves.push(Move {
                        from: CardPosition::Waste,
                        to: CardPosition::Foundation(foundation_idx as u8),
                    });
                }
            }
            for (tableau_idx, tableau) in self.tableaus.iter().enumerate() {
                if tableau_accepts(tableau.last(), card) {
                    moves.push(Move {
                        from: CardPosition::Waste,
                        to: CardPosition::Tableau((tableau_idx as u8, tableau.len() as u8)),
                    });
                }
            }
        }
        moves
    }

    /// A card heads a movable run when it is face-up and everything above it
    /// is an alternating, descending sequence.
    fn is_card_unlocked(&self, tableau_idx: usize, card_idx: usize) -> bool {
        let tableau = &self.tableaus[tableau_idx];
        tableau[card_idx].is_face_up()
            && tableau[card_idx..]
                .windows(2)
                .all(|pair| can_be_placed_on_top_of(&pair[0], &pair[1]))
    }

    fn get_tableau_moves_from_tableau(&self, from_tableau_idx: usize) -> Vec<Move> {
        let mut moves = Vec::new();
        let from_tableau = &self.tableaus[from_tableau_idx];
        for card_idx in (0..from_tableau.len()).rev() {
            if !self.is_card_unlocked(from_tableau_idx, card_idx) {
                break;
            }
            let card = &from_tableau[card_idx];
            for (to_tableau_idx, to_tableau) in self.tableaus.iter().enumerate() {
                if from_tableau_idx != to_tableau_idx && tableau_accepts(to_tableau.last(), card) {
                    moves.push(Move {
                        from: CardPosition::Tableau((from_tableau_idx as u8, card_idx as u8)),
                        to: CardPosition::Tableau((to_tableau_idx as u8, to_tableau.len() as u8)),
                    });
                }
            }
        }
        moves
    }

    fn get_move_from_tableau_to_foundation(&self, from_tableau_idx: usize) -> Vec<Move> {
        let from_tableau = &self.tableaus[from_tableau_idx];
        let Some(card) = from_tableau.last() else {
            return Vec::new();
        };
        (0..NUM_FOUNDATIONS)
            .filter(|&foundation_idx| foundation_accepts(self.foundations[foundation_idx].last(), card))
            .map(|foundation_idx| Move {
                from: CardPosition::Tableau((from_tableau_idx as u8, (from_tableau.len() - 1) as u8)),
                to: CardPosition::Foundation(foundation_idx as u8),
            })
            .collect()
    }

    fn get_moves_from_tableau(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for from_tableau_idx in 0..NUM_TABLEAUS {
            moves.extend(self.get_move_from_tableau_to_foundation(from_tableau_idx));
            moves.extend(self.get_tableau_moves_from_tableau(from_tableau_idx));
        }
        moves
    }

    fn take_waste_top(&mut self) -> Option<Card> {
        let card = self.waste.pop();
        if let Some(top) = self.waste.last_mut() {
            top.flip_up();
        }
        card
    }

    fn expose_tableau_top(&mut self, tableau_idx: usize) {
        if let Some(top) = self.tableaus[tableau_idx].last_mut() {
            top.flip_up();
        }
    }
}
