use crate::{card::Card, game::Game};
use std::fmt;

fn write_cards(f: &mut fmt::Formatter, cards: &[Card]) -> fmt::Result {
    if cards.is_empty() {
        return write!(f, "Empty");
    }
    cards.iter().try_for_each(|card| write!(f, "{}\t", card))
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n--------- Foundations ---------")?;
        self.foundations().try_for_each(|foundation| {
            match foundation.last() {
                Some(card) => write!(f, "[{}]\t", card),
                None => write!(f, "[  ]\t"),
            }
        })?;
        writeln!(f)?;
        writeln!(f, "--------- Tableaus ------------")?;
        self.tableaus().enumerate().try_for_each(|(tableau_idx, tableau)| {
            write!(f, "Pile {}: ", tableau_idx + 1)?;
            write_cards(f, tableau)?;
            writeln!(f)
        })?;
        writeln!(f, "--------- Stock ---------------")?;
        writeln!(f, "{} card(s)", self.stock().len())?;
        writeln!(f, "--------- Waste ---------------")?;
        write_cards(f, self.waste())?;
        writeln!(f)?;
        write!(f, "--------- Discard: {} card(s)", self.discard().len())
    }
}
