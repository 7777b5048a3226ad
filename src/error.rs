use std::fmt;

/// A pile index or run offset outside its valid range.
///
/// This is a caller bug, not a rejected move: illegal moves come back as
/// `Ok(false)` from the move operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidIndex {
    Tableau(usize),
    Foundation(usize),
    RunOffset { pile: usize, offset: usize, len: usize },
}

impl fmt::Display for InvalidIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidIndex::Tableau(idx) => {
                write!(f, "invalid index: tableau pile {} is not in 0..7", idx)
            }
            InvalidIndex::Foundation(idx) => {
                write!(f, "invalid index: foundation {} is not in 0..4", idx)
            }
            InvalidIndex::RunOffset { pile, offset, len } => write!(
                f,
                "invalid index: offset {} is past the end of tableau pile {} ({} cards)",
                offset, pile, len
            ),
        }
    }
}

impl std::error::Error for InvalidIndex {}
