use super::types::CELL_COUNT;

/// A rejected move. The board is left untouched whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange(usize),
    Occupied(usize),
    GameOver,
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfRange(index) => {
                write!(f, "Cell {} is out of range (0..{})", index, CELL_COUNT)
            }
            InvalidMove::Occupied(index) => write!(f, "Cell {} is already marked", index),
            InvalidMove::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for InvalidMove {}
