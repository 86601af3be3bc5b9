use super::invalid_move::InvalidMove;
use super::types::{CELL_COUNT, Cell, Mark};
use super::win_detector::is_terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// `None` for an out-of-range index, `Some(None)` for an empty cell.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange(index));
        }
        if is_terminal(self) {
            return Err(InvalidMove::GameOver);
        }
        if self.cells[index].is_some() {
            return Err(InvalidMove::Occupied(index));
        }

        self.cells[index] = Some(mark);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }
}

/// Test helper: `'X'`, `'O'`, anything else is empty.
#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut cells = [None; CELL_COUNT];
    let marks = layout.chars().filter(|c| !c.is_whitespace());
    for (index, c) in marks.take(CELL_COUNT).enumerate() {
        cells[index] = match c {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    Board::from_cells(cells)
}
