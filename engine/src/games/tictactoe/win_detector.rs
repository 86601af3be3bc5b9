use super::board::Board;
use super::types::{GameResult, Mark, WIN_LINES, WinLine};

pub fn is_winner(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}

pub fn winning_line(board: &Board, mark: Mark) -> Option<WinLine> {
    let cells = board.cells();
    WIN_LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&index| cells[index] == Some(mark)))
}

/// Full board with no completed line for either mark.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !is_winner(board, Mark::X) && !is_winner(board, Mark::O)
}

pub fn is_terminal(board: &Board) -> bool {
    is_winner(board, Mark::X) || is_winner(board, Mark::O) || board.is_full()
}

/// Wins are checked before fullness, so a full board with a line is a win.
pub fn game_result(board: &Board) -> GameResult {
    if is_winner(board, Mark::X) {
        GameResult::Win(Mark::X)
    } else if is_winner(board, Mark::O) {
        GameResult::Win(Mark::O)
    } else if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
