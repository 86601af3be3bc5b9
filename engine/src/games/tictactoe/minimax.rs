//! Exhaustive minimax for the 3x3 board. `O` is the maximizing side.
//!
//! The full tree is small enough that no pruning or memoization is done.
//! Every speculative mark goes through [`Placement`], which clears the cell
//! again when dropped, so the board is restored on every exit path.

use super::board::Board;
use super::types::Mark;
use super::win_detector::is_winner;

pub const WIN_SCORE: i32 = 1;
pub const LOSS_SCORE: i32 = -1;
pub const DRAW_SCORE: i32 = 0;

struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, index: usize, mark: Mark) -> Self {
        debug_assert!(board.is_empty_at(index), "trial mark on occupied cell {}", index);
        board.set(index, Some(mark));
        Self { board, index }
    }

    fn board(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set(self.index, None);
    }
}

fn with_trial_mark<R>(
    board: &mut Board,
    index: usize,
    mark: Mark,
    f: impl FnOnce(&mut Board) -> R,
) -> R {
    let mut placement = Placement::new(board, index, mark);
    f(placement.board())
}

/// Scores `board` from `O`'s point of view with `O` to move when
/// `maximizing`. Base cases are checked in a fixed order: `O` won, `X` won,
/// board full.
pub fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    if is_winner(board, Mark::O) {
        return WIN_SCORE;
    }
    if is_winner(board, Mark::X) {
        return LOSS_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    let mover = if maximizing { Mark::O } else { Mark::X };
    let scores = board
        .available_moves()
        .into_iter()
        .map(|index| with_trial_mark(board, index, mover, |b| minimax(b, !maximizing)));

    let aggregated = if maximizing { scores.max() } else { scores.min() };
    aggregated.unwrap_or(DRAW_SCORE)
}

/// Minimax score of every empty cell for an `O` move, in ascending index order.
pub fn scored_moves(board: &Board) -> Vec<(usize, i32)> {
    let mut scratch = *board;
    scratch
        .available_moves()
        .into_iter()
        .map(|index| {
            let score = with_trial_mark(&mut scratch, index, Mark::O, |b| minimax(b, false));
            (index, score)
        })
        .collect()
}

/// Best cell for `O`. Ties go to the lowest index. `None` on a full board.
pub fn best_move(board: &Board) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, score) in scored_moves(board) {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_str;
    use crate::games::tictactoe::types::GameResult;
    use crate::games::tictactoe::win_detector::game_result;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_placement_reverts_on_drop() {
        let mut board = board_from_str("X.. ... ...");
        let before = board;
        {
            let mut placement = Placement::new(&mut board, 4, Mark::O);
            assert_eq!(placement.board().get(4), Some(Some(Mark::O)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_placement_reverts_on_panic() {
        let mut board = board_from_str("X.. .O. ...");
        let before = board;
        let result = catch_unwind(AssertUnwindSafe(|| {
            with_trial_mark(&mut board, 8, Mark::X, |_: &mut Board| -> i32 {
                panic!("search aborted")
            })
        }));
        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_leaves_board_unchanged() {
        let mut board = board_from_str("X.. .O. ..X");
        let before = board;
        minimax(&mut board, true);
        minimax(&mut board, false);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_base_case_precedence() {
        // Both lines complete is unreachable in play, but the order is fixed: O first.
        let mut both = board_from_str("OOO XXX ...");
        assert_eq!(minimax(&mut both, true), WIN_SCORE);
        assert_eq!(minimax(&mut both, false), WIN_SCORE);

        let mut x_wins_full = board_from_str("XXX OOX XOO");
        assert_eq!(minimax(&mut x_wins_full, true), LOSS_SCORE);
    }

    #[test]
    fn test_minimax_forced_draw_scores_zero_for_both_sides() {
        #[rustfmt::skip]
        let mut board = board_from_str("
            XOX
            XOO
            OX.
        ");
        assert_eq!(minimax(&mut board, true), DRAW_SCORE);
        assert_eq!(minimax(&mut board, false), DRAW_SCORE);
    }

    #[test]
    fn test_empty_board_is_a_draw_with_perfect_play() {
        let mut board = Board::new();
        assert_eq!(minimax(&mut board, true), DRAW_SCORE);
    }

    #[test]
    fn test_best_move_takes_the_win() {
        #[rustfmt::skip]
        let board = board_from_str("
            OO.
            XX.
            ...
        ");
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn test_best_move_blocks_the_threat() {
        #[rustfmt::skip]
        let board = board_from_str("
            XX.
            .O.
            ...
        ");
        assert_eq!(best_move(&board), Some(2));
    }

    #[test]
    fn test_best_move_on_full_board_is_none() {
        let board = board_from_str("XOX XOO OXX");
        assert_eq!(best_move(&board), None);
    }

    #[test]
    fn test_best_move_tie_break_is_lowest_index_and_reproducible() {
        let board = Board::new();
        let scores = scored_moves(&board);
        assert!(scores.iter().all(|&(_, score)| score == DRAW_SCORE));
        assert_eq!(best_move(&board), Some(0));
        assert_eq!(best_move(&board), best_move(&board));

        let board = board_from_str("X.. ... ...");
        let first = best_move(&board);
        let max = scored_moves(&board).iter().map(|&(_, s)| s).max();
        let lowest = scored_moves(&board)
            .into_iter()
            .find(|&(_, s)| Some(s) == max)
            .map(|(i, _)| i);
        assert_eq!(first, lowest);
        assert_eq!(first, best_move(&board));
    }

    fn assert_bot_never_loses(board: &mut Board, human_to_move: bool) {
        match game_result(board) {
            GameResult::Win(Mark::X) => panic!("bot lost on {:?}", board),
            GameResult::InProgress => {}
            _ => return,
        }

        if human_to_move {
            for index in board.available_moves() {
                board.apply_move(index, Mark::X).unwrap();
                assert_bot_never_loses(board, false);
                board.set(index, None);
            }
        } else {
            let index = best_move(board).unwrap();
            board.apply_move(index, Mark::O).unwrap();
            assert_bot_never_loses(board, true);
            board.set(index, None);
        }
    }

    #[test]
    fn test_bot_never_loses_when_human_starts() {
        let mut board = Board::new();
        assert_bot_never_loses(&mut board, true);
        assert!(board.is_blank());
    }

    #[test]
    fn test_bot_never_loses_when_bot_starts() {
        let mut board = Board::new();
        assert_bot_never_loses(&mut board, false);
        assert!(board.is_blank());
    }
}
