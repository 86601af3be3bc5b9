use tictactoe_engine::games::tictactoe::{BOARD_SIDE, Position, TicTacToeGameState};

/// Grid with player symbols; empty cells show the 1-based number to type.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let board = state.board();
    let mut rows = Vec::with_capacity(BOARD_SIDE);

    for row in 0..BOARD_SIDE {
        let cells: Vec<String> = (0..BOARD_SIDE)
            .filter_map(|col| Position::new(row, col).to_index())
            .map(|index| match board.get(index).flatten() {
                Some(mark) => state.player(mark).symbol.clone(),
                None => (index + 1).to_string(),
            })
            .map(|cell| format!(" {} ", cell))
            .collect();
        rows.push(cells.join("|"));
    }

    let separator = vec!["---"; BOARD_SIDE].join("+");
    rows.join(&format!("\n{}\n", separator))
}
