//! Exhaustive minimax over the full game tree.
//!
//! Scores are always from the computer's point of view: the computer
//! maximises, the human minimises. There is no pruning, no depth discount
//! and no heuristic, so every equally-valued move ties and the lowest cell
//! index wins the tie.

use super::board::Board;
use super::types::{GameOutcome, Player};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub index: usize,
    pub score: i32,
}

/// Best move for `to_move`, or `None` when the position is already terminal.
pub fn select_move(board: &Board, to_move: Player) -> Option<SearchResult> {
    if evaluate(board).is_terminal() {
        return None;
    }

    let mut scratch = *board;
    best_move(&mut scratch, to_move)
}

fn leaf_score(outcome: GameOutcome) -> Option<i32> {
    match outcome {
        GameOutcome::ComputerWin => Some(WIN_SCORE),
        GameOutcome::HumanWin => Some(LOSS_SCORE),
        GameOutcome::Draw => Some(DRAW_SCORE),
        GameOutcome::InProgress => None,
    }
}

fn is_better(player: Player, candidate: i32, best: i32) -> bool {
    match player {
        Player::Computer => candidate > best,
        Player::Human => candidate < best,
    }
}

fn best_move(board: &mut Board, to_move: Player) -> Option<SearchResult> {
    let mut best: Option<SearchResult> = None;
    let moves: Vec<usize> = board.available_moves().collect();

    for index in moves {
        board.place(index, to_move).ok()?;
        let score = minimax(board, to_move.opponent());
        board.clear(index);

        let improves = match best {
            Some(current) => is_better(to_move, score, current.score),
            None => true,
        };
        if improves {
            best = Some(SearchResult { index, score });
        }
    }

    best
}

fn minimax(board: &mut Board, to_move: Player) -> i32 {
    if let Some(score) = leaf_score(evaluate(board)) {
        return score;
    }

    // A non-terminal board always has an empty cell.
    best_move(board, to_move).map_or(DRAW_SCORE, |result| result.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tictactoe::types::Mark;

    const E: Mark = Mark::Empty;
    const H: Mark = Mark::Human;
    const C: Mark = Mark::Computer;

    fn play_out(mut board: Board, mut to_move: Player) -> GameOutcome {
        loop {
            let outcome = evaluate(&board);
            if outcome.is_terminal() {
                return outcome;
            }
            let result = select_move(&board, to_move).unwrap();
            board.place(result.index, to_move).unwrap();
            to_move = to_move.opponent();
        }
    }

    /// Tries every human reply; the computer answers with `select_move`.
    fn assert_computer_never_loses(board: &mut Board, to_move: Player, positions: &mut usize) {
        *positions += 1;
        match evaluate(board) {
            GameOutcome::HumanWin => panic!("computer lost:\n{}", board),
            GameOutcome::ComputerWin | GameOutcome::Draw => return,
            GameOutcome::InProgress => {}
        }

        match to_move {
            Player::Computer => {
                let result = select_move(board, Player::Computer).unwrap();
                assert!(result.score >= DRAW_SCORE, "losing evaluation for\n{}", board);
                board.place(result.index, Player::Computer).unwrap();
                assert_computer_never_loses(board, Player::Human, positions);
                board.clear(result.index);
            }
            Player::Human => {
                let moves: Vec<usize> = board.available_moves().collect();
                for index in moves {
                    board.place(index, Player::Human).unwrap();
                    assert_computer_never_loses(board, Player::Computer, positions);
                    board.clear(index);
                }
            }
        }
    }

    #[test]
    fn test_empty_board_opening_is_deterministic() {
        let first = select_move(&Board::new(), Player::Computer).unwrap();
        for _ in 0..3 {
            assert_eq!(select_move(&Board::new(), Player::Computer), Some(first));
        }
        assert_eq!(first, SearchResult { index: 0, score: DRAW_SCORE });
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_marks([C, C, E, H, H, E, E, E, E]);
        let result = select_move(&board, Player::Computer).unwrap();
        assert_eq!(result, SearchResult { index: 2, score: WIN_SCORE });
    }

    #[test]
    fn test_two_human_marks_ahead_picks_lowest_cell() {
        // Two moves behind, every reply loses against best play, so all
        // candidates score LOSS_SCORE and the lowest index takes the tie.
        let board = Board::from_marks([H, H, E, E, E, E, E, E, E]);
        let result = select_move(&board, Player::Computer).unwrap();
        assert_eq!(result, SearchResult { index: 2, score: LOSS_SCORE });
    }

    #[test]
    fn test_blocks_human_row_above_lower_empty_cells() {
        let board = Board::from_marks([C, E, E, H, H, E, E, E, E]);
        let result = select_move(&board, Player::Computer).unwrap();
        assert_eq!(result, SearchResult { index: 5, score: DRAW_SCORE });
    }

    #[test]
    fn test_human_side_minimises() {
        let board = Board::from_marks([H, H, E, C, C, E, E, E, E]);
        let result = select_move(&board, Player::Human).unwrap();
        assert_eq!(result, SearchResult { index: 2, score: LOSS_SCORE });
    }

    #[test]
    fn test_never_selects_occupied_cell() {
        let boards = [
            Board::from_marks([H, E, E, E, E, E, E, E, E]),
            Board::from_marks([E, E, E, E, H, E, E, E, E]),
            Board::from_marks([H, C, H, E, C, E, E, H, E]),
            Board::from_marks([C, H, C, H, H, C, E, C, H]),
        ];
        for board in boards {
            let result = select_move(&board, Player::Computer).unwrap();
            assert_eq!(board.get(result.index), Some(Mark::Empty));
        }
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Board::from_marks([H, E, E, E, C, E, E, E, H]);
        let before = board;
        select_move(&board, Player::Computer);
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = Board::from_marks([C, C, C, H, H, E, E, E, E]);
        let drawn = Board::from_marks([C, H, C, C, H, H, H, C, C]);
        assert_eq!(select_move(&won, Player::Human), None);
        assert_eq!(select_move(&drawn, Player::Computer), None);
    }

    #[test]
    fn test_centre_opening_with_optimal_play_is_draw() {
        let mut board = Board::new();
        board.place(4, Player::Human).unwrap();
        assert_eq!(play_out(board, Player::Computer), GameOutcome::Draw);
    }

    #[test]
    fn test_self_play_from_empty_board_is_draw() {
        assert_eq!(play_out(Board::new(), Player::Computer), GameOutcome::Draw);
        assert_eq!(play_out(Board::new(), Player::Human), GameOutcome::Draw);
    }

    #[test]
    fn test_computer_never_loses_when_human_starts() {
        let mut positions = 0;
        assert_computer_never_loses(&mut Board::new(), Player::Human, &mut positions);
        assert!(positions > 0);
    }

    #[test]
    fn test_computer_never_loses_when_computer_starts() {
        let mut positions = 0;
        assert_computer_never_loses(&mut Board::new(), Player::Computer, &mut positions);
        assert!(positions > 0);
    }
}
