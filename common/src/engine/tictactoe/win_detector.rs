use super::board::Board;
use super::types::{GameOutcome, Mark, Player, WIN_LINES, WinningLine};

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            mark.owner().map(|player| WinningLine::new(player, line))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// Pure outcome of a position. The winner comes from the marker on the
/// completed line, never from whose turn it is.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(winner) = check_win(board) {
        return GameOutcome::won_by(winner);
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
