mod board;
mod error;
mod game_state;
mod minimax;
mod types;
mod win_detector;

pub use board::Board;
pub use error::InvalidMove;
pub use game_state::{FIRST_PLAYER, TicTacToeGameState};
pub use minimax::{DRAW_SCORE, LOSS_SCORE, SearchResult, WIN_SCORE, select_move};
pub use types::{BOARD_SIZE, GameOutcome, Mark, Player, WIN_LINES, WinLine, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate};
