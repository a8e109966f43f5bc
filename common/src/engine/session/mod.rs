mod status;
mod tictactoe_session;

pub use status::StatusMessage;
pub use tictactoe_session::{PendingComputerMove, SessionUpdate, TicTacToeSession, UiCommand, UiEvent};
