use thiserror::Error;

use super::types::{GameOutcome, Player};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("cell {0} is outside the board")]
    OutOfRange(usize),
    #[error("cell {0} is already marked")]
    CellOccupied(usize),
    #[error("game is already over ({0})")]
    GameOver(GameOutcome),
    #[error("it is not the {0}'s turn")]
    NotYourTurn(Player),
}
