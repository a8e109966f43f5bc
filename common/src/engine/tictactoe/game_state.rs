use super::board::Board;
use super::error::InvalidMove;
use super::types::{GameOutcome, Player, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

pub const FIRST_PLAYER: Player = Player::Human;

/// One game: the board and whose turn it is. The outcome is always derived
/// from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    turn: Player,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: FIRST_PLAYER,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    pub fn is_running(&self) -> bool {
        !self.outcome().is_terminal()
    }

    pub fn is_turn_of(&self, player: Player) -> bool {
        self.is_running() && self.turn == player
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Places `player`'s mark and hands the turn over. On error nothing changes.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameOutcome, InvalidMove> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(InvalidMove::GameOver(outcome));
        }

        if player != self.turn {
            return Err(InvalidMove::NotYourTurn(player));
        }

        self.board.place(index, player)?;
        self.last_move = Some(index);

        let outcome = self.outcome();
        if !outcome.is_terminal() {
            self.turn = player.opponent();
        }

        Ok(outcome)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
