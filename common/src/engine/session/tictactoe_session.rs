use serde::Serialize;

use crate::engine::tictactoe::{GameOutcome, Player, TicTacToeGameState, select_move};

use super::status::StatusMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    CellClicked(usize),
    RestartRequested,
}

/// What the presentation surface should do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiCommand {
    SetCell { index: usize, symbol: char },
    SetStatus { text: String, char_delay_ms: u64 },
    HighlightCells { cells: Vec<usize> },
    ClearBoard,
}

/// Ticket for a deferred computer move. It goes stale when the game is
/// restarted before it fires.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingComputerMove {
    generation: u64,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub commands: Vec<UiCommand>,
    pub pending: Option<PendingComputerMove>,
}

impl SessionUpdate {
    fn ignored() -> Self {
        Self::default()
    }

    pub fn is_ignored(&self) -> bool {
        self.commands.is_empty() && self.pending.is_none()
    }
}

/// Human against computer, driven by presentation events. Fully synchronous:
/// the caller decides when a pending computer move is played.
#[derive(Debug, Clone, Default)]
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    generation: u64,
}

impl TicTacToeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: TicTacToeGameState) -> Self {
        Self { state, generation: 0 }
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome()
    }

    /// Full redraw of the current state.
    pub fn snapshot(&self) -> SessionUpdate {
        let mut commands = vec![UiCommand::ClearBoard];
        for (index, mark) in self.state.board().cells().iter().enumerate() {
            if let Some(player) = mark.owner() {
                commands.push(UiCommand::SetCell {
                    index,
                    symbol: player.symbol(),
                });
            }
        }

        let pending = self.pending_computer_move();
        if self.state.is_running() {
            commands.push(StatusMessage::for_turn(self.state.turn()).to_command());
        } else {
            commands.extend(self.game_over_commands());
        }

        SessionUpdate { commands, pending }
    }

    pub fn pending_computer_move(&self) -> Option<PendingComputerMove> {
        self.state
            .is_turn_of(Player::Computer)
            .then_some(PendingComputerMove {
                generation: self.generation,
            })
    }

    pub fn handle_event(&mut self, event: UiEvent) -> SessionUpdate {
        match event {
            UiEvent::CellClicked(index) => self.handle_cell_clicked(index),
            UiEvent::RestartRequested => self.restart(),
        }
    }

    fn handle_cell_clicked(&mut self, index: usize) -> SessionUpdate {
        if !self.state.is_turn_of(Player::Human) || !self.state.board().is_valid_move(index) {
            return SessionUpdate::ignored();
        }

        match self.state.apply_move(index, Player::Human) {
            Ok(outcome) => self.after_move(index, Player::Human, outcome),
            Err(_) => SessionUpdate::ignored(),
        }
    }

    /// Plays the computer's reply. A stale ticket, or one presented when it
    /// is not the computer's turn, changes nothing.
    pub fn play_computer_move(&mut self, ticket: PendingComputerMove) -> SessionUpdate {
        if ticket.generation != self.generation || !self.state.is_turn_of(Player::Computer) {
            return SessionUpdate::ignored();
        }

        let Some(result) = select_move(self.state.board(), Player::Computer) else {
            return SessionUpdate::ignored();
        };

        match self.state.apply_move(result.index, Player::Computer) {
            Ok(outcome) => self.after_move(result.index, Player::Computer, outcome),
            Err(_) => SessionUpdate::ignored(),
        }
    }

    pub fn restart(&mut self) -> SessionUpdate {
        self.generation += 1;
        self.state.reset();

        SessionUpdate {
            commands: vec![
                UiCommand::ClearBoard,
                StatusMessage::for_turn(self.state.turn()).to_command(),
            ],
            pending: self.pending_computer_move(),
        }
    }

    fn after_move(&self, index: usize, player: Player, outcome: GameOutcome) -> SessionUpdate {
        let mut commands = vec![UiCommand::SetCell {
            index,
            symbol: player.symbol(),
        }];

        if outcome.is_terminal() {
            commands.extend(self.game_over_commands());
            return SessionUpdate {
                commands,
                pending: None,
            };
        }

        commands.push(StatusMessage::for_turn(self.state.turn()).to_command());
        SessionUpdate {
            commands,
            pending: self.pending_computer_move(),
        }
    }

    fn game_over_commands(&self) -> Vec<UiCommand> {
        let mut commands = Vec::new();

        let outcome = match self.state.winning_line() {
            Some(line) => {
                commands.push(UiCommand::HighlightCells {
                    cells: line.cells.to_vec(),
                });
                GameOutcome::won_by(line.player)
            }
            None => self.state.outcome(),
        };

        if let Some(message) = StatusMessage::for_outcome(outcome) {
            commands.push(message.to_command());
        }
        commands
    }
}
