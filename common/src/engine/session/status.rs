use crate::engine::tictactoe::{GameOutcome, Player};

use super::tictactoe_session::UiCommand;

/// Status line texts with the per-character delay the browser uses to type
/// them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    YourTurn,
    Thinking,
    HumanWon,
    ComputerWon,
    Draw,
}

impl StatusMessage {
    pub fn for_turn(turn: Player) -> Self {
        match turn {
            Player::Human => StatusMessage::YourTurn,
            Player::Computer => StatusMessage::Thinking,
        }
    }

    pub fn for_outcome(outcome: GameOutcome) -> Option<Self> {
        match outcome {
            GameOutcome::HumanWin => Some(StatusMessage::HumanWon),
            GameOutcome::ComputerWin => Some(StatusMessage::ComputerWon),
            GameOutcome::Draw => Some(StatusMessage::Draw),
            GameOutcome::InProgress => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            StatusMessage::YourTurn => "Your turn",
            StatusMessage::Thinking => "I am thinking...",
            StatusMessage::HumanWon => "You win!!!! you beat the unbeatable AI. :)",
            StatusMessage::ComputerWon => {
                "I win!! Woohooo!! I am really am good at this game. But then again it is the sole purpose of my existence. :("
            }
            StatusMessage::Draw => "Draw! Doesn't mean you beat me, fancy another round? :/",
        }
    }

    pub fn char_delay_ms(&self) -> u64 {
        match self {
            StatusMessage::YourTurn | StatusMessage::Thinking => 50,
            StatusMessage::HumanWon | StatusMessage::Draw => 40,
            StatusMessage::ComputerWon => 20,
        }
    }

    pub fn to_command(self) -> UiCommand {
        UiCommand::SetStatus {
            text: self.text().to_string(),
            char_delay_ms: self.char_delay_ms(),
        }
    }
}
