use common::engine::session::{UiCommand, UiEvent};
use serde::Deserialize;

/// Browser to server frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    CellClicked { index: usize },
    Restart,
}

impl From<ClientMessage> for UiEvent {
    fn from(message: ClientMessage) -> Self {
        match message {
            ClientMessage::CellClicked { index } => UiEvent::CellClicked(index),
            ClientMessage::Restart => UiEvent::RestartRequested,
        }
    }
}

pub fn decode_client_message(text: &str) -> Result<UiEvent, serde_json::Error> {
    serde_json::from_str::<ClientMessage>(text).map(UiEvent::from)
}

pub fn encode_command(command: &UiCommand) -> Result<String, serde_json::Error> {
    serde_json::to_string(command)
}
