use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use common::engine::session::{PendingComputerMove, SessionUpdate, TicTacToeSession, UiCommand};
use common::{log, log_debug, log_error};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use crate::messages::{decode_client_message, encode_command};
use crate::web_server::WebServerState;

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// One game per connection. The session lives on this task; the computer's
/// reply comes back through `pending_rx` after the thinking delay.
pub async fn handle_websocket(socket: WebSocket, state: WebServerState) {
    let connection_id = NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed);
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let (tx, mut rx) = mpsc::channel::<UiCommand>(128);
    let send_task = tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            let text = match encode_command(&command) {
                Ok(text) => text,
                Err(e) => {
                    log_error!("Failed to encode {:?}: {}", command, e);
                    continue;
                }
            };
            if ws_sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let (pending_tx, mut pending_rx) = mpsc::channel::<PendingComputerMove>(4);
    let mut session = TicTacToeSession::new();

    log!("Client {} connected", connection_id);

    let mut connected = dispatch_update(session.snapshot(), &tx, &pending_tx, state.thinking_delay).await;

    while connected {
        tokio::select! {
            incoming = ws_receiver.next() => {
                let text = match incoming {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        log_error!("Client {} socket error: {}", connection_id, e);
                        break;
                    }
                };

                let event = match decode_client_message(text.as_str()) {
                    Ok(event) => event,
                    Err(e) => {
                        log_error!("Client {} sent a malformed message: {}", connection_id, e);
                        continue;
                    }
                };

                let update = session.handle_event(event);
                if update.is_ignored() {
                    log_debug!("Client {} ignored {:?}", connection_id, event);
                    continue;
                }
                log_debug!("Client {} applied {:?}", connection_id, event);
                log_game_over(connection_id, &session, &update);
                connected = dispatch_update(update, &tx, &pending_tx, state.thinking_delay).await;
            }
            Some(ticket) = pending_rx.recv() => {
                let update = session.play_computer_move(ticket);
                if update.is_ignored() {
                    log_debug!("Client {} dropped a stale computer move", connection_id);
                    continue;
                }
                if let Some(index) = session.game_state().last_move() {
                    log_debug!("Client {} computer played {}", connection_id, index);
                }
                log_game_over(connection_id, &session, &update);
                connected = dispatch_update(update, &tx, &pending_tx, state.thinking_delay).await;
            }
        }
    }

    drop(tx);
    let _ = send_task.await;
    log!("Client {} disconnected", connection_id);
}

/// Forwards the commands and arms the computer's move if one is due.
/// Returns `false` once the outgoing side is gone.
async fn dispatch_update(
    update: SessionUpdate,
    tx: &mpsc::Sender<UiCommand>,
    pending_tx: &mpsc::Sender<PendingComputerMove>,
    thinking_delay: Duration,
) -> bool {
    for command in update.commands {
        if tx.send(command).await.is_err() {
            return false;
        }
    }

    if let Some(ticket) = update.pending {
        schedule_computer_move(ticket, thinking_delay, pending_tx.clone());
    }
    true
}

pub fn schedule_computer_move(
    ticket: PendingComputerMove,
    delay: Duration,
    pending_tx: mpsc::Sender<PendingComputerMove>,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = pending_tx.send(ticket).await;
    });
}

fn log_game_over(connection_id: u64, session: &TicTacToeSession, update: &SessionUpdate) {
    if let Some(summary) = game_over_summary(session, update) {
        log!("Client {} game finished: {}", connection_id, summary);
    }
}

/// `None` unless this update is the one that ended the game.
fn game_over_summary(session: &TicTacToeSession, update: &SessionUpdate) -> Option<String> {
    let outcome = session.outcome();
    if !outcome.is_terminal() || update.pending.is_some() {
        return None;
    }
    Some(match outcome.winner() {
        Some(winner) => format!("{} won", winner),
        None => outcome.to_string(),
    })
}
