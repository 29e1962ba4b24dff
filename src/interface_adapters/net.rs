// Push channel: every connection subscribes to board snapshots and
// forwards them until the client goes away. Clients send no commands on
// this channel; the HTTP API is the mutation surface.

use crate::domain::GameState;
use crate::interface_adapters::protocol::{GameStateDto, ServerMessage};
use crate::interface_adapters::state::AppState;
use crate::interface_adapters::utils::ids::next_conn_id;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::sink::SinkExt;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};

enum LoopControl {
    Continue,
    Disconnect,
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| {
        // Correlates every log line of this connection.
        let span = info_span!("conn", conn_id = next_conn_id());
        handle_socket(socket, state).instrument(span)
    })
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    // Subscribe before the first send so no snapshot published in between
    // is missed.
    let mut updates_rx = state.updates_tx.subscribe();
    let mut msgs_out: u64 = 0;

    // New subscribers get the current board immediately.
    let snapshot = updates_rx.borrow_and_update().clone();
    if let LoopControl::Disconnect =
        forward_snapshot(&mut socket, &snapshot, &mut msgs_out).await
    {
        let _ = socket.close().await;
        return;
    }
    info!("client connected");

    loop {
        let disconnect = tokio::select! {
            incoming = socket.recv() => {
                matches!(handle_incoming(incoming), LoopControl::Disconnect)
            }

            changed = updates_rx.changed() => {
                match changed {
                    Ok(()) => {
                        let snapshot = updates_rx.borrow_and_update().clone();
                        matches!(
                            forward_snapshot(&mut socket, &snapshot, &mut msgs_out).await,
                            LoopControl::Disconnect
                        )
                    }
                    Err(_) => {
                        warn!("state channel closed; disconnecting");
                        true
                    }
                }
            }
        };

        if disconnect {
            break;
        }
    }

    if let Err(err) = socket.close().await {
        debug!(error = %err, "socket close error");
    }
    debug!(msgs_out, "connection stats");
    info!("client disconnected");
}

async fn forward_snapshot(
    socket: &mut WebSocket,
    snapshot: &GameState,
    msgs_out: &mut u64,
) -> LoopControl {
    let msg = ServerMessage::StateUpdate(GameStateDto::from(snapshot));
    let txt = match serde_json::to_string(&msg) {
        Ok(txt) => txt,
        Err(err) => {
            error!(error = %err, "failed to serialize state update");
            return LoopControl::Continue;
        }
    };

    match socket.send(Message::Text(txt.into())).await {
        Ok(()) => {
            *msgs_out += 1;
            LoopControl::Continue
        }
        Err(err) => {
            // Log the send failure; only this subscriber disconnects.
            warn!(error = %err, "failed to send state update");
            LoopControl::Disconnect
        }
    }
}

fn handle_incoming(incoming: Option<Result<Message, axum::Error>>) -> LoopControl {
    match incoming {
        Some(Ok(msg)) => match msg {
            // The push channel is one-way; inbound frames carry no commands.
            Message::Text(text) => {
                debug!(bytes = text.len(), "ignoring client text frame");
                LoopControl::Continue
            }
            Message::Binary(payload) => {
                debug!(bytes = payload.len(), "ignoring client binary frame");
                LoopControl::Continue
            }
            Message::Ping(_) | Message::Pong(_) => LoopControl::Continue,
            Message::Close(_) => LoopControl::Disconnect,
        },
        Some(Err(err)) => {
            warn!(error = %err, "websocket recv error");
            LoopControl::Disconnect
        }
        None => LoopControl::Disconnect,
    }
}
