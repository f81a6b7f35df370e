//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};

use crate::{
    domain::{Connection, ConnectionId},
    infrastructure::connection::{CLOSE_NORMAL, ChannelConnection, Outbound},
    ui::{
        session::{DISCONNECT_REASON, Session, SessionControl},
        state::AppState,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    // Frames for this client (replies and broadcasts) go through this channel
    let (connection, mut rx) = ChannelConnection::new(ConnectionId::generate());
    let connection = Arc::new(connection);
    let mut session = Session::open(connection.clone(), state.repository.clone());

    // Spawn a task to drain the channel into the socket
    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            match frame {
                Outbound::Text(text) => {
                    if sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Outbound::Close { code, reason } => {
                    let close = CloseFrame {
                        code,
                        reason: reason.into(),
                    };
                    if let Err(e) = sender.send(Message::Close(Some(close))).await {
                        tracing::debug!("Failed to send close frame: {}", e);
                    }
                    break;
                }
            }
        }
    });

    let mut writer_finished = false;
    let mut close_requested = false;

    loop {
        tokio::select! {
            _ = &mut send_task => {
                writer_finished = true;
                break;
            }
            msg = receiver.next() => {
                let msg = match msg {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket error on '{}': {}", connection.id(), e);
                        break;
                    }
                    None => break,
                };

                match msg {
                    Message::Text(text) => {
                        tracing::debug!("Received text: {}", text.as_str());
                        if session.handle_text(text.as_str()).await == SessionControl::Close {
                            connection.close(CLOSE_NORMAL, DISCONNECT_REASON);
                            close_requested = true;
                            break;
                        }
                    }
                    Message::Close(_) => {
                        tracing::info!("Client '{}' requested close", connection.id());
                        break;
                    }
                    Message::Binary(_) => {
                        tracing::debug!("Ignoring binary frame from '{}'", connection.id());
                    }
                    // Ping/pong is handled automatically by the WebSocket protocol
                    _ => {}
                }
            }
        }
    }

    if close_requested && !writer_finished {
        // Let the writer flush the close frame before tearing down
        if let Err(e) = send_task.await {
            tracing::debug!("Writer task ended abnormally: {}", e);
        }
    } else if !writer_finished {
        send_task.abort();
    }

    session.close().await;
}
