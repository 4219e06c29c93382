/**
 * WebSocket Connection Handler
 *
 * This module implements the `GET /socket` upgrade and the per-connection
 * read/write loops.
 *
 * # Connection Flow
 *
 * 1. Upgrade the request and open a `Session` on the hub
 * 2. Spawn a writer task that drains the session's outbox into text frames
 * 3. Read frames until the client closes, the socket errors or the writer
 *    stops
 * 4. Disconnect the session (presence and room cleanup)
 *
 * # Frame Handling
 *
 * - Text frames are decoded as `InboundEvent` and handed to the session
 * - Dropped events (`SessionError`) are logged and the loop continues
 * - Binary frames are ignored; pings are answered by axum
 */

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};

use crate::backend::error::SessionError;
use crate::backend::realtime::Outbox;
use crate::backend::session::{Session, SocialHub};

/// Handle a WebSocket upgrade request (GET /socket)
pub async fn handle_socket_upgrade(
    State(hub): State<Arc<SocialHub>>,
    upgrade: WebSocketUpgrade,
) -> Response {
    upgrade.on_upgrade(move |socket| run_connection(socket, hub))
}

/// Drive one connection until either side goes away
pub async fn run_connection(socket: WebSocket, hub: Arc<SocialHub>) {
    let (mut session, outbox) = hub.connect();
    let connection = session.connection_id();
    let (ws_sender, mut ws_receiver) = socket.split();

    let mut writer = tokio::spawn(write_outbox(ws_sender, outbox));

    loop {
        tokio::select! {
            frame = ws_receiver.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        handle_text(&mut session, text.as_str()).await;
                    }
                    Some(Ok(Message::Close(_))) => {
                        tracing::info!("[Socket] Connection {} closed by client", connection);
                        break;
                    }
                    Some(Ok(Message::Binary(_))) => {
                        tracing::warn!("[Socket] Ignoring binary frame on connection {}", connection);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("[Socket] Read error on connection {}: {}", connection, e);
                        break;
                    }
                    None => break,
                }
            }
            _ = &mut writer => {
                tracing::debug!("[Socket] Writer for connection {} stopped", connection);
                break;
            }
        }
    }

    session.disconnect().await;
    writer.abort();
}

async fn handle_text(session: &mut Session, text: &str) {
    match session.handle_frame(text).await {
        Ok(pushed) => {
            tracing::trace!("[Socket] Event handled, {} pushes queued", pushed);
        }
        Err(SessionError::Malformed(e)) => {
            tracing::warn!("[Socket] Ignoring malformed frame: {}", e);
        }
        Err(e) => {
            tracing::debug!("[Socket] Event dropped: {}", e);
        }
    }
}

async fn write_outbox(
    mut ws_sender: futures_util::stream::SplitSink<WebSocket, Message>,
    mut outbox: Outbox,
) {
    while let Some(event) = outbox.recv().await {
        let json = match event.to_json() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("[Socket] Failed to encode {}: {}", event.name(), e);
                continue;
            }
        };
        if ws_sender.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
    let _ = ws_sender.close().await;
}
