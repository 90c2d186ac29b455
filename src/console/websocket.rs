use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::console::routes::AppState;
use crate::render::document::Document;

/// Axum handler that upgrades the HTTP connection to a WebSocket carrying
/// live document updates.
pub async fn live_view_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_live_view(socket, state))
}

/// Push the document to the client whenever its revision moves.
///
/// The revision is checked every `push_interval`; nothing is sent while the
/// view is unchanged. The loop ends when the client disconnects.
async fn handle_live_view(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();

    let (shutdown_tx, mut shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let recv_task = tokio::spawn(async move {
        // Drain incoming frames; we only care about Close.
        while let Some(Ok(msg)) = receiver.next().await {
            if matches!(msg, Message::Close(_)) {
                break;
            }
        }
        let _ = shutdown_tx.send(());
    });

    let mut tick = interval(state.push_interval);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_sent: Option<u64> = None;

    loop {
        tokio::select! {
            _ = tick.tick() => {
                if last_sent == Some(state.dashboard.revision()) {
                    continue;
                }

                let document = state.dashboard.document();
                let Some(text) = pending_push(last_sent, &document) else {
                    continue;
                };
                if sender.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
                last_sent = Some(document.revision());
            }

            _ = &mut shutdown_rx => {
                break;
            }
        }
    }

    debug!("Live view client disconnected");
    recv_task.abort();
}

/// JSON frame to send for `doc`, or `None` when the client already holds
/// this revision.
fn pending_push(last_sent: Option<u64>, doc: &Document) -> Option<String> {
    if last_sent == Some(doc.revision()) {
        return None;
    }
    serde_json::to_string(doc).ok()
}
