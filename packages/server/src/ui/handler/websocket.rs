//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, Stream, StreamExt},
};
use tokio::sync::{mpsc, oneshot};

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, InboundEvent},
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
    usecase::DispatchEventUseCase,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let client_id = ConnectionIdFactory::generate();
    tracing::info!("Client '{}' connecting", client_id);
    ws.on_upgrade(move |socket| handle_socket(socket, state, client_id))
}

/// Spawns a task that forwards queued outbound events to the WebSocket sink.
///
/// Every push for this connection lands in `rx`; this task is the only writer
/// to the socket, so a slow client never blocks routing for anyone else.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

/// Parse one text frame into a domain event. Malformed frames yield `None`.
fn parse_client_event(client_id: &ConnectionId, text: &str) -> Option<InboundEvent> {
    match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => Some(event.into()),
        Err(e) => {
            tracing::warn!("Dropped malformed frame from '{}': {}", client_id, e);
            None
        }
    }
}

/// Reads frames and dispatches them one at a time until the client closes
/// or `stop` fires.
///
/// `stop` is only observed between frames, so an event that has started
/// dispatching always finishes routing and fan-out.
async fn receive_loop<S>(
    mut receiver: S,
    mut stop: oneshot::Receiver<()>,
    dispatch: Arc<DispatchEventUseCase>,
    client_id: ConnectionId,
) where
    S: Stream<Item = Result<Message, axum::Error>> + Unpin,
{
    loop {
        let msg = tokio::select! {
            msg = receiver.next() => msg,
            _ = &mut stop => break,
        };
        let msg = match msg {
            Some(Ok(msg)) => msg,
            Some(Err(e)) => {
                tracing::error!("WebSocket error from '{}': {}", client_id, e);
                break;
            }
            None => break,
        };

        match msg {
            Message::Text(text) => {
                tracing::debug!("Received text from '{}': {}", client_id, text.as_str());
                if let Some(event) = parse_client_event(&client_id, text.as_str()) {
                    dispatch.execute(&client_id, event).await;
                }
            }
            Message::Close(_) => {
                tracing::info!("Client '{}' requested close", client_id);
                break;
            }
            _ => {}
        }
    }
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, client_id: ConnectionId) {
    let (sender, receiver) = socket.split();

    // Create a channel for this client to receive pushed events
    let (tx, rx) = mpsc::unbounded_channel();
    if let Err(e) = state
        .connect_client_usecase
        .execute(client_id.clone(), tx)
        .await
    {
        tracing::warn!("Failed to connect client '{}': {}", client_id, e);
        return;
    }
    tracing::info!("Client '{}' connected", client_id);

    let mut send_task = pusher_loop(rx, sender);

    let (stop_tx, stop_rx) = oneshot::channel();
    let mut recv_task = tokio::spawn(receive_loop(
        receiver,
        stop_rx,
        state.dispatch_event_usecase.clone(),
        client_id.clone(),
    ));

    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => {
            // Writer is gone: stop reading, but let an in-flight event finish
            let _ = stop_tx.send(());
            if let Err(e) = recv_task.await {
                tracing::error!("Receive task for '{}' failed: {}", client_id, e);
            }
        }
    };

    let deliveries = state.disconnect_client_usecase.execute(&client_id).await;
    tracing::info!(
        "Client '{}' disconnected ({} notifications sent)",
        client_id,
        deliveries.len()
    );
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        domain::{ChatRoom, MessagePusher},
        infrastructure::message_pusher::WebSocketMessagePusher,
    };
    use futures_util::stream;
    use huddle_shared::time::FixedClock;
    use tokio::sync::Mutex;

    fn text_frame(json: &str) -> Result<Message, axum::Error> {
        Ok(Message::Text(json.to_string().into()))
    }

    #[test]
    fn test_parse_client_event_accepts_known_event() {
        // テスト項目: 既知のイベントはドメインのイベントに変換される
        // given (前提条件):
        let client_id = ConnectionIdFactory::generate();

        // when (操作):
        let event = parse_client_event(&client_id, r#"{"event":"typing","data":true}"#);

        // then (期待する結果):
        assert_eq!(event, Some(InboundEvent::Typing { is_typing: true }));
    }

    #[test]
    fn test_parse_client_event_drops_garbage() {
        // テスト項目: JSON でないフレームは破棄される
        // given (前提条件):
        let client_id = ConnectionIdFactory::generate();

        // when (操作):
        let event = parse_client_event(&client_id, "hello there");

        // then (期待する結果):
        assert!(event.is_none());
    }

    #[tokio::test]
    async fn test_stop_waits_for_in_flight_event_to_finish() {
        // テスト項目: 停止要求が来ても処理中のイベントは最後まで配信される
        // given (前提条件):
        let clients = Arc::new(Mutex::new(HashMap::new()));
        let pusher = WebSocketMessagePusher::new(clients.clone());
        let peer = ConnectionIdFactory::generate();
        let (peer_tx, mut peer_rx) = mpsc::unbounded_channel();
        pusher.register_client(peer, peer_tx).await;
        let room = Arc::new(Mutex::new(ChatRoom::new()));
        let dispatch = Arc::new(DispatchEventUseCase::new(
            room.clone(),
            Arc::new(pusher),
            Arc::new(FixedClock::new(0)),
        ));
        let frames = stream::iter(vec![text_frame(
            r#"{"event":"send_message","data":{"body":"hi"}}"#,
        )])
        .chain(stream::pending());
        let (stop_tx, stop_rx) = oneshot::channel();

        // 配信先のロックを握り、ブロードキャストの途中で止める
        let clients_guard = clients.lock().await;
        let task = tokio::spawn(receive_loop(
            frames,
            stop_rx,
            dispatch,
            ConnectionIdFactory::generate(),
        ));
        while room.try_lock().is_ok() {
            tokio::task::yield_now().await;
        }

        // when (操作):
        stop_tx.send(()).unwrap();
        drop(clients_guard);
        task.await.unwrap();

        // then (期待する結果):
        assert_eq!(room.lock().await.store.len(), 1);
        let pushed = peer_rx.try_recv().unwrap();
        assert!(pushed.contains("receive_message"));
    }

    #[tokio::test]
    async fn test_stop_ends_idle_loop() {
        // テスト項目: 待機中の受信ループは停止要求で終了する
        // given (前提条件):
        let room = Arc::new(Mutex::new(ChatRoom::new()));
        let dispatch = Arc::new(DispatchEventUseCase::new(
            room,
            Arc::new(WebSocketMessagePusher::default()),
            Arc::new(FixedClock::new(0)),
        ));
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(receive_loop(
            stream::pending::<Result<Message, axum::Error>>(),
            stop_rx,
            dispatch,
            ConnectionIdFactory::generate(),
        ));

        // when (操作):
        stop_tx.send(()).unwrap();

        // then (期待する結果):
        tokio::time::timeout(std::time::Duration::from_secs(1), task)
            .await
            .unwrap()
            .unwrap();
    }
}
