//! Fixtures shared by the integration tests.
#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use futures_util::{SinkExt, StreamExt};
use huddle_server::ui::Server;
use huddle_shared::time::SystemClock;
use serde_json::{Value, json};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

pub const CLIENT_ORIGIN: &str = "http://localhost:5173";

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// Start an in-process server on an ephemeral port
pub async fn spawn_server() -> SocketAddr {
    spawn_server_with_capacity(100).await
}

pub async fn spawn_server_with_capacity(history_capacity: usize) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let server =
        Server::in_memory(history_capacity, Arc::new(SystemClock)).with_client_origin(CLIENT_ORIGIN);
    tokio::spawn(async move {
        server.serve(listener).await.expect("Server failed");
    });
    addr
}

/// WebSocket test client speaking the JSON envelope protocol
pub struct TestClient {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
    /// Connection id announced by the server in the `connected` greeting
    pub id: String,
}

impl TestClient {
    /// Connect and consume the `connected` greeting
    pub async fn connect(addr: SocketAddr) -> Self {
        let (ws, _) = connect_async(format!("ws://{}/ws", addr))
            .await
            .expect("Failed to connect");
        let mut client = Self {
            ws,
            id: String::new(),
        };
        let greeting = client.recv_until("connected").await;
        client.id = greeting["id"]
            .as_str()
            .expect("greeting without id")
            .to_string();
        client
    }

    /// Connect and join the room as `username`, waiting for our own `user_joined`
    pub async fn join(addr: SocketAddr, username: &str) -> Self {
        let mut client = Self::connect(addr).await;
        client.emit("user_join", json!(username)).await;
        loop {
            let joined = client.recv_until("user_joined").await;
            if joined["id"] == client.id.as_str() {
                break;
            }
        }
        client
    }

    pub async fn emit(&mut self, event: &str, data: Value) {
        let frame = json!({"event": event, "data": data}).to_string();
        self.send_raw(&frame).await;
    }

    pub async fn send_raw(&mut self, frame: &str) {
        self.ws
            .send(Message::Text(frame.to_string().into()))
            .await
            .expect("Failed to send frame");
    }

    /// Next event envelope as `(event, data)`
    pub async fn next_event(&mut self) -> (String, Value) {
        loop {
            let msg = tokio::time::timeout(RECV_TIMEOUT, self.ws.next())
                .await
                .expect("Timed out waiting for an event")
                .expect("Stream ended")
                .expect("WebSocket error");
            if let Message::Text(text) = msg {
                let envelope: Value =
                    serde_json::from_str(text.as_str()).expect("Server sent invalid JSON");
                let event = envelope["event"]
                    .as_str()
                    .expect("envelope without event")
                    .to_string();
                return (event, envelope["data"].clone());
            }
        }
    }

    /// Skip events until one named `event` arrives and return its data
    pub async fn recv_until(&mut self, event: &str) -> Value {
        loop {
            let (name, data) = self.next_event().await;
            if name == event {
                return data;
            }
        }
    }

    /// Collect every event name up to and including the first `event`
    pub async fn collect_until(&mut self, event: &str) -> Vec<(String, Value)> {
        let mut seen = Vec::new();
        loop {
            let (name, data) = self.next_event().await;
            let done = name == event;
            seen.push((name, data));
            if done {
                return seen;
            }
        }
    }

    pub async fn close(mut self) {
        let _ = self.ws.close(None).await;
    }
}
