//! Read-side HTTP API tests.

mod common;

use common::{CLIENT_ORIGIN, TestClient, spawn_server, spawn_server_with_capacity};
use serde_json::{Value, json};

async fn get_json(addr: std::net::SocketAddr, path: &str) -> Value {
    reqwest::get(format!("http://{}{}", addr, path))
        .await
        .expect("Request failed")
        .json::<Value>()
        .await
        .expect("Response was not JSON")
}

#[tokio::test]
async fn test_health_check() {
    // テスト項目: ヘルスチェックが ok を返す
    // given (前提条件):
    let addr = spawn_server().await;

    // when (操作):
    let body = get_json(addr, "/api/health").await;

    // then (期待する結果):
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_root_banner() {
    // テスト項目: ルートはプレーンテキストのバナーを返す
    // given (前提条件):
    let addr = spawn_server().await;

    // when (操作):
    let body = reqwest::get(format!("http://{}/", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // then (期待する結果):
    assert!(body.contains("running"));
}

#[tokio::test]
async fn test_messages_history_reflects_reactions_and_reads() {
    // テスト項目: 履歴 API がリアクションと既読の状態を含むメッセージを返す
    // given (前提条件):
    let addr = spawn_server().await;
    let mut alice = TestClient::join(addr, "alice").await;
    alice.emit("send_message", json!({"body": "hi"})).await;
    alice.recv_until("receive_message").await;
    alice
        .emit("add_reaction", json!({"messageId": 1, "reaction": "👍"}))
        .await;
    alice.recv_until("reaction_added").await;
    alice.emit("mark_read", json!(1)).await;
    alice.recv_until("message_read").await;

    // when (操作):
    let body = get_json(addr, "/api/messages").await;

    // then (期待する結果):
    let messages = body.as_array().expect("array of messages");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["body"], "hi");
    assert_eq!(messages[0]["senderId"], alice.id.as_str());
    assert_eq!(messages[0]["reactions"], json!({"👍": [&alice.id]}));
    assert_eq!(messages[0]["readBy"], json!([&alice.id]));
    assert!(messages[0]["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_messages_history_is_bounded() {
    // テスト項目: 容量を超えた古いメッセージは履歴から消える
    // given (前提条件):
    let addr = spawn_server_with_capacity(3).await;
    let mut alice = TestClient::join(addr, "alice").await;

    // when (操作):
    for i in 1..=5 {
        alice
            .emit("send_message", json!({"body": format!("m{}", i)}))
            .await;
        alice.recv_until("receive_message").await;
    }

    // then (期待する結果):
    let body = get_json(addr, "/api/messages").await;
    let bodies: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["body"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(bodies, ["m3", "m4", "m5"]);
}

#[tokio::test]
async fn test_users_and_typing_snapshots() {
    // テスト項目: 参加者一覧と入力中一覧が現在の状態を返す
    // given (前提条件):
    let addr = spawn_server().await;
    let mut alice = TestClient::join(addr, "alice").await;
    alice.emit("typing", json!(true)).await;
    alice.recv_until("typing_users").await;

    // when (操作):
    let users = get_json(addr, "/api/users").await;
    let typing = get_json(addr, "/api/typing").await;

    // then (期待する結果):
    assert_eq!(users, json!([{"id": &alice.id, "username": "alice"}]));
    assert_eq!(typing, json!(["alice"]));
}

#[tokio::test]
async fn test_cors_allows_client_origin() {
    // テスト項目: 設定したクライアントのオリジンが CORS で許可される
    // given (前提条件):
    let addr = spawn_server().await;

    // when (操作):
    let response = reqwest::Client::new()
        .get(format!("http://{}/api/health", addr))
        .header("Origin", CLIENT_ORIGIN)
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    let allowed = response
        .headers()
        .get("access-control-allow-origin")
        .and_then(|v| v.to_str().ok());
    assert_eq!(allowed, Some(CLIENT_ORIGIN));
}
