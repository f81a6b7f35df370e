//! HTTP API integration tests.
//!
//! Tests for REST API endpoints (health check, stats, room details).

mod fixtures;
use fixtures::{TestClient, TestServer};
use serde_json::json;

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_stats_endpoint_tracks_rooms() {
    // テスト項目: /api/stats が Room 数と参加者数を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let url = format!("{}/api/stats", server.base_url());

    let empty: serde_json::Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(empty, json!({"rooms": 0, "participants": 0}));

    // when (操作): Room を 1 つ作成
    let mut alice = TestClient::connect(&server).await;
    alice
        .send_json(json!({"type": "create", "payload": {"username": "alice"}}))
        .await;
    alice.recv_json().await;

    // then (期待する結果):
    let stats: serde_json::Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(stats, json!({"rooms": 1, "participants": 1}));
}

#[tokio::test]
async fn test_room_detail_endpoint_success() {
    // テスト項目: /api/rooms/{room_id} エンドポイントがルーム詳細を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let mut alice = TestClient::connect(&server).await;
    alice
        .send_json(json!({"type": "create", "payload": {"username": "alice"}}))
        .await;
    let created = alice.recv_json().await;
    let room_id = created["roomId"].as_str().unwrap().to_string();

    // when (操作):
    let response = client
        .get(format!("{}/api/rooms/{}", server.base_url(), room_id))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["id"], room_id.as_str());
    assert!(body["created_at"].is_string());

    let participants = body["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0]["username"], "alice");
    assert!(participants[0]["joined_at"].is_string());
}

#[tokio::test]
async fn test_room_detail_endpoint_not_found() {
    // テスト項目: 存在しない / 形式不正な Room ID には 404 を返す
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    for room_id in ["abcd1234", "nonexistent", "abc"] {
        // when (操作):
        let response = client
            .get(format!("{}/api/rooms/{}", server.base_url(), room_id))
            .send()
            .await
            .expect("Failed to send request");

        // then (期待する結果):
        assert_eq!(response.status(), 404, "{room_id}");
    }
}
