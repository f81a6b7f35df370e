//! WebSocket message DTOs for the chat relay.
//!
//! Inbound frames are `{type, payload}` objects; outbound frames carry their
//! `type` inline, except errors which are a bare `{error}` object.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;

/// Outbound message type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageType {
    System,
    Chat,
    RoomCreated,
    JoinedRoom,
}

/// Serialization of outbound frames.
pub trait WireMessage: Serialize {
    fn to_json(&self) -> String {
        // Outbound DTOs only hold strings and unit enums, which always serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Relay-generated notification (welcome, joined, left)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMessage {
    pub r#type: MessageType,
    pub message: String,
}

impl SystemMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::System,
            message: message.into(),
        }
    }
}

/// Chat message fanned out to a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub r#type: MessageType,
    pub sender: String,
    pub message: String,
}

impl ChatMessage {
    pub fn new(sender: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::Chat,
            sender: sender.into(),
            message: message.into(),
        }
    }
}

/// Acknowledgment of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomCreatedMessage {
    pub r#type: MessageType,
    #[serde(rename = "roomId")]
    pub room_id: String,
}

impl RoomCreatedMessage {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::RoomCreated,
            room_id: room_id.into(),
        }
    }
}

/// Acknowledgment of a successful join
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedRoomMessage {
    pub r#type: MessageType,
    #[serde(rename = "roomId")]
    pub room_id: String,
}

impl JoinedRoomMessage {
    pub fn new(room_id: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::JoinedRoom,
            room_id: room_id.into(),
        }
    }
}

/// Error reply, sent only to the originating connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl WireMessage for SystemMessage {}
impl WireMessage for ChatMessage {}
impl WireMessage for RoomCreatedMessage {}
impl WireMessage for JoinedRoomMessage {}
impl WireMessage for ErrorMessage {}

/// Payload of a `create` request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePayload {
    pub username: String,
}

/// Payload of a `join` request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JoinPayload {
    #[serde(rename = "roomId")]
    pub room_id: String,
    pub username: String,
}

/// Payload of a `chat` request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatPayload {
    #[serde(rename = "roomId")]
    pub room_id: String,
    pub message: String,
}

/// A validated inbound frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientMessage {
    Create(CreatePayload),
    Join(JoinPayload),
    Chat(ChatPayload),
    /// Client asks the server to close its socket
    Disconnect,
}

/// Reasons an inbound frame is rejected before dispatch.
///
/// `Display` is the exact text sent back in the `error` field.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid JSON format")]
    InvalidJson,
    #[error("Invalid message format")]
    InvalidFormat,
    #[error("Unknown message type")]
    UnknownType,
}

impl ClientMessage {
    /// Decode and validate one raw text frame.
    pub fn decode(raw: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(raw).map_err(|_| ProtocolError::InvalidJson)?;

        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ProtocolError::InvalidFormat)?;

        match kind {
            "create" => Ok(Self::Create(payload(&value)?)),
            "join" => Ok(Self::Join(payload(&value)?)),
            "chat" => Ok(Self::Chat(payload(&value)?)),
            "disconnect" => Ok(Self::Disconnect),
            _ => Err(ProtocolError::UnknownType),
        }
    }
}

fn payload<T: DeserializeOwned>(value: &Value) -> Result<T, ProtocolError> {
    let payload = value
        .get("payload")
        .filter(|p| p.is_object())
        .ok_or(ProtocolError::InvalidFormat)?;
    T::deserialize(payload).map_err(|_| ProtocolError::InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_create() {
        // テスト項目: create リクエストをデコードできる
        // when (操作):
        let result = ClientMessage::decode(r#"{"type":"create","payload":{"username":"alice"}}"#);

        // then (期待する結果):
        assert_eq!(
            result,
            Ok(ClientMessage::Create(CreatePayload {
                username: "alice".to_string()
            }))
        );
    }

    #[test]
    fn test_decode_join_and_chat() {
        // テスト項目: join / chat リクエストの roomId をデコードできる
        let join =
            ClientMessage::decode(r#"{"type":"join","payload":{"roomId":"abcd1234","username":"bob"}}"#);
        let chat =
            ClientMessage::decode(r#"{"type":"chat","payload":{"roomId":"abcd1234","message":"hi"}}"#);

        assert_eq!(
            join,
            Ok(ClientMessage::Join(JoinPayload {
                room_id: "abcd1234".to_string(),
                username: "bob".to_string()
            }))
        );
        assert_eq!(
            chat,
            Ok(ClientMessage::Chat(ChatPayload {
                room_id: "abcd1234".to_string(),
                message: "hi".to_string()
            }))
        );
    }

    #[test]
    fn test_decode_invalid_json() {
        // テスト項目: JSON として解析できないフレームは InvalidJson
        for raw in ["", "not json", "{\"type\":", "{'type':'create'}"] {
            assert_eq!(ClientMessage::decode(raw), Err(ProtocolError::InvalidJson));
        }
    }

    #[test]
    fn test_decode_missing_type() {
        // テスト項目: type が無い、または文字列でない場合は InvalidFormat
        for raw in ["[]", "42", "\"create\"", "{}", r#"{"type":1}"#, r#"{"payload":{}}"#] {
            assert_eq!(
                ClientMessage::decode(raw),
                Err(ProtocolError::InvalidFormat),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_decode_unknown_type() {
        // テスト項目: 未知の type は UnknownType
        let result = ClientMessage::decode(r#"{"type":"shout","payload":{}}"#);

        assert_eq!(result, Err(ProtocolError::UnknownType));
    }

    #[test]
    fn test_decode_bad_payload() {
        // テスト項目: payload の欠落・型違いは InvalidFormat
        let cases = [
            r#"{"type":"create"}"#,
            r#"{"type":"create","payload":"alice"}"#,
            r#"{"type":"create","payload":{}}"#,
            r#"{"type":"create","payload":{"username":7}}"#,
            r#"{"type":"join","payload":{"username":"bob"}}"#,
            r#"{"type":"chat","payload":{"roomId":"abcd1234","message":null}}"#,
        ];
        for raw in cases {
            assert_eq!(
                ClientMessage::decode(raw),
                Err(ProtocolError::InvalidFormat),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_decode_disconnect_needs_no_payload() {
        // テスト項目: disconnect は payload 無しで受け付ける
        let result = ClientMessage::decode(r#"{"type":"disconnect"}"#);

        assert_eq!(result, Ok(ClientMessage::Disconnect));
    }

    #[test]
    fn test_outbound_wire_shapes() {
        // テスト項目: 送信フレームがワイヤ形式どおりにシリアライズされる
        let cases: Vec<(String, Value)> = vec![
            (
                SystemMessage::new("bob joined the room").to_json(),
                json!({"type": "system", "message": "bob joined the room"}),
            ),
            (
                ChatMessage::new("alice", "hi").to_json(),
                json!({"type": "chat", "sender": "alice", "message": "hi"}),
            ),
            (
                RoomCreatedMessage::new("abcd1234").to_json(),
                json!({"type": "roomCreated", "roomId": "abcd1234"}),
            ),
            (
                JoinedRoomMessage::new("abcd1234").to_json(),
                json!({"type": "joinedRoom", "roomId": "abcd1234"}),
            ),
            (
                ErrorMessage::new(ProtocolError::UnknownType.to_string()).to_json(),
                json!({"error": "Unknown message type"}),
            ),
        ];

        for (encoded, expected) in cases {
            let decoded: Value = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, expected);
        }
    }
}
