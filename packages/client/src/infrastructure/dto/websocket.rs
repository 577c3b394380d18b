//! WebSocket frame DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message type enum for frames with a known `type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Message,
    Error,
    ToolResponse,
}

/// Chat message sent from the client to the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub r#type: MessageType,
    pub content: String,
}

impl OutgoingMessage {
    pub fn chat(content: impl Into<String>) -> Self {
        Self {
            r#type: MessageType::Message,
            content: content.into(),
        }
    }
}

/// Frame with a known tag and string content
#[derive(Debug, Clone, Deserialize)]
struct TaggedFrame {
    r#type: MessageType,
    content: String,
}

/// Frame pushed by the backend, classified by its `type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum IncomingFrame {
    Message(String),
    Error(String),
    ToolResponse(String),
    /// Anything valid JSON but not one of the tags above, kept whole
    Other(Value),
}

impl IncomingFrame {
    /// Parse a raw text frame.
    ///
    /// Only text that is not JSON at all is an error. A known tag without a
    /// string `content` is kept as [`IncomingFrame::Other`] so it still shows
    /// up in the log.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        let frame = match TaggedFrame::deserialize(&value) {
            Ok(TaggedFrame { r#type, content }) => match r#type {
                MessageType::Message => IncomingFrame::Message(content),
                MessageType::Error => IncomingFrame::Error(content),
                MessageType::ToolResponse => IncomingFrame::ToolResponse(content),
            },
            Err(_) => IncomingFrame::Other(value),
        };
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_message_shape() {
        // テスト項目: 送信メッセージが {"type":"message","content":...} になる
        // when (操作):
        let json = serde_json::to_value(OutgoingMessage::chat("hello")).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({ "type": "message", "content": "hello" })
        );
    }

    #[test]
    fn test_parse_known_tags() {
        // テスト項目: 既知の type タグが対応するバリアントに分類される
        assert_eq!(
            IncomingFrame::parse(r#"{"type":"message","content":"hi"}"#).unwrap(),
            IncomingFrame::Message("hi".to_string())
        );
        assert_eq!(
            IncomingFrame::parse(r#"{"type":"error","content":"boom"}"#).unwrap(),
            IncomingFrame::Error("boom".to_string())
        );
        assert_eq!(
            IncomingFrame::parse(r#"{"type":"tool_response","content":"42"}"#).unwrap(),
            IncomingFrame::ToolResponse("42".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_tag_keeps_whole_value() {
        // テスト項目: 未知のタグはフレーム全体を保持する
        // given (前提条件):
        let raw = r#"{"type":"status","state":"thinking"}"#;

        // when (操作):
        let frame = IncomingFrame::parse(raw).unwrap();

        // then (期待する結果):
        assert_eq!(
            frame,
            IncomingFrame::Other(serde_json::json!({ "type": "status", "state": "thinking" }))
        );
    }

    #[test]
    fn test_parse_known_tag_without_content_falls_back() {
        // テスト項目: content のない既知タグもフォールバックとして扱われる
        // when (操作):
        let frame = IncomingFrame::parse(r#"{"type":"message"}"#).unwrap();

        // then (期待する結果):
        assert_eq!(
            frame,
            IncomingFrame::Other(serde_json::json!({ "type": "message" }))
        );
    }

    #[test]
    fn test_parse_non_object_json() {
        // テスト項目: オブジェクト以外の JSON もフォールバックになる
        assert_eq!(
            IncomingFrame::parse("42").unwrap(),
            IncomingFrame::Other(serde_json::json!(42))
        );
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        // テスト項目: JSON でないテキストはエラーになる
        assert!(IncomingFrame::parse("not json").is_err());
        assert!(IncomingFrame::parse("").is_err());
    }
}
