//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity. All of them are built
//! from raw user input, which is trimmed before validation.

use std::fmt;

use super::error::ValueObjectError;

/// Chat message content value object.
///
/// Never empty; surrounding whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContent(String);

impl MessageContent {
    /// Create a new MessageContent from raw input.
    ///
    /// # Arguments
    ///
    /// * `raw` - The text as typed by the user
    ///
    /// # Returns
    ///
    /// A Result containing the trimmed MessageContent or an error if nothing
    /// but whitespace was given
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::MessageContentEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MessageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// MCP server name value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerName(String);

impl ServerName {
    /// Create a new ServerName from raw input.
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::ServerNameEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ServerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// MCP server URL value object.
///
/// Only checked for blankness; the backend validates the scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerUrl(String);

impl ServerUrl {
    /// Create a new ServerUrl from raw input.
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::ServerUrlEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_content_new_trims_input() {
        // テスト項目: 前後の空白を除いたメッセージ内容が作成される
        // given (前提条件):
        let raw = "  Hello, world!\n";

        // when (操作):
        let result = MessageContent::new(raw);

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "Hello, world!");
    }

    #[test]
    fn test_message_content_keeps_inner_whitespace() {
        // テスト項目: 内部の空白はそのまま保持される
        // when (操作):
        let content = MessageContent::new(" a  b\tc ").unwrap();

        // then (期待する結果):
        assert_eq!(content.into_string(), "a  b\tc");
    }

    #[test]
    fn test_message_content_blank_fails() {
        // テスト項目: 空白だけのメッセージ内容は作成できない
        for raw in ["", " ", "\t\n", "   \r\n  "] {
            // when (操作):
            let result = MessageContent::new(raw);

            // then (期待する結果):
            assert_eq!(result, Err(ValueObjectError::MessageContentEmpty));
        }
    }

    #[test]
    fn test_server_name_new_success() {
        // テスト項目: 有効なサーバー名を作成できる
        // when (操作):
        let result = ServerName::new(" default_mcp ");

        // then (期待する結果):
        assert_eq!(result.unwrap().as_str(), "default_mcp");
    }

    #[test]
    fn test_server_name_blank_fails() {
        // テスト項目: 空のサーバー名は作成できない
        // when (操作):
        let result = ServerName::new("   ");

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::ServerNameEmpty));
    }

    #[test]
    fn test_server_url_blank_fails() {
        // テスト項目: 空のサーバー URL は作成できない
        // when (操作):
        let result = ServerUrl::new("");

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::ServerUrlEmpty));
    }

    #[test]
    fn test_server_name_equality() {
        // テスト項目: 同じ値を持つ ServerName は等価
        // given (前提条件):
        let name1 = ServerName::new("alpha").unwrap();
        let name2 = ServerName::new(" alpha").unwrap();
        let name3 = ServerName::new("beta").unwrap();

        // then (期待する結果):
        assert_eq!(name1, name2);
        assert_ne!(name1, name3);
    }
}
