use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::MessageRole;

/// One entry in the conversation log.
///
/// Messages are append-only: created once with a fresh id and timestamp,
/// never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

impl Message {
    /// A message typed by the user (the emergency description).
    pub fn user(content: impl Into<String>) -> Self {
        Self::create(MessageRole::User, content)
    }

    /// A reply produced from a service response.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::create(MessageRole::Assistant, content)
    }

    fn create(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: chrono::Local::now().naive_local(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_and_assistant_constructors_set_role() {
        assert_eq!(Message::user("가슴이 아파요").role, MessageRole::User);
        assert_eq!(Message::assistant("안내드립니다").role, MessageRole::Assistant);
    }

    #[test]
    fn each_message_gets_a_unique_id() {
        let a = Message::user("a");
        let b = Message::user("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn message_serializes_role_as_string() {
        let json = serde_json::to_value(Message::user("도와주세요")).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "도와주세요");
    }
}
