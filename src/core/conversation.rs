use crate::domain::model::{Message, Role};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const CONVERSATION_KEY: &str = "loreal-conversation-history";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<S: Storage>(storage: &S) -> Self {
        match storage.get_item(CONVERSATION_KEY).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(messages) => Self { messages },
                Err(e) => {
                    tracing::error!("Error loading conversation history: {}", e);
                    Self::new()
                }
            },
            Ok(None) => Self::new(),
            Err(e) => {
                tracing::error!("Error loading conversation history: {}", e);
                Self::new()
            }
        }
    }

    pub async fn save<S: Storage>(&self, storage: &S) -> Result<()> {
        if self.messages.is_empty() {
            return storage.remove_item(CONVERSATION_KEY).await;
        }
        let json = serde_json::to_string(&self.messages)?;
        storage.set_item(CONVERSATION_KEY, &json).await
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `User: ...` / `Assistant: ...` lines separated by a blank line.
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.role.label(), m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_labels_roles() {
        let mut conversation = Conversation::new();
        conversation.push(Role::User, "Is this okay for oily skin?");
        conversation.push(Role::Assistant, "Yes, it is oil-free.");

        assert_eq!(
            conversation.transcript(),
            "User: Is this okay for oily skin?\n\nAssistant: Yes, it is oil-free."
        );
    }

    #[test]
    fn test_empty_transcript() {
        assert_eq!(Conversation::new().transcript(), "");
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let mut conversation = Conversation::new();
        conversation.push(Role::Assistant, "hi");
        let json = serde_json::to_string(conversation.messages()).unwrap();
        assert_eq!(json, r#"[{"role":"assistant","content":"hi"}]"#);
    }
}
