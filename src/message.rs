use agent_api::{Role, ToolCall};
use time::OffsetDateTime;
use uuid::Uuid;

/// One renderable segment of a message body, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Text(String),
    Code { language: String, code: String },
    Tool(ToolCall),
}

/// One settled conversation turn. Immutable once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub blocks: Vec<ContentBlock>,
    pub timestamp: OffsetDateTime,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self::with_blocks(role, content, Vec::new())
    }

    pub fn with_blocks(
        role: Role,
        content: impl Into<String>,
        blocks: Vec<ContentBlock>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            blocks,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
