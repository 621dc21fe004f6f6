use serde::{Deserialize, Serialize};
use std::fmt;

/// Block ID format: `block-<n>`
pub type BlockId = String;

/// Prefix for block IDs; the suffix is the 0-based output position.
pub const BLOCK_ID_PREFIX: &str = "block-";

/// Which side of the dialogue a message came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single speaker turn recovered from a transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A maximal run of consecutive same-category exchanges.
///
/// `emoji`, `color` and `keywords` are copied from the winning rule so a
/// persisted block can be rendered without the rule table that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SemanticBlock {
    pub id: BlockId,
    pub category: String,
    pub emoji: String,
    pub color: String,
    pub messages: Vec<Message>,
    pub keywords: Vec<String>,
}

/// Build the ID for the block at `position` in a pipeline's output.
pub fn block_id(position: usize) -> BlockId {
    format!("{BLOCK_ID_PREFIX}{position}")
}
