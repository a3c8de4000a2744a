//! Session-keyed conversation history
//!
//! The one piece of mutable shared state in the system. Appends are
//! serialized per store through the `RwLock`; the core pipeline itself never
//! touches this.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "Utilisateur"),
            Role::Assistant => write!(f, "Assistant"),
        }
    }
}

/// One message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

/// In-memory conversation history, keyed by session identifier.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Vec<ChatTurn>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&self, session_id: &str, role: Role, content: impl Into<String>) {
        let turn = ChatTurn {
            role,
            content: content.into(),
            at: Utc::now(),
        };
        let mut sessions = self.sessions.write();
        sessions.entry(session_id.to_string()).or_default().push(turn);
    }

    /// Snapshot of a session's turns; empty for unknown sessions.
    pub fn history(&self, session_id: &str) -> Vec<ChatTurn> {
        let sessions = self.sessions.read();
        sessions.get(session_id).cloned().unwrap_or_default()
    }

    /// Full history formatted as alternating `Utilisateur:`/`Assistant:`
    /// lines, ready to embed in an assist prompt.
    pub fn transcript(&self, session_id: &str) -> String {
        let sessions = self.sessions.read();
        let Some(turns) = sessions.get(session_id) else {
            return String::new();
        };
        let mut text = String::new();
        for turn in turns {
            text.push_str(&format!("{}: {}\n", turn.role, turn.content));
        }
        text.trim_end().to_string()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }
}
