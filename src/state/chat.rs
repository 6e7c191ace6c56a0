//! Room chat history.

use serde::Serialize;

/// Who wrote a chat line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum Author {
    /// The reserved system identity used for announcements.
    System,
    User(String),
}

impl Author {
    pub fn user(name: impl Into<String>) -> Self {
        Self::User(name.into())
    }

    pub fn is_system(&self) -> bool {
        matches!(self, Self::System)
    }
}

/// One line of chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub author: Author,
    pub body: String,
    /// Display time, `HH:MM`.
    pub timestamp: String,
}

impl ChatMessage {
    /// Name to show for the author, resolving the system identity.
    pub fn display_author<'a>(&'a self, system_name: &'a str) -> &'a str {
        match &self.author {
            Author::System => system_name,
            Author::User(name) => name,
        }
    }
}

/// Append-only message list. Order is strictly insertion order.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a message stamped with `timestamp`.
    pub fn post(&mut self, author: Author, body: impl Into<String>, timestamp: impl Into<String>) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            author,
            body: body.into(),
            timestamp: timestamp.into(),
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Drop all history. Only used when seeding the greeting set on login.
    pub(crate) fn replace_with<I>(&mut self, seed: I)
    where
        I: IntoIterator<Item = (Author, String, String)>,
    {
        self.messages.clear();
        self.next_id = 1;
        for (author, body, timestamp) in seed {
            self.post(author, body, timestamp);
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}
