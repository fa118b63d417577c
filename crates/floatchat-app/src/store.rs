//! Append-only chat transcript

use floatchat_core::{ChatMessage, MessageId, Role};

/// Ordered, append-only sequence of chat messages.
///
/// The store is the only place identifiers are assigned, so ids strictly
/// increase in append order. Entries are never reordered, edited or removed.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<ChatMessage>,
    last_id: MessageId,
}

impl MessageStore {
    /// Empty store; the first appended message gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the assistant greeting
    pub fn with_greeting(greeting: &str) -> Self {
        let mut store = Self::new();
        store.append(Role::Assistant, greeting);
        store
    }

    /// Append a message and return it
    pub fn append(&mut self, role: Role, text: impl Into<String>) -> &ChatMessage {
        let id = self.last_id.next();
        self.last_id = id;
        self.messages.push(ChatMessage::new(id, role, text));
        &self.messages[self.messages.len() - 1]
    }

    /// Current transcript, oldest first
    pub fn snapshot(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Messages appended after the first `count`
    pub fn since(&self, count: usize) -> &[ChatMessage] {
        self.messages.get(count..).unwrap_or(&[])
    }

    /// True while the transcript holds nothing but the opening assistant message
    pub fn only_greeting(&self) -> bool {
        matches!(self.messages.as_slice(), [first] if first.role == Role::Assistant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_id_is_one() {
        let mut store = MessageStore::new();
        assert_eq!(store.append(Role::User, "hi").id, MessageId(1));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut store = MessageStore::with_greeting("hello");
        for i in 0..10 {
            let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
            store.append(role, format!("message {i}"));
        }
        let ids: Vec<_> = store.snapshot().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(store.len(), 11);
    }

    #[test]
    fn test_snapshot_preserves_append_order() {
        let mut store = MessageStore::new();
        store.append(Role::User, "first");
        store.append(Role::Assistant, "second");
        let texts: Vec<_> = store.snapshot().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_only_greeting() {
        let mut store = MessageStore::with_greeting("hello");
        assert!(store.only_greeting());
        store.append(Role::User, "salinity?");
        assert!(!store.only_greeting());
        assert!(!MessageStore::new().only_greeting());
    }

    #[test]
    fn test_since_returns_new_tail() {
        let mut store = MessageStore::with_greeting("hello");
        let before = store.len();
        store.append(Role::User, "a");
        store.append(Role::Assistant, "b");
        assert_eq!(store.since(before).len(), 2);
        assert!(store.since(99).is_empty());
    }
}
