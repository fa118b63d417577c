//! Reply tickets for deferred assistant responses.
//!
//! Every submitted prompt is issued a ticket. The deferred task hands the
//! ticket back with its answer, and the reducer only appends the answer if
//! the ticket is still live. Revoking tickets is how an in-flight reply is
//! cancelled without touching the task itself.

use std::collections::BTreeSet;

/// Token identifying one deferred reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReplyTicket(pub u64);

impl std::fmt::Display for ReplyTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tickets issued but not yet completed or revoked
#[derive(Debug, Clone, Default)]
pub struct PendingReplies {
    next: u64,
    live: BTreeSet<ReplyTicket>,
}

impl PendingReplies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh ticket and mark it live
    pub fn issue(&mut self) -> ReplyTicket {
        self.next += 1;
        let ticket = ReplyTicket(self.next);
        self.live.insert(ticket);
        ticket
    }

    /// Retire a ticket. Returns false if it was revoked (or never issued),
    /// in which case the reply must be discarded.
    pub fn complete(&mut self, ticket: ReplyTicket) -> bool {
        self.live.remove(&ticket)
    }

    /// Revoke every live ticket, returning how many were revoked
    pub fn revoke_all(&mut self) -> usize {
        let count = self.live.len();
        self.live.clear();
        count
    }

    pub fn is_live(&self, ticket: ReplyTicket) -> bool {
        self.live.contains(&ticket)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_unique() {
        let mut pending = PendingReplies::new();
        let a = pending.issue();
        let b = pending.issue();
        assert_ne!(a, b);
        assert!(a < b);
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_complete_live_ticket() {
        let mut pending = PendingReplies::new();
        let ticket = pending.issue();
        assert!(pending.complete(ticket));
        assert!(pending.is_empty());
        // Second completion is a no-op
        assert!(!pending.complete(ticket));
    }

    #[test]
    fn test_revoked_ticket_cannot_complete() {
        let mut pending = PendingReplies::new();
        let ticket = pending.issue();
        assert_eq!(pending.revoke_all(), 1);
        assert!(!pending.is_live(ticket));
        assert!(!pending.complete(ticket));
    }

    #[test]
    fn test_tickets_after_revoke_keep_counting() {
        let mut pending = PendingReplies::new();
        let old = pending.issue();
        pending.revoke_all();
        let new = pending.issue();
        assert!(new > old);
        assert!(pending.is_live(new));
    }
}
