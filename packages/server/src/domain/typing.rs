//! Typing tracker: who is composing a message right now.

use super::{ConnectionId, Identity, Username};

/// Transient map of connection to username for every identity currently typing.
///
/// Entries are never expired by time; they are removed by an explicit stop
/// event or by [`TypingTracker::clear`] when the connection goes away.
#[derive(Debug, Clone, Default)]
pub struct TypingTracker {
    typists: Vec<(ConnectionId, Username)>,
}

impl TypingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert or remove the typing entry for a registered identity.
    pub fn set_typing(&mut self, identity: &Identity, is_typing: bool) {
        if is_typing {
            match self.typists.iter_mut().find(|(id, _)| id == &identity.id) {
                Some(entry) => entry.1 = identity.username.clone(),
                None => self
                    .typists
                    .push((identity.id.clone(), identity.username.clone())),
            }
        } else {
            self.clear(&identity.id);
        }
    }

    /// Drop the entry for `connection_id`. Returns whether one existed.
    pub fn clear(&mut self, connection_id: &ConnectionId) -> bool {
        let before = self.typists.len();
        self.typists.retain(|(id, _)| id != connection_id);
        self.typists.len() != before
    }

    /// Names of everyone currently typing.
    pub fn list(&self) -> Vec<Username> {
        self.typists.iter().map(|(_, name)| name.clone()).collect()
    }

    pub fn is_typing(&self, connection_id: &ConnectionId) -> bool {
        self.typists.iter().any(|(id, _)| id == connection_id)
    }
}
