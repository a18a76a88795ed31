//! Connection registry: the source of truth for presence.

use super::{ConnectionId, Identity, Username};

/// Maps each live connection to the identity it joined with.
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    identities: Vec<Identity>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `username` for `connection_id` and return the new identity.
    ///
    /// Usernames are not required to be unique. `connection_id` must not be
    /// registered yet: the router drops a repeat join before it gets here.
    pub fn join(&mut self, connection_id: ConnectionId, username: Username) -> Identity {
        let identity = Identity::new(connection_id, username);
        self.identities.push(identity.clone());
        identity
    }

    /// Remove the identity for `connection_id`, returning it if it was registered.
    pub fn leave(&mut self, connection_id: &ConnectionId) -> Option<Identity> {
        let index = self.identities.iter().position(|i| &i.id == connection_id)?;
        Some(self.identities.remove(index))
    }

    pub fn get(&self, connection_id: &ConnectionId) -> Option<&Identity> {
        self.identities.iter().find(|i| &i.id == connection_id)
    }

    pub fn contains(&self, connection_id: &ConnectionId) -> bool {
        self.get(connection_id).is_some()
    }

    /// Snapshot of the current roster. Callers must not rely on its order.
    pub fn list(&self) -> Vec<Identity> {
        self.identities.clone()
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    fn name(name: &str) -> Username {
        Username::new(name.to_string())
    }

    #[test]
    fn test_join_registers_identity() {
        // テスト項目: join すると roster に identity が追加される
        // given (前提条件):
        let mut registry = ConnectionRegistry::new();

        // when (操作):
        let identity = registry.join(conn("c1"), name("alice"));

        // then (期待する結果):
        assert_eq!(identity.id, conn("c1"));
        assert_eq!(identity.username.as_str(), "alice");
        assert_eq!(registry.list(), vec![identity]);
    }

    #[test]
    fn test_join_allows_duplicate_usernames() {
        // テスト項目: 同じ username でも別の接続であれば両方登録される
        // given (前提条件):
        let mut registry = ConnectionRegistry::new();

        // when (操作):
        registry.join(conn("c1"), name("alice"));
        registry.join(conn("c2"), name("alice"));

        // then (期待する結果):
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_leave_returns_removed_identity() {
        // テスト項目: leave は削除した identity を返す
        // given (前提条件):
        let mut registry = ConnectionRegistry::new();
        registry.join(conn("c1"), name("alice"));

        // when (操作):
        let removed = registry.leave(&conn("c1"));

        // then (期待する結果):
        assert_eq!(removed.map(|i| i.username), Some(name("alice")));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_leave_unknown_connection_is_noop() {
        // テスト項目: 未登録の接続の leave は何もしない
        // given (前提条件):
        let mut registry = ConnectionRegistry::new();
        registry.join(conn("c1"), name("alice"));

        // when (操作):
        let removed = registry.leave(&conn("ghost"));

        // then (期待する結果):
        assert!(removed.is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_roster_mirrors_joined_minus_left() {
        // テスト項目: join / leave の任意の列の後、roster は「join して leave していない接続」と一致する
        // given (前提条件):
        let mut registry = ConnectionRegistry::new();

        // when (操作):
        registry.join(conn("a"), name("alice"));
        registry.join(conn("b"), name("bob"));
        registry.join(conn("c"), name("carol"));
        registry.leave(&conn("b"));
        registry.leave(&conn("b"));
        registry.join(conn("d"), name("dave"));
        registry.leave(&conn("a"));

        // then (期待する結果):
        let mut ids: Vec<String> = registry
            .list()
            .into_iter()
            .map(|i| i.id.into_string())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["c".to_string(), "d".to_string()]);
    }
}
