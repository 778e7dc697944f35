//! Durable persistence of pool state.
//!
//! The registry calls [`PoolStore::store`] after every committed mutation
//! and before the new state becomes visible to other callers. A store that
//! fails causes the mutation to be rolled back, so the in-memory state
//! never runs ahead of what was persisted.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::PoolId;
use crate::error::Result;
use crate::pool::PoolState;

/// Storage backend for [`PoolState`] snapshots.
pub trait PoolStore: Send + Sync {
    /// Persists `state`, replacing any previous snapshot for its id.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures, typically as
    /// [`SwapError::Configuration`](crate::error::SwapError::Configuration).
    fn store(&self, state: &PoolState) -> Result<()>;

    /// Loads the last snapshot stored for `id`.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures.
    fn load(&self, id: &PoolId) -> Result<Option<PoolState>>;

    /// Ids of every stored pool.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures.
    fn ids(&self) -> Result<Vec<PoolId>>;
}

/// Keeps snapshots in a process-local map.
#[derive(Debug, Default)]
pub struct InMemoryPoolStore {
    pools: RwLock<HashMap<PoolId, PoolState>>,
}

impl InMemoryPoolStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.read().len()
    }

    /// Whether nothing has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.read().is_empty()
    }
}

impl PoolStore for InMemoryPoolStore {
    fn store(&self, state: &PoolState) -> Result<()> {
        self.pools.write().insert(state.id(), state.clone());
        Ok(())
    }

    fn load(&self, id: &PoolId) -> Result<Option<PoolState>> {
        Ok(self.pools.read().get(id).cloned())
    }

    fn ids(&self) -> Result<Vec<PoolId>> {
        Ok(self.pools.read().keys().copied().collect())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::domain::Identity;
    use crate::traits::FromConfig;

    fn pool(fee_bps: u16) -> PoolState {
        let id = |b: u8| Identity::from_bytes([b; 32]);
        let cfg = PoolConfig::new(id(1), id(2), fee_bps, id(9), id(9), 1_000, 1_000);
        let Ok(pool) = PoolState::from_config(&cfg, 0) else {
            panic!("expected valid pool");
        };
        pool
    }

    #[test]
    fn store_replaces_by_id() {
        let store = InMemoryPoolStore::new();
        assert!(store.is_empty());

        let first = pool(30);
        let Ok(()) = store.store(&first) else {
            panic!("store failed");
        };
        let Ok(()) = store.store(&first) else {
            panic!("store failed");
        };
        let Ok(()) = store.store(&pool(100)) else {
            panic!("store failed");
        };
        assert_eq!(store.len(), 2);

        let Ok(Some(loaded)) = store.load(&first.id()) else {
            panic!("expected stored pool");
        };
        assert_eq!(loaded, first);

        let Ok(mut ids) = store.ids() else {
            panic!("expected ids");
        };
        ids.sort_by_key(|id| id.fee());
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], first.id());
    }

    #[test]
    fn load_missing_is_none() {
        let store = InMemoryPoolStore::new();
        assert!(matches!(store.load(&pool(30).id()), Ok(None)));
    }
}
