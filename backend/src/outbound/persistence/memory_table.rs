//! Lock-guarded keyed table shared by the in-memory repositories.
//!
//! One `tokio::sync::RwLock` covers both the rows and the identifier counter,
//! so minting an identifier and inserting under it happen atomically. Reads
//! hand out clones; no guard leaves this module.

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;
use tokio::sync::RwLock;

/// Raised once every `i64` identifier has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("identifier space exhausted")]
pub(crate) struct IdentifierSpaceExhausted;

#[derive(Debug)]
struct TableState<K, V> {
    rows: HashMap<K, V>,
    /// `None` once `i64::MAX` has been assigned.
    next_id: Option<i64>,
}

#[derive(Debug)]
pub(crate) struct MemoryTable<K, V> {
    state: RwLock<TableState<K, V>>,
}

impl<K, V> Default for MemoryTable<K, V> {
    fn default() -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: HashMap::new(),
                next_id: Some(0),
            }),
        }
    }
}

impl<K, V> MemoryTable<K, V>
where
    K: Copy + Eq + Hash + From<i64>,
    V: Clone,
{
    /// Mint the next identifier and store the row built from it.
    pub(crate) async fn insert_with(
        &self,
        build: impl FnOnce(K) -> V,
    ) -> Result<K, IdentifierSpaceExhausted> {
        let mut state = self.state.write().await;
        let raw = state.next_id.ok_or(IdentifierSpaceExhausted)?;
        state.next_id = raw.checked_add(1);
        let id = K::from(raw);
        state.rows.insert(id, build(id));
        Ok(id)
    }

    pub(crate) async fn get(&self, id: K) -> Option<V> {
        self.state.read().await.rows.get(&id).cloned()
    }

    /// Overwrite an existing row; `false` when nothing is stored under `id`.
    pub(crate) async fn replace(&self, id: K, row: V) -> bool {
        let mut state = self.state.write().await;
        match state.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    pub(crate) async fn remove(&self, id: K) {
        self.state.write().await.rows.remove(&id);
    }

    pub(crate) async fn values(&self) -> Vec<V> {
        self.state.read().await.rows.values().cloned().collect()
    }

    pub(crate) async fn values_where(&self, keep: impl Fn(&V) -> bool) -> Vec<V> {
        self.state
            .read()
            .await
            .rows
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect()
    }

    #[cfg(test)]
    pub(crate) async fn starting_at(next_id: i64) -> Self {
        let table = Self::default();
        table.state.write().await.next_id = Some(next_id);
        table
    }
}
