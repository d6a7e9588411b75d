use std::collections::HashSet;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use thiserror::Error;

use crate::models::{TransactionEntry, TransactionId, ABSENT_ID};

/// Depth at which a parent-chain walk is abandoned when no limit is
/// configured. Legitimate chains are expected to be far shorter; hitting the
/// limit almost certainly means a cycle in the parent graph.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 1000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("parent chain of transaction {id} exceeds {limit} links, cycle suspected")]
    ChainTooDeep { id: TransactionId, limit: usize },
}

/// Concurrent table of transaction entries keyed by id.
///
/// All primitive operations are atomic per key; scans (`ids_of_type`,
/// `sum_linked_to`) iterate a live table and may observe concurrent writes
/// mid-scan. The store never deletes entries and only hands out clones, so
/// no caller can alias a stored entry across a mutation.
pub struct TransactionStore {
    entries: DashMap<TransactionId, TransactionEntry>,
    max_chain_depth: usize,
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::with_max_chain_depth(DEFAULT_MAX_CHAIN_DEPTH)
    }

    pub fn with_max_chain_depth(max_chain_depth: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_chain_depth,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Atomically stores `entry` under `id` if no entry is present yet.
    /// Returns whether the insert happened. No-op for the absent id.
    pub fn put_if_absent(&self, id: TransactionId, entry: TransactionEntry) -> bool {
        if id == ABSENT_ID {
            return false;
        }
        match self.entries.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
        }
    }

    /// Atomically replaces the entry under `id` if one is present, returning
    /// the previous value. No-op for the absent id or an unknown id.
    pub fn replace(&self, id: TransactionId, entry: TransactionEntry) -> Option<TransactionEntry> {
        if id == ABSENT_ID {
            return None;
        }
        match self.entries.entry(id) {
            Entry::Occupied(mut slot) => Some(slot.insert(entry)),
            Entry::Vacant(_) => None,
        }
    }

    /// Insert-or-update: forces `entry.id` to `id`, then runs the
    /// insert-if-absent / replace pair. The pair is not atomic as a whole;
    /// concurrent upserts of the same id interleave with last-replace-wins.
    /// No-op for the absent id.
    pub fn upsert(&self, id: TransactionId, mut entry: TransactionEntry) {
        if id == ABSENT_ID {
            tracing::debug!("upsert with absent id ignored");
            return;
        }
        entry.id = id;
        let inserted = self.put_if_absent(id, entry.clone());
        self.replace(id, entry);
        tracing::debug!(id, inserted, "transaction upserted");
    }

    /// Atomic point lookup. Absent sentinel and unknown ids map to `None`.
    pub fn get(&self, id: TransactionId) -> Option<TransactionEntry> {
        if id == ABSENT_ID {
            return None;
        }
        self.entries.get(&id).map(|e| e.value().clone())
    }

    /// Ids of all entries whose type tag is set and equals `kind`. Computed
    /// by a full scan; untyped entries never match.
    pub fn ids_of_type(&self, kind: &str) -> HashSet<TransactionId> {
        self.entries
            .iter()
            .filter(|e| e.value().kind.as_deref() == Some(kind))
            .map(|e| e.value().id)
            .collect()
    }

    /// Whether `candidate_id` occurs on `entry`'s parent chain, excluding
    /// `entry` itself. The chain is followed link by link: a match on any
    /// `parent_id` counts even when that parent entry is itself missing from
    /// the store, and a missing parent otherwise terminates the chain.
    /// Aborts with `ChainTooDeep` once the walk exceeds the configured
    /// depth limit.
    pub fn is_ancestor(
        &self,
        candidate_id: TransactionId,
        entry: &TransactionEntry,
    ) -> Result<bool, StoreError> {
        if candidate_id == ABSENT_ID {
            return Ok(false);
        }

        let mut parent_id = entry.parent_id;
        let mut depth = 0usize;
        while parent_id != ABSENT_ID {
            if parent_id == candidate_id {
                return Ok(true);
            }
            depth += 1;
            if depth >= self.max_chain_depth {
                tracing::warn!(
                    id = entry.id,
                    limit = self.max_chain_depth,
                    "parent chain walk aborted"
                );
                return Err(StoreError::ChainTooDeep {
                    id: entry.id,
                    limit: self.max_chain_depth,
                });
            }
            parent_id = match self.entries.get(&parent_id) {
                Some(parent) => parent.value().parent_id,
                None => ABSENT_ID,
            };
        }

        Ok(false)
    }

    /// Sum of `amount` over every entry whose parent chain reaches `id`.
    /// Full scan, one independent chain walk per entry; fine at the scale
    /// this store targets.
    pub fn sum_linked_to(&self, id: TransactionId) -> Result<f64, StoreError> {
        // Clone the scan set up front: walking chains while holding shard
        // guards from the iterator could deadlock against a queued writer.
        let scanned: Vec<TransactionEntry> =
            self.entries.iter().map(|e| e.value().clone()).collect();

        let mut sum = 0.0;
        for entry in &scanned {
            if self.is_ancestor(id, entry)? {
                sum += entry.amount;
            }
        }
        Ok(sum)
    }
}
