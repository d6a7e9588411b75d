use serde::Serialize;

pub type TransactionId = u64;

/// Sentinel meaning "no parent" / "not found". Never a valid stored id.
pub const ABSENT_ID: TransactionId = 0;

/// A single ledger record. `parent_id` may reference an id that is not (or
/// not yet) present in the store; traversal treats that as chain termination.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionEntry {
    pub id: TransactionId,
    pub kind: Option<String>,
    pub amount: f64,
    pub parent_id: TransactionId,
}

impl TransactionEntry {
    pub fn new(id: TransactionId, kind: Option<String>, amount: f64, parent_id: TransactionId) -> Self {
        Self { id, kind, amount, parent_id }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == ABSENT_ID
    }
}

/// Outcome reported to the transport layer for write calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}
