use serde::{Deserialize, Serialize};

use crate::models::{Status, TransactionEntry, TransactionId, ABSENT_ID};

/// Inbound transaction body. Every field is optional; whatever is missing
/// defaults to the zero value so partial bodies are never rejected.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TransactionBody {
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub parent_id: Option<TransactionId>,
}

impl TransactionBody {
    pub fn into_entry(self, id: TransactionId) -> TransactionEntry {
        TransactionEntry {
            id,
            kind: self.kind,
            amount: self.amount,
            parent_id: self.parent_id.unwrap_or(ABSENT_ID),
        }
    }
}

/// Outbound transaction object. A missing entry renders as `{}`; a present
/// entry always carries `amount` and `type` (empty string when untyped) and
/// carries `parent_id` only for non-root entries.
#[derive(Debug, Serialize)]
pub struct TransactionWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TransactionId>,
}

impl TransactionWire {
    pub fn from_entry(entry: Option<&TransactionEntry>) -> Self {
        match entry {
            Some(entry) => Self {
                amount: Some(entry.amount),
                kind: Some(entry.kind.clone().unwrap_or_default()),
                parent_id: (entry.parent_id != ABSENT_ID).then_some(entry.parent_id),
            },
            None => Self {
                amount: None,
                kind: None,
                parent_id: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: Status,
}

impl StatusBody {
    pub fn ok() -> Self {
        Self { status: Status::Ok }
    }

    pub fn error() -> Self {
        Self { status: Status::Error }
    }
}

#[derive(Debug, Serialize)]
pub struct SumBody {
    pub sum: f64,
}
