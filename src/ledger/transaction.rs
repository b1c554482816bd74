use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Income versus expense, using the persisted wire names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Positive,
    Negative,
}

impl TransactionKind {
    /// Accepts both the wire names and the register-screen button names.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "positive" | "up" => Some(Self::Positive),
            "negative" | "down" => Some(Self::Negative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

/// A single registered income or expense record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub name: String,
    /// Kept as a string for wire fidelity; must parse to a number > 0.
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount: amount.into(),
            kind,
            category: category.into(),
            date: Utc::now(),
        }
    }

    /// Parses the stored amount, returning `None` when it is not a finite
    /// number greater than zero.
    pub fn value(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
    }

    /// Creation timestamp as epoch milliseconds, the ordering used by the
    /// last-transaction lookups.
    pub fn epoch_millis(&self) -> i64 {
        self.date.timestamp_millis()
    }
}
