//! Aggregation and formatting engine feeding the dashboard. Derived state
//! only: recomputed on every load, never persisted.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::currency::{self, LocaleConfig};
use crate::errors::SummaryError;
use crate::ledger::{Transaction, TransactionKind};

/// Sentinel shown when a kind has no transactions yet, instead of formatting
/// the maximum of an empty set.
pub const NO_TRANSACTIONS: &str = "Não há transações";

/// A derived summary card: formatted total plus a reference date line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub amount: String,
    pub last_transaction: String,
}

/// A transaction transformed for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub id: Uuid,
    pub name: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub category: String,
    pub date: String,
}

/// Render-ready dashboard state.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub entries: Bucket,
    pub expensives: Bucket,
    pub total: Bucket,
    pub list: Vec<DisplayRecord>,
}

/// Stateless aggregation over the raw transaction list.
pub struct SummaryService;

impl SummaryService {
    /// Builds the highlight buckets and the formatted transaction list in a
    /// single pass. The input sequence is not mutated.
    pub fn build(
        transactions: &[Transaction],
        locale: &LocaleConfig,
    ) -> Result<DashboardSummary, SummaryError> {
        let mut entries_total = 0.0;
        let mut expensives_total = 0.0;
        let mut list = Vec::with_capacity(transactions.len());

        for txn in transactions {
            let value = txn
                .value()
                .ok_or_else(|| SummaryError::BadAmount(txn.amount.clone()))?;
            match txn.kind {
                TransactionKind::Positive => entries_total += value,
                TransactionKind::Negative => expensives_total += value,
            }
            list.push(DisplayRecord {
                id: txn.id,
                name: txn.name.clone(),
                amount: currency::format_currency(locale, value),
                kind: txn.kind,
                category: txn.category.clone(),
                date: currency::format_short_date(txn.date),
            });
        }

        let last_entry = last_transaction_date(transactions, TransactionKind::Positive);
        let last_expense = last_transaction_date(transactions, TransactionKind::Negative);

        let entries = Bucket {
            amount: currency::format_currency(locale, entries_total),
            last_transaction: match last_entry {
                Some(date) => format!("Última entrada dia {}", currency::format_day_month(date)),
                None => NO_TRANSACTIONS.into(),
            },
        };
        let expensives = Bucket {
            amount: currency::format_currency(locale, expensives_total),
            last_transaction: match last_expense {
                Some(date) => format!("Última saída dia {}", currency::format_day_month(date)),
                None => NO_TRANSACTIONS.into(),
            },
        };
        // The interval end tracks only the latest expense date, matching the
        // shipped dashboard behavior.
        let total = Bucket {
            amount: currency::format_currency(locale, entries_total - expensives_total),
            last_transaction: match last_expense {
                Some(date) => format!("01 à {}", currency::format_day_month(date)),
                None => NO_TRANSACTIONS.into(),
            },
        };

        Ok(DashboardSummary {
            entries,
            expensives,
            total,
            list,
        })
    }
}

/// Latest creation timestamp among records of `kind`, compared by epoch
/// milliseconds. `None` when no such record exists.
pub fn last_transaction_date(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Option<DateTime<Utc>> {
    transactions
        .iter()
        .filter(|txn| txn.kind == kind)
        .max_by_key(|txn| txn.epoch_millis())
        .map(|txn| txn.date)
}
