//! Registration flow: explicit form state, field validation, and submission
//! through the transaction store.

use tracing::info;

use crate::errors::{RegisterError, ValidationError};
use crate::ledger::{Transaction, TransactionKind, DEFAULT_CATEGORY_KEY};
use crate::storage::{KeyValueStore, TransactionStore};

/// Register-screen state. Held locally and mutated through setters only; no
/// ambient globals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    name: String,
    amount: String,
    kind: Option<TransactionKind>,
    category_key: Option<String>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn select_kind(&mut self, kind: TransactionKind) {
        self.kind = Some(kind);
    }

    pub fn select_category(&mut self, key: impl Into<String>) {
        self.category_key = Some(key.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn kind(&self) -> Option<TransactionKind> {
        self.kind
    }

    pub fn category_key(&self) -> Option<&str> {
        self.category_key.as_deref()
    }

    /// Field-level checks applied before any record is constructed. The
    /// first failing field blocks submission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.amount.trim().is_empty() {
            return Err(ValidationError::AmountRequired);
        }
        let parsed: f64 = self
            .amount
            .trim()
            .parse()
            .map_err(|_| ValidationError::AmountNotPositive)?;
        if !parsed.is_finite() || parsed <= 0.0 {
            return Err(ValidationError::AmountNotPositive);
        }
        if self.kind.is_none() {
            return Err(ValidationError::KindRequired);
        }
        match self.category_key.as_deref() {
            None | Some(DEFAULT_CATEGORY_KEY) => Err(ValidationError::CategoryRequired),
            Some(_) => Ok(()),
        }
    }

    /// Validates, persists a new record, and clears the form. On failure the
    /// form keeps its values so the user can correct and resubmit.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &TransactionStore<S>,
    ) -> Result<Transaction, RegisterError> {
        self.validate()?;
        let kind = self.kind.ok_or(ValidationError::KindRequired)?;
        let category = self
            .category_key
            .clone()
            .ok_or(ValidationError::CategoryRequired)?;

        let record = Transaction::new(self.name.trim(), self.amount.trim(), kind, category);
        store.append_one(record.clone())?;
        info!(id = %record.id, kind = kind.as_str(), "transaction registered");

        self.reset();
        Ok(record)
    }

    /// Clears every field back to the initial screen state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
