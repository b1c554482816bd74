use thiserror::Error;

/// Failures raised at the transaction store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid stored record: {0}")]
    InvalidRecord(String),
    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),
}

/// Field-level validation failures raised before a record is persisted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Nome é obrigatório")]
    NameRequired,
    #[error("Informe um valor")]
    AmountRequired,
    #[error("O valor deve ser um número positivo")]
    AmountNotPositive,
    #[error("Selecione o tipo da transação")]
    KindRequired,
    #[error("Selecione a categoria")]
    CategoryRequired,
}

/// Errors surfaced by the registration flow.
#[derive(Debug, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Raised when a malformed amount reaches the aggregation stage. The store
/// boundary rejects such records, so this indicates a caller bypassed it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("amount `{0}` is not a positive number")]
    BadAmount(String),
}
