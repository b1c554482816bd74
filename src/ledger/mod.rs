pub mod category;
pub mod transaction;

pub use category::{category_by_key, Category, CATEGORIES, DEFAULT_CATEGORY_KEY};
pub use transaction::{Transaction, TransactionKind};
