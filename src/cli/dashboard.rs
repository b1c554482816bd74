//! Dashboard screen: the three highlight cards plus the transaction list.
//! Reloads storage on every visit, mirroring the screen's focus semantics.

use crate::cli::output;
use crate::cli::CliError;
use crate::currency::LocaleConfig;
use crate::ledger::{category_by_key, TransactionKind};
use crate::storage::{KeyValueStore, TransactionStore};
use crate::summary::{Bucket, SummaryService, NO_TRANSACTIONS};

pub fn render<S: KeyValueStore>(
    store: &TransactionStore<S>,
    locale: &LocaleConfig,
) -> Result<(), CliError> {
    let transactions = store.load_all()?;
    let summary = SummaryService::build(&transactions, locale)?;

    output::section("Dashboard");
    render_card("Entradas", &summary.entries);
    render_card("Saídas", &summary.expensives);
    render_card("Total", &summary.total);

    output::section("Listagem");
    if summary.list.is_empty() {
        output::info(NO_TRANSACTIONS);
        return Ok(());
    }
    for item in &summary.list {
        let category = category_by_key(&item.category)
            .map(|category| category.name)
            .unwrap_or(item.category.as_str());
        let amount = match item.kind {
            TransactionKind::Positive => item.amount.clone(),
            TransactionKind::Negative => format!("- {}", item.amount),
        };
        output::info(format!(
            "{}  {:<24} {:>16}  {}",
            item.date, item.name, amount, category
        ));
    }
    Ok(())
}

fn render_card(title: &str, bucket: &Bucket) {
    output::info(format!(
        "{:<10} {:>16}  {}",
        title, bucket.amount, bucket.last_transaction
    ));
}
