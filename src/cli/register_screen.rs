//! Register screen: a prompt-driven form that keeps its values across
//! failed submissions so the user can correct and resend.

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::output;
use crate::cli::CliError;
use crate::ledger::{TransactionKind, CATEGORIES};
use crate::register::RegisterForm;
use crate::storage::{KeyValueStore, TransactionStore};

/// Runs the register form until a record is persisted. Returns the name of
/// the registered transaction; cancelling the prompts propagates as an
/// interaction error.
pub fn run<S: KeyValueStore>(store: &TransactionStore<S>) -> Result<String, CliError> {
    let theme = ColorfulTheme::default();
    let mut form = RegisterForm::new();

    output::section("Cadastro");
    loop {
        let name: String = Input::with_theme(&theme)
            .with_prompt("Nome")
            .with_initial_text(form.name())
            .allow_empty(true)
            .interact_text()?;
        form.set_name(name);

        let amount: String = Input::with_theme(&theme)
            .with_prompt("Preço")
            .with_initial_text(form.amount())
            .allow_empty(true)
            .interact_text()?;
        form.set_amount(amount);

        let kind_default = match form.kind() {
            Some(TransactionKind::Negative) => 1,
            _ => 0,
        };
        let kind_index = Select::with_theme(&theme)
            .with_prompt("Tipo")
            .items(&["Income", "Outcome"])
            .default(kind_default)
            .interact()?;
        form.select_kind(if kind_index == 0 {
            TransactionKind::Positive
        } else {
            TransactionKind::Negative
        });

        let labels: Vec<&str> = CATEGORIES.iter().map(|category| category.name).collect();
        let category_index = Select::with_theme(&theme)
            .with_prompt("Categoria")
            .items(&labels)
            .default(0)
            .interact()?;
        form.select_category(CATEGORIES[category_index].key);

        match form.submit(store) {
            Ok(record) => {
                output::success(format!("Transação `{}` registrada.", record.name));
                return Ok(record.name);
            }
            Err(err) => output::error(&err),
        }
    }
}
