use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Select};
use shell_words::split;
use thiserror::Error;

use crate::cli::{dashboard, output, register_screen};
use crate::config::Config;
use crate::currency::LocaleConfig;
use crate::errors::{RegisterError, StoreError, SummaryError};
use crate::ledger::TransactionKind;
use crate::register::RegisterForm;
use crate::storage::{JsonFileStore, TransactionStore};

/// Environment variable switching the CLI into script mode, where commands
/// are read line by line from stdin instead of interactive prompts.
pub const SCRIPT_MODE_ENV: &str = "GOFINANCES_CLI_SCRIPT";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    Register(#[from] RegisterError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Interaction(#[from] dialoguer::Error),
    #[error("parse error: {0}")]
    Parse(#[from] shell_words::ParseError),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

enum LoopControl {
    Continue,
    Exit,
}

pub fn run_cli() -> Result<(), CliError> {
    let config = Config::resolve(None);
    let backend = JsonFileStore::new(config.data_dir.clone())?;
    let store = TransactionStore::new(backend);
    let locale = LocaleConfig::pt_br();

    if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        run_script(&store, &locale)
    } else {
        run_interactive(&store, &locale)
    }
}

fn run_interactive(
    store: &TransactionStore<JsonFileStore>,
    locale: &LocaleConfig,
) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();

    // The app lands on the dashboard, like the mobile original.
    dashboard::render(store, locale)?;
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Tela")
            .items(&["Dashboard", "Cadastro", "Sair"])
            .default(0)
            .interact()?;
        match choice {
            0 => dashboard::render(store, locale)?,
            1 => {
                // Successful registration navigates back to the dashboard.
                register_screen::run(store)?;
                dashboard::render(store, locale)?;
            }
            _ => break,
        }
    }
    Ok(())
}

fn run_script(
    store: &TransactionStore<JsonFileStore>,
    locale: &LocaleConfig,
) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match handle_line(store, locale, trimmed) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => output::error(&err),
        }
    }
    Ok(())
}

fn handle_line(
    store: &TransactionStore<JsonFileStore>,
    locale: &LocaleConfig,
    line: &str,
) -> Result<LoopControl, CliError> {
    let words = split(line)?;
    match words.first().map(String::as_str) {
        Some("dashboard") => {
            dashboard::render(store, locale)?;
            Ok(LoopControl::Continue)
        }
        Some("register") => {
            let [_, name, amount, kind, category] = words.as_slice() else {
                return Err(CliError::Usage(
                    "register <name> <amount> <positive|negative> <category>",
                ));
            };
            let mut form = RegisterForm::new();
            form.set_name(name);
            form.set_amount(amount);
            if let Some(kind) = TransactionKind::parse(kind) {
                form.select_kind(kind);
            }
            form.select_category(category);
            let record = form.submit(store)?;
            output::success(format!("Transação `{}` registrada.", record.name));
            Ok(LoopControl::Continue)
        }
        Some("exit") | Some("quit") => Ok(LoopControl::Exit),
        Some(other) => Err(CliError::UnknownCommand(other.to_string())),
        None => Ok(LoopControl::Continue),
    }
}
