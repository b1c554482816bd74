#![doc(test(attr(deny(warnings))))]

//! GoFinances Core implements the transaction store, aggregation, and
//! registration flows behind a small personal-finance tracker, plus the CLI
//! screens that front them.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod register;
pub mod storage;
pub mod summary;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("GoFinances tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("gofinances_core=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}
