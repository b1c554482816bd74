use gofinances_core::cli::{output, run_cli};

fn main() {
    gofinances_core::init();
    if let Err(err) = run_cli() {
        output::error(&err);
        std::process::exit(1);
    }
}
