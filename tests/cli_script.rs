use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn cli(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("gofinances_cli").unwrap();
    cmd.env("GOFINANCES_CLI_SCRIPT", "1")
        .env("GOFINANCES_DATA_DIR", data_dir);
    cmd
}

#[test]
fn script_mode_registers_and_renders_the_dashboard() {
    let dir = tempdir().unwrap();
    let input = "register Salário 1200.50 positive salary\n\
                 register Mercado 89.90 negative food\n\
                 dashboard\n\
                 exit\n";

    cli(dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Transação `Salário` registrada."))
        .stdout(contains("R$ 1.200,50"))
        .stdout(contains("R$ 89,90"))
        .stdout(contains("R$ 1.110,60"))
        .stdout(contains("Listagem"));

    let json =
        std::fs::read_to_string(dir.path().join("gofinances_transactions.json")).unwrap();
    assert!(json.contains("\"Salário\""));
    assert!(json.contains("\"positive\""));
}

#[test]
fn rejected_registration_leaves_the_store_empty() {
    let dir = tempdir().unwrap();
    let input = "register Conta -5 negative food\n\
                 dashboard\n\
                 exit\n";

    cli(dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Não há transações"))
        .stderr(contains("O valor deve ser um número positivo"));

    assert!(!dir.path().join("gofinances_transactions.json").exists());
}

#[test]
fn empty_dashboard_shows_zeroed_cards() {
    let dir = tempdir().unwrap();

    cli(dir.path())
        .write_stdin("dashboard\nexit\n")
        .assert()
        .success()
        .stdout(contains("Entradas"))
        .stdout(contains("R$ 0,00"))
        .stdout(contains("Não há transações"));
}

#[test]
fn unknown_commands_are_reported_but_do_not_abort() {
    let dir = tempdir().unwrap();

    cli(dir.path())
        .write_stdin("frobnicate\ndashboard\nexit\n")
        .assert()
        .success()
        .stdout(contains("Dashboard"))
        .stderr(contains("unknown command: frobnicate"));
}
