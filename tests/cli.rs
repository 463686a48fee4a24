//! End-to-end tests for the `gastos` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const LEDGER: &str = "\
data,descricao,valor,categoria
05/01/2025,Mercado,100.00,Food
10/02/2025,Aluguel,400.00,Rent
01/03/2025,\"Padaria, centro\",50.00,Food
";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("gastos.csv"), LEDGER).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gastos").unwrap();
        cmd.current_dir(self.dir.path())
            .env("GASTOS_DATA_DIR", self.dir.path().join("config"))
            .env_remove("GASTOS_FILE")
            .env_remove("RUST_LOG");
        cmd
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn show_prints_dashboard_with_warning() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["show", "--name", "Ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rastreador de Gastos (Jan-Abr 2025)"))
        .stdout(predicate::str::contains("Padaria, centro"))
        .stdout(predicate::str::contains("Gasto Total: R$ 550.00"))
        .stdout(predicate::str::contains("Olá, Ana!"))
        .stdout(predicate::str::contains(
            "Seu gasto total ultrapassou o limite de R$500!",
        ));
}

#[test]
fn show_food_only_stays_under_limit() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["show", "-c", "Food", "--from", "Jan", "--to", "Mar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gasto Total: R$ 150.00"))
        .stdout(predicate::str::contains("Gasto Médio: R$ 75.00"))
        .stdout(predicate::str::contains("ultrapassou").not());
}

#[test]
fn show_with_lower_limit_warns() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["show", "-c", "Rent", "--limit", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Seu gasto total ultrapassou o limite de R$300!",
        ));
}

#[test]
fn empty_category_selection_is_not_an_error() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["show", "--no-categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhum gasto encontrado"))
        .stdout(predicate::str::contains("Gasto Total: R$ 0.00"))
        .stdout(predicate::str::contains("Gasto Médio: —"));
}

#[test]
fn export_round_trips_through_show() {
    let fixture = Fixture::new();
    let output = fixture.path("export.csv");

    fixture
        .cmd()
        .args(["export", "-c", "Food", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Arquivo CSV gerado com sucesso!"));

    let text = read(&output);
    assert_eq!(
        text,
        "data,descricao,valor,categoria\n\
         05/01/2025,Mercado,100.00,Food\n\
         01/03/2025,\"Padaria, centro\",50.00,Food\n"
    );

    fixture
        .cmd()
        .arg("show")
        .arg("--file")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Gasto Total: R$ 150.00"));
}

#[test]
fn summary_json_reports_aggregates() {
    let fixture = Fixture::new();

    let assert = fixture
        .cmd()
        .args(["summary", "-c", "Food", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["total"], "150.00");
    assert_eq!(value["mean"], "75.00");
    assert_eq!(value["categories"][0]["category"], "Food");
}

#[test]
fn summary_yaml_to_file() {
    let fixture = Fixture::new();
    let output = fixture.path("summary.yaml");

    fixture
        .cmd()
        .args(["summary", "--format", "yaml", "--from", "Fev", "--to", "Fev", "-o"])
        .arg(&output)
        .assert()
        .success();

    let text = read(&output);
    assert!(text.starts_with("# Gastos summary"));
    assert!(text.contains("total: '400.00'") || text.contains("total: \"400.00\""));
}

#[test]
fn categories_are_sorted_and_distinct() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout("Food\nRent\n");
}

#[test]
fn ledger_file_from_environment() {
    let fixture = Fixture::new();
    fs::write(
        fixture.path("other.csv"),
        "data,descricao,valor,categoria\n2025-01-02,Cinema,30.00,Lazer\n",
    )
    .unwrap();

    fixture
        .cmd()
        .env("GASTOS_FILE", fixture.path("other.csv"))
        .arg("categories")
        .assert()
        .success()
        .stdout("Lazer\n");
}

#[test]
fn missing_ledger_is_fatal() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["show", "--file", "nao-existe.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load ledger"))
        .stderr(predicate::str::contains("nao-existe.csv"));
}

#[test]
fn malformed_row_is_fatal() {
    let fixture = Fixture::new();
    fs::write(
        fixture.path("bad.csv"),
        "data,descricao,valor,categoria\n05/01/2025,Mercado,cem,Food\n",
    )
    .unwrap();

    fixture
        .cmd()
        .args(["show", "--file", "bad.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid amount 'cem'"));
}

#[test]
fn reversed_period_is_rejected() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .args(["show", "--from", "Abr", "--to", "Jan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn init_then_config_uses_saved_settings() {
    let fixture = Fixture::new();

    fixture
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default settings written"));
    assert!(fixture.path("config").join("config.json").exists());

    fixture
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending limit:  R$ 500.00"));
}
