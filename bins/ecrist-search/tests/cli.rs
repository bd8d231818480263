//! End-to-end tests for the ecrist-search binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("ecrist-search").unwrap();
    cmd.env_remove("ECRIST_SEARCH_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_search_exact_match() {
    cmd()
        .args(["search", "bambu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cepillo de Bambú"))
        .stdout(predicate::str::contains("exact match"));
}

#[test]
fn test_search_fuzzy_json() {
    let value = json_output(cmd().args(["search", "bambu sostenivle", "--json"]));
    assert_eq!(value["phase"], "fuzzy");
    assert_eq!(value["records"][0]["name"], "Cepillo de Bambú");
    assert_eq!(value["records"][0]["inStock"], 100);
}

#[test]
fn test_search_category_with_limit() {
    let value = json_output(cmd().args(["search", "--category", "hogar", "--limit", "2", "--json"]));
    assert_eq!(value["phase"], "exact");
    assert_eq!(value["records"].as_array().unwrap().len(), 2);
    assert_eq!(value["records"][0]["name"], "Bolsas Reutilizables");
}

#[test]
fn test_search_without_arguments_lists_all() {
    let value = json_output(cmd().args(["search", "--json"]));
    assert_eq!(value["phase"], "all");
    assert_eq!(value["records"].as_array().unwrap().len(), 6);
}

#[test]
fn test_search_no_results_prints_warning() {
    cmd()
        .args(["search", "xyzzy"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No products found"));
}

#[test]
fn test_suggest_json() {
    let value = json_output(cmd().args(["suggest", "jabones", "--json"]));
    assert_eq!(value, serde_json::json!(["jabon", "Jabón Artesanal"]));
}

#[test]
fn test_normalize() {
    cmd()
        .args(["normalize", "¡Champú Sólido!"])
        .assert()
        .success()
        .stdout("champu solido\n");
}

#[test]
fn test_similarity_is_order_dependent_on_ties() {
    cmd()
        .args(["similarity", "aa bb", "aaccc"])
        .assert()
        .success()
        .stdout("0.50\n");
    cmd()
        .args(["similarity", "aaccc", "aa bb"])
        .assert()
        .success()
        .stdout("1.00\n");
}

#[test]
fn test_custom_catalog_file() {
    let catalog = temp_file(
        r#"[{"name": "Pajitas de Acero", "description": "Set de pajitas reutilizables", "category": "Cocina", "material": "Acero"}]"#,
    );
    let value = json_output(
        cmd()
            .args(["search", "pajita", "--json", "--catalog"])
            .arg(catalog.path()),
    );
    assert_eq!(value["records"][0]["name"], "Pajitas de Acero");
    assert!(!value["records"][0]["id"].as_str().unwrap().is_empty());
}

#[test]
fn test_invalid_catalog_fails() {
    let catalog = temp_file("not json");
    cmd()
        .args(["search", "vela", "--catalog"])
        .arg(catalog.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid catalog"));
}

#[test]
fn test_config_threshold_applies() {
    let config = temp_file("[search]\nfuzzy_threshold = 0.7\n");
    let value = json_output(
        cmd()
            .args(["search", "acero", "-k", "cosmetica", "--json", "--config"])
            .arg(config.path()),
    );
    assert_eq!(value["phase"], "fuzzy");
    let names: Vec<&str> = value["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Jabón Artesanal"]);
}

#[test]
fn test_invalid_config_fails() {
    let config = temp_file("[search]\nquery_weight = 2.0\n");
    cmd()
        .args(["normalize", "x", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("query_weight"));
}

#[test]
fn test_config_weights_above_one_fail() {
    let config = temp_file("[search]\nquery_weight = 1.0\ncategory_weight = 1.0\n");
    cmd()
        .args(["search", "velas", "-k", "hogares", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("query_weight + category_weight"));
}

#[test]
fn test_config_suggestion_limit_above_five_fails() {
    let config = temp_file("[search]\nmax_suggestions = 50\n");
    cmd()
        .args(["suggest", "jabon", "--config"])
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_suggestions"));
}

#[test]
fn test_stats_are_printed_to_stderr() {
    cmd()
        .args(["search", "vela", "--stats"])
        .assert()
        .success()
        .stderr(predicate::str::contains("search.exact"));
}
