//! Integration tests for the `multival` CLI binary.
//!
//! These drive the normalize, get, yaml and split subcommands through the real binary,
//! covering stdin/stdout piping, file I/O, fail-soft parsing and error exits.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn order_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/order.json")
}

fn settings_yaml_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/settings.yaml")
}

fn multival() -> Command {
    Command::cargo_bin("multival").unwrap()
}

/// Run `get PATH --as TARGET` against the order fixture and return its stdout.
fn get_from_order(path: &str, target: &str) -> String {
    let output = multival()
        .args(["get", path, "--as", target, "-i", order_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim_end().to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// normalize
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn normalize_stdin_to_stdout() {
    multival()
        .arg("normalize")
        .write_stdin("{ \"b\" : 1.50 , \"a\" : [ 1e2, \"x\" ] }")
        .assert()
        .success()
        .stdout("{\"b\":1.5,\"a\":[100,\"x\"]}\n");
}

#[test]
fn normalize_file_with_comments() {
    let expected = concat!(
        r#"{"id":"d1a6eadf-c842-40b9-9aa3-a2d87a6aef86","placed":"2022-11-19 22:43:45","#,
        r#""total":"1,250.50","paid":"TRUE","lines":[{"sku":"A-1","quantity":"3","price":100},"#,
        r#"{"sku":"B-2","quantity":"-1.9","price":1050.5}],"#,
        r#""customer":{"name":"Alice","tags":["vip","jp"]}}"#,
        "\n"
    );
    multival()
        .args(["normalize", "-i", order_json_path()])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn normalize_file_to_file() {
    let output_path = std::env::temp_dir().join("multival-test-normalize-output.json");
    let _ = std::fs::remove_file(&output_path);

    multival()
        .args(["normalize", "-i", order_json_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.starts_with(r#"{"id":"#));
    assert!(!content.ends_with('\n'));
    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn normalize_malformed_input_is_empty_object() {
    multival()
        .arg("normalize")
        .write_stdin("not json at all")
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn normalize_top_level_array_as_mapping_is_empty() {
    multival()
        .arg("normalize")
        .write_stdin("[1,2,3]")
        .assert()
        .success()
        .stdout("{}\n");
}

#[test]
fn normalize_sequence_flag() {
    multival()
        .args(["normalize", "--sequence"])
        .write_stdin("[ 1, {\"k\": null} ]")
        .assert()
        .success()
        .stdout("[1,{\"k\":null}]\n");

    multival()
        .args(["normalize", "--sequence"])
        .write_stdin("{\"k\":1}")
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn normalize_verbose_logs_swallowed_failure() {
    multival()
        .args(["normalize", "-v"])
        .env_remove("RUST_LOG")
        .write_stdin("{broken")
        .assert()
        .success()
        .stdout("{}\n")
        .stderr(predicate::str::contains("DEBUG").and(predicate::str::contains("malformed JSON")));
}

#[test]
fn normalize_verbose_names_wrong_shape() {
    multival()
        .args(["normalize", "-v"])
        .env_remove("RUST_LOG")
        .write_stdin("[1,2]")
        .assert()
        .success()
        .stdout("{}\n")
        .stderr(predicate::str::contains("wrong top-level shape"));
}

#[test]
fn normalize_missing_file_fails() {
    multival()
        .args(["normalize", "-i", "/nonexistent/path/order.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// get
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_coerces_grouped_decimal() {
    assert_eq!(get_from_order("total", "double"), "1250.5");
    assert_eq!(get_from_order("total", "decimal"), "1250.50");
    assert_eq!(get_from_order("total", "int"), "1250");
}

#[test]
fn get_walks_sequences_by_index() {
    assert_eq!(get_from_order("lines.0.sku", "string"), "A-1");
    assert_eq!(get_from_order("lines.0.quantity", "int"), "3");
    assert_eq!(get_from_order("customer.tags.1", "string"), "jp");
}

#[test]
fn get_truncates_and_clamps_unsigned() {
    assert_eq!(get_from_order("lines.1.quantity", "int"), "-1");
    assert_eq!(get_from_order("lines.1.quantity", "uint"), "0");
    assert_eq!(get_from_order("lines.1.quantity", "ulong"), "0");
}

#[test]
fn get_bool_uuid_and_datetimes() {
    assert_eq!(get_from_order("paid", "bool"), "true");
    assert_eq!(
        get_from_order("id", "uuid"),
        "d1a6eadf-c842-40b9-9aa3-a2d87a6aef86"
    );
    assert_eq!(get_from_order("placed", "datetime"), "2022-11-19T22:43:45");
    assert_eq!(get_from_order("placed", "date"), "2022-11-19");
    assert_eq!(get_from_order("placed", "time"), "22:43:45");
}

#[test]
fn get_nested_container_as_json() {
    assert_eq!(
        get_from_order("customer", "json"),
        r#"{"name":"Alice","tags":["vip","jp"]}"#
    );
}

#[test]
fn get_missing_path_prints_default() {
    assert_eq!(get_from_order("nope.deeper", "int"), "0");
    assert_eq!(get_from_order("lines.9.sku", "string"), "");
    assert_eq!(get_from_order("lines.x", "bool"), "false");
    assert_eq!(
        get_from_order("missing", "uuid"),
        "00000000-0000-0000-0000-000000000000"
    );
    assert_eq!(get_from_order("missing", "json"), "{}");
}

#[test]
fn get_defaults_to_string_target() {
    multival()
        .args(["get", "customer.name"])
        .write_stdin(r#"{"customer":{"name":"Bob"}}"#)
        .assert()
        .success()
        .stdout("Bob\n");
}

#[test]
fn get_rejects_unknown_target() {
    multival()
        .args(["get", "x", "--as", "float128"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ─────────────────────────────────────────────────────────────────────────────
// yaml
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn yaml_folds_keys_by_default() {
    multival()
        .args(["yaml", "-i", settings_yaml_path()])
        .assert()
        .success()
        .stdout(
            "{\"app_name\":\"inventory\",\"max_connections\":64,\
             \"database\":{\"host_name\":\"db01\",\"port\":5432}}\n",
        );
}

#[test]
fn yaml_case_sensitive_keeps_keys() {
    multival()
        .args(["yaml", "--case-sensitive", "-i", settings_yaml_path()])
        .assert()
        .success()
        .stdout(
            "{\"appName\":\"inventory\",\"MaxConnections\":64,\
             \"database\":{\"hostName\":\"db01\",\"port\":5432}}\n",
        );
}

#[test]
fn yaml_malformed_input_fails() {
    multival()
        .arg("yaml")
        .write_stdin("key: [unclosed\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read YAML document"));
}

#[test]
fn yaml_scalar_document_fails() {
    multival()
        .arg("yaml")
        .write_stdin("just a string\n")
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// split
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn split_pairs_with_default_separators() {
    multival()
        .args(["split", "host;db01, port;5432, debug"])
        .assert()
        .success()
        .stdout("{\"host\":\"db01\",\"port\":\"5432\",\"debug\":\"\"}\n");
}

#[test]
fn split_list_mode() {
    multival()
        .args(["split", " red, green ,blue ", "--list"])
        .assert()
        .success()
        .stdout("[\"red\",\"green\",\"blue\"]\n");
}

#[test]
fn split_custom_separators() {
    multival()
        .args(["split", "x=1|y=2", "--list-sep", "|", "--pair-sep", "="])
        .assert()
        .success()
        .stdout("{\"x\":\"1\",\"y\":\"2\"}\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// General
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_subcommand_shows_usage() {
    multival()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    multival()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("multival"));
}
