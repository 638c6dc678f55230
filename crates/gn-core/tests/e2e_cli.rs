//! CLI E2E tests for the genesis binary.
//!
//! Validates:
//! - `validate` subcommands report findings and exit 1 on failure
//! - `init` fills defaults from config and prints a request envelope
//! - `config set/get/reset` persist through the config file
//! - Environment overrides apply without being written back
//! - `GENESIS_CLI_DEBUG` turns on debug logging
//! - A corrupt config file falls back to defaults
//! - Unknown catalog and config keys exit 2

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

const ENV_VARS: &[&str] = &[
    "GENESIS_CLI_CONFIG",
    "GENESIS_CLI_NO_BANNER",
    "GENESIS_CLI_NO_INTERACTIVE",
    "GENESIS_CLI_VERBOSE",
    "GENESIS_CLI_DEBUG",
    "GENESIS_CLI_SKIP_DEPS",
    "GENESIS_CLI_DEFAULT_TEMPLATE",
    "RUST_LOG",
];

// ============================================================================
// Helpers
// ============================================================================

/// Get a Command for the genesis binary, isolated from the user's config.
fn genesis(config: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("genesis");
    cmd.timeout(Duration::from_secs(60));
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.arg("--config").arg(config);
    cmd
}

fn json_stdout(cmd: &mut Command, code: i32) -> Value {
    let output = cmd.assert().code(code).get_output().stdout.clone();
    serde_json::from_slice(&output).expect("parse JSON")
}

// ============================================================================
// Validate
// ============================================================================

#[test]
fn test_validate_name_ok() {
    let dir = tempdir().expect("tempdir");
    genesis(&dir.path().join("config.json"))
        .args(["validate", "name", "my-project"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn test_validate_name_reserved_exits_1() {
    let dir = tempdir().expect("tempdir");
    genesis(&dir.path().join("config.json"))
        .args(["validate", "name", "con"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("reserved"));
}

#[test]
fn test_validate_template_json_lists_keys() {
    let dir = tempdir().expect("tempdir");
    let json = json_stdout(
        genesis(&dir.path().join("config.json")).args([
            "--format",
            "json",
            "validate",
            "template",
            "invalid-template",
        ]),
        1,
    );
    assert_eq!(json["command"], "validate template");
    assert_eq!(json["validation"]["is_valid"], false);
    let error = json["validation"]["errors"][0].as_str().expect("error");
    for key in ["saas-basic", "api-only", "minimal", "ai-ready"] {
        assert!(error.contains(key), "missing {key}");
    }
}

#[test]
fn test_validate_features_resolves() {
    let dir = tempdir().expect("tempdir");
    let json = json_stdout(
        genesis(&dir.path().join("config.json"))
            .args(["--format", "json", "validate", "features", "ai"]),
        0,
    );
    assert_eq!(
        json["resolved"],
        serde_json::json!(["database", "api", "ai"])
    );
    assert!(!json["validation"]["warnings"]
        .as_array()
        .expect("warnings")
        .is_empty());
}

#[test]
fn test_validate_dir_non_empty() {
    let dir = tempdir().expect("tempdir");
    let project = dir.path().join("proj");
    fs::create_dir(&project).expect("mkdir");
    fs::write(project.join("file.txt"), "x").expect("write");
    let config = dir.path().join("config.json");

    genesis(&config)
        .args(["validate", "dir"])
        .arg(dir.path())
        .arg("proj")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not empty"));

    genesis(&config)
        .args(["validate", "dir"])
        .arg(dir.path())
        .args(["proj", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("overwritten"));
}

#[test]
fn test_validate_project_file() {
    let dir = tempdir().expect("tempdir");
    let spec = dir.path().join("project.json");
    let body = serde_json::json!({
        "name": "shop-app",
        "template": "e-commerce",
        "features": ["payments"],
        "output_path": dir.path(),
    });
    fs::write(&spec, body.to_string()).expect("write");

    let json = json_stdout(
        genesis(&dir.path().join("config.json"))
            .args(["--format", "json", "validate", "project"])
            .arg(&spec),
        0,
    );
    assert_eq!(json["validation"]["is_valid"], true);
}

#[test]
fn test_validate_project_stdin_bad_json() {
    let dir = tempdir().expect("tempdir");
    genesis(&dir.path().join("config.json"))
        .args(["validate", "project", "-"])
        .write_stdin("{ nope")
        .assert()
        .code(2);
}

// ============================================================================
// Init
// ============================================================================

#[test]
fn test_init_uses_configured_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.json");
    let out = dir.path().join("out");
    fs::create_dir(&out).expect("mkdir");
    fs::write(
        &config,
        serde_json::json!({
            "templates": { "default_template": "minimal" },
            "project": { "default_output_dir": out },
        })
        .to_string(),
    )
    .expect("write");

    let json = json_stdout(
        genesis(&config).args(["--format", "json", "init", "my-app"]),
        0,
    );
    assert_eq!(json["command"], "init");
    let request = &json["request"];
    assert_eq!(request["template"], "minimal");
    assert_eq!(request["features"], serde_json::json!(["api", "docker"]));
    assert_eq!(
        request["project_path"].as_str().expect("path"),
        out.join("my-app").to_string_lossy()
    );
    assert!(request["request_id"]
        .as_str()
        .expect("id")
        .starts_with("req-"));
}

#[test]
fn test_init_rejects_bad_input() {
    let dir = tempdir().expect("tempdir");
    let json = json_stdout(
        genesis(&dir.path().join("config.json"))
            .args(["--format", "json", "init", "123-invalid", "--template", "nope"])
            .arg("--output")
            .arg(dir.path()),
        1,
    );
    assert!(json["request"].is_null());
    assert_eq!(json["validation"]["is_valid"], false);
}

#[test]
fn test_init_env_default_template() {
    let dir = tempdir().expect("tempdir");
    let json = json_stdout(
        genesis(&dir.path().join("config.json"))
            .env("GENESIS_CLI_DEFAULT_TEMPLATE", "blog")
            .args(["--format", "json", "init", "my-blog"])
            .arg("--output")
            .arg(dir.path()),
        0,
    );
    assert_eq!(json["request"]["template"], "blog");
}

// ============================================================================
// Catalogs
// ============================================================================

#[test]
fn test_templates_list_json() {
    let dir = tempdir().expect("tempdir");
    let json = json_stdout(
        genesis(&dir.path().join("config.json")).args(["--format", "json", "templates", "list"]),
        0,
    );
    assert_eq!(json["count"], 8);
    assert_eq!(json["templates"][0]["key"], "saas-basic");
    assert!(json.get("schema_version").is_some());
}

#[test]
fn test_templates_show_unknown_hints() {
    let dir = tempdir().expect("tempdir");
    genesis(&dir.path().join("config.json"))
        .args(["templates", "show", "shop"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown template: shop"))
        .stderr(predicate::str::contains("e-commerce"));
}

#[test]
fn test_features_show_unknown_exits_2() {
    let dir = tempdir().expect("tempdir");
    genesis(&dir.path().join("config.json"))
        .args(["features", "show", "blockchain"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown feature: blockchain"));
}

#[test]
fn test_features_resolve_human() {
    let dir = tempdir().expect("tempdir");
    genesis(&dir.path().join("config.json"))
        .args(["features", "resolve", "payments"])
        .assert()
        .success()
        .stdout(predicate::str::contains("authentication, database, payments"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_set_then_get() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("nested").join("config.json");

    genesis(&config)
        .args(["config", "set", "theme", "dark"])
        .assert()
        .success();
    assert!(config.exists());

    genesis(&config)
        .args(["config", "get", "theme"])
        .assert()
        .success()
        .stdout("dark\n");

    let saved: Value =
        serde_json::from_str(&fs::read_to_string(&config).expect("read")).expect("json");
    assert_eq!(saved["ui"]["theme"], "dark");
    assert_eq!(saved["ui"]["show_banner"], true);
}

#[test]
fn test_config_set_bool_and_bad_value() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.json");

    genesis(&config)
        .args(["config", "set", "show_banner", "off"])
        .assert()
        .success();
    genesis(&config)
        .args(["config", "get", "show_banner"])
        .assert()
        .stdout("false\n");

    genesis(&config)
        .args(["config", "set", "show_banner", "maybe"])
        .assert()
        .code(2);
}

#[test]
fn test_config_unknown_key_exits_2() {
    let dir = tempdir().expect("tempdir");
    genesis(&dir.path().join("config.json"))
        .args(["config", "get", "nonexistent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown configuration key"));
}

#[test]
fn test_config_corrupt_file_uses_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.json");
    fs::write(&config, "{ invalid json").expect("write");

    let json = json_stdout(
        genesis(&config).args(["--format", "json", "config", "show"]),
        0,
    );
    assert_eq!(json["config"]["ui"]["theme"], "default");
    assert_eq!(json["config"]["templates"]["default_template"], "saas-basic");
}

#[test]
fn test_config_show_human_file_order() {
    let dir = tempdir().expect("tempdir");
    let output = genesis(&dir.path().join("config.json"))
        .args(["config", "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).expect("utf8");
    let positions: Vec<usize> = ["[ui]", "[behavior]", "[templates]", "[project]", "[debug]"]
        .iter()
        .map(|header| text.find(header).expect("section header"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
    assert!(text.contains("  theme = \"default\""));
}

#[test]
fn test_config_env_overrides_not_persisted() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.json");

    let json = json_stdout(
        genesis(&config)
            .env("GENESIS_CLI_NO_BANNER", "1")
            .args(["--format", "json", "config", "show"]),
        0,
    );
    assert_eq!(json["config"]["ui"]["show_banner"], false);
    assert_eq!(json["env_overrides"][0], "GENESIS_CLI_NO_BANNER");

    let json = json_stdout(
        genesis(&config)
            .env("GENESIS_CLI_NO_BANNER", "1")
            .args(["--format", "json", "config", "show", "--no-env"]),
        0,
    );
    assert_eq!(json["config"]["ui"]["show_banner"], true);
    assert!(!config.exists());
}

#[test]
fn test_env_debug_enables_debug_logging() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.json");

    genesis(&config)
        .args(["validate", "name", "my-project"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using config file").not());

    genesis(&config)
        .env("GENESIS_CLI_DEBUG", "1")
        .args(["validate", "name", "my-project"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using config file"));
}

#[test]
fn test_verbose_output_does_not_enable_debug_logging() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"behavior": {"verbose_output": true}}"#).expect("write");

    genesis(&config)
        .args(["validate", "name", "my-project"])
        .assert()
        .success()
        .stderr(predicate::str::contains("using config file").not());
}

#[test]
fn test_config_top_level_fields_apply() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"theme": "solarized", "auto_confirm": true}"#).expect("write");

    genesis(&config)
        .args(["config", "get", "theme"])
        .assert()
        .success()
        .stdout("solarized\n");
    genesis(&config)
        .args(["config", "get", "auto_confirm"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_config_reset() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("config.json");

    genesis(&config)
        .args(["config", "set", "log_level", "DEBUG"])
        .assert()
        .success();
    genesis(&config).args(["config", "reset"]).assert().success();
    genesis(&config)
        .args(["config", "get", "log_level"])
        .assert()
        .stdout("INFO\n");
}

#[test]
fn test_config_path_from_env() {
    let dir = tempdir().expect("tempdir");
    let via_env = dir.path().join("env.json");
    let mut cmd = cargo_bin_cmd!("genesis");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("GENESIS_CLI_CONFIG", &via_env)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("env.json"));
}

// ============================================================================
// Schema
// ============================================================================

#[test]
fn test_schema_config() {
    let dir = tempdir().expect("tempdir");
    let output = genesis(&dir.path().join("config.json"))
        .args(["schema", "config"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let schema: Value = serde_json::from_slice(&output).expect("schema JSON");
    assert!(schema["properties"]["ui"].is_object());
}
