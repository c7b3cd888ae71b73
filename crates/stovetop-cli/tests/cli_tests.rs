use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const CLEARED_VARS: &[&str] = &[
    "FIREBASE_API_KEY",
    "FIREBASE_PROJECT_ID",
    "FIREBASE_DATABASE",
    "FIRESTORE_BASE_URL",
    "GEMINI_API_KEY",
    "API_KEY",
    "GEMINI_MODEL",
    "GEMINI_BASE_URL",
    "STOVETOP_REQUEST_TIMEOUT_SECS",
];

fn fixture() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/recipes.json")
        .to_string_lossy()
        .into_owned()
}

/// Helper function to create a Command with --no-color and an isolated
/// environment; the returned directory must outlive the command
fn stovetop_cmd() -> (Command, TempDir) {
    let config_home = TempDir::new().expect("Failed to create temporary directory");
    let mut cmd = Command::cargo_bin("stovetop").expect("Failed to find stovetop binary");
    for var in CLEARED_VARS {
        cmd.env_remove(var);
    }
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("GEMINI_API_KEY", "test-key")
        .arg("--no-color")
        .args(["--recipes-file", &fixture()]);
    (cmd, config_home)
}

#[test]
fn test_cli_menu_lists_all_dishes_by_name() {
    let (mut cmd, _home) = stovetop_cmd();
    cmd.arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Menu (4 dishes)"))
        .stdout(predicate::str::contains(
            "1. **Aloo Gobi** - Classic Style [SABZI] (id: aloo-gobi)",
        ))
        .stdout(predicate::str::contains(
            "4. **Paneer Butter Masala** - Restaurant Style [CURRY] (id: paneer-butter-masala)",
        ));
}

#[test]
fn test_cli_search_matches_variation() {
    let (mut cmd, _home) = stovetop_cmd();
    cmd.args(["search", "dhaba"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Dal Tadka** - Dhaba Style"))
        .stdout(predicate::str::contains("Jeera").not());
}

#[test]
fn test_cli_search_without_matches() {
    let (mut cmd, _home) = stovetop_cmd();
    cmd.args(["search", "biryani"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching dishes."));
}

#[test]
fn test_cli_show_recipe() {
    let (mut cmd, _home) = stovetop_cmd();
    cmd.args(["show", "paneer-butter-masala"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Paneer Butter Masala (Restaurant Style)",
        ))
        .stdout(predicate::str::contains("- Paneer: 250 g"))
        .stdout(predicate::str::contains("4. Simmer paneer in gravy (7.5 min, stove)"));
}

#[test]
fn test_cli_show_unknown_recipe_fails() {
    let (mut cmd, _home) = stovetop_cmd();
    cmd.args(["show", "biryani"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not load dish 'biryani'"));
}

#[test]
fn test_cli_missing_gemini_key_fails_at_startup() {
    let (mut cmd, _home) = stovetop_cmd();
    cmd.env_remove("GEMINI_API_KEY")
        .arg("menu")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn test_cli_missing_firestore_settings_fail_at_startup() {
    let home = TempDir::new().expect("Failed to create temporary directory");
    let mut cmd = Command::cargo_bin("stovetop").expect("Failed to find stovetop binary");
    for var in CLEARED_VARS {
        cmd.env_remove(var);
    }
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("GEMINI_API_KEY", "test-key")
        .args(["--no-color", "menu"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FIREBASE_PROJECT_ID"));
}

#[test]
fn test_cli_config_file_supplies_key() {
    let (mut cmd, home) = stovetop_cmd();
    let config_path = home.path().join("stovetop.json");
    std::fs::write(&config_path, r#"{ "gemini_api_key": "from-file" }"#).unwrap();

    cmd.env_remove("GEMINI_API_KEY")
        .args(["--config-file", config_path.to_str().unwrap(), "search", "rice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Jeera Rice**"));
}

#[test]
fn test_session_search_pick_and_list() {
    let (mut cmd, _home) = stovetop_cmd();
    cmd.arg("session")
        .write_stdin("/masala\npick 1\npick 1\n/jeera\npick 1\nremove 1\ndishes\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. **Paneer Butter Masala**"))
        .stdout(predicate::str::contains("Success: Added Paneer Butter Masala"))
        .stdout(predicate::str::contains("Error: No suggestion at position 1"))
        .stdout(predicate::str::contains("Success: Removed Paneer Butter Masala"))
        .stdout(predicate::str::contains(
            "1. **Jeera Rice** - 2 steps (id: jeera-rice)",
        ));
}

#[test]
fn test_session_generate_without_dishes() {
    let (mut cmd, _home) = stovetop_cmd();
    cmd.write_stdin("generate\nplan\nbake\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Please select at least one dish.",
        ))
        .stdout(predicate::str::contains("Note: No plan yet."))
        .stdout(predicate::str::contains("Unknown command 'bake'"));
}

fn plan_reply() -> serde_json::Value {
    let plan = json!({
        "totalTime": 38,
        "prepSummary": ["Soak dal", "Wash rice"],
        "timeline": [
            { "timeStart": 15, "timeEnd": 35, "action": "Pressure cook dal",
              "dishName": "Dal Tadka", "isStoveActive": true, "stoveNumber": 1 },
            { "timeStart": 0, "timeEnd": 15, "action": "Soak dal",
              "dishName": "Dal Tadka", "isStoveActive": false },
            { "timeStart": 15, "timeEnd": 33, "action": "Cook rice with cumin",
              "dishName": "Jeera Rice", "isStoveActive": true }
        ]
    });
    json!({ "candidates": [{ "content": { "parts": [{ "text": plan.to_string() }] } }] })
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_plan_renders_generated_timeline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/test-model:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(plan_reply()))
        .expect(1)
        .mount(&server)
        .await;

    let (mut cmd, _home) = stovetop_cmd();
    let assert = cmd
        .env("GEMINI_BASE_URL", server.uri())
        .args(["--model", "test-model", "plan", "dal-tadka", "jeera-rice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Chef's Efficient Plan"))
        .stdout(predicate::str::contains("- **Total Duration**: 38 mins"))
        .stdout(predicate::str::contains("1. Soak dal\n2. Wash rice"))
        .stdout(predicate::str::contains("- Stove 1"))
        .stdout(predicate::str::contains("- Stove active"));

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let soak = stdout.find("### 0 - 15 min | DAL TADKA").unwrap();
    let cook = stdout.find("### 15 - 35 min | DAL TADKA").unwrap();
    let rice = stdout.find("### 15 - 33 min | JEERA RICE").unwrap();
    assert!(soak < cook && cook < rice);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_plan_service_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (mut cmd, _home) = stovetop_cmd();
    cmd.env("GEMINI_BASE_URL", server.uri())
        .args(["plan", "aloo-gobi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to generate plan. Please try again.",
        ));
}

#[test]
fn test_cli_plan_unknown_dish_fails_before_generation() {
    let (mut cmd, _home) = stovetop_cmd();
    cmd.env("GEMINI_BASE_URL", "http://127.0.0.1:9")
        .args(["plan", "aloo-gobi", "biryani"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not add dish 'biryani'"));
}
