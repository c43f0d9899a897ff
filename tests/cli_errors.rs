mod common;

use common::*;

#[test]
fn invalid_json_file_is_skipped_and_others_still_processed() {
    let env = TestEnv::with_config(DB_CONFIG);
    env.write_file("config/a_broken.json", "{ \"database\": ");
    env.write_file("config/b_app.json", WORKING_APP_JSON);

    let result = env.run(&["--direction", "to_committed"]);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(result
        .stdout
        .contains("Error: config/a_broken.json is not a valid JSON file"));
    assert!(result.stdout.contains("Failed to process 1 file(s)"));
    assert_eq!(env.read_file("config/a_broken.json"), "{ \"database\": ");
    assert_eq!(env.read_file("config/b_app.json"), COMMITTED_APP_JSON);
}

#[test]
fn missing_config_is_fatal() {
    let env = TestEnv::new();

    let result = env.run(&["--direction", "to_committed"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("failed to load config"), "{}", result.stderr);
}

#[test]
fn malformed_key_path_is_fatal() {
    let env = TestEnv::with_config(
        r#"
patterns:
  - path: "*.json"
    keys:
      - key: "a..b"
        working: x
        committed: y
"#,
    );
    env.write_file("a.json", "{\"a\": {\"\": {\"b\": \"x\"}}}");

    let result = env.run(&["--direction", "to_committed"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("segment 2 is empty"), "{}", result.stderr);
    assert_eq!(env.read_file("a.json"), "{\"a\": {\"\": {\"b\": \"x\"}}}");
}

#[test]
fn unknown_config_key_warns_but_runs() {
    let env = TestEnv::with_config(
        r#"
patterns:
  - path: "config/*.json"
    indnet: 4
    keys:
      - key: database.connectionString
        working: "localhost:5432"
        committed: "SERVER:5432"
"#,
    );
    env.write_file("config/app.json", WORKING_APP_JSON);

    let result = env.run(&["--direction", "to_committed"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key"), "{}", result.stderr);
    assert!(result.stderr.contains("Did you mean 'indent'?"));
    assert_eq!(env.read_file("config/app.json"), COMMITTED_APP_JSON);
}

#[test]
fn unknown_direction_is_rejected() {
    let env = TestEnv::with_config(DB_CONFIG);

    let result = env.run(&["--direction", "to_staging"]);

    assert!(!result.is_success());
    assert!(result.stderr.contains("to_staging"));
}

#[test]
fn quiet_still_reports_failed_files() {
    let env = TestEnv::with_config(DB_CONFIG);
    env.write_file("config/app.json", WORKING_APP_JSON);
    env.write_file("config/broken.json", "{ not json");

    let result = env.run(&["--direction", "to_committed", "-q"]);

    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
    assert!(!result.stdout.contains("Modified"), "{}", result.stdout);
    assert!(result
        .stdout
        .contains("Error: config/broken.json is not a valid JSON file"));
    assert!(result.stdout.contains("Failed to process 1 file(s)"));
}

#[test]
fn quiet_success_prints_nothing() {
    let env = TestEnv::with_config(DB_CONFIG);
    env.write_file("config/app.json", WORKING_APP_JSON);

    let result = env.run(&["--direction", "to_committed", "--quiet"]);

    assert!(result.is_success(), "{}", result.combined_output());
    assert_eq!(result.stdout, "");
    assert_eq!(env.read_file("config/app.json"), COMMITTED_APP_JSON);
}
