//! Test fixtures - reusable content constants for tests.

/// One pattern under `config/` with a single connection string rule
pub const DB_CONFIG: &str = r#"
patterns:
  - path: "config/*.json"
    keys:
      - key: database.connectionString
        working: "localhost:5432"
        committed: "SERVER:5432"
"#;

/// Settings file in its working state
pub const WORKING_APP_JSON: &str = r#"{
  "database": {
    "connectionString": "localhost:5432",
    "pool": 5
  },
  "name": "app"
}
"#;

/// `WORKING_APP_JSON` after a to_committed run
pub const COMMITTED_APP_JSON: &str = r#"{
  "database": {
    "connectionString": "SERVER:5432",
    "pool": 5
  },
  "name": "app"
}
"#;
