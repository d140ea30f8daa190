use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_sweep_config_load_valid() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("branches.toml");

    fs::write(
        &config_path,
        r#"
owner = "test-org"
repo = "test-repo"
branches = ["feature/stale", "codex/old-experiment"]
"#,
    )
    .expect("Failed to write config");

    let config = SweepConfig::load(&config_path).expect("Failed to load config");

    assert_eq!(config.owner, "test-org");
    assert_eq!(config.repo, "test-repo");
    assert_eq!(
        config.branches,
        vec!["feature/stale".to_string(), "codex/old-experiment".to_string()]
    );
}

#[test]
fn test_sweep_config_load_invalid_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("invalid_config.toml");

    // Write invalid TOML content
    fs::write(&config_path, "invalid = toml = syntax").expect("Failed to write invalid TOML");

    let result = SweepConfig::load(&config_path);

    assert!(result.is_err());
    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Failed to parse configuration file"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_sweep_config_load_missing_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("partial_config.toml");

    // No repo, no branches
    fs::write(&config_path, "owner = \"test-org\"").expect("Failed to write config");

    let result = SweepConfig::load(&config_path);

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_sweep_config_load_nonexistent_file() {
    let nonexistent_path = PathBuf::from("nonexistent_config.toml");
    let result = SweepConfig::load(&nonexistent_path);

    assert!(result.is_err());
    if let Err(Error::Config(msg)) = result {
        assert!(msg.contains("Configuration file not found"));
    } else {
        panic!("Expected Config error");
    }
}

#[test]
fn test_sweep_config_into_plan() {
    let config = SweepConfig {
        owner: "test-org".to_string(),
        repo: "test-repo".to_string(),
        branches: vec!["a".to_string(), "b".to_string()],
    };

    let plan = config.into_plan().expect("Failed to build plan");

    assert_eq!(plan.owner.as_str(), "test-org");
    assert_eq!(plan.repo.as_str(), "test-repo");
    let branches: Vec<_> = plan.branches.iter().map(|b| b.as_str()).collect();
    assert_eq!(branches, vec!["a", "b"]);
}

#[test]
fn test_sweep_config_into_plan_rejects_invalid_owner() {
    let config = SweepConfig {
        owner: "bad_owner".to_string(),
        repo: "test-repo".to_string(),
        branches: vec!["a".to_string()],
    };

    let result = config.into_plan();

    assert!(matches!(result, Err(Error::InvalidName(_))));
}
