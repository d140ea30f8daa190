use super::*;
use std::error::Error as StdError;

#[test]
fn test_auth_error() {
    let error = Error::Auth("bad token".to_string());

    assert_eq!(error.to_string(), "Authentication error: bad token");
    assert!(error.source().is_none());
}

#[test]
fn test_config_error() {
    let error = Error::Config("file not found".to_string());

    assert_eq!(error.to_string(), "Configuration error: file not found");
    assert!(error.source().is_none());
}

#[test]
fn test_invalid_name_error_carries_source() {
    let validation = ValidationError::empty_field("branch_name");
    let error = Error::from(validation);

    assert_eq!(
        error.to_string(),
        "Invalid name in configuration: branch_name must not be empty"
    );
    assert!(error.source().is_some());
}

#[test]
fn test_stdout_flush_error() {
    let error = Error::StdOutFlushFailed;

    assert_eq!(error.to_string(), "Failed to flush the std out buffer.");
    assert!(error.source().is_none());
}
