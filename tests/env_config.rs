mod common;
use common::{restore_env, ENV_LOCK};

use autocomplete::errors::ErrorKind;
use autocomplete::utils::env_config::{resolve_database_path, resolve_limit};
use std::path::PathBuf;

#[test]
fn explicit_limit_wins_over_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let previous = std::env::var("AUTOCOMPLETE_LIMIT").ok();

    std::env::set_var("AUTOCOMPLETE_LIMIT", "50");
    assert_eq!(resolve_limit(Some(7)).unwrap(), 7);
    assert_eq!(resolve_limit(None).unwrap(), 50);

    restore_env("AUTOCOMPLETE_LIMIT", previous);
}

#[test]
fn missing_or_invalid_limit_is_a_configuration_error() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let previous = std::env::var("AUTOCOMPLETE_LIMIT").ok();

    std::env::remove_var("AUTOCOMPLETE_LIMIT");
    assert_eq!(
        resolve_limit(None).unwrap_err().kind,
        ErrorKind::Configuration
    );

    std::env::set_var("AUTOCOMPLETE_LIMIT", "many");
    assert_eq!(
        resolve_limit(None).unwrap_err().kind,
        ErrorKind::Configuration
    );

    std::env::set_var("AUTOCOMPLETE_LIMIT", "0");
    assert_eq!(
        resolve_limit(None).unwrap_err().kind,
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        resolve_limit(Some(0)).unwrap_err().kind,
        ErrorKind::InvalidArgument
    );

    restore_env("AUTOCOMPLETE_LIMIT", previous);
}

#[test]
fn database_path_falls_back_to_environment() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let previous = std::env::var("AUTOCOMPLETE_DB").ok();

    std::env::set_var("AUTOCOMPLETE_DB", "/tmp/mo.sqlite");
    assert_eq!(
        resolve_database_path(None),
        Some(PathBuf::from("/tmp/mo.sqlite"))
    );
    assert_eq!(
        resolve_database_path(Some(PathBuf::from("other.db"))),
        Some(PathBuf::from("other.db"))
    );

    std::env::set_var("AUTOCOMPLETE_DB", "null");
    assert_eq!(resolve_database_path(None), None);

    restore_env("AUTOCOMPLETE_DB", previous);
}
