use campus_portal::config::{AppConfig, Env};
use serial_test::serial;
use std::{env, panic};

// --- Setup/Teardown Utilities ---

/// Runs a test closure and restores the named environment variables
/// afterward, so env-mutating tests cannot leak state into each other.
fn run_with_env<T, R>(test: T, cleanup_vars: Vec<&'static str>) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    let originals: Vec<(String, Option<String>)> = cleanup_vars
        .iter()
        .map(|&var| (var.to_string(), env::var(var).ok()))
        .collect();

    let result = panic::catch_unwind(test);

    for (key, original_value) in originals.into_iter().rev() {
        unsafe {
            if let Some(val) = original_value {
                env::set_var(&key, val);
            } else {
                env::remove_var(&key);
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

const VARS: [&str; 5] = [
    "APP_ENV",
    "DATABASE_URL",
    "ACCESS_TOKEN_SECRET",
    "ACCESS_TOKEN_EXPIRY_HOURS",
    "PORT",
];

// --- Tests ---

#[test]
#[serial]
fn default_config_is_test_safe() {
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.token_expiry_hours, 24);
    assert!(!config.jwt_secret.is_empty());
}

#[test]
#[serial]
fn load_reads_local_environment() {
    run_with_env(
        || {
            unsafe {
                env::remove_var("APP_ENV");
                env::set_var("DATABASE_URL", "postgres://localhost:5432/campus_test");
                env::set_var("ACCESS_TOKEN_SECRET", "env-secret");
                env::set_var("ACCESS_TOKEN_EXPIRY_HOURS", "48");
                env::set_var("PORT", "9090");
            }

            let config = AppConfig::load();
            assert_eq!(config.env, Env::Local);
            assert_eq!(config.db_url, "postgres://localhost:5432/campus_test");
            assert_eq!(config.jwt_secret, "env-secret");
            assert_eq!(config.token_expiry_hours, 48);
            assert_eq!(config.port, 9090);
        },
        VARS.to_vec(),
    );
}

#[test]
#[serial]
fn load_falls_back_to_defaults_for_optional_values() {
    run_with_env(
        || {
            unsafe {
                env::remove_var("APP_ENV");
                env::set_var("DATABASE_URL", "postgres://localhost:5432/campus_test");
                env::remove_var("ACCESS_TOKEN_SECRET");
                env::set_var("ACCESS_TOKEN_EXPIRY_HOURS", "not-a-number");
                env::remove_var("PORT");
            }

            let config = AppConfig::load();
            // An unparseable expiry falls back rather than failing startup.
            assert_eq!(config.token_expiry_hours, 24);
            assert_eq!(config.port, 8000);
            assert!(!config.jwt_secret.is_empty());
        },
        VARS.to_vec(),
    );
}

#[test]
#[serial]
fn production_requires_the_signing_secret() {
    run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "production");
                env::set_var("DATABASE_URL", "postgres://localhost:5432/campus_prod");
                env::remove_var("ACCESS_TOKEN_SECRET");
            }

            let result = panic::catch_unwind(AppConfig::load);
            assert!(result.is_err());
        },
        VARS.to_vec(),
    );
}
