//! `.env` loading against the real process environment.
//!
//! Tests here mutate process-wide state, so they serialize on a lock.

use loglens::config::dotenv::{load_dotenv_from, read_env_file};
use loglens::config::{Config, Overlay, ProcessEnv, validate};
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const VARS: [&str; 4] = [
    "GROQ_API_KEY",
    "DEEPSEEK_API_KEY",
    "ANALYSIS_ENGINE",
    "CACHE_TTL",
];

fn clear() {
    for var in VARS {
        unsafe { std::env::remove_var(var) };
    }
}

fn write_env(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(".env");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn env_file_fills_gaps_without_overriding() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear();
    let tmp = TempDir::new().unwrap();
    let path = write_env(&tmp, "GROQ_API_KEY=from-file\nANALYSIS_ENGINE=deepseek\n");

    unsafe { std::env::set_var("ANALYSIS_ENGINE", "groq") };
    load_dotenv_from(&path).unwrap();

    let config = Config::from_env().unwrap();
    assert_eq!(config.analysis_engine, "groq");
    assert!(config.groq_api_key.is_some());
    assert!(validate());

    clear();
}

#[test]
fn overlay_matches_loading_without_mutation() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear();
    let tmp = TempDir::new().unwrap();
    let path = write_env(&tmp, "DEEPSEEK_API_KEY=from-file\nCACHE_TTL=90\n");

    unsafe { std::env::set_var("CACHE_TTL", "30") };
    let file_vars = read_env_file(&path).unwrap();
    let config = Config::from_source(&Overlay::new(ProcessEnv, &file_vars)).unwrap();

    assert_eq!(config.cache_ttl, 30);
    assert!(config.deepseek_api_key.is_some());
    assert!(std::env::var("DEEPSEEK_API_KEY").is_err());

    clear();
}

#[test]
fn validate_reads_a_fresh_process_environment() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear();
    assert!(!validate());

    unsafe { std::env::set_var("DEEPSEEK_API_KEY", "sk-test") };
    assert!(validate());

    unsafe { std::env::set_var("ANALYSIS_ENGINE", "openai") };
    assert!(!validate());

    clear();
}

#[cfg(unix)]
#[test]
fn non_utf8_values_are_present_not_defaulted() {
    use loglens::error::Error;
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear();

    unsafe { std::env::set_var("CACHE_TTL", OsString::from_vec(vec![0x31, 0xff])) };
    let result = Config::from_env();
    assert!(
        matches!(result, Err(Error::Coercion { var: "CACHE_TTL", .. })),
        "garbled CACHE_TTL should not fall back to the default: {result:?}"
    );

    unsafe { std::env::remove_var("CACHE_TTL") };
    unsafe { std::env::set_var("GROQ_API_KEY", OsString::from_vec(vec![0x67, 0xff])) };
    let config = Config::from_env().unwrap();
    assert!(config.groq_api_key.is_some());
    assert!(validate());

    clear();
}

#[test]
fn missing_explicit_env_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(load_dotenv_from(&tmp.path().join("absent.env")).is_err());
}
