//! Typed configuration from environment variables.
//!
//! Built once at startup and passed by reference to whatever needs it.
//! Every field has a literal default except the two API keys; a numeric
//! variable that does not parse fails the whole load.
//! Sensitive values are wrapped in secrecy::SecretString to prevent log leaks.

pub mod dotenv;
pub mod engine;
pub mod env;
pub mod parse;
pub mod secrets;
pub mod validate;

pub use engine::AnalysisEngine;
pub use env::{EnvSource, Overlay, ProcessEnv};
pub use validate::{ValidationFailure, validate, validate_source};

use crate::error::Result;
use secrecy::SecretString;
use serde::Serialize;

pub const SECRET_KEY: &str = "SECRET_KEY";
pub const DEBUG: &str = "DEBUG";
/// Older name for [`DEBUG`], read only when `DEBUG` is unset.
pub const FLASK_DEBUG: &str = "FLASK_DEBUG";
pub const GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";
pub const GROQ_MODEL: &str = "GROQ_MODEL";
pub const DEEPSEEK_MODEL: &str = "DEEPSEEK_MODEL";
pub const DEEPSEEK_BASE_URL: &str = "DEEPSEEK_BASE_URL";
pub const ANALYSIS_ENGINE: &str = "ANALYSIS_ENGINE";
pub const CACHE_TTL: &str = "CACHE_TTL";
pub const RATE_LIMIT_PER_MINUTE: &str = "RATE_LIMIT_PER_MINUTE";
pub const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
pub const MIN_CONFIDENCE_THRESHOLD: &str = "MIN_CONFIDENCE_THRESHOLD";
pub const MAX_LOG_SIZE: &str = "MAX_LOG_SIZE";
pub const ENABLE_BEHAVIORAL_ANALYSIS: &str = "ENABLE_BEHAVIORAL_ANALYSIS";

pub const DEFAULT_SECRET_KEY: &str = "your-secret-key";
pub const DEFAULT_GROQ_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";
pub const DEFAULT_DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_ANALYSIS_ENGINE: &str = "hybrid";
/// 30 minutes.
pub const DEFAULT_CACHE_TTL: i64 = 1800;
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: i64 = 60;
pub const DEFAULT_ALLOWED_ORIGINS: &str = "*";
pub const DEFAULT_MIN_CONFIDENCE_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MAX_LOG_SIZE: i64 = 100_000;

/// Every recognised variable with its default, as written in the environment.
pub const VARS: [(&str, &str); 14] = [
    (SECRET_KEY, DEFAULT_SECRET_KEY),
    (DEBUG, "false"),
    (GROQ_API_KEY, ""),
    (DEEPSEEK_API_KEY, ""),
    (GROQ_MODEL, DEFAULT_GROQ_MODEL),
    (DEEPSEEK_MODEL, DEFAULT_DEEPSEEK_MODEL),
    (DEEPSEEK_BASE_URL, DEFAULT_DEEPSEEK_BASE_URL),
    (ANALYSIS_ENGINE, DEFAULT_ANALYSIS_ENGINE),
    (CACHE_TTL, "1800"),
    (RATE_LIMIT_PER_MINUTE, "60"),
    (ALLOWED_ORIGINS, DEFAULT_ALLOWED_ORIGINS),
    (MIN_CONFIDENCE_THRESHOLD, "0.7"),
    (MAX_LOG_SIZE, "100000"),
    (ENABLE_BEHAVIORAL_ANALYSIS, "true"),
];

#[derive(Debug)]
pub struct Config {
    pub secret_key: SecretString,
    pub debug: bool,

    pub groq_api_key: Option<SecretString>,
    pub deepseek_api_key: Option<SecretString>,

    pub groq_model: String,
    pub deepseek_model: String,
    pub deepseek_base_url: String,

    /// Free-form at load time; only [`Config::check`] restricts it.
    pub analysis_engine: String,
    /// Seconds. Not range-checked.
    pub cache_ttl: i64,
    pub rate_limit_per_minute: i64,
    pub allowed_origins: Vec<String>,

    pub min_confidence_threshold: f64,
    pub max_log_size: i64,
    pub enable_behavioral_analysis: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secret_key: SecretString::from(DEFAULT_SECRET_KEY.to_string()),
            debug: false,
            groq_api_key: None,
            deepseek_api_key: None,
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            deepseek_model: DEFAULT_DEEPSEEK_MODEL.to_string(),
            deepseek_base_url: DEFAULT_DEEPSEEK_BASE_URL.to_string(),
            analysis_engine: DEFAULT_ANALYSIS_ENGINE.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            rate_limit_per_minute: DEFAULT_RATE_LIMIT_PER_MINUTE,
            allowed_origins: vec![DEFAULT_ALLOWED_ORIGINS.to_string()],
            min_confidence_threshold: DEFAULT_MIN_CONFIDENCE_THRESHOLD,
            max_log_size: DEFAULT_MAX_LOG_SIZE,
            enable_behavioral_analysis: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// In local dev, call [`dotenv::load_dotenv`] before this.
    /// In production, the service manager provides the vars.
    pub fn from_env() -> Result<Self> {
        Self::from_source(&ProcessEnv)
    }

    /// Load configuration from an explicit variable mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Coercion`](crate::error::Error::Coercion) when a
    /// numeric variable is set to something that is not a number.
    pub fn from_source<S: EnvSource + ?Sized>(env: &S) -> Result<Self> {
        let text =
            |name: &str, default: &str| env.var(name).unwrap_or_else(|| default.to_string());
        let flag =
            |name: &str, default: bool| env.var(name).map_or(default, |v| parse::truthy(&v));

        let debug = match env.var(DEBUG) {
            Some(raw) => parse::truthy(&raw),
            None => flag(FLASK_DEBUG, false),
        };

        let config = Self {
            secret_key: SecretString::from(text(SECRET_KEY, DEFAULT_SECRET_KEY)),
            debug,
            groq_api_key: env.var(GROQ_API_KEY).map(SecretString::from),
            deepseek_api_key: env.var(DEEPSEEK_API_KEY).map(SecretString::from),
            groq_model: text(GROQ_MODEL, DEFAULT_GROQ_MODEL),
            deepseek_model: text(DEEPSEEK_MODEL, DEFAULT_DEEPSEEK_MODEL),
            deepseek_base_url: text(DEEPSEEK_BASE_URL, DEFAULT_DEEPSEEK_BASE_URL),
            analysis_engine: text(ANALYSIS_ENGINE, DEFAULT_ANALYSIS_ENGINE),
            cache_ttl: integer_var(env, CACHE_TTL, DEFAULT_CACHE_TTL)?,
            rate_limit_per_minute: integer_var(
                env,
                RATE_LIMIT_PER_MINUTE,
                DEFAULT_RATE_LIMIT_PER_MINUTE,
            )?,
            allowed_origins: parse::comma_list(&text(ALLOWED_ORIGINS, DEFAULT_ALLOWED_ORIGINS)),
            min_confidence_threshold: match env.var(MIN_CONFIDENCE_THRESHOLD) {
                Some(raw) => parse::float(MIN_CONFIDENCE_THRESHOLD, &raw)?,
                None => DEFAULT_MIN_CONFIDENCE_THRESHOLD,
            },
            max_log_size: integer_var(env, MAX_LOG_SIZE, DEFAULT_MAX_LOG_SIZE)?,
            enable_behavioral_analysis: flag(ENABLE_BEHAVIORAL_ANALYSIS, true),
        };

        tracing::debug!(
            engine = %config.analysis_engine,
            origins = config.allowed_origins.len(),
            debug = config.debug,
            "configuration loaded"
        );
        Ok(config)
    }

    /// The typed engine, or `None` if `analysis_engine` is not a known name.
    pub fn engine(&self) -> Option<AnalysisEngine> {
        self.analysis_engine.parse().ok()
    }

    /// A serializable view with every secret redacted.
    pub fn redacted(&self) -> RedactedConfig<'_> {
        RedactedConfig {
            secret_key: secrets::REDACTED,
            debug: self.debug,
            groq_api_key: secrets::presence(self.groq_api_key.as_ref()),
            deepseek_api_key: secrets::presence(self.deepseek_api_key.as_ref()),
            groq_model: &self.groq_model,
            deepseek_model: &self.deepseek_model,
            deepseek_base_url: &self.deepseek_base_url,
            analysis_engine: &self.analysis_engine,
            cache_ttl: self.cache_ttl,
            rate_limit_per_minute: self.rate_limit_per_minute,
            allowed_origins: &self.allowed_origins,
            min_confidence_threshold: self.min_confidence_threshold,
            max_log_size: self.max_log_size,
            enable_behavioral_analysis: self.enable_behavioral_analysis,
        }
    }
}

/// What `loglens show` prints. Keys use the environment variable names.
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct RedactedConfig<'a> {
    pub secret_key: &'static str,
    pub debug: bool,
    pub groq_api_key: &'static str,
    pub deepseek_api_key: &'static str,
    pub groq_model: &'a str,
    pub deepseek_model: &'a str,
    pub deepseek_base_url: &'a str,
    pub analysis_engine: &'a str,
    pub cache_ttl: i64,
    pub rate_limit_per_minute: i64,
    pub allowed_origins: &'a [String],
    pub min_confidence_threshold: f64,
    pub max_log_size: i64,
    pub enable_behavioral_analysis: bool,
}

fn integer_var<S: EnvSource + ?Sized>(env: &S, name: &'static str, default: i64) -> Result<i64> {
    match env.var(name) {
        Some(raw) => parse::integer(name, &raw),
        None => Ok(default),
    }
}
