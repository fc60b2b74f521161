//! Startup validation.
//!
//! Only two things are checked: some LLM credential exists, and the
//! analysis engine is a known name. Numeric fields are accepted as loaded,
//! including zero and negative values.

use super::env::{EnvSource, ProcessEnv};
use super::secrets;
use super::{AnalysisEngine, Config};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("At least one API key (GROQ_API_KEY or DEEPSEEK_API_KEY) is required")]
    MissingApiKey,

    #[error("ANALYSIS_ENGINE must be one of: ['groq', 'deepseek', 'hybrid']")]
    UnknownEngine(String),
}

impl Config {
    /// Check the record. The credential check runs before the engine check.
    pub fn check(&self) -> Result<(), ValidationFailure> {
        if !secrets::is_present(self.groq_api_key.as_ref())
            && !secrets::is_present(self.deepseek_api_key.as_ref())
        {
            return Err(ValidationFailure::MissingApiKey);
        }
        if self.analysis_engine.parse::<AnalysisEngine>().is_err() {
            return Err(ValidationFailure::UnknownEngine(self.analysis_engine.clone()));
        }
        Ok(())
    }

    /// [`check`](Self::check), printing a one-line diagnostic to stderr on failure.
    pub fn is_valid(&self) -> bool {
        match self.check() {
            Ok(()) => true,
            Err(failure) => {
                tracing::debug!(%failure, "configuration invalid");
                eprintln!("Error: {failure}");
                false
            }
        }
    }
}

/// Load a fresh configuration from the process environment and check it.
pub fn validate() -> bool {
    validate_source(&ProcessEnv)
}

/// Load a fresh configuration from `env` and check it.
///
/// A variable that fails to parse also counts as invalid.
pub fn validate_source<S: EnvSource + ?Sized>(env: &S) -> bool {
    match Config::from_source(env) {
        Ok(config) => config.is_valid(),
        Err(e) => {
            tracing::debug!(error = %e, "configuration failed to load");
            eprintln!("Error: {e}");
            false
        }
    }
}
