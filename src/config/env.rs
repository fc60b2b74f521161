//! Sources of environment variables.
//!
//! The loader never reads `std::env` directly; it asks an [`EnvSource`].
//! Production code passes [`ProcessEnv`], tests pass a plain map.

use std::collections::{BTreeMap, HashMap};

/// A read-only mapping from variable name to string value.
pub trait EnvSource {
    /// Look up `name`. `None` means the variable is not set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The live process environment.
///
/// A set variable is always present; invalid UTF-8 is replaced with
/// U+FFFD, so a garbled number still fails to parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Two sources stacked: `upper` wins, `lower` fills the gaps.
///
/// `Overlay::new(ProcessEnv, file_vars)` gives `.env` semantics (the
/// process environment is never overridden) without mutating the process.
#[derive(Debug, Clone)]
pub struct Overlay<U, L> {
    upper: U,
    lower: L,
}

impl<U: EnvSource, L: EnvSource> Overlay<U, L> {
    pub fn new(upper: U, lower: L) -> Self {
        Self { upper, lower }
    }
}

impl<U: EnvSource, L: EnvSource> EnvSource for Overlay<U, L> {
    fn var(&self, name: &str) -> Option<String> {
        self.upper.var(name).or_else(|| self.lower.var(name))
    }
}
