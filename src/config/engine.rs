//! Analysis engine names accepted by the service.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisEngine {
    Groq,
    Deepseek,
    Hybrid,
}

impl AnalysisEngine {
    pub const ALL: [AnalysisEngine; 3] = [Self::Groq, Self::Deepseek, Self::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::Deepseek => "deepseek",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for AnalysisEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisEngine {
    type Err = String;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str() == s)
            .ok_or_else(|| format!("unknown analysis engine: {s}"))
    }
}
