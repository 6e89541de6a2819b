// Core structs: Level, Condition, AnalysisResult, error types
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Ordinal level shared by condition severity and overall urgency.
/// Variant order is the ordering: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::Medium => write!(f, "Medium"),
            Level::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "condition")]
    pub name: String,
    pub confidence: u8,
    pub severity: Level,
}

impl Condition {
    pub fn new(name: &str, confidence: u8, severity: Level) -> Self {
        Self {
            name: name.to_string(),
            confidence,
            severity,
        }
    }
}

/// Outcome of one classification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub possible_conditions: Vec<Condition>,
    pub recommendations: Vec<String>,
    pub urgency: Level,
    pub next_steps: String,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("symptom description is empty")]
    EmptyInput,
}

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("http error: {0}")]
    Http(String),
    #[error("remote service timed out")]
    Timeout,
    #[error("remote service responded with status {0}")]
    Status(u16),
    #[error("failed to decode remote response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("failed to build http client: {0}")]
    Client(String),
}
