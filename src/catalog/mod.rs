// Catalog module: the keyword → findings table the classifier scans.

pub mod reference;

use crate::model::{Condition, ConfigError, Level};
use crate::normalizer::contains_keyword;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::sync::{Arc, OnceLock};

/// One keyword and everything a match on it contributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub keyword: String,
    pub conditions: Vec<Condition>,
    pub recommendations: Vec<String>,
    pub urgency: Level,
}

/// Immutable, ordered list of patterns. Built once at startup and shared
/// read-only between all classification calls.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<PatternEntry>,
}

impl PatternCatalog {
    /// Validates the patterns and lowercases their keywords.
    pub fn new(patterns: Vec<PatternEntry>) -> Result<Self, ConfigError> {
        if patterns.is_empty() {
            return Err(ConfigError::InvalidCatalog("catalog has no patterns".into()));
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(patterns.len());
        for mut pattern in patterns {
            let keyword = pattern.keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(ConfigError::InvalidCatalog("empty keyword".into()));
            }
            if !seen.insert(keyword.clone()) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "duplicate keyword '{}'",
                    keyword
                )));
            }
            if pattern.conditions.is_empty() {
                return Err(ConfigError::InvalidCatalog(format!(
                    "keyword '{}' has no conditions",
                    keyword
                )));
            }
            if let Some(c) = pattern.conditions.iter().find(|c| c.confidence > 100) {
                return Err(ConfigError::InvalidCatalog(format!(
                    "condition '{}' has confidence {} (max 100)",
                    c.name, c.confidence
                )));
            }
            pattern.keyword = keyword;
            normalized.push(pattern);
        }

        Ok(Self {
            patterns: normalized,
        })
    }

    /// The built-in catalog, constructed on first use.
    pub fn reference() -> Arc<PatternCatalog> {
        static REFERENCE: OnceLock<Arc<PatternCatalog>> = OnceLock::new();
        REFERENCE
            .get_or_init(|| {
                Arc::new(PatternCatalog {
                    patterns: reference::patterns(),
                })
            })
            .clone()
    }

    /// Parses a JSON array of pattern entries.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let patterns: Vec<PatternEntry> = serde_json::from_str(content)?;
        Self::new(patterns)
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Every pattern whose keyword is a substring of `normalized_text`,
    /// in declaration order. The text must already be lowercased.
    pub fn lookup(&self, normalized_text: &str) -> Vec<&PatternEntry> {
        self.patterns
            .iter()
            .filter(|p| contains_keyword(normalized_text, &p.keyword))
            .collect()
    }

    pub fn patterns(&self) -> &[PatternEntry] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
