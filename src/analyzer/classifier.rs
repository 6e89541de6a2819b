use crate::analyzer::heuristics::select_rule;
use crate::catalog::PatternCatalog;
use crate::model::{AnalysisResult, Condition, Level};
use crate::normalizer::normalize_text;
use crate::utils::{dedup_preserving_order, push_if_absent};
use std::sync::Arc;
use tracing::debug;

/// Recommendations every result carries, appended when not already present.
pub const BASELINE_RECOMMENDATIONS: [&str; 2] =
    ["Rest and stay hydrated", "Monitor symptoms for 48-72 hours"];

pub const NEXT_STEPS_HIGH: &str = "Seek medical attention immediately. These symptoms may require urgent evaluation by a healthcare provider.";
pub const NEXT_STEPS_MEDIUM: &str = "Monitor symptoms closely. If they worsen or persist beyond 3-5 days, consult a healthcare provider.";
pub const NEXT_STEPS_LOW: &str = "Continue monitoring symptoms. If they persist beyond 7 days or worsen, consult a healthcare provider.";

/// Trait defining the interface for a symptom classifier.
pub trait Classifier {
    fn classify(&self, raw_text: &str) -> AnalysisResult;
}

/// Deterministic keyword classifier over a shared read-only catalog.
#[derive(Debug, Clone)]
pub struct ClassifierImpl {
    catalog: Arc<PatternCatalog>,
}

impl ClassifierImpl {
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self { catalog }
    }

    pub fn with_reference_catalog() -> Self {
        Self::new(PatternCatalog::reference())
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }
}

impl Default for ClassifierImpl {
    fn default() -> Self {
        Self::with_reference_catalog()
    }
}

impl Classifier for ClassifierImpl {
    /// Total over any input: never fails and never returns an empty
    /// condition or recommendation list.
    fn classify(&self, raw_text: &str) -> AnalysisResult {
        let text = normalize_text(raw_text);

        let mut conditions: Vec<Condition> = Vec::new();
        let mut recommendations: Vec<String> = Vec::new();
        let mut urgency = Level::Low;

        for pattern in self.catalog.lookup(&text) {
            debug!("Matched keyword '{}' ({})", pattern.keyword, pattern.urgency);
            conditions.extend(pattern.conditions.iter().cloned());
            recommendations.extend(pattern.recommendations.iter().cloned());
            urgency = urgency.max(pattern.urgency);
        }

        if conditions.is_empty() {
            let rule = select_rule(&text);
            debug!("No keyword matched, using generic rule '{}'", rule.name);
            conditions = rule.conditions();
            recommendations = rule.recommendations();
            if let Some(rule_urgency) = rule.urgency {
                urgency = urgency.max(rule_urgency);
            }
        }

        let mut recommendations = dedup_preserving_order(recommendations);
        for baseline in BASELINE_RECOMMENDATIONS {
            push_if_absent(&mut recommendations, baseline);
        }

        AnalysisResult {
            possible_conditions: conditions,
            recommendations,
            urgency,
            next_steps: next_steps(urgency).to_string(),
        }
    }
}

pub fn next_steps(urgency: Level) -> &'static str {
    match urgency {
        Level::High => NEXT_STEPS_HIGH,
        Level::Medium => NEXT_STEPS_MEDIUM,
        Level::Low => NEXT_STEPS_LOW,
    }
}
