// Secondary pass for text that matched no catalog keyword.
use crate::model::{Condition, Level};
use crate::normalizer::contains_any;

/// A generic rule used when the catalog finds nothing.
#[derive(Debug)]
pub struct GenericRule {
    pub name: &'static str,
    /// Substrings that trigger the rule. Empty for the default rule.
    pub probes: &'static [&'static str],
    pub conditions: &'static [(&'static str, u8, Level)],
    pub recommendations: &'static [&'static str],
    /// `None` leaves the running urgency as it is.
    pub urgency: Option<Level>,
}

impl GenericRule {
    pub fn conditions(&self) -> Vec<Condition> {
        self.conditions
            .iter()
            .map(|&(name, confidence, severity)| Condition::new(name, confidence, severity))
            .collect()
    }

    pub fn recommendations(&self) -> Vec<String> {
        self.recommendations.iter().map(|r| r.to_string()).collect()
    }
}

/// Checked in this order; the first rule whose probe matches wins and the
/// rest are skipped, even if they would also match.
pub static GENERIC_RULES: &[GenericRule] = &[
    GenericRule {
        name: "pain",
        probes: &["pain", "hurt"],
        conditions: &[
            ("General Pain", 70, Level::Medium),
            ("Musculoskeletal Issue", 65, Level::Medium),
        ],
        recommendations: &[
            "Rest the affected area",
            "Apply ice or heat therapy",
            "Consider over-the-counter pain relievers",
            "Monitor for worsening symptoms",
        ],
        urgency: Some(Level::Medium),
    },
    GenericRule {
        name: "tiredness",
        probes: &["tired", "exhausted"],
        conditions: &[
            ("Fatigue", 80, Level::Low),
            ("Stress-Related Symptoms", 75, Level::Low),
        ],
        recommendations: &[
            "Ensure adequate sleep",
            "Practice stress management",
            "Maintain regular exercise routine",
            "Consider dietary improvements",
        ],
        urgency: None,
    },
    GenericRule {
        name: "illness",
        probes: &["sick", "ill"],
        conditions: &[
            ("General Illness", 75, Level::Medium),
            ("Viral Infection", 70, Level::Medium),
        ],
        recommendations: &[
            "Rest and stay hydrated",
            "Monitor symptoms closely",
            "Avoid contact with others",
            "Seek medical attention if symptoms worsen",
        ],
        urgency: Some(Level::Medium),
    },
];

pub static DEFAULT_RULE: GenericRule = GenericRule {
    name: "default",
    probes: &[],
    conditions: &[
        ("General Malaise", 60, Level::Low),
        ("Stress-Related Symptoms", 70, Level::Low),
        ("Seasonal Illness", 65, Level::Low),
    ],
    recommendations: &[
        "Rest and stay hydrated",
        "Monitor symptoms for 48-72 hours",
        "Practice stress management techniques",
        "Consider consulting a healthcare provider if symptoms persist",
    ],
    urgency: Some(Level::Low),
};

/// Picks exactly one rule for lowercased text.
pub fn select_rule(normalized_text: &str) -> &'static GenericRule {
    GENERIC_RULES
        .iter()
        .find(|rule| contains_any(normalized_text, rule.probes))
        .unwrap_or(&DEFAULT_RULE)
}
