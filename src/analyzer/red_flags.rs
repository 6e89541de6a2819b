// Red-flag phrases that call for emergency or urgent care.
use crate::normalizer::{contains_keyword, normalize_text};
use serde::Serialize;
use std::fmt;

/// How soon a red flag needs care. `Urgent < Emergency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedFlagLevel {
    Urgent,
    Emergency,
}

impl fmt::Display for RedFlagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedFlagLevel::Urgent => write!(f, "urgent"),
            RedFlagLevel::Emergency => write!(f, "emergency"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedFlag {
    pub term: &'static str,
    pub note: &'static str,
    pub level: RedFlagLevel,
}

impl fmt::Display for RedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.term, self.note)
    }
}

pub static EMERGENCY_FLAGS: &[(&str, &str)] = &[
    ("chest pain", "Chest pain can indicate a heart emergency."),
    ("pressure in chest", "Chest pressure is concerning for cardiac issues."),
    ("shortness of breath", "Severe breathing difficulty can be life-threatening."),
    ("difficulty breathing", "Breathing difficulty can be life-threatening."),
    ("blue lips", "Low oxygen level is an emergency."),
    ("confusion", "New confusion may indicate serious conditions."),
    ("fainting", "Fainting can indicate serious underlying issues."),
    ("severe bleeding", "Uncontrolled bleeding is an emergency."),
    ("stiff neck", "Stiff neck with fever can be meningitis."),
    ("worst headache of life", "Could be hemorrhage; seek emergency care."),
    ("numbness on one side", "Stroke-like symptoms require emergency care."),
    ("weakness on one side", "Stroke-like symptoms require emergency care."),
    ("seizure", "Seizure can be an emergency."),
    ("pregnant and bleeding", "Bleeding during pregnancy can be an emergency."),
];

pub static URGENT_FLAGS: &[(&str, &str)] = &[
    ("high fever", "High fever can be concerning, especially with other symptoms."),
    ("fever", "Persistent fever may require evaluation."),
    ("severe abdominal pain", "Severe abdominal pain requires urgent assessment."),
    ("blood in stool", "GI bleeding needs prompt evaluation."),
    ("blood in urine", "Hematuria requires medical evaluation."),
    ("dehydration", "Dehydration requires attention."),
    ("worsening", "Worsening symptoms warrant evaluation."),
];

/// Every red flag whose term appears in the text, emergency flags first,
/// each table in declaration order. Overlapping terms ("high fever" and
/// "fever") both match.
pub fn find_red_flags(raw_text: &str) -> Vec<RedFlag> {
    let text = normalize_text(raw_text);
    let tables = [
        (EMERGENCY_FLAGS, RedFlagLevel::Emergency),
        (URGENT_FLAGS, RedFlagLevel::Urgent),
    ];

    tables
        .iter()
        .flat_map(|&(table, level)| {
            table
                .iter()
                .filter(|(term, _)| contains_keyword(&text, term))
                .map(move |&(term, note)| RedFlag { term, note, level })
        })
        .collect()
}

/// The most pressing level among the flags, if any.
pub fn highest_level(flags: &[RedFlag]) -> Option<RedFlagLevel> {
    flags.iter().map(|f| f.level).max()
}
