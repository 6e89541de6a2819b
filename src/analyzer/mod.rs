// Analyzer module: keyword classification, generic fallback rules, red flags.

pub mod classifier;
pub mod heuristics;
pub mod red_flags;

// Re-export the main classifier implementation for ease of use.
pub use classifier::{Classifier, ClassifierImpl};
pub use red_flags::{RedFlag, RedFlagLevel, find_red_flags};
