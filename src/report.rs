// Result assembly: packages an analysis for the presentation layer.
use crate::analyzer::red_flags::{RedFlag, RedFlagLevel, highest_level};
use crate::model::AnalysisResult;
use serde::Serialize;
use std::fmt;

/// Which path produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisSource {
    Remote,
    Fallback,
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisSource::Remote => write!(f, "remote"),
            AnalysisSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Serializes to exactly the `AnalysisResult` shape; the source and red
/// flags are kept for callers and logs only.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    #[serde(flatten)]
    pub result: AnalysisResult,
    #[serde(skip)]
    pub source: AnalysisSource,
    #[serde(skip)]
    pub red_flags: Vec<RedFlag>,
}

pub fn assemble(result: AnalysisResult, source: AnalysisSource) -> AssessmentReport {
    AssessmentReport {
        result,
        source,
        red_flags: Vec::new(),
    }
}

impl AssessmentReport {
    pub fn with_red_flags(mut self, red_flags: Vec<RedFlag>) -> Self {
        self.red_flags = red_flags;
        self
    }

    pub fn red_flag_level(&self) -> Option<RedFlagLevel> {
        highest_level(&self.red_flags)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
