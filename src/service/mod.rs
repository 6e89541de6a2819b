pub mod remote;
pub mod traits;

pub use remote::RemoteAnalyzer;
pub use traits::SymptomAnalyzer;

use crate::analyzer::{Classifier, ClassifierImpl, RedFlagLevel, find_red_flags};
use crate::config::AppConfig;
use crate::model::{AnalysisError, ConfigError};
use crate::report::{AnalysisSource, AssessmentReport, assemble};
use tracing::{info, warn};

/// Entry point for callers: validates input, tries the remote service when
/// one is configured, and falls back to the local classifier on any
/// remote failure. Remote failures are never returned to the caller.
pub struct AnalysisService {
    remote: Option<Box<dyn SymptomAnalyzer>>,
    classifier: ClassifierImpl,
}

impl AnalysisService {
    pub fn new(classifier: ClassifierImpl, remote: Option<Box<dyn SymptomAnalyzer>>) -> Self {
        Self { remote, classifier }
    }

    /// Local classifier only.
    pub fn offline(classifier: ClassifierImpl) -> Self {
        Self::new(classifier, None)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = config.load_catalog()?;
        info!("Pattern catalog loaded: {} patterns", catalog.len());

        let remote: Option<Box<dyn SymptomAnalyzer>> = match &config.remote {
            Some(remote_cfg) => {
                let analyzer = RemoteAnalyzer::new(remote_cfg)
                    .map_err(|e| ConfigError::Client(e.to_string()))?;
                info!("Remote analysis enabled: {}", analyzer.endpoint());
                Some(Box::new(analyzer))
            }
            None => {
                info!("No remote service configured, using local classifier only");
                None
            }
        };

        Ok(Self::new(ClassifierImpl::new(catalog), remote))
    }

    pub fn classifier(&self) -> &ClassifierImpl {
        &self.classifier
    }

    pub async fn analyze(&self, symptoms: &str) -> Result<AssessmentReport, AnalysisError> {
        if symptoms.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let red_flags = find_red_flags(symptoms);
        for flag in &red_flags {
            match flag.level {
                RedFlagLevel::Emergency => warn!("🚨 Red flag ({}): {}", flag.level, flag),
                RedFlagLevel::Urgent => info!("Red flag ({}): {}", flag.level, flag),
            }
        }

        if let Some(remote) = &self.remote {
            match remote.analyze(symptoms).await {
                Ok(result) => {
                    info!("✅ Remote analysis succeeded (urgency {})", result.urgency);
                    let report = assemble(result, AnalysisSource::Remote);
                    return Ok(report.with_red_flags(red_flags));
                }
                Err(e) => {
                    warn!("Remote analysis failed, using fallback: {}", e);
                }
            }
        }

        let result = self.classifier.classify(symptoms);
        info!(
            "Fallback analysis: {} conditions, urgency {}",
            result.possible_conditions.len(),
            result.urgency
        );
        Ok(assemble(result, AnalysisSource::Fallback).with_red_flags(red_flags))
    }
}
