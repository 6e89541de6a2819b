use crate::model::{AnalysisResult, RemoteError};

/// An analyzer that may fail, e.g. one backed by a network service.
#[async_trait::async_trait]
pub trait SymptomAnalyzer: Send + Sync {
    async fn analyze(&self, symptoms: &str) -> Result<AnalysisResult, RemoteError>;
}
