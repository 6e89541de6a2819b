pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod model;
pub mod normalizer;
pub mod report;
pub mod service;
pub mod utils;

pub use analyzer::{Classifier, ClassifierImpl};
pub use catalog::{PatternCatalog, PatternEntry};
pub use model::{AnalysisError, AnalysisResult, Condition, Level};
pub use report::{AnalysisSource, AssessmentReport};
pub use service::AnalysisService;
