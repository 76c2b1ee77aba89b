//! Cardio Advisor — interactive cardiovascular risk screening.
//!
//! Modular structure:
//! - [`intake`] — Raw submission model and terminal/JSON input surfaces
//! - [`features`] — RawInput → fixed-order feature vector encoding
//! - [`model`] — Classifier capability trait and ONNX-backed implementation
//! - [`risk`] — Prediction interpretation and advice selection
//! - [`report`] — Result rendering and assessment records
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod features;
pub mod intake;
pub mod logging;
pub mod model;
pub mod report;
pub mod risk;

pub use config::AdvisorConfig;
pub use features::{encode, FeatureVector, ValidationError};
pub use intake::{Gender, OrdinalLevel, RawInput};
pub use model::{ArtifactLoadError, Classifier, ClassifierError, OnnxClassifier};
pub use report::AssessmentRecord;
pub use risk::{PredictionResult, RiskAdvisor, RiskLabel};

/// Result type for advisor operations.
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Umbrella error for the screening pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("invalid submission: {0}")]
    Validation(#[from] features::ValidationError),

    #[error("classifier failure: {0}")]
    Classifier(#[from] model::ClassifierError),

    #[error("model artifact unavailable: {0}")]
    ArtifactLoad(#[from] model::ArtifactLoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
