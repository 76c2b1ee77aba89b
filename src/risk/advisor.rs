//! Maps the classifier's raw output onto a [`PredictionResult`], rejecting
//! anything that breaks the artifact contract.

use crate::features::FeatureVector;
use crate::model::{Classifier, ClassifierError};
use serde::Serialize;

/// Tolerance when checking that the two class probabilities sum to 1.
pub const PROBABILITY_MASS_TOLERANCE: f64 = 1e-6;

/// Advice shown when the classifier flags elevated risk.
pub const AT_RISK_ADVICE: [&str; 4] = [
    "Reduce alcohol consumption and stop smoking.",
    "Get at least 30 minutes of physical exercise every day.",
    "Monitor blood pressure and cholesterol regularly.",
    "Eat a balanced diet low in saturated fat.",
];

/// Advice shown when no risk is detected.
pub const NO_RISK_ADVICE: [&str; 4] = [
    "Maintain a healthy lifestyle.",
    "Keep up regular physical activity.",
    "Watch your diet and day-to-day habits.",
    "Schedule periodic health check-ups.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    AtRisk,
    NoRisk,
}

impl RiskLabel {
    /// The fixed 4-item advice list for this label. Selection depends on the
    /// label alone, never on the confidence value.
    pub fn advice(self) -> [&'static str; 4] {
        match self {
            RiskLabel::AtRisk => AT_RISK_ADVICE,
            RiskLabel::NoRisk => NO_RISK_ADVICE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLabel::AtRisk => "at_risk",
            RiskLabel::NoRisk => "no_risk",
        }
    }
}

/// Outcome of one screening submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub risk_label: RiskLabel,
    /// Probability mass the classifier put on the predicted label.
    pub confidence: f64,
    pub advice: [&'static str; 4],
}

/// Stateless request/response interpreter around an explicitly supplied
/// classifier handle.
pub struct RiskAdvisor<C: Classifier> {
    classifier: C,
}

impl<C: Classifier> RiskAdvisor<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// Run one prediction. Deterministic for a fixed classifier and vector;
    /// repeated calls return identical results.
    pub fn assess(&self, features: &FeatureVector) -> Result<PredictionResult, ClassifierError> {
        let label = self.classifier.predict(features)?;
        let [p0, p1] = self.classifier.predict_proba(features)?;

        for (class, p) in [p0, p1].into_iter().enumerate() {
            if !(0.0..=1.0).contains(&p) {
                return Err(ClassifierError::ProbabilityOutOfRange { class, value: p });
            }
        }
        if ((p0 + p1) - 1.0).abs() > PROBABILITY_MASS_TOLERANCE {
            return Err(ClassifierError::MassMismatch { p0, p1 });
        }

        let (risk_label, confidence) = match label {
            0 => (RiskLabel::NoRisk, p0),
            1 => (RiskLabel::AtRisk, p1),
            other => return Err(ClassifierError::LabelOutOfRange(other)),
        };

        // The predicted label must agree with the probability argmax.
        if confidence < 0.5 && p0 != p1 {
            return Err(ClassifierError::LabelProbabilityMismatch { label, p0, p1 });
        }

        Ok(PredictionResult {
            risk_label,
            confidence,
            advice: risk_label.advice(),
        })
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }
}
