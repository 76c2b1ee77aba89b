//! Interpretation of classifier output into a risk label, confidence, and advice.

mod advisor;

pub use advisor::{
    PredictionResult, RiskAdvisor, RiskLabel, AT_RISK_ADVICE, NO_RISK_ADVICE,
    PROBABILITY_MASS_TOLERANCE,
};
