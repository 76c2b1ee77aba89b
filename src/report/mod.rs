//! Presentation of screening outcomes: terminal result view, JSON assessment
//! records, and the static informational page.

use crate::risk::{PredictionResult, RiskLabel};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use uuid::Uuid;

/// Machine-readable record of one screening; emitted as a single JSON line.
/// Lives only in the presentation layer; nothing is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentRecord {
    pub id: String,
    pub ts: DateTime<Utc>,
    pub risk_label: RiskLabel,
    pub confidence: f64,
    pub advice: [&'static str; 4],
}

impl AssessmentRecord {
    pub fn new(result: &PredictionResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ts: Utc::now(),
            risk_label: result.risk_label,
            confidence: result.confidence,
            advice: result.advice,
        }
    }
}

fn banner(label: RiskLabel) -> &'static str {
    match label {
        RiskLabel::AtRisk => "Elevated cardiovascular risk detected",
        RiskLabel::NoRisk => "No cardiovascular risk detected",
    }
}

/// Render the result view: risk banner with the confidence as a percentage,
/// then the advice as a bulleted list.
pub fn render_result<W: Write>(out: &mut W, result: &PredictionResult) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} (probability: {:.1}%)",
        banner(result.risk_label),
        result.confidence * 100.0
    )?;
    writeln!(out)?;
    writeln!(out, "Advice:")?;
    for item in &result.advice {
        writeln!(out, "  - {}", item)?;
    }
    writeln!(out)
}

/// Static informational page shown on request. Pure content display.
pub const INFO_PAGE: &str = "\
About cardiovascular disease

Cardiovascular diseases cover disorders of the heart and blood vessels.
They often result from fat building up inside the arteries, which can
obstruct blood flow.

Risk factors:
  - High blood pressure
  - Elevated cholesterol or glucose
  - Tobacco and alcohol use
  - Lack of physical activity
  - Obesity or advanced age

Prevention:
  - Exercise regularly
  - Eat a balanced diet
  - Avoid tobacco and limit alcohol
  - Check your blood pressure regularly
";

pub fn render_info<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.write_all(INFO_PAGE.as_bytes())
}
