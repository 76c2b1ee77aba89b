//! Integration test: encoding, validation, advisor contract checks, config
//! load, form parsing, missing artifact.

use cardio_advisor::{
    config::AdvisorConfig,
    encode,
    intake::{FormReader, Gender, OrdinalLevel, RawInput},
    model::{ArtifactLoadError, Classifier, ClassifierError, OnnxClassifier},
    risk::{RiskAdvisor, RiskLabel, AT_RISK_ADVICE, NO_RISK_ADVICE},
    FeatureVector,
};
use std::io::Cursor;
use std::path::Path;

/// Classifier stand-in with a fixed answer; lets the advisor be exercised
/// without the real artifact.
struct FakeClassifier {
    label: i64,
    proba: [f64; 2],
}

impl Classifier for FakeClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<i64, ClassifierError> {
        Ok(self.label)
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<[f64; 2], ClassifierError> {
        Ok(self.proba)
    }
}

fn sample_input() -> RawInput {
    RawInput {
        age: 50,
        gender: Gender::Male,
        height_cm: 170,
        weight_kg: 80,
        systolic_bp: 140,
        diastolic_bp: 90,
        cholesterol: OrdinalLevel::VeryHigh,
        glucose: OrdinalLevel::Normal,
        smoker: true,
        alcohol: false,
        physically_active: false,
    }
}

#[test]
fn encode_matches_trained_column_order() {
    let vector = encode(&sample_input()).unwrap();
    assert_eq!(
        vector.as_slice(),
        &[50.0, 1.0, 170.0, 80.0, 140.0, 90.0, 3.0, 1.0, 1.0, 0.0, 0.0]
    );
}

#[test]
fn feature_columns_match_dimension() {
    use cardio_advisor::features::{COLUMNS, FEATURE_DIM};
    assert_eq!(COLUMNS.len(), FEATURE_DIM);
    let vector = encode(&sample_input()).unwrap();
    assert_eq!(vector.as_slice().len(), COLUMNS.len());
}

#[test]
fn encode_is_pure() {
    let raw = sample_input();
    assert_eq!(encode(&raw).unwrap(), encode(&raw).unwrap());
}

#[test]
fn encode_gender_and_flag_codes() {
    let mut raw = sample_input();
    raw.gender = Gender::Female;
    raw.smoker = false;
    raw.physically_active = true;
    let vector = encode(&raw).unwrap();
    assert_eq!(vector.as_slice()[1], 2.0);
    assert_eq!(vector.as_slice()[8], 0.0);
    assert_eq!(vector.as_slice()[10], 1.0);
}

#[test]
fn encode_rejects_out_of_domain_fields() {
    let mut raw = sample_input();
    raw.age = 0;
    assert!(matches!(
        encode(&raw),
        Err(cardio_advisor::ValidationError::OutOfRange { field: "age", .. })
    ));

    let mut raw = sample_input();
    raw.weight_kg = 301;
    assert!(encode(&raw).is_err());

    let mut raw = sample_input();
    raw.diastolic_bp = 49;
    assert!(encode(&raw).is_err());
}

#[test]
fn advisor_at_risk_uses_p1() {
    let advisor = RiskAdvisor::new(FakeClassifier {
        label: 1,
        proba: [0.22, 0.78],
    });
    let result = advisor.assess(&encode(&sample_input()).unwrap()).unwrap();
    assert_eq!(result.risk_label, RiskLabel::AtRisk);
    assert!((result.confidence - 0.78).abs() < f64::EPSILON);
    assert_eq!(result.advice, AT_RISK_ADVICE);
}

#[test]
fn advisor_no_risk_uses_p0() {
    let advisor = RiskAdvisor::new(FakeClassifier {
        label: 0,
        proba: [0.9, 0.1],
    });
    let result = advisor.assess(&encode(&sample_input()).unwrap()).unwrap();
    assert_eq!(result.risk_label, RiskLabel::NoRisk);
    assert!((result.confidence - 0.9).abs() < f64::EPSILON);
    assert_eq!(result.advice, NO_RISK_ADVICE);
}

#[test]
fn advisor_is_deterministic() {
    let advisor = RiskAdvisor::new(FakeClassifier {
        label: 1,
        proba: [0.3, 0.7],
    });
    let vector = encode(&sample_input()).unwrap();
    assert_eq!(advisor.assess(&vector).unwrap(), advisor.assess(&vector).unwrap());
}

#[test]
fn advisor_rejects_bad_probability_mass() {
    let advisor = RiskAdvisor::new(FakeClassifier {
        label: 1,
        proba: [0.3, 0.3],
    });
    let err = advisor.assess(&encode(&sample_input()).unwrap()).unwrap_err();
    assert!(matches!(err, ClassifierError::MassMismatch { .. }));
}

#[test]
fn advisor_rejects_label_outside_binary() {
    let advisor = RiskAdvisor::new(FakeClassifier {
        label: 2,
        proba: [0.5, 0.5],
    });
    let err = advisor.assess(&encode(&sample_input()).unwrap()).unwrap_err();
    assert!(matches!(err, ClassifierError::LabelOutOfRange(2)));
}

#[test]
fn advisor_rejects_probability_out_of_range() {
    let advisor = RiskAdvisor::new(FakeClassifier {
        label: 1,
        proba: [-0.1, 1.1],
    });
    let err = advisor.assess(&encode(&sample_input()).unwrap()).unwrap_err();
    assert!(matches!(err, ClassifierError::ProbabilityOutOfRange { .. }));
}

#[test]
fn advisor_rejects_label_probability_disagreement() {
    // predict says at-risk, probabilities say the opposite
    let advisor = RiskAdvisor::new(FakeClassifier {
        label: 1,
        proba: [0.7, 0.3],
    });
    let err = advisor.assess(&encode(&sample_input()).unwrap()).unwrap_err();
    assert!(matches!(
        err,
        ClassifierError::LabelProbabilityMismatch { label: 1, .. }
    ));
}

#[test]
fn advice_always_has_four_items() {
    assert_eq!(RiskLabel::AtRisk.advice().len(), 4);
    assert_eq!(RiskLabel::NoRisk.advice().len(), 4);
    assert_ne!(RiskLabel::AtRisk.advice(), RiskLabel::NoRisk.advice());
}

#[test]
fn categorical_parsing() {
    assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
    assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!("very high".parse::<OrdinalLevel>().unwrap(), OrdinalLevel::VeryHigh);
    assert!("sometimes".parse::<OrdinalLevel>().is_err());
    assert!("other".parse::<Gender>().is_err());
}

#[test]
fn json_submission_deserializes() {
    let raw: RawInput = serde_json::from_str(
        r#"{
            "age": 50, "gender": "male", "height_cm": 170, "weight_kg": 80,
            "systolic_bp": 140, "diastolic_bp": 90,
            "cholesterol": "very_high", "glucose": "normal",
            "smoker": true, "alcohol": false, "physically_active": false
        }"#,
    )
    .unwrap();
    assert_eq!(raw, sample_input());
}

#[test]
fn form_reader_parses_a_full_submission() {
    let config = cardio_advisor::config::FormConfig::default();
    let reader = FormReader::new(&config);
    let answers = "50\nmale\n170\n80\n140\n90\nvery high\nnormal\nyes\nno\nno\n";
    let mut input = Cursor::new(answers);
    let mut out = Vec::new();
    let raw = reader.read_submission(&mut input, &mut out).unwrap().unwrap();
    assert_eq!(raw, sample_input());
}

#[test]
fn form_reader_applies_defaults_and_reprompts() {
    let config = cardio_advisor::config::FormConfig::default();
    let reader = FormReader::new(&config);
    // blank age takes the default; "abc" re-prompts the gender question
    let answers = "\nabc\nfemale\n\n\n\n\n\n\n\n\n\n";
    let mut input = Cursor::new(answers);
    let mut out = Vec::new();
    let raw = reader.read_submission(&mut input, &mut out).unwrap().unwrap();
    assert_eq!(raw.age, config.default_age);
    assert_eq!(raw.gender, Gender::Female);
    assert_eq!(raw.height_cm, config.default_height_cm);
    assert_eq!(raw.cholesterol, OrdinalLevel::Normal);
    assert!(!raw.smoker);
    let transcript = String::from_utf8(out).unwrap();
    assert!(transcript.contains("unrecognized answer: abc"));
}

#[test]
fn form_reader_stops_on_eof() {
    let config = cardio_advisor::config::FormConfig::default();
    let reader = FormReader::new(&config);
    let mut input = Cursor::new("50\nmale\n");
    let mut out = Vec::new();
    assert!(reader.read_submission(&mut input, &mut out).unwrap().is_none());
}

#[test]
fn config_load_default() {
    let c = AdvisorConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.form.default_age, 30);
    assert_eq!(c.form.default_systolic_bp, 120);
    assert!(!c.log.json);
}

#[test]
fn config_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "model_path": "models/forest.onnx",
            "form": {
                "default_age": 40, "default_height_cm": 165, "default_weight_kg": 60,
                "default_systolic_bp": 110, "default_diastolic_bp": 70
            },
            "log": { "level": "debug", "json": true }
        }"#,
    )
    .unwrap();
    let c = AdvisorConfig::load(&path);
    assert_eq!(c.model_path, Path::new("models/forest.onnx"));
    assert_eq!(c.form.default_age, 40);
    assert!(c.log.json);
}

#[test]
fn missing_artifact_is_a_load_error() {
    let err = OnnxClassifier::load(Path::new("nonexistent.onnx")).unwrap_err();
    assert!(matches!(err, ArtifactLoadError::NotFound(_)));
}
