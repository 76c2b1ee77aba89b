//! ONNX Runtime inference for the cardio classifier. Input: [1, 11] f32 row.
//! The artifact carries two outputs, an int64 label and a [1, 2] f32
//! probability tensor (a random-forest export with zipmap disabled).

use super::{ArtifactLoadError, Classifier, ClassifierError};
use crate::features::{FeatureVector, FEATURE_DIM};
use ndarray::Array2;
use ort::session::Session;
use ort::value::{DynValue, Tensor};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static ORT_ENV: OnceLock<()> = OnceLock::new();

fn init_env() {
    ORT_ENV.get_or_init(|| {
        ort::init()
            .with_name("cardio-advisor")
            .commit()
            .expect("ORT environment");
    });
}

#[derive(Debug)]
pub struct OnnxClassifier {
    // ONNX Runtime does not promise thread-safe Run on one session; inference
    // is serialized so the handle can be shared.
    session: Mutex<Session>,
    input_name: String,
}

impl OnnxClassifier {
    /// Load the artifact once at startup. A missing or unreadable artifact
    /// is an [`ArtifactLoadError`]; there is no degraded mode.
    pub fn load(path: &Path) -> Result<Self, ArtifactLoadError> {
        if !path.exists() {
            return Err(ArtifactLoadError::NotFound(path.to_path_buf()));
        }
        init_env();

        let session = Session::builder()?.commit_from_file(path)?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());

        Ok(Self {
            session: Mutex::new(session),
            input_name,
        })
    }

    fn run_inference<T>(
        &self,
        features: &FeatureVector,
        output_index: usize,
        output_name: &'static str,
        extract: impl FnOnce(&DynValue) -> Result<T, ClassifierError>,
    ) -> Result<T, ClassifierError> {
        let row = features.as_slice();
        if row.len() != FEATURE_DIM {
            return Err(ClassifierError::WrongVectorLength {
                expected: FEATURE_DIM,
                got: row.len(),
            });
        }

        let arr = Array2::from_shape_vec((1, FEATURE_DIM), row.to_vec())
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let input = Tensor::from_array(arr)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;
        let inputs = ort::inputs![self.input_name.as_str() => input];

        let mut session = self
            .session
            .lock()
            .map_err(|_| ClassifierError::Inference("session lock poisoned".to_string()))?;
        let outputs = session
            .run(inputs)
            .map_err(|e| ClassifierError::Inference(e.to_string()))?;

        let out = if output_index < outputs.len() {
            &outputs[output_index]
        } else {
            return Err(ClassifierError::MissingOutput(output_name));
        };
        extract(out)
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, ClassifierError> {
        self.run_inference(features, 0, "label", |out| {
            let (_shape, data) = out
                .try_extract_tensor::<i64>()
                .map_err(|e| ClassifierError::Inference(e.to_string()))?;
            data.first()
                .copied()
                .ok_or(ClassifierError::MissingOutput("label"))
        })
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], ClassifierError> {
        self.run_inference(features, 1, "probability", |out| {
            let (_shape, probs) = out
                .try_extract_tensor::<f32>()
                .map_err(|e| ClassifierError::Inference(e.to_string()))?;
            if probs.len() != 2 {
                return Err(ClassifierError::BadProbabilityArity(probs.len()));
            }
            Ok([f64::from(probs[0]), f64::from(probs[1])])
        })
    }
}
