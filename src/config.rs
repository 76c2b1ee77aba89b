//! Advisor configuration: model artifact location, form defaults, logging.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Path to the pre-trained ONNX classifier artifact
    pub model_path: PathBuf,
    /// Default values pre-filled in the interactive form
    pub form: FormConfig,
    /// Logging
    pub log: LogConfig,
}

/// Defaults shown in the interactive form; a blank answer takes the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    pub default_age: u32,
    pub default_height_cm: u32,
    pub default_weight_kg: u32,
    pub default_systolic_bp: u32,
    pub default_diastolic_bp: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("cardio_model.onnx"),
            form: FormConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_age: 30,
            default_height_cm: 170,
            default_weight_kg: 70,
            default_systolic_bp: 120,
            default_diastolic_bp: 80,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AdvisorConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<AdvisorConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
