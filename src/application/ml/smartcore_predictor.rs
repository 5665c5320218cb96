use super::predictor::{ModelLoader, PricePredictor};
use crate::domain::errors::ModelError;
use crate::domain::ml::{FEATURE_COUNT, FEATURE_NAMES};
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::fs::File;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

pub type LinearModel = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;
pub type ForestModel = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Trained regressor persisted inside an artifact
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum HousingModel {
    Linear(LinearModel),
    RandomForest(ForestModel),
}

impl HousingModel {
    /// Runs a single-row batch through the regressor.
    ///
    /// smartcore indexes input columns without checking them against the
    /// fitted width, so a short or long row panics inside the model. The
    /// panic is caught here and reported as an error.
    fn infer(&self, features: &[f64]) -> Result<f64, String> {
        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match self {
            HousingModel::Linear(model) => model.predict(&input_matrix),
            HousingModel::RandomForest(model) => model.predict(&input_matrix),
        }));

        let predictions = match outcome {
            Ok(result) => result.map_err(|e| format!("Prediction failed: {}", e))?,
            Err(_) => {
                return Err(format!(
                    "Model cannot score a row of {} values",
                    features.len()
                ));
            }
        };

        match predictions.first() {
            Some(pred) if pred.is_finite() => Ok(*pred),
            Some(pred) => Err(format!("Model returned a non-finite price: {}", pred)),
            None => Err("No prediction returned".to_string()),
        }
    }

    /// Verifies the regressor was fitted on exactly `FEATURE_COUNT` columns.
    ///
    /// Linear models expose their coefficient vector. Forests do not, so a
    /// trial row is scored instead.
    fn check_arity(&self) -> Result<(), String> {
        if let HousingModel::Linear(model) = self {
            let fitted = panic::catch_unwind(AssertUnwindSafe(|| {
                let (rows, cols) = model.coefficients().shape();
                rows * cols
            }))
            .map_err(|_| "linear model has no fitted coefficients".to_string())?;

            if fitted != FEATURE_COUNT {
                return Err(format!(
                    "model was fitted on {} features, expected {}",
                    fitted, FEATURE_COUNT
                ));
            }
        }

        self.infer(&[0.0; FEATURE_COUNT])
            .map(|_| ())
            .map_err(|reason| format!("trial prediction failed: {}", reason))
    }
}

/// On-disk model artifact (JSON).
///
/// `feature_names` records the column order the model was fitted with so a
/// reordered artifact is rejected at load time.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub feature_names: Vec<String>,
    pub model: HousingModel,
}

impl ModelArtifact {
    /// Wraps a trained model with the current feature order
    pub fn new(model: HousingModel) -> Self {
        Self {
            format_version: ARTIFACT_FORMAT_VERSION,
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            model,
        }
    }

    fn check_schema(&self) -> Result<(), String> {
        if self.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(format!(
                "unsupported format version {} (expected {})",
                self.format_version, ARTIFACT_FORMAT_VERSION
            ));
        }
        if self.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES.iter().copied()) {
            return Err(format!(
                "feature order mismatch: artifact has [{}], expected [{}]",
                self.feature_names.join(", "),
                FEATURE_NAMES.join(", ")
            ));
        }
        self.model.check_arity()
    }
}

pub struct SmartCorePredictor {
    model: HousingModel,
    feature_count: usize,
    version: String,
}

impl SmartCorePredictor {
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self {
            feature_count: FEATURE_COUNT,
            version: format!("v{}", artifact.format_version),
            model: artifact.model,
        }
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, features: &[f64]) -> Result<f64, String> {
        if features.len() != self.feature_count {
            return Err(format!(
                "Feature shape mismatch: model expects {} values, got {}",
                self.feature_count,
                features.len()
            ));
        }

        self.model.infer(features)
    }

    fn name(&self) -> &str {
        match self.model {
            HousingModel::Linear(_) => "SmartCore Linear Regression",
            HousingModel::RandomForest(_) => "SmartCore Random Forest",
        }
    }

    fn version(&self) -> &str {
        &self.version
    }
}

/// Loads a `ModelArtifact` from a JSON file
pub struct ArtifactLoader {
    model_path: PathBuf,
}

impl ArtifactLoader {
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    fn corrupt(&self, reason: impl Into<String>) -> ModelError {
        ModelError::ArtifactCorrupt {
            path: self.model_path.clone(),
            reason: reason.into(),
        }
    }

    fn read_artifact(&self) -> Result<ModelArtifact, ModelError> {
        let mut file = File::open(&self.model_path)
            .map_err(|e| self.corrupt(format!("failed to open model file: {}", e)))?;

        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .map_err(|e| self.corrupt(format!("failed to read model file: {}", e)))?;

        let artifact: ModelArtifact = serde_json::from_reader(std::io::Cursor::new(&buffer))
            .map_err(|e| self.corrupt(e.to_string()))?;

        artifact.check_schema().map_err(|reason| self.corrupt(reason))?;
        Ok(artifact)
    }
}

impl ModelLoader for ArtifactLoader {
    fn load(&self) -> Result<Arc<dyn PricePredictor>, ModelError> {
        if !self.model_path.exists() {
            warn!(
                "Model file not found at {:?}. Predictions are disabled.",
                self.model_path
            );
            return Err(ModelError::ArtifactNotFound {
                path: self.model_path.clone(),
            });
        }

        match self.read_artifact() {
            Ok(artifact) => {
                let predictor = SmartCorePredictor::from_artifact(artifact);
                info!(
                    "Successfully loaded {} ({}) from {:?}",
                    predictor.name(),
                    predictor.version(),
                    self.model_path
                );
                Ok(Arc::new(predictor))
            }
            Err(e) => {
                error!("Failed to load model: {}", e);
                Err(e)
            }
        }
    }

    fn source(&self) -> String {
        self.model_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linear::linear_regression::LinearRegressionParameters;
    use std::io::Write;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "house-price-{}-{}.json",
            name,
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let loader = ArtifactLoader::new("definitely/not/here/Housing.json");
        match loader.load() {
            Err(ModelError::ArtifactNotFound { path }) => {
                assert_eq!(path, PathBuf::from("definitely/not/here/Housing.json"));
            }
            other => panic!("expected ArtifactNotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_garbage_file_is_corrupt() {
        let path = scratch_file("garbage", "not json at all");
        let result = ArtifactLoader::new(&path).load();
        assert!(matches!(result, Err(ModelError::ArtifactCorrupt { .. })));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_unreadable_path_is_corrupt() {
        // Exists but is a directory, so reading it fails
        let result = ArtifactLoader::new(std::env::temp_dir()).load();
        assert!(matches!(result, Err(ModelError::ArtifactCorrupt { .. })));
    }

    #[test]
    fn test_unknown_model_kind_is_corrupt() {
        let body = format!(
            r#"{{"format_version":1,"feature_names":{},"model":{{"kind":"xgboost","params":{{}}}}}}"#,
            serde_json::to_string(FEATURE_NAMES).unwrap()
        );
        let path = scratch_file("unknown-kind", &body);
        let result = ArtifactLoader::new(&path).load();
        assert!(matches!(result, Err(ModelError::ArtifactCorrupt { .. })));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_source_is_path() {
        let loader = ArtifactLoader::new("models/Housing.json");
        assert_eq!(loader.source(), "models/Housing.json");
        assert_eq!(loader.model_path(), Path::new("models/Housing.json"));
    }

    fn linear_fitted_on(width: usize) -> HousingModel {
        let x: Vec<Vec<f64>> = (0..30usize)
            .map(|i| {
                (0..width)
                    .map(|j| ((i * (j + 2)) % 7) as f64 + i as f64 / (j as f64 + 1.0))
                    .collect()
            })
            .collect();
        let y: Vec<f64> = x.iter().map(|row| 100_000.0 + row.iter().sum::<f64>() * 500.0).collect();
        let x_matrix = DenseMatrix::from_2d_vec(&x).unwrap();
        HousingModel::Linear(
            LinearRegression::fit(&x_matrix, &y, LinearRegressionParameters::default()).unwrap(),
        )
    }

    #[test]
    fn test_inference_panic_becomes_error() {
        // Bypasses the load-time check to reach the model with a narrow row
        let predictor = SmartCorePredictor::from_artifact(ModelArtifact::new(linear_fitted_on(20)));

        let err = predictor.predict(&[0.0; FEATURE_COUNT]).unwrap_err();
        assert!(err.contains("cannot score a row of 12 values"), "{}", err);
    }

    #[test]
    fn test_check_arity_reports_fitted_width() {
        assert!(linear_fitted_on(FEATURE_COUNT).check_arity().is_ok());

        let err = linear_fitted_on(5).check_arity().unwrap_err();
        assert_eq!(err, "model was fitted on 5 features, expected 12");
    }
}
