use crate::application::ml::predictor::{ModelLoader, PricePredictor};
use crate::application::ml::smartcore_predictor::ArtifactLoader;
use crate::domain::errors::ModelError;
use crate::domain::housing::{HouseFeatures, PredictionResult};
use crate::domain::ml::{EncodedVector, encode};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

static GLOBAL_SERVICE: OnceLock<PredictionService> = OnceLock::new();

/// Lifecycle of the model behind a `PredictionService`.
/// `Ready` and `Failed` are terminal for the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Unloaded,
    Loading,
    Ready,
    Failed,
}

/// Serves price predictions from a model that is loaded at most once.
///
/// The loaded predictor is shared read-only, so concurrent callers need no
/// locking once the state has settled.
pub struct PredictionService {
    loader: Box<dyn ModelLoader>,
    loading: AtomicBool,
    model: OnceLock<Result<Arc<dyn PricePredictor>, ModelError>>,
}

impl PredictionService {
    pub fn new(loader: impl ModelLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            loading: AtomicBool::new(false),
            model: OnceLock::new(),
        }
    }

    /// Service backed by a JSON model artifact on disk
    pub fn from_artifact(model_path: impl Into<PathBuf>) -> Self {
        Self::new(ArtifactLoader::new(model_path))
    }

    /// Installs the process-wide service. The first call wins; later calls
    /// return the already installed service and ignore `model_path`.
    pub fn install_global(model_path: impl Into<PathBuf>) -> &'static PredictionService {
        GLOBAL_SERVICE.get_or_init(|| Self::from_artifact(model_path))
    }

    pub fn global() -> Option<&'static PredictionService> {
        GLOBAL_SERVICE.get()
    }

    pub fn state(&self) -> ModelState {
        match self.model.get() {
            Some(Ok(_)) => ModelState::Ready,
            Some(Err(_)) => ModelState::Failed,
            None if self.loading.load(Ordering::Acquire) => ModelState::Loading,
            None => ModelState::Unloaded,
        }
    }

    /// Loads the model on first call and returns the memoized outcome
    /// afterwards, success or failure alike.
    pub fn load(&self) -> Result<Arc<dyn PricePredictor>, ModelError> {
        self.model
            .get_or_init(|| {
                self.loading.store(true, Ordering::Release);
                info!("Loading price model from {}", self.loader.source());
                let result = self.loader.load();
                self.loading.store(false, Ordering::Release);
                result
            })
            .clone()
    }

    /// The load error, if the model failed to load
    pub fn load_error(&self) -> Option<&ModelError> {
        match self.model.get() {
            Some(Err(e)) => Some(e),
            _ => None,
        }
    }

    /// Runs the model on one encoded house.
    ///
    /// In the `Failed` state this returns the load error without touching any
    /// model.
    pub fn predict(&self, vector: &EncodedVector) -> Result<PredictionResult, ModelError> {
        let predictor = self.load()?;

        match predictor.predict(vector.as_slice()) {
            Ok(price) => {
                debug!("{} predicted {:.2} for {:?}", predictor.name(), price, vector);
                Ok(PredictionResult::new(price))
            }
            Err(reason) => {
                warn!("Prediction failed ({}): {}", predictor.name(), reason);
                Err(ModelError::PredictionError { reason })
            }
        }
    }

    /// Encode-then-predict pipeline for validated house attributes
    pub fn predict_features(
        &self,
        features: &HouseFeatures,
    ) -> Result<PredictionResult, ModelError> {
        self.predict(&encode(features))
    }
}
