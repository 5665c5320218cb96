use crate::domain::errors::ModelError;
use std::sync::Arc;

/// Interface for regression models that price a single encoded house
pub trait PricePredictor: Send + Sync {
    /// Predict the price for one row of features, laid out in
    /// `FEATURE_NAMES` order
    fn predict(&self, features: &[f64]) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}

/// Produces a ready predictor, typically by reading a persisted artifact.
/// Called at most once per `PredictionService`.
pub trait ModelLoader: Send + Sync {
    fn load(&self) -> Result<Arc<dyn PricePredictor>, ModelError>;

    /// Where the model comes from, for logs
    fn source(&self) -> String;
}

impl<L: ModelLoader + ?Sized> ModelLoader for Arc<L> {
    fn load(&self) -> Result<Arc<dyn PricePredictor>, ModelError> {
        (**self).load()
    }

    fn source(&self) -> String {
        (**self).source()
    }
}
