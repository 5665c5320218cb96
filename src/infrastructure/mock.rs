use crate::application::ml::predictor::{ModelLoader, PricePredictor};
use crate::domain::errors::ModelError;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Predictor that returns the same price for any input and counts calls
pub struct MockPredictor {
    price: f64,
    calls: AtomicUsize,
}

impl MockPredictor {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PricePredictor for MockPredictor {
    fn predict(&self, _features: &[f64]) -> Result<f64, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.price)
    }

    fn name(&self) -> &str {
        "Mock Fixed Price"
    }

    fn version(&self) -> &str {
        "mock"
    }
}

/// Predictor whose inference always fails
pub struct FailingPredictor {
    reason: String,
}

impl FailingPredictor {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PricePredictor for FailingPredictor {
    fn predict(&self, _features: &[f64]) -> Result<f64, String> {
        Err(self.reason.clone())
    }

    fn name(&self) -> &str {
        "Mock Failing"
    }

    fn version(&self) -> &str {
        "mock"
    }
}

/// Loader handing out a prepared predictor, or a prepared error
pub struct MockModelLoader {
    outcome: Result<Arc<dyn PricePredictor>, ModelError>,
    loads: AtomicUsize,
}

impl MockModelLoader {
    pub fn ready(predictor: Arc<dyn PricePredictor>) -> Self {
        Self {
            outcome: Ok(predictor),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: ModelError) -> Self {
        Self {
            outcome: Err(error),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ModelLoader for MockModelLoader {
    fn load(&self) -> Result<Arc<dyn PricePredictor>, ModelError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn source(&self) -> String {
        "mock".to_string()
    }
}
