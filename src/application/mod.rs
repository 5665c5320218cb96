// Model loading and inference
pub mod ml;

// Load-once prediction service
pub mod prediction_service;

pub use prediction_service::{ModelState, PredictionService};
