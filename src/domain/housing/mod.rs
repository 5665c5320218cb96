pub mod features;
pub mod pricing;

pub use features::{FurnishingStatus, HouseFeatures};
pub use pricing::{PredictionResult, format_currency, format_thousands};
