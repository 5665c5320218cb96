// House attributes and prediction values
pub mod housing;

// Model input schema
pub mod ml;

// Domain-specific error types
pub mod errors;
