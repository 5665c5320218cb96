pub mod feature_registry;

pub use feature_registry::{EncodedVector, FEATURE_COUNT, FEATURE_NAMES, encode};
