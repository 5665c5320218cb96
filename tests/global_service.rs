use house_price_predictor::application::prediction_service::{ModelState, PredictionService};
use house_price_predictor::domain::errors::ModelError;
use std::path::PathBuf;

// Kept alone in its own test binary: the global can only be installed once per process.
#[test]
fn test_global_service_installed_once() {
    assert!(PredictionService::global().is_none());

    let first = PredictionService::install_global("no-such-dir/first.json");
    let second = PredictionService::install_global("no-such-dir/second.json");
    assert!(std::ptr::eq(first, second));

    let global = PredictionService::global().expect("installed");
    assert!(std::ptr::eq(first, global));

    assert_eq!(global.state(), ModelState::Unloaded);
    let err = global.load().err().expect("missing artifact");
    assert_eq!(
        err,
        ModelError::ArtifactNotFound {
            path: PathBuf::from("no-such-dir/first.json")
        }
    );
    assert_eq!(second.state(), ModelState::Failed);
}
