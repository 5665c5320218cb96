use house_price_predictor::application::prediction_service::PredictionService;
use house_price_predictor::config::Config;
use house_price_predictor::interfaces::design_system::DesignSystem;
use house_price_predictor::interfaces::ui::HousePriceApp;

use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging (stdout only)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("House Price Predictor {} starting...", env!("CARGO_PKG_VERSION"));

    // 2. Load Config
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: model={:?}, layout={:?}",
        config.model_path, config.ui_layout
    );

    // 3. Load the model once, before the window opens.
    // A failure leaves the service in its Failed state; the UI shows a banner.
    let service = PredictionService::install_global(config.model_path.clone());
    match service.load() {
        Ok(model) => info!("Model ready: {} ({})", model.name(), model.version()),
        Err(e) => warn!("Predictions unavailable: {}", e),
    }

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("House Price Predictor"),
        ..Default::default()
    };

    let layout = config.ui_layout;
    eframe::run_native(
        "House Price Predictor",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(DesignSystem::theme());
            Ok(Box::new(HousePriceApp::new(service, layout)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
