//! Application configuration loaded from environment variables
//! (optionally seeded from a `.env` file).

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_MODEL_PATH: &str = "Housing.json";

/// Page arrangement of the predictor window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLayout {
    /// Inputs in a side panel, summary and prediction side by side
    #[default]
    Wide,
    /// Single centered page with the inputs in two columns
    Compact,
}

impl FromStr for UiLayout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wide" => Ok(UiLayout::Wide),
            "compact" | "centered" => Ok(UiLayout::Compact),
            _ => anyhow::bail!(
                "Invalid HOUSE_UI_LAYOUT: {}. Must be 'wide' or 'compact'",
                s
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub ui_layout: UiLayout,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            ui_layout: UiLayout::Wide,
            window_width: 1100.0,
            window_height: 760.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let model_path = lookup("HOUSE_MODEL_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        let ui_layout_str = lookup("HOUSE_UI_LAYOUT").unwrap_or_else(|| "wide".to_string());
        let ui_layout = UiLayout::from_str(&ui_layout_str)?;

        let window_width = lookup("HOUSE_WINDOW_WIDTH")
            .unwrap_or_else(|| "1100".to_string())
            .parse::<f32>()
            .context("Failed to parse HOUSE_WINDOW_WIDTH")?;

        let window_height = lookup("HOUSE_WINDOW_HEIGHT")
            .unwrap_or_else(|| "760".to_string())
            .parse::<f32>()
            .context("Failed to parse HOUSE_WINDOW_HEIGHT")?;

        if window_width <= 0.0 || window_height <= 0.0 {
            anyhow::bail!(
                "Window size must be positive, got {}x{}",
                window_width,
                window_height
            );
        }

        Ok(Self {
            model_path,
            ui_layout,
            window_width,
            window_height,
        })
    }
}
