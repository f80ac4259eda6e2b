use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use mascot_geometry::{ElementRect, Point};
use mascot_navigation::PlannerConfig;
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "MASCOT";

#[derive(Debug, Clone, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnimationSettings {
    pub frame_rate_hz: u32,
    pub start_x: f64,
    pub start_y: f64,
    pub trail_length: usize,
    /// Card the mascot flies to when asked to hold.
    pub card: ElementRect,
}

impl AnimationSettings {
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    /// Time between frames; a zero rate is treated as 1 Hz.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate_hz.max(1) as f64)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub window: WindowSettings,
    #[serde(default)]
    pub planner: PlannerConfig,
    pub animation: AnimationSettings,
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
