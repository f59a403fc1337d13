//! SceneConfig data structure
//!
//! Holds the palette and timing/sizing constants of the animation. Defaults
//! reproduce the classic five-color scene.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::color::parse_hex_color;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The palette determines the chain length, so it must be non-empty
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// Sub-phase scale math divides by the sub-phase count
    #[error("sub_phases must be nonzero")]
    ZeroSubPhases,

    /// A palette or background entry failed to parse as "#RRGGBB"
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Node colors in hex format; one chain node per entry
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Background color in hex format
    #[serde(default = "default_background")]
    pub background: String,

    /// Number of staggered sub-phases within one unit step
    #[serde(default = "default_sub_phases")]
    pub sub_phases: u32,

    /// Tick cadence in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Progress gained per tick across a full cycle, before sub-phase split
    #[serde(default = "default_scale_gap")]
    pub scale_gap: f32,

    /// Stroke width divisor of min(width, height)
    #[serde(default = "default_stroke_factor")]
    pub stroke_factor: f32,

    /// Ball radius divisor of min(width, height)
    #[serde(default = "default_ball_radius_factor")]
    pub ball_radius_factor: f32,

    /// Line length divisor of min(width, height)
    #[serde(default = "default_line_length_factor")]
    pub line_length_factor: f32,

    /// Preview window width in points
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Preview window height in points
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_palette() -> Vec<String> {
    vec![
        "#F44336".to_string(),
        "#9C27B0".to_string(),
        "#6200EA".to_string(),
        "#00C853".to_string(),
        "#795548".to_string(),
    ]
}

fn default_background() -> String {
    "#BDBDBD".to_string()
}

fn default_sub_phases() -> u32 {
    3
}

fn default_tick_ms() -> u64 {
    20
}

fn default_scale_gap() -> f32 {
    0.02
}

fn default_stroke_factor() -> f32 {
    90.0
}

fn default_ball_radius_factor() -> f32 {
    15.9
}

fn default_line_length_factor() -> f32 {
    6.9
}

fn default_window_width() -> f32 {
    800.0
}

fn default_window_height() -> f32 {
    600.0
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            background: default_background(),
            sub_phases: default_sub_phases(),
            tick_ms: default_tick_ms(),
            scale_gap: default_scale_gap(),
            stroke_factor: default_stroke_factor(),
            ball_radius_factor: default_ball_radius_factor(),
            line_length_factor: default_line_length_factor(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl SceneConfig {
    /// Load configuration from JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SceneConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Check the configuration before the animation chain is built
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.sub_phases == 0 {
            return Err(ConfigError::ZeroSubPhases);
        }
        for entry in self.palette.iter().chain(std::iter::once(&self.background)) {
            if parse_hex_color(entry).is_none() {
                return Err(ConfigError::InvalidColor(entry.clone()));
            }
        }
        Ok(())
    }

    /// Progress added per tick for the node currently animating
    pub fn step_increment(&self) -> f32 {
        self.scale_gap / self.sub_phases as f32
    }

    /// Tick cadence as a duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Palette entry as RGB; white if the entry fails to parse
    pub fn palette_rgb(&self, index: usize) -> (u8, u8, u8) {
        self.palette
            .get(index)
            .and_then(|hex| parse_hex_color(hex))
            .unwrap_or((255, 255, 255))
    }

    /// Background color as RGB; white if it fails to parse
    pub fn background_rgb(&self) -> (u8, u8, u8) {
        parse_hex_color(&self.background).unwrap_or((255, 255, 255))
    }
}
