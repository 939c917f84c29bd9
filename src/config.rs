//! Game configuration
//!
//! Loaded from a JSON file on native builds; every field falls back to the
//! values in [`crate::consts`] when missing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::{Ingredient, IngredientRegistry};

/// Volume and mute preferences for sound effects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Layout ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub build_section_height: i32,
    pub border: i32,
    pub build_scale: f64,
    pub order_scale: f64,

    // === Gameplay ===
    pub lane_count: usize,
    pub default_fall_step: i32,
    pub fast_fall_step: i32,
    pub ingredients_per_order: usize,

    // === Ingredients ===
    /// Replacement ingredient table (the bundled set when empty)
    pub ingredients: Vec<Ingredient>,
    /// Unscaled plate height; only used with a replacement table
    pub plate_height: Option<u32>,

    // === Run ===
    /// Fixed seed for reproducible runs (random when absent)
    pub seed: Option<u64>,
    /// Tick budget of the headless demo driver
    pub demo_ticks: u64,

    pub audio: AudioConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            build_section_height: BUILD_SECTION_HEIGHT,
            border: SCREEN_BORDER,
            build_scale: BUILD_SCALE,
            order_scale: ORDER_SCALE,

            lane_count: LANE_COUNT,
            default_fall_step: DEFAULT_FALL_STEP,
            fast_fall_step: FAST_FALL_STEP,
            ingredients_per_order: INGREDIENTS_PER_ORDER,

            ingredients: Vec::new(),
            plate_height: None,

            seed: None,
            demo_ticks: 20 * TICKS_PER_SECOND as u64 * 60,

            audio: AudioConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when absent or broken
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| -> Result<()> { Err(Error::InvalidConfig(msg.to_string())) };

        if self.lane_count == 0 {
            return invalid("lane_count must be at least 1");
        }
        if self.default_fall_step <= 0 {
            return invalid("default_fall_step must be positive");
        }
        if self.fast_fall_step < self.default_fall_step {
            return invalid("fast_fall_step must not be below default_fall_step");
        }
        if self.fast_fall_step > self.build_section_height {
            return invalid("fast_fall_step must not exceed build_section_height");
        }
        if self.ingredients_per_order < 2 {
            return invalid("ingredients_per_order must leave room for both buns");
        }
        if self.build_scale <= 0.0 || self.order_scale <= 0.0 {
            return invalid("scale factors must be positive");
        }
        if self.screen_width <= 0 || self.build_section_height <= 0 {
            return invalid("screen dimensions must be positive");
        }
        if self.build_section_height > self.screen_height {
            return invalid("build_section_height exceeds screen_height");
        }
        Ok(())
    }

    /// Build the ingredient registry this config asks for
    pub fn registry(&self) -> Result<IngredientRegistry> {
        if self.ingredients.is_empty() {
            return Ok(IngredientRegistry::standard());
        }
        IngredientRegistry::new(
            self.ingredients.iter().cloned(),
            self.plate_height
                .unwrap_or(IngredientRegistry::STANDARD_PLATE_HEIGHT),
        )
    }

    /// Horizontal width of a single lane
    pub fn lane_width(&self) -> i32 {
        self.screen_width / self.lane_count as i32
    }

    /// Left edge of a lane
    pub fn lane_x(&self, lane: usize) -> i32 {
        self.border + lane as i32 * self.lane_width()
    }

    /// Lane where new pieces appear
    pub fn spawn_lane(&self) -> usize {
        self.lane_count / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fast_fall_step, config.default_fall_step * 4);
        assert_eq!(config.spawn_lane(), 1);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "lane_count": 5, "seed": 42 }"#).unwrap();
        assert_eq!(config.lane_count, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.default_fall_step, DEFAULT_FALL_STEP);
        assert_eq!(config.spawn_lane(), 2);
        assert!(!config.audio.muted);
    }

    #[test]
    fn test_invalid_values_rejected() {
        for json in [
            r#"{ "lane_count": 0 }"#,
            r#"{ "default_fall_step": 0 }"#,
            r#"{ "default_fall_step": 10, "fast_fall_step": 5 }"#,
            r#"{ "fast_fall_step": 2147483647 }"#,
            r#"{ "default_fall_step": 1001, "fast_fall_step": 1001 }"#,
            r#"{ "ingredients_per_order": 1 }"#,
            r#"{ "build_scale": 0.0 }"#,
            r#"{ "build_section_height": 2000 }"#,
        ] {
            assert!(
                matches!(GameConfig::from_json(json), Err(Error::InvalidConfig(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            GameConfig::from_json("{ lane_count: "),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GameConfig::load_or_default(Some(Path::new("/nonexistent/burger.json")));
        assert_eq!(config.lane_count, LANE_COUNT);
    }

    #[test]
    fn test_registry_override() {
        let config = GameConfig::default();
        assert!(config.registry().is_ok());

        let json = r#"{ "ingredients": [ { "kind": "BunBottom", "height": 150 } ] }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert!(matches!(
            config.registry(),
            Err(Error::MissingIngredient(crate::sim::IngredientKind::BunTop))
        ));
    }

    #[test]
    fn test_lane_x() {
        let config = GameConfig::default();
        assert_eq!(config.lane_width(), 400);
        assert_eq!(config.lane_x(0), SCREEN_BORDER);
        assert_eq!(config.lane_x(2), SCREEN_BORDER + 800);
    }
}
