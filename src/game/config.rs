use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Largest board side accepted, in tiles
pub const MAX_GRID_SIDE: i32 = 1_000;

/// Fastest update rate accepted; one tick per microsecond
pub const MAX_TICK_RATE_HZ: u32 = 1_000_000;

/// Configuration for the game
///
/// Every timing value is counted in update ticks, which run at
/// `tick_rate_hz` independently of how often frames are drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: i32,
    /// Height of the game grid
    pub grid_height: i32,

    /// Ticks per move right after a reset, before the first move
    pub initial_ticks_per_move: u32,
    /// Ticks per move of the decorative snake on the main menu
    pub menu_ticks_per_move: u32,
    /// Largest number of extra segments the menu snake may start with
    pub menu_pregrowth_max: u32,

    /// Number the countdown starts from
    pub countdown_from: i32,
    /// Ticks between countdown steps
    pub countdown_ticks_per_step: u32,

    /// Ticks between two segments turning into bones after death
    pub skeleton_ticks_per_segment: u32,

    /// Ticks between two tongue decisions
    pub tongue_ticks: u32,
    /// Chance of showing the tongue at a decision point
    pub tongue_chance: f64,

    /// Update ticks per second
    pub tick_rate_hz: u32,
    /// Milliseconds between two drawn frames
    pub frame_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 27,
            grid_height: 20,
            initial_ticks_per_move: 30,
            menu_ticks_per_move: 5,
            menu_pregrowth_max: 100,
            countdown_from: 3,
            countdown_ticks_per_step: 60,
            skeleton_ticks_per_segment: 2,
            tongue_ticks: 20,
            tongue_chance: 0.3,
            tick_rate_hz: 60,
            frame_interval_ms: 33,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Read a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        Ok(config)
    }

    /// Check that the values make a playable game
    pub fn validate(&self) -> Result<(), String> {
        // The snake spawns three cells tall below the center row
        if self.grid_width < 1 || self.grid_height < 5 {
            return Err(format!(
                "grid must be at least 1x5, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(format!(
                "grid sides must be at most {}, got {}x{}",
                MAX_GRID_SIDE, self.grid_width, self.grid_height
            ));
        }

        if self.initial_ticks_per_move == 0 || self.menu_ticks_per_move == 0 {
            return Err("ticks per move must be at least 1".to_string());
        }

        if self.countdown_ticks_per_step == 0 || self.skeleton_ticks_per_segment == 0 {
            return Err("animation intervals must be at least 1 tick".to_string());
        }

        if self.tongue_ticks == 0 {
            return Err("tongue_ticks must be at least 1".to_string());
        }

        if !(0.0..=1.0).contains(&self.tongue_chance) {
            return Err(format!(
                "tongue_chance must be in [0, 1], got {}",
                self.tongue_chance
            ));
        }

        if self.tick_rate_hz == 0 || self.frame_interval_ms == 0 {
            return Err("tick rate and frame interval must be positive".to_string());
        }

        if self.tick_rate_hz > MAX_TICK_RATE_HZ {
            return Err(format!(
                "tick_rate_hz must be at most {}, got {}",
                MAX_TICK_RATE_HZ, self.tick_rate_hz
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width, 27);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.initial_ticks_per_move, 30);
        assert_eq!(config.skeleton_ticks_per_segment, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 12);
        assert_eq!(config.grid_width, 15);
        assert_eq!(config.grid_height, 12);
        assert_eq!(config.menu_ticks_per_move, 5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GameConfig::new(10, 2);
        assert!(config.validate().is_err());

        config = GameConfig::new(10, 10);
        config.tongue_chance = 1.5;
        assert!(config.validate().is_err());

        config = GameConfig::new(10, 10);
        config.skeleton_ticks_per_segment = 0;
        assert!(config.validate().is_err());

        config = GameConfig::new(10, 10);
        config.tick_rate_hz = 2_000_000;
        assert!(config.validate().is_err());

        config.tick_rate_hz = MAX_TICK_RATE_HZ;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_caps_grid_size() {
        assert!(GameConfig::new(40_000, 20).validate().is_err());
        assert!(GameConfig::new(20, 40_000).validate().is_err());
        assert!(GameConfig::new(0, 5).validate().is_err());
        assert!(GameConfig::new(MAX_GRID_SIDE, MAX_GRID_SIDE).validate().is_ok());
        assert!(GameConfig::new(1, 5).validate().is_ok());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "grid_width": 12, "tongue_chance": 0.0 }}"#).unwrap();

        let config = GameConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.tongue_chance, 0.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::from_json_file(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }
}
