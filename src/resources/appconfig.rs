//! Demo configuration.
//!
//! Loaded from an INI file. Missing keys keep their defaults.
//!
//! ```ini
//! [window]
//! width = 800
//! height = 450
//! target_fps = 60
//! title = Sprite sheet player
//!
//! [playback]
//! time_scale = 1.0
//!
//! [assets]
//! sprites = ./assets/sprites.json
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 450;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TITLE: &str = "Sprite sheet player";
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_SPRITES_PATH: &str = "./assets/sprites.json";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub title: String,
    /// Multiplier applied to every frame delta.
    pub time_scale: f32,
    /// JSON file with the sprite definitions to spawn.
    pub sprites_path: PathBuf,
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            title: DEFAULT_TITLE.to_string(),
            time_scale: DEFAULT_TIME_SCALE,
            sprites_path: PathBuf::from(DEFAULT_SPRITES_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load values from [`Self::config_path`].
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load values from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [playback] section
        if let Some(scale) = config.getfloat("playback", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }

        // [assets] section
        if let Some(sprites) = config.get("assets", "sprites") {
            self.sprites_path = PathBuf::from(sprites);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, time_scale={}, sprites={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.time_scale,
            self.sprites_path.display()
        );
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.window_size(), (800, 450));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.time_scale, 1.0);
        assert_eq!(config.config_path, PathBuf::from("./config.ini"));
    }

    #[test]
    fn test_load_overrides_present_keys_only() {
        let mut config = AppConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 1024\ntitle = Explosions\n\n[playback]\ntime_scale = 0.5\n",
            )
            .unwrap();
        assert_eq!(config.window_size(), (1024, 450));
        assert_eq!(config.title, "Explosions");
        assert_eq!(config.time_scale, 0.5);
        assert_eq!(config.sprites_path, PathBuf::from("./assets/sprites.json"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = AppConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_width, 800);
    }
}
