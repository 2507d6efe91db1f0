//! Viewer configuration persistence
//!
//! Stores user preferences in `~/.config/glance/config.yaml`

use serde::{Deserialize, Serialize};

/// Viewer configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Selected theme id (e.g., "dark")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Multiplicative step applied per zoom/scale/gamma wheel tick
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f32,
    /// Default autoscale percentile
    #[serde(default = "default_percentile")]
    pub autoscale_percentile: f32,
    /// Default annotation font size in pixels
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_zoom_factor() -> f32 {
    1.1
}

fn default_percentile() -> f32 {
    0.1
}

fn default_font_size() -> f32 {
    12.0
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            zoom_factor: default_zoom_factor(),
            autoscale_percentile: default_percentile(),
            font_size: default_font_size(),
        }
    }
}

impl ViewerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Persist config to disk
    pub fn save(&self) -> Result<(), String> {
        let dir = crate::config_paths::ensure_config_dir()?;
        let path = dir.join("config.yaml");
        let content =
            serde_yaml::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = ViewerConfig::default();
        assert_eq!(config.theme, "dark");
        assert!((config.zoom_factor - 1.1).abs() < f32::EPSILON);
        assert!((config.autoscale_percentile - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: ViewerConfig = serde_yaml::from_str("theme: dark\n").unwrap();
        assert!((config.zoom_factor - 1.1).abs() < f32::EPSILON);
    }
}
