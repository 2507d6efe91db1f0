//! Theme system for the viewer canvas
//!
//! Provides YAML-based theming with a compile-time embedded default and
//! user-defined overrides from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/glance/themes/{id}.yaml`
//! 2. Embedded: built-in themes compiled into the binary

use std::path::Path;

use serde::Deserialize;

pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

pub const BUILTIN_THEMES: &[BuiltinTheme] = &[BuiltinTheme {
    id: "dark",
    yaml: DARK_YAML,
}];

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Pack as 0xAARRGGBB for the softbuffer framebuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let hex = hex.trim_start_matches('#');
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("bad hex color: {}", e))
        };
        match hex.len() {
            6 => Ok(Self::rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?)),
            8 => Ok(Self {
                r: parse(0..2)?,
                g: parse(2..4)?,
                b: parse(4..6)?,
                a: parse(6..8)?,
            }),
            n => Err(format!("hex color must have 6 or 8 digits, got {}", n)),
        }
    }

    /// Channel values as [0, 1] floats (alpha dropped)
    pub fn to_f32_rgb(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Raw theme file contents
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub background: String,
    pub checkerboard_light: String,
    pub checkerboard_dark: String,
    #[serde(default = "default_cell_size")]
    pub checkerboard_cell_size: u32,
    #[serde(default = "default_annotation_color")]
    pub annotation_color: String,
}

fn default_cell_size() -> u32 {
    8
}

fn default_annotation_color() -> String {
    "#ffffff".to_string()
}

/// Resolved theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub checkerboard_light: Color,
    pub checkerboard_dark: Color,
    pub checkerboard_cell_size: u32,
    pub annotation_color: Color,
}

impl Theme {
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Ok(Self {
            name: data.name,
            background: Color::from_hex(&data.ui.background)?,
            checkerboard_light: Color::from_hex(&data.ui.checkerboard_light)?,
            checkerboard_dark: Color::from_hex(&data.ui.checkerboard_dark)?,
            checkerboard_cell_size: data.ui.checkerboard_cell_size,
            annotation_color: Color::from_hex(&data.ui.annotation_color)?,
        })
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_yaml(DARK_YAML).expect("embedded theme must parse")
    }
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user themes dir, then builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_theme_parses() {
        let theme = Theme::from_builtin("dark").unwrap();
        assert_eq!(theme.name, "Dark");
        assert_eq!(theme.checkerboard_cell_size, 8);
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#ff0080"), Ok(Color::rgb(255, 0, 128)));
        assert!(Color::from_hex("#12345").is_err());
    }

    #[test]
    fn argb_packing() {
        assert_eq!(Color::rgb(0x11, 0x22, 0x33).to_argb_u32(), 0xFF112233);
    }
}
