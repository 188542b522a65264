//! Theme colors loaded from the user config file
//! Reads hex overrides from ~/.config/hinagata/config.toml

use ratatui::style::Color;
use std::fs;

use crate::config::{AppConfig, ThemeColors};

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,      // Key hints, highlights
    pub header: Color,      // Title text and panel titles
    pub logo: Color,        // Logo glyph in the header
    pub text: Color,        // Primary text
    pub text_dim: Color,    // Dimmed text
    pub inactive: Color,    // Panel borders
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin-inspired colors when no config is present
        Self {
            accent: Color::Rgb(250, 179, 135),
            header: Color::Rgb(243, 139, 168),
            logo: Color::Rgb(249, 226, 175),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            inactive: Color::Rgb(88, 91, 112),
        }
    }
}

impl Theme {
    /// Load theme overrides from the user config
    pub fn load() -> Self {
        if let Some(theme) = Self::load_user_theme() {
            return theme;
        }

        // Fallback to defaults
        Self::default()
    }

    /// Read the config file directly; rendering never needs the rest of it
    fn load_user_theme() -> Option<Self> {
        let config_dir = dirs::config_dir()?;
        let path = config_dir.join("hinagata/config.toml");

        let content = fs::read_to_string(&path).ok()?;
        let config: AppConfig = toml::from_str(&content).ok()?;

        Some(Self::from_colors(&config.theme))
    }

    /// Apply hex overrides on top of the built-in defaults
    fn from_colors(colors: &ThemeColors) -> Self {
        let base = Self::default();

        let pick = |value: &Option<String>, fallback: Color| {
            value
                .as_deref()
                .and_then(Self::parse_hex_color)
                .unwrap_or(fallback)
        };

        Self {
            accent: pick(&colors.accent, base.accent),
            header: pick(&colors.header, base.header),
            logo: pick(&colors.logo, base.logo),
            text: pick(&colors.text, base.text),
            text_dim: pick(&colors.text_dim, base.text_dim),
            inactive: pick(&colors.inactive, base.inactive),
        }
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}
