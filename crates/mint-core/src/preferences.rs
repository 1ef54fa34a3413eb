//! # UI Preferences
//!
//! Dark mode and accent color, stored as plain strings and parsed leniently:
//! a corrupted or hand-edited value never prevents the app from starting, it
//! just falls back to the default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

/// Storage key for the dark mode flag.
pub const DARK_MODE_KEY: &str = "dark_mode";

/// Storage key for the accent color.
pub const COLOR_THEME_KEY: &str = "color_theme";

/// Accent palettes offered on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    #[default]
    Teal,
    Blue,
    Violet,
    Rose,
    Amber,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Teal,
        ColorTheme::Blue,
        ColorTheme::Violet,
        ColorTheme::Rose,
        ColorTheme::Amber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Teal => "teal",
            ColorTheme::Blue => "blue",
            ColorTheme::Violet => "violet",
            ColorTheme::Rose => "rose",
            ColorTheme::Amber => "amber",
        }
    }

    /// The 600 shade as space-separated RGB, the value the UI feeds into its
    /// primary color variable.
    pub fn primary_rgb(&self) -> &'static str {
        match self {
            ColorTheme::Teal => "13 148 136",
            ColorTheme::Blue => "37 99 235",
            ColorTheme::Violet => "124 58 237",
            ColorTheme::Rose => "225 29 72",
            ColorTheme::Amber => "217 119 6",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorTheme::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "color_theme".to_string(),
                allowed: ColorTheme::ALL.iter().map(|t| t.as_str().to_string()).collect(),
            })
    }
}

/// The persisted UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Preferences {
    pub dark_mode: bool,
    pub color_theme: ColorTheme,
}

impl Preferences {
    /// Parses stored values.
    ///
    /// Only the exact string `"true"` turns dark mode on. A missing or
    /// unknown theme becomes teal.
    ///
    /// ```rust
    /// use mint_core::preferences::{ColorTheme, Preferences};
    ///
    /// let prefs = Preferences::from_stored(Some("true"), Some("magenta"));
    /// assert!(prefs.dark_mode);
    /// assert_eq!(prefs.color_theme, ColorTheme::Teal);
    /// ```
    pub fn from_stored(dark_mode: Option<&str>, color_theme: Option<&str>) -> Self {
        Preferences {
            dark_mode: dark_mode == Some("true"),
            color_theme: color_theme
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Key-value pairs to store.
    pub fn to_stored(&self) -> [(&'static str, String); 2] {
        [
            (DARK_MODE_KEY, self.dark_mode.to_string()),
            (COLOR_THEME_KEY, self.color_theme.as_str().to_string()),
        ]
    }
}

/// Partial preference change from the settings page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PreferencesUpdate {
    pub dark_mode: Option<bool>,
    pub color_theme: Option<ColorTheme>,
}

impl Preferences {
    pub fn apply(&mut self, update: PreferencesUpdate) {
        if let Some(dark_mode) = update.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(color_theme) = update.color_theme {
            self.color_theme = color_theme;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::from_stored(None, None);
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.color_theme, ColorTheme::Teal);
    }

    #[test]
    fn test_only_exact_true_enables_dark_mode() {
        assert!(Preferences::from_stored(Some("true"), None).dark_mode);
        assert!(!Preferences::from_stored(Some("TRUE"), None).dark_mode);
        assert!(!Preferences::from_stored(Some("1"), None).dark_mode);
        assert!(!Preferences::from_stored(Some("yes"), None).dark_mode);
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!(
            Preferences::from_stored(None, Some("violet")).color_theme,
            ColorTheme::Violet
        );
        assert_eq!(
            Preferences::from_stored(None, Some("Violet")).color_theme,
            ColorTheme::Teal
        );
        assert!("magenta".parse::<ColorTheme>().is_err());
    }

    #[test]
    fn test_stored_values_read_back() {
        let prefs = Preferences {
            dark_mode: true,
            color_theme: ColorTheme::Rose,
        };
        let [(_, dark), (_, theme)] = prefs.to_stored();
        assert_eq!(Preferences::from_stored(Some(&dark), Some(&theme)), prefs);
    }

    #[test]
    fn test_apply_partial_update() {
        let mut prefs = Preferences::default();
        prefs.apply(PreferencesUpdate {
            color_theme: Some(ColorTheme::Amber),
            ..Default::default()
        });
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.color_theme, ColorTheme::Amber);
        assert_eq!(prefs.color_theme.primary_rgb(), "217 119 6");
    }
}
