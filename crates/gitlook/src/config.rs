//! Configuration types for GitLook rendering.
//!
//! All types implement [`serde::Deserialize`] so hosts can load them from
//! TOML or any other serde format. Every field is optional; unset values
//! fall back to the default [`Palette`] and a lenient validator.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and validation settings.
//! - [`StyleConfig`] - Palette colors and the exported background.
//! - [`ValidationConfig`] - Whether content warnings fail a load.
//!
//! # Example
//!
//! ```
//! # use gitlook::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().palette().is_ok());
//! assert!(!config.validation().strict());
//! ```

use serde::Deserialize;

use gitlook_core::color::{Color, Palette};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Validation configuration section.
    #[serde(default)]
    validation: ValidationConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style and validation configurations.
    pub fn new(style: StyleConfig, validation: ValidationConfig) -> Self {
        Self { style, validation }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the validation configuration.
    pub fn validation(&self) -> &ValidationConfig {
        &self.validation
    }

    /// Returns a copy with strict validation forced on when `strict` is set.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.validation.strict |= strict;
        self
    }
}

/// Visual styling configuration.
///
/// Colors are CSS color strings. Unset palette roles keep their default.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    primary: Option<String>,
    #[serde(default)]
    accent: Option<String>,
    #[serde(default)]
    surface: Option<String>,
    #[serde(default)]
    highlight: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    muted: Option<String>,

    /// Background [`Color`] of exported documents, as a color string.
    #[serde(default)]
    background: Option<String>,
}

fn parse_color(role: &str, value: Option<&String>, fallback: Color) -> Result<Color, String> {
    value.map_or(Ok(fallback), |value| {
        Color::new(value).map_err(|err| format!("Invalid {role} color in config: {err}"))
    })
}

impl StyleConfig {
    /// Builds the palette, overriding defaults with configured colors.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first color string that cannot be parsed.
    pub fn palette(&self) -> Result<Palette, String> {
        let defaults = Palette::default();
        Ok(Palette::new(
            parse_color("primary", self.primary.as_ref(), defaults.primary())?,
            parse_color("accent", self.accent.as_ref(), defaults.accent())?,
            parse_color("surface", self.surface.as_ref(), defaults.surface())?,
            parse_color("highlight", self.highlight.as_ref(), defaults.highlight())?,
            parse_color("text", self.text.as_ref(), defaults.text())?,
            parse_color("muted", self.muted.as_ref(), defaults.muted())?,
        ))
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// Content validation policy.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Fail loading when validation reports any warning.
    #[serde(default)]
    strict: bool,
}

impl ValidationConfig {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}
