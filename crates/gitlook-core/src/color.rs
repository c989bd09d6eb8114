//! Color handling for rendered scenes.
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the [`Palette`] of named colors every scene kind
//! is painted with.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;
use thiserror::Error;

/// Error returned when a string is not a valid CSS color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{value}`: {reason}")]
pub struct ColorError {
    value: String,
    reason: String,
}

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitlook_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, ColorError> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| ColorError {
                value: color_str.to_string(),
                reason: err.to_string(),
            })
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// # Returns
    ///
    /// The alpha value as a `f32` between 0.0 and 1.0, where:
    /// - 0.0 = fully transparent
    /// - 1.0 = fully opaque
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_string())
    }
}

/// The named colors used to paint scenes.
///
/// | Role | Default | Used for |
/// |------|---------|----------|
/// | `primary` | `#4078c0` | workflow steps, main-line commits, container borders |
/// | `accent` | `#f05033` | edges, edge labels, branch lines, highlight strokes |
/// | `surface` | `#f4f4f4` | container fill at rest |
/// | `highlight` | `#e6f7ff` | container fill while highlighted |
/// | `text` | `#333` | primary labels |
/// | `muted` | `#666` | secondary labels |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    primary: Color,
    accent: Color,
    surface: Color,
    highlight: Color,
    text: Color,
    muted: Color,
}

impl Palette {
    /// Creates a palette from explicit colors.
    pub fn new(
        primary: Color,
        accent: Color,
        surface: Color,
        highlight: Color,
        text: Color,
        muted: Color,
    ) -> Self {
        Self {
            primary,
            accent,
            surface,
            highlight,
            text,
            muted,
        }
    }

    pub fn primary(&self) -> Color {
        self.primary
    }

    pub fn accent(&self) -> Color {
        self.accent
    }

    pub fn surface(&self) -> Color {
        self.surface
    }

    pub fn highlight(&self) -> Color {
        self.highlight
    }

    pub fn text(&self) -> Color {
        self.text
    }

    pub fn muted(&self) -> Color {
        self.muted
    }
}

impl Default for Palette {
    fn default() -> Self {
        let parse = |value: &str| Color::new(value).expect("palette defaults are valid CSS colors");
        Self {
            primary: parse("#4078c0"),
            accent: parse("#f05033"),
            surface: parse("#f4f4f4"),
            highlight: parse("#e6f7ff"),
            text: parse("#333"),
            muted: parse("#666"),
        }
    }
}
