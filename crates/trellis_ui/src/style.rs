//! Styling configuration.
//!
//! Colors and sizes are plain values handed to widget constructors. Nothing
//! here is global: the composition root picks a [`ColorScheme`] (one of the
//! constants, or one loaded through [`UiConfig`]) and passes it down.

use std::path::Path;

use serde::{Deserialize, Serialize};
use trellis_core::{Color, Size};

use crate::error::ConfigError;

/// Body and outline colors for the idle (back) and pressed (front) states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Idle body.
    pub back_body: Color,
    /// Idle outline.
    pub back_outline: Color,
    /// Pressed body.
    pub front_body: Color,
    /// Pressed outline.
    pub front_outline: Color,
}

impl ColorScheme {
    /// Dark scheme, used for scrollbar handles by default.
    pub const DARK: Self = Self {
        back_body: Color::rgb(25, 25, 25),
        back_outline: Color::rgb(70, 70, 70),
        front_body: Color::rgb(50, 50, 50),
        front_outline: Color::rgb(145, 145, 145),
    };

    /// Bright scheme, the default for everything else.
    pub const BRIGHT: Self = Self {
        back_body: Color::rgb(210, 220, 240),
        back_outline: Color::rgb(130, 130, 135),
        front_body: Color::rgb(235, 240, 250),
        front_outline: Color::rgb(175, 180, 190),
    };
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::BRIGHT
    }
}

/// Size, outline width and colors of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyle {
    /// Button size.
    pub size: Size,
    /// Outline width in pixels.
    #[serde(default = "default_outline")]
    pub outline: i32,
    /// Colors.
    #[serde(default)]
    pub scheme: ColorScheme,
}

const fn default_outline() -> i32 {
    1
}

impl ButtonStyle {
    /// Creates a style with a 1px outline in the bright scheme.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            outline: 1,
            scheme: ColorScheme::BRIGHT,
        }
    }

    /// Sets the outline width.
    #[must_use]
    pub const fn with_outline(mut self, outline: i32) -> Self {
        self.outline = outline;
        self
    }

    /// Sets the color scheme.
    #[must_use]
    pub const fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::new(Size::new(80, 24))
    }
}

/// How text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Line height in pixels.
    pub line_height: i32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_height: 16,
        }
    }
}

/// Startup configuration for the widget layer.
///
/// ```toml
/// frame_delay = 4
///
/// [button]
/// size = { w = 96, h = 28 }
/// outline = 2
///
/// [button.scheme]
/// back_body = { r = 25, g = 25, b = 25 }
/// # ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Default button style.
    pub button: ButtonStyle,
    /// Scheme for scrollbar handles.
    pub handle_scheme: ColorScheme,
    /// Text style for input boxes.
    pub text: TextStyle,
    /// Frames between animation advances.
    pub frame_delay: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            button: ButtonStyle::default(),
            handle_scheme: ColorScheme::DARK,
            text: TextStyle::default(),
            frame_delay: 1,
        }
    }
}

impl UiConfig {
    /// Parses a configuration from TOML text. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the text is not valid for this schema.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] if it is not valid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded ui config");
        Ok(config)
    }
}
