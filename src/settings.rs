use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub const DEFAULT_WIDTH: f32 = 5.0;

/// Pen configuration applied to commands built from now on.
///
/// We derive Deserialize/Serialize so the host can persist it between runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    /// Color of new strokes and dots
    pub color: Color32,
    /// Base stroke width; taps leave a dot of this diameter
    pub width: f32,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: DEFAULT_WIDTH,
        }
    }
}

impl DrawSettings {
    pub fn new(color: Color32, width: f32) -> Result<Self, SettingsError> {
        let settings = Self { color, width };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_width(self.width)
    }
}

pub(crate) fn validate_width(width: f32) -> Result<(), SettingsError> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidWidth(width))
    }
}
