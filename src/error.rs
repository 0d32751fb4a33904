use thiserror::Error;

/// Errors raised when the host configures the drawing controller
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("stroke width must be a finite positive number, got {0}")]
    InvalidWidth(f32),
}
