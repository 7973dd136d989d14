use thiserror::Error;

/// Errors reported by a drawing surface or the factory that creates it
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("Failed to create drawing surface: {0}")]
    CreationFailed(String),
    /// The device backing the surface went away; the surface must be recreated
    #[error("Drawing surface lost its device")]
    DeviceLost,
}

/// Result type for surface operations
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Errors that can occur while loading the tool configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A stroke width outside the six selectable widths
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthError {
    #[error("Stroke width {0} is not one of 1..=6")]
    OutOfRange(u8),
}

/// Errors that can occur during editor state transitions
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransitionError {
    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}
