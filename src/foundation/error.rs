/// Convenience result type used across calwheel.
pub type CalwheelResult<T> = Result<T, CalwheelError>;

/// Top-level error taxonomy for the edges of the crate.
///
/// The render core (mapper, arc builder, ring generators, composer) never produces
/// these; it degrades silently instead. Errors exist only where data enters or leaves:
/// document validation, import, export and persistence.
#[derive(thiserror::Error, Debug)]
pub enum CalwheelError {
    /// Invalid user-provided document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while importing events from external calendar formats.
    #[error("import error: {0}")]
    Import(String),

    /// Errors while serializing or rasterizing a rendered wheel.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem errors from persistence.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CalwheelError {
    /// Build a [`CalwheelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CalwheelError::Import`] value.
    pub fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    /// Build a [`CalwheelError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`CalwheelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for CalwheelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
