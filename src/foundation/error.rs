/// Crate-wide result alias.
pub type ChoreoResult<T> = Result<T, ChoreoError>;

/// Errors surfaced at the registry and I/O boundaries.
///
/// Per-tick evaluation never fails: missing geometry and degenerate layouts degrade to "no update"
/// for the affected entity instead of producing an error.
#[derive(thiserror::Error, Debug)]
pub enum ChoreoError {
    /// Registry or layout description rejected during build.
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry source could not describe the page.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error with preserved source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChoreoError {
    /// Build a [`ChoreoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChoreoError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ChoreoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
