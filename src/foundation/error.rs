/// Convenience result type used across switchlight.
pub type SwitchlightResult<T> = Result<T, SwitchlightError>;

/// Boundary error taxonomy.
///
/// Scene behavior itself never fails: missing state is skipped for a frame. Errors only come
/// from bad input scripts and from rendering/encoding output.
#[derive(thiserror::Error, Debug)]
pub enum SwitchlightError {
    /// Invalid user-provided script or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing or reading back a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames out.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SwitchlightError {
    /// Build a [`SwitchlightError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SwitchlightError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SwitchlightError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SwitchlightError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SwitchlightError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
