/// Convenience result type used across Rubric.
pub type RubricResult<T> = Result<T, RubricError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum RubricError {
    /// Invalid user-provided request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Data-integrity faults discovered while aggregating submissions.
    #[error("aggregation error: {0}")]
    Aggregation(String),

    /// Errors while rasterizing chart images.
    #[error("chart render error: {0}")]
    Render(String),

    /// Errors while assembling or writing the document byte stream.
    #[error("document encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RubricError {
    /// Build a [`RubricError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RubricError::Aggregation`] value.
    pub fn aggregation(msg: impl Into<String>) -> Self {
        Self::Aggregation(msg.into())
    }

    /// Build a [`RubricError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`RubricError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
