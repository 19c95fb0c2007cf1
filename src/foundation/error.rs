/// Convenience result type used across dinky.
pub type DinkyResult<T> = Result<T, DinkyError>;

/// Top-level error taxonomy used by parser, layout and codec APIs.
///
/// Compositing format mismatches are deliberately absent: they are logged and the call is
/// skipped instead of failing.
#[derive(thiserror::Error, Debug)]
pub enum DinkyError {
    /// Structural markup failure (root cardinality, unmatched delimiters).
    #[error("parse error at byte {offset}: {message}")]
    Parse {
        /// Byte offset into the newline-stripped input.
        offset: usize,
        /// Human-readable description.
        message: String,
    },

    /// A font, input file or other local resource could not be found.
    #[error("resource missing: {0}")]
    ResourceMissing(String),

    /// Errors while laying out or rasterizing a node tree.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while decoding or encoding image data.
    #[error("codec error: {0}")]
    Codec(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DinkyError {
    /// Build a [`DinkyError::Parse`] value.
    pub fn parse(offset: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: msg.into(),
        }
    }

    /// Build a [`DinkyError::ResourceMissing`] value.
    pub fn resource_missing(msg: impl Into<String>) -> Self {
        Self::ResourceMissing(msg.into())
    }

    /// Build a [`DinkyError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DinkyError::Codec`] value.
    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
