//! Error types for the frostpaint library

use thiserror::Error;

/// Result type alias for frostpaint operations
pub type Result<T> = std::result::Result<T, PaintError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by color analysis and preview operations
#[derive(Error, Debug)]
pub enum PaintError {
    /// A required request field was absent or empty
    #[error("Missing required input: {field}")]
    MissingInput { field: &'static str },

    /// A color string was not `#rrggbb`
    #[error("Invalid color format: {value:?} (expected #rrggbb)")]
    InvalidColorFormat { value: String },

    /// Image payload could not be decoded or resized
    #[error("Image processing failed: {message}")]
    ImageProcessing {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Compositing or encoding a preview failed
    #[error("Preview generation failed: {message}")]
    PreviewGeneration {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// A numeric option was outside its accepted range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl PaintError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingInput { field }
    }

    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
        }
    }

    /// Create an image processing error with context
    pub fn image<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageProcessing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a preview generation error with context
    pub fn preview<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::PreviewGeneration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// True when the error stems from a malformed or incomplete request rather
    /// than from processing. Transports map these to 4xx, the rest to 500.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            PaintError::MissingInput { .. }
                | PaintError::InvalidColorFormat { .. }
                | PaintError::InvalidParameter { .. }
        )
    }

    /// Short message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            PaintError::MissingInput { field } => format!("Missing {field} data"),
            PaintError::InvalidColorFormat { value } => {
                format!("'{value}' is not a valid color. Use the #rrggbb format.")
            }
            PaintError::ImageProcessing { .. } => {
                "Could not read the image. Please try a different photo.".to_string()
            }
            PaintError::PreviewGeneration { .. } => "Failed to generate preview".to_string(),
            PaintError::InvalidParameter { parameter, .. } => {
                format!("Invalid value for {parameter}")
            }
        }
    }
}
