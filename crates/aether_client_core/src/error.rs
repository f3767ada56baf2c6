//! Error taxonomy. Only the `user_message` of a [`FormError`] ever reaches the screen.

use thiserror::Error;

/// A required field was empty when a local action was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter an event title first.")]
    MissingTitle,
    #[error("Please enter a prompt for the image.")]
    MissingImagePrompt,
    #[error("Please fill out all required fields.")]
    MissingRequiredFields,
}

/// Which remote operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Description,
    Image,
}

/// A remote generation call failed or produced nothing usable.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{kind:?} request failed: {source}")]
    Transport {
        kind: GenerationKind,
        #[source]
        source: reqwest::Error,
    },
    #[error("{kind:?} request returned {status}: {body}")]
    Status {
        kind: GenerationKind,
        status: u16,
        body: String,
    },
    #[error("{kind:?} response could not be decoded: {reason}")]
    Decode { kind: GenerationKind, reason: String },
    #[error("{kind:?} response contained no usable result")]
    Empty { kind: GenerationKind },
}

impl GenerationError {
    pub fn kind(&self) -> GenerationKind {
        match self {
            GenerationError::Transport { kind, .. }
            | GenerationError::Status { kind, .. }
            | GenerationError::Decode { kind, .. }
            | GenerationError::Empty { kind } => *kind,
        }
    }

    /// Generic, retryable text shown instead of the underlying cause.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            GenerationKind::Description => "Failed to generate event description. Please try again.",
            GenerationKind::Image => "Failed to generate event image. Please try again.",
        }
    }
}

/// Everything the create-event form can surface.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl FormError {
    pub fn user_message(&self) -> String {
        match self {
            FormError::Validation(e) => e.to_string(),
            FormError::Generation(e) => e.user_message().to_string(),
        }
    }
}

/// Startup configuration problem. Fatal: the generation client is never built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API_KEY environment variable is not set.")]
    MissingApiKey,
    #[error("invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
