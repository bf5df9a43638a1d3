/// Convenience result type used across bgslide.
pub type SlideshowResult<T> = Result<T, SlideshowError>;

/// Error taxonomy for slideshow operations.
///
/// Every variant is raised synchronously to the caller of the offending
/// operation and nothing is retried internally.
#[derive(thiserror::Error, Debug)]
pub enum SlideshowError {
    /// Empty image collection or an unusable configuration value.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `initialize` was called on an instance that already started initializing.
    #[error("slideshow is already initialized")]
    AlreadyInitialized,

    /// A playback operation was called before every image finished loading.
    #[error("slideshow is not ready: images are still loading or initialize was not called")]
    NotReady,

    /// An effect name could not be resolved at advance time.
    #[error("unknown effect '{0}'")]
    UnknownEffect(String),

    /// The preloader reported an image that will never load.
    #[error("preload error: {0}")]
    Preload(String),

    /// Errors when deserializing configuration or image lists.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped failure from a host collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideshowError {
    /// Build a [`SlideshowError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`SlideshowError::UnknownEffect`] value.
    pub fn unknown_effect(name: impl Into<String>) -> Self {
        Self::UnknownEffect(name.into())
    }

    /// Build a [`SlideshowError::Preload`] value.
    pub fn preload(msg: impl Into<String>) -> Self {
        Self::Preload(msg.into())
    }

    /// Build a [`SlideshowError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
