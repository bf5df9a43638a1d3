use crate::foundation::error::{SlideshowError, SlideshowResult};

/// Reference to one image in the slideshow collection.
///
/// In JSON a bare string is a [`ImageRef::Simple`] and a two-element array
/// `[locator, effectName]` is a [`ImageRef::WithEffect`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// Locator only; the configured default effect applies.
    Simple(String),
    /// Locator plus the effect used when this image departs.
    WithEffect(String, String),
}

impl ImageRef {
    /// Plain image reference.
    pub fn simple(locator: impl Into<String>) -> Self {
        Self::Simple(locator.into())
    }

    /// Image reference carrying its own departing effect.
    pub fn with_effect(locator: impl Into<String>, effect: impl Into<String>) -> Self {
        Self::WithEffect(locator.into(), effect.into())
    }

    /// Where the image lives (URL or path; opaque to the controller).
    pub fn locator(&self) -> &str {
        match self {
            Self::Simple(l) | Self::WithEffect(l, _) => l,
        }
    }

    /// The per-image effect override, if any.
    pub fn effect_override(&self) -> Option<&str> {
        match self {
            Self::Simple(_) => None,
            Self::WithEffect(_, fx) => Some(fx),
        }
    }

    /// Effect to run when this image is the one leaving the screen.
    pub fn effect_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.effect_override().unwrap_or(default)
    }

    /// Parse an image collection from a JSON array.
    pub fn list_from_json(s: &str) -> SlideshowResult<Vec<ImageRef>> {
        serde_json::from_str(s).map_err(|e| SlideshowError::serde(e.to_string()))
    }
}

impl From<&str> for ImageRef {
    fn from(locator: &str) -> Self {
        Self::simple(locator)
    }
}

impl From<String> for ImageRef {
    fn from(locator: String) -> Self {
        Self::Simple(locator)
    }
}

impl From<(&str, &str)> for ImageRef {
    fn from((locator, effect): (&str, &str)) -> Self {
        Self::with_effect(locator, effect)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/image_ref.rs"]
mod tests;
