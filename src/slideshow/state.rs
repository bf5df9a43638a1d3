/// Lifecycle of a slideshow instance.
///
/// `Uninitialized -> Loading -> Idle <-> Transitioning`. A pause request is
/// tracked separately by the controller because it may arrive while a
/// transition is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum PlaybackState {
    /// `initialize` has not been called.
    #[default]
    Uninitialized,
    /// Scaffolding exists; waiting for image load notifications.
    Loading,
    /// Ready, nothing in flight.
    Idle,
    /// Ready, a visual transition is running.
    Transitioning,
}

impl PlaybackState {
    /// Every image has loaded.
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Idle | Self::Transitioning)
    }

    /// A transition is in flight.
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Transitioning)
    }
}
