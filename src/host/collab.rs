use std::time::Duration;

use crate::{
    config::model::Config,
    effects::property::VisualProperty,
    foundation::core::{SlotId, TimerHandle},
    media::image_ref::ImageRef,
};

/// Paints slots and the ticker on the host surface.
///
/// Writes are fire-and-forget. Completion of an animated property is
/// reported back through [`HostEvent::PropertySettled`], one notification per
/// property that actually changed.
pub trait Renderer {
    /// Create the two slots (and the ticker when configured). Called once.
    fn create_scaffolding(&mut self, config: &Config) -> anyhow::Result<()>;

    /// Show `image` on `slot`.
    fn paint(&mut self, slot: SlotId, image: &ImageRef);

    /// Set the stacking order of `slot`.
    fn set_stack_order(&mut self, slot: SlotId, z: i32);

    /// Override one visual property of `slot`.
    fn set_visual_property(&mut self, slot: SlotId, property: VisualProperty, value: &str);

    /// Drop an override, returning the property to its stylesheet value.
    fn clear_visual_property(&mut self, slot: SlotId, property: VisualProperty);

    /// Start the ticker countdown; it reports [`HostEvent::TickerElapsed`] after `duration`.
    fn start_ticker(&mut self, duration: Duration);

    /// Reset the ticker to its hidden, idle state.
    fn stop_ticker(&mut self);
}

/// Starts loading images ahead of display.
///
/// Each reference produces one [`HostEvent::ImageLoaded`] in any order,
/// possibly duplicated, optionally followed by [`HostEvent::AllLoaded`]. An
/// image that can never load must be reported as [`HostEvent::ImageFailed`]
/// rather than left pending.
pub trait Preloader {
    /// Begin loading every image in `images`.
    fn preload(&mut self, images: &[ImageRef]) -> anyhow::Result<()>;
}

/// One-shot timers on the host event loop.
pub trait Scheduler {
    /// Arm a timer that reports [`HostEvent::TimerFired`] after `delay`.
    fn schedule_after(&mut self, delay: Duration) -> TimerHandle;

    /// Disarm `handle`. Cancelling an already fired timer is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Notification delivered by the host to [`crate::Slideshow::handle_event`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HostEvent {
    /// An image finished loading.
    ImageLoaded {
        /// Locator of the loaded image.
        locator: String,
    },
    /// Every requested image finished loading.
    AllLoaded,
    /// An image will never load.
    ImageFailed {
        /// Locator of the failed image.
        locator: String,
        /// Host-provided reason.
        reason: String,
    },
    /// An animated property on `slot` finished its transition.
    PropertySettled {
        /// Slot whose property settled.
        slot: SlotId,
        /// Property that settled.
        property: VisualProperty,
    },
    /// A timer armed through [`Scheduler::schedule_after`] fired.
    TimerFired(TimerHandle),
    /// The ticker countdown completed.
    TickerElapsed,
}
