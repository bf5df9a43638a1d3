//! bgslide drives a background-image slideshow.
//!
//! Given an ordered image collection and a [`Config`], a [`Slideshow`]
//! preloads the images, shows the first one to arrive, and then cycles the
//! background through the collection with named visual effects (`fadeOut`,
//! `slideUp`, `slideLeft`, `zoomFadeOut`, or any registered [`Effect`]).
//!
//! The crate owns only the state machine. Painting, preloading and timers
//! belong to the host and are reached through the [`Renderer`],
//! [`Preloader`] and [`Scheduler`] traits; the host reports back through
//! [`HostEvent`]s. In-memory implementations live in [`RecordingRenderer`],
//! [`RecordingPreloader`] and [`ManualScheduler`].
//!
//! See [`crate::guide`] for the lifecycle in detail.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod effects;
mod foundation;
mod host;
mod media;
mod slideshow;

/// Lifecycle and ordering rules, in prose.
pub mod guide;

pub use config::model::Config;
pub use effects::builtin::OutgoingTween;
pub use effects::property::VisualProperty;
pub use effects::registry::{Effect, EffectCtx, EffectRegistry};
pub use foundation::core::{Direction, SlotId, TimerHandle, wrap_index};
pub use foundation::error::{SlideshowError, SlideshowResult};
pub use host::collab::{HostEvent, Preloader, Renderer, Scheduler};
pub use host::headless::{
    HeadlessSlideshow, ManualScheduler, RecordingPreloader, RecordingRenderer, RenderCall,
};
pub use media::image_ref::ImageRef;
pub use slideshow::controller::Slideshow;
pub use slideshow::gate::SettleGate;
pub use slideshow::slot::Slot;
pub use slideshow::state::PlaybackState;
