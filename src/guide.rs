//! # bgslide guide
//!
//! ## Roles
//!
//! - [`Slideshow`](crate::Slideshow): the state machine. Owns the two
//!   [`Slot`](crate::Slot)s, the current image index and the autoplay timer.
//! - [`Effect`](crate::Effect): a named transition. A fresh run starts on
//!   every advance and only writes transient visual overrides through
//!   [`EffectCtx`](crate::EffectCtx).
//! - [`SettleGate`](crate::SettleGate): turns one-per-property settled
//!   notifications into exactly one settlement per transition.
//! - [`Renderer`](crate::Renderer), [`Preloader`](crate::Preloader),
//!   [`Scheduler`](crate::Scheduler): host collaborators.
//!
//! ## Lifecycle
//!
//! ```text
//! Uninitialized --initialize--> Loading --all images loaded--> Idle
//! Idle --advance--> Transitioning --settled--> Idle
//! ```
//!
//! 1. [`initialize`](crate::Slideshow::initialize) creates the scaffolding
//!    once and asks the preloader for every image. The first
//!    [`HostEvent::ImageLoaded`](crate::HostEvent::ImageLoaded) to arrive is
//!    painted on the active slot and becomes the current image, whatever its
//!    position in the collection.
//! 2. When the last image reports loaded the instance is `Idle`. With
//!    `autoplay` on, [`play`](crate::Slideshow::play) arms the first cycle.
//! 3. A cycle is either a one-shot timer or, with `showTicker`, the ticker
//!    countdown. Its firing advances forward by one.
//! 4. An advance moves the image index to its target at once, paints the
//!    target on the pending slot, arms the gate for the outgoing slot and
//!    starts the departing image's effect (per-image override first, then
//!    `defaultEffectName`).
//! 5. The first settled notification from the outgoing slot runs the
//!    effect's cleanup, swaps the stacking order, marks the pending slot
//!    active and, unless a pause was requested, arms the next cycle.
//!
//! ## Ordering rules
//!
//! - One transition at a time. `play`, `next` and `previous` while a
//!   transition runs do nothing.
//! - Timers are one-shot. Any armed timer is cancelled before another is
//!   armed, and a [`HostEvent::TimerFired`](crate::HostEvent::TimerFired)
//!   for a handle that is no longer armed is dropped.
//! - [`pause`](crate::Slideshow::pause) never interrupts a running effect;
//!   it only stops the re-arm that would follow settlement.
//! - Unknown effect names surface as
//!   [`SlideshowError::UnknownEffect`](crate::SlideshowError::UnknownEffect)
//!   from the advance that needed them, with no state changed.
//!
//! ## Driving without a browser
//!
//! [`HeadlessSlideshow`](crate::HeadlessSlideshow) wires the controller to
//! recording collaborators. `complete_preload`, `pump_settled` and
//! `fire_next_timer` play the part of the host event loop.
