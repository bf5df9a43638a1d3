use std::{
    collections::{BTreeMap, VecDeque},
    time::Duration,
};

use crate::{
    config::model::Config,
    effects::property::VisualProperty,
    foundation::{
        core::{SlotId, TimerHandle},
        error::SlideshowResult,
    },
    host::collab::{HostEvent, Preloader, Renderer, Scheduler},
    media::image_ref::ImageRef,
    slideshow::controller::Slideshow,
};

/// One call received by a [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderCall {
    /// [`Renderer::create_scaffolding`].
    CreateScaffolding,
    /// [`Renderer::paint`].
    Paint {
        /// Target slot.
        slot: SlotId,
        /// Painted locator.
        locator: String,
    },
    /// [`Renderer::set_stack_order`].
    StackOrder {
        /// Target slot.
        slot: SlotId,
        /// New stacking order.
        z: i32,
    },
    /// [`Renderer::set_visual_property`].
    SetProperty {
        /// Target slot.
        slot: SlotId,
        /// Property written.
        property: VisualProperty,
        /// Value written.
        value: String,
    },
    /// [`Renderer::clear_visual_property`].
    ClearProperty {
        /// Target slot.
        slot: SlotId,
        /// Property cleared.
        property: VisualProperty,
    },
    /// [`Renderer::start_ticker`].
    StartTicker(Duration),
    /// [`Renderer::stop_ticker`].
    StopTicker,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SurfaceState {
    locator: Option<String>,
    z: Option<i32>,
    properties: BTreeMap<VisualProperty, String>,
}

/// In-memory renderer that records every call and queues one settled
/// notification per animated property written.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
    surfaces: [SurfaceState; 2],
    settles: VecDeque<(SlotId, VisualProperty)>,
    ticker: Option<Duration>,
    scaffolds: u32,
    fail_scaffolding: Option<String>,
}

impl RecordingRenderer {
    /// Empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make [`Renderer::create_scaffolding`] fail with `reason`.
    pub fn failing_scaffolding(reason: impl Into<String>) -> Self {
        Self {
            fail_scaffolding: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Every call in arrival order.
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Forget recorded calls (surface state is kept).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// How many times scaffolding was created.
    pub fn scaffold_count(&self) -> u32 {
        self.scaffolds
    }

    /// Locator shown on `slot`.
    pub fn painted(&self, slot: SlotId) -> Option<&str> {
        self.surfaces[slot.index()].locator.as_deref()
    }

    /// Stacking order of `slot`, once set.
    pub fn stack_order(&self, slot: SlotId) -> Option<i32> {
        self.surfaces[slot.index()].z
    }

    /// Current override of `property` on `slot`.
    pub fn property(&self, slot: SlotId, property: VisualProperty) -> Option<&str> {
        self.surfaces[slot.index()]
            .properties
            .get(&property)
            .map(String::as_str)
    }

    /// True when `slot` carries no override.
    pub fn is_neutral(&self, slot: SlotId) -> bool {
        self.surfaces[slot.index()].properties.is_empty()
    }

    /// Running ticker duration, if any.
    pub fn ticker(&self) -> Option<Duration> {
        self.ticker
    }

    /// Settled notifications not yet delivered.
    pub fn pending_settles(&self) -> usize {
        self.settles.len()
    }

    /// Drain queued settled notifications as host events.
    pub fn take_settled_events(&mut self) -> Vec<HostEvent> {
        self.settles
            .drain(..)
            .map(|(slot, property)| HostEvent::PropertySettled { slot, property })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn create_scaffolding(&mut self, _config: &Config) -> anyhow::Result<()> {
        if let Some(reason) = &self.fail_scaffolding {
            anyhow::bail!("scaffolding failed: {reason}");
        }
        self.scaffolds += 1;
        self.calls.push(RenderCall::CreateScaffolding);
        Ok(())
    }

    fn paint(&mut self, slot: SlotId, image: &ImageRef) {
        self.surfaces[slot.index()].locator = Some(image.locator().to_string());
        self.calls.push(RenderCall::Paint {
            slot,
            locator: image.locator().to_string(),
        });
    }

    fn set_stack_order(&mut self, slot: SlotId, z: i32) {
        self.surfaces[slot.index()].z = Some(z);
        self.calls.push(RenderCall::StackOrder { slot, z });
    }

    fn set_visual_property(&mut self, slot: SlotId, property: VisualProperty, value: &str) {
        self.surfaces[slot.index()]
            .properties
            .insert(property, value.to_string());
        if property.is_animated() {
            self.settles.push_back((slot, property));
        }
        self.calls.push(RenderCall::SetProperty {
            slot,
            property,
            value: value.to_string(),
        });
    }

    fn clear_visual_property(&mut self, slot: SlotId, property: VisualProperty) {
        self.surfaces[slot.index()].properties.remove(&property);
        self.calls.push(RenderCall::ClearProperty { slot, property });
    }

    fn start_ticker(&mut self, duration: Duration) {
        self.ticker = Some(duration);
        self.calls.push(RenderCall::StartTicker(duration));
    }

    fn stop_ticker(&mut self) {
        self.ticker = None;
        self.calls.push(RenderCall::StopTicker);
    }
}

/// Preloader that only records what it was asked to load.
///
/// Tests and hosts synthesize the load notifications themselves.
#[derive(Clone, Debug, Default)]
pub struct RecordingPreloader {
    requested: Vec<String>,
    fail: Option<String>,
}

impl RecordingPreloader {
    /// Empty preloader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every [`Preloader::preload`] call fail with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Let subsequent preloads succeed.
    pub fn recover(&mut self) {
        self.fail = None;
    }

    /// Locators requested so far.
    pub fn requested(&self) -> &[String] {
        &self.requested
    }

    /// One [`HostEvent::ImageLoaded`] per requested locator in request order.
    pub fn loaded_events(&self) -> Vec<HostEvent> {
        self.requested
            .iter()
            .map(|l| HostEvent::ImageLoaded { locator: l.clone() })
            .collect()
    }
}

impl Preloader for RecordingPreloader {
    fn preload(&mut self, images: &[ImageRef]) -> anyhow::Result<()> {
        if let Some(reason) = &self.fail {
            anyhow::bail!("preload failed: {reason}");
        }
        self.requested
            .extend(images.iter().map(|i| i.locator().to_string()));
        Ok(())
    }
}

/// Scheduler whose timers fire only when told to.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    armed: BTreeMap<TimerHandle, Duration>,
    cancelled: Vec<TimerHandle>,
}

impl ManualScheduler {
    /// Scheduler with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers armed and not yet fired or cancelled.
    pub fn armed(&self) -> impl Iterator<Item = (TimerHandle, Duration)> + '_ {
        self.armed.iter().map(|(h, d)| (*h, *d))
    }

    /// Number of armed timers.
    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }

    /// Handles cancelled so far.
    pub fn cancelled(&self) -> &[TimerHandle] {
        &self.cancelled
    }

    /// Fire the oldest armed timer.
    pub fn fire_next(&mut self) -> Option<HostEvent> {
        let (&handle, _) = self.armed.iter().next()?;
        self.armed.remove(&handle);
        Some(HostEvent::TimerFired(handle))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.armed.insert(handle, delay);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if self.armed.remove(&handle).is_some() {
            self.cancelled.push(handle);
        }
    }
}

/// Slideshow wired to the in-memory collaborators.
pub type HeadlessSlideshow = Slideshow<RecordingRenderer, RecordingPreloader, ManualScheduler>;

impl HeadlessSlideshow {
    /// Headless instance with the built-in effects.
    pub fn headless() -> Self {
        Slideshow::new(
            RecordingRenderer::new(),
            RecordingPreloader::new(),
            ManualScheduler::new(),
        )
    }

    /// Deliver a load notification for every requested image, then `AllLoaded`.
    pub fn complete_preload(&mut self) -> SlideshowResult<()> {
        let events = self.preloader().loaded_events();
        for event in events {
            self.handle_event(event)?;
        }
        self.handle_event(HostEvent::AllLoaded)
    }

    /// Deliver every queued settled notification; returns how many were delivered.
    pub fn pump_settled(&mut self) -> SlideshowResult<usize> {
        let events = self.renderer_mut().take_settled_events();
        let n = events.len();
        for event in events {
            self.handle_event(event)?;
        }
        Ok(n)
    }

    /// Fire the oldest armed timer, if any; returns whether one fired.
    pub fn fire_next_timer(&mut self) -> SlideshowResult<bool> {
        let fired = self.scheduler_mut().fire_next();
        match fired {
            Some(event) => {
                self.handle_event(event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
