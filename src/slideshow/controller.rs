use std::rc::Rc;

use crate::{
    config::model::Config,
    effects::registry::{Effect, EffectCtx, EffectRegistry},
    foundation::{
        core::{Direction, SlotId, TimerHandle, wrap_index},
        error::{SlideshowError, SlideshowResult},
    },
    host::collab::{HostEvent, Preloader, Renderer, Scheduler},
    media::image_ref::ImageRef,
    slideshow::{gate::SettleGate, slot::Slot, state::PlaybackState},
};

struct InFlight {
    effect_name: String,
    effect: Rc<dyn Effect>,
    outgoing: SlotId,
}

/// Background slideshow state machine.
///
/// Owns the two slots, the playback state and the autoplay timer. All
/// mutation happens on the caller's thread in response to public calls or
/// to [`HostEvent`]s fed through [`Slideshow::handle_event`]; at most one
/// transition is in flight at any time.
pub struct Slideshow<R, P, S> {
    renderer: R,
    preloader: P,
    scheduler: S,
    registry: EffectRegistry,

    config: Config,
    images: Vec<ImageRef>,
    loaded: Vec<bool>,
    loaded_count: usize,
    first_painted: bool,

    slots: [Slot; 2],
    active: SlotId,
    current_image: usize,

    state: PlaybackState,
    cancel_requested: bool,
    timer: Option<TimerHandle>,
    ticker_running: bool,
    gate: SettleGate,
    in_flight: Option<InFlight>,
    completed: u64,
}

impl<R, P, S> std::fmt::Debug for Slideshow<R, P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slideshow")
            .field("state", &self.state)
            .field("images", &self.images.len())
            .field("current_image", &self.current_image)
            .field("active", &self.active)
            .field("cancel_requested", &self.cancel_requested)
            .field("timer", &self.timer)
            .field("ticker_running", &self.ticker_running)
            .finish_non_exhaustive()
    }
}

impl<R: Renderer, P: Preloader, S: Scheduler> Slideshow<R, P, S> {
    /// New instance using the built-in effects.
    pub fn new(renderer: R, preloader: P, scheduler: S) -> Self {
        Self::with_registry(renderer, preloader, scheduler, EffectRegistry::with_builtins())
    }

    /// New instance resolving effect names against `registry`.
    pub fn with_registry(renderer: R, preloader: P, scheduler: S, registry: EffectRegistry) -> Self {
        Self {
            renderer,
            preloader,
            scheduler,
            registry,
            config: Config::default(),
            images: Vec::new(),
            loaded: Vec::new(),
            loaded_count: 0,
            first_painted: false,
            slots: [Slot::default(), Slot::default()],
            active: SlotId::FIRST,
            current_image: 0,
            state: PlaybackState::Uninitialized,
            cancel_requested: false,
            timer: None,
            ticker_running: false,
            gate: SettleGate::default(),
            in_flight: None,
            completed: 0,
        }
    }

    /// Build the scaffolding and start preloading `images`.
    ///
    /// The instance becomes ready once every image has reported loaded; the
    /// first image to arrive is shown right away.
    #[tracing::instrument(skip(self, images, config), fields(images = images.len()))]
    pub fn initialize(&mut self, images: Vec<ImageRef>, config: Config) -> SlideshowResult<()> {
        if self.state != PlaybackState::Uninitialized {
            return Err(SlideshowError::AlreadyInitialized);
        }
        if images.is_empty() {
            return Err(SlideshowError::invalid_input("no images specified"));
        }
        config.validate()?;

        self.renderer.create_scaffolding(&config)?;
        let base = config.z_index_base;
        self.slots = [Slot::new(base), Slot::new(base.saturating_sub(1))];
        for slot in SlotId::ALL {
            self.renderer
                .set_stack_order(slot, self.slots[slot.index()].z_order);
        }

        // Nothing is committed until preloading has started, so a failed
        // attempt leaves the instance uninitialized and retryable.
        self.preloader.preload(&images)?;

        self.loaded = vec![false; images.len()];
        self.images = images;
        self.config = config;
        self.state = PlaybackState::Loading;
        tracing::debug!(images = self.images.len(), "scaffolding ready, preloading");
        Ok(())
    }

    /// Arm the next autoplay cycle.
    ///
    /// No-op while a transition is in flight. With a ticker configured the
    /// ticker countdown drives the advance, otherwise a one-shot timer does.
    pub fn play(&mut self) -> SlideshowResult<()> {
        self.ensure_ready()?;
        if self.state.is_transitioning() {
            tracing::trace!("play ignored: transition in flight");
            return Ok(());
        }
        self.cancel_requested = false;
        self.disarm_cycle();

        if self.config.show_ticker {
            self.renderer.start_ticker(self.config.autoplay_timeout());
            self.ticker_running = true;
        } else {
            self.timer = Some(self.scheduler.schedule_after(self.config.autoplay_timeout()));
        }
        tracing::debug!(ticker = self.config.show_ticker, "autoplay armed");
        Ok(())
    }

    /// Stop autoplay.
    ///
    /// A transition already in flight finishes normally but does not chain
    /// into another cycle.
    pub fn pause(&mut self) -> SlideshowResult<()> {
        self.ensure_ready()?;
        self.disarm_cycle();
        self.cancel_requested = true;
        tracing::debug!(in_flight = self.state.is_transitioning(), "paused");
        Ok(())
    }

    /// Pause and show the next image. No-op while a transition is in flight.
    pub fn next(&mut self) -> SlideshowResult<()> {
        self.step(Direction::Forward)
    }

    /// Pause and show the previous image. No-op while a transition is in flight.
    pub fn previous(&mut self) -> SlideshowResult<()> {
        self.step(Direction::Backward)
    }

    /// Feed one host notification into the state machine.
    pub fn handle_event(&mut self, event: HostEvent) -> SlideshowResult<()> {
        if self.state == PlaybackState::Uninitialized {
            tracing::trace!(?event, "event before initialize ignored");
            return Ok(());
        }
        match event {
            HostEvent::ImageLoaded { locator } => self.on_image_loaded(&locator),
            HostEvent::AllLoaded => {
                if self.state == PlaybackState::Loading {
                    self.loaded.iter_mut().for_each(|l| *l = true);
                    self.loaded_count = self.images.len();
                    if !self.first_painted {
                        self.paint_first(0);
                    }
                    self.become_ready()?;
                }
                Ok(())
            }
            HostEvent::ImageFailed { locator, reason } => {
                if self.state == PlaybackState::Loading {
                    return Err(SlideshowError::preload(format!(
                        "'{locator}' failed to load: {reason}"
                    )));
                }
                tracing::trace!(%locator, "late load failure ignored");
                Ok(())
            }
            HostEvent::PropertySettled { slot, property } => {
                if self.gate.observe(slot) && self.in_flight.is_some() {
                    self.on_transition_settled()
                } else {
                    tracing::trace!(
                        ?slot,
                        %property,
                        raw = self.gate.raw_count(),
                        "redundant settled notification"
                    );
                    Ok(())
                }
            }
            HostEvent::TimerFired(handle) => {
                if self.timer != Some(handle) {
                    tracing::trace!(?handle, "stale timer ignored");
                    return Ok(());
                }
                self.timer = None;
                self.advance(Direction::Forward)
            }
            HostEvent::TickerElapsed => {
                if !self.ticker_running {
                    tracing::trace!("ticker elapsed while stopped");
                    return Ok(());
                }
                self.ticker_running = false;
                self.renderer.stop_ticker();
                self.advance(Direction::Forward)
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the image being shown, or being transitioned to.
    pub fn current_image_index(&self) -> usize {
        self.current_image
    }

    /// Slot on top of the stack.
    pub fn active_slot(&self) -> SlotId {
        self.active
    }

    /// Slot that receives the next image.
    pub fn pending_slot(&self) -> SlotId {
        self.active.other()
    }

    /// Controller-side view of `slot`.
    pub fn slot(&self, slot: SlotId) -> &Slot {
        &self.slots[slot.index()]
    }

    /// A transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Autoplay will not re-arm after the current transition.
    pub fn is_cancel_requested(&self) -> bool {
        self.cancel_requested
    }

    /// Name of the effect currently running.
    pub fn running_effect(&self) -> Option<&str> {
        self.in_flight.as_ref().map(|f| f.effect_name.as_str())
    }

    /// Transitions that have settled since initialization.
    pub fn completed_transitions(&self) -> u64 {
        self.completed
    }

    /// Image collection in display order.
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Effects available to this instance.
    pub fn registry(&self) -> &EffectRegistry {
        &self.registry
    }

    /// Borrow the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutably borrow the renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Borrow the preloader.
    pub fn preloader(&self) -> &P {
        &self.preloader
    }

    /// Mutably borrow the preloader.
    pub fn preloader_mut(&mut self) -> &mut P {
        &mut self.preloader
    }

    /// Borrow the scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutably borrow the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn ensure_ready(&self) -> SlideshowResult<()> {
        if self.state.is_ready() {
            Ok(())
        } else {
            Err(SlideshowError::NotReady)
        }
    }

    fn step(&mut self, dir: Direction) -> SlideshowResult<()> {
        self.ensure_ready()?;
        if self.state.is_transitioning() {
            tracing::trace!(?dir, "step ignored: transition in flight");
            return Ok(());
        }
        self.pause()?;
        self.advance(dir)
    }

    /// Start one transition towards the neighbouring image in `dir`.
    ///
    /// The image index moves to the target immediately; slot roles swap
    /// only once the transition settles. The departing image's effect
    /// override wins over the configured default.
    pub(crate) fn advance(&mut self, dir: Direction) -> SlideshowResult<()> {
        self.ensure_ready()?;
        if self.state.is_transitioning() {
            tracing::trace!(?dir, "advance ignored: transition in flight");
            return Ok(());
        }

        let departing = &self.images[self.current_image];
        let effect_name = departing
            .effect_or(&self.config.default_effect_name)
            .trim()
            .to_string();
        let effect = self.registry.resolve(&effect_name)?;

        let outgoing = self.active;
        let incoming = outgoing.other();
        let target = wrap_index(self.current_image, dir, self.images.len());
        self.current_image = target;
        self.paint(incoming, target);

        tracing::debug!(
            from = ?outgoing,
            to = ?incoming,
            image = target,
            effect = %effect_name,
            "transition start"
        );

        self.gate.arm(outgoing);
        self.state = PlaybackState::Transitioning;
        self.in_flight = Some(InFlight {
            effect_name,
            effect: Rc::clone(&effect),
            outgoing,
        });

        let mut ctx = EffectCtx::new(&mut self.renderer, &mut self.slots, &self.config, outgoing);
        effect.start(&mut ctx);
        let animated = ctx.outgoing_animations();

        if animated == 0 {
            tracing::debug!("effect animated nothing on the outgoing slot, settling now");
            self.gate.observe(outgoing);
            return self.on_transition_settled();
        }
        Ok(())
    }

    fn on_transition_settled(&mut self) -> SlideshowResult<()> {
        let Some(done) = self.in_flight.take() else {
            return Ok(());
        };
        let outgoing = done.outgoing;
        let incoming = outgoing.other();

        let mut ctx = EffectCtx::new(&mut self.renderer, &mut self.slots, &self.config, outgoing);
        done.effect.cleanup(&mut ctx);
        // Anything the effect left behind would leak into the next incoming image.
        ctx.reset(outgoing);

        let base = self.config.z_index_base;
        self.set_z(outgoing, base.saturating_sub(1));
        self.set_z(incoming, base);
        self.active = incoming;
        self.state = PlaybackState::Idle;
        self.completed += 1;
        if let Some(h) = self.timer.take() {
            self.scheduler.cancel(h);
        }

        tracing::debug!(
            active = ?self.active,
            image = self.current_image,
            effect = %done.effect_name,
            "transition settled"
        );

        if self.cancel_requested {
            self.cancel_requested = false;
            tracing::debug!("autoplay cancelled, staying idle");
            Ok(())
        } else {
            self.play()
        }
    }

    fn on_image_loaded(&mut self, locator: &str) -> SlideshowResult<()> {
        if self.state != PlaybackState::Loading {
            tracing::trace!(%locator, "load notification after ready ignored");
            return Ok(());
        }

        let mut first_match = None;
        for (i, image) in self.images.iter().enumerate() {
            if image.locator() == locator && !self.loaded[i] {
                self.loaded[i] = true;
                self.loaded_count += 1;
                first_match.get_or_insert(i);
            }
        }
        let Some(index) = first_match else {
            tracing::trace!(%locator, "duplicate or unknown load notification");
            return Ok(());
        };

        if !self.first_painted {
            self.paint_first(index);
        }
        if self.loaded_count == self.images.len() {
            self.become_ready()?;
        }
        Ok(())
    }

    fn paint_first(&mut self, index: usize) {
        self.first_painted = true;
        self.current_image = index;
        self.paint(self.active, index);
        tracing::debug!(image = index, "first image shown");
    }

    fn become_ready(&mut self) -> SlideshowResult<()> {
        self.state = PlaybackState::Idle;
        tracing::debug!(images = self.images.len(), "all images loaded");
        if self.config.autoplay {
            self.play()?;
        }
        Ok(())
    }

    fn paint(&mut self, slot: SlotId, index: usize) {
        let image = &self.images[index];
        self.renderer.paint(slot, image);
        self.slots[slot.index()].current_image = Some(image.clone());
    }

    fn set_z(&mut self, slot: SlotId, z: i32) {
        self.slots[slot.index()].z_order = z;
        self.renderer.set_stack_order(slot, z);
    }

    fn disarm_cycle(&mut self) {
        if let Some(h) = self.timer.take() {
            self.scheduler.cancel(h);
        }
        if self.ticker_running {
            self.ticker_running = false;
            self.renderer.stop_ticker();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slideshow/controller.rs"]
mod tests;
