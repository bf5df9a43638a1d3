use std::{collections::BTreeMap, rc::Rc, time::Duration};

use crate::{
    config::model::Config,
    effects::{builtin, property::VisualProperty},
    foundation::{
        core::SlotId,
        error::{SlideshowError, SlideshowResult},
    },
    host::collab::Renderer,
    slideshow::slot::Slot,
};

/// A named visual transition between the two slots.
///
/// `start` animates the outgoing slot away over the configured duration.
/// Each animated property it changes on the outgoing slot reports its own
/// settled notification; if it changes none, the transition settles as soon
/// as `start` returns. Animating the incoming slot is allowed but never
/// settles anything. `cleanup` removes every override `start` introduced
/// so the slot can host the next incoming image.
pub trait Effect {
    /// Begin the transition.
    fn start(&self, ctx: &mut EffectCtx<'_>);

    /// Restore the outgoing slot to a neutral state.
    fn cleanup(&self, ctx: &mut EffectCtx<'_>);
}

/// What an [`Effect`] may touch during one transition.
///
/// Slot identity and stacking are read-only here; only transient visual
/// overrides can be written. Writes update both the controller's slot model
/// and the renderer.
pub struct EffectCtx<'a> {
    renderer: &'a mut dyn Renderer,
    slots: &'a mut [Slot; 2],
    config: &'a Config,
    outgoing: SlotId,
    outgoing_animations: usize,
}

impl<'a> EffectCtx<'a> {
    pub(crate) fn new(
        renderer: &'a mut dyn Renderer,
        slots: &'a mut [Slot; 2],
        config: &'a Config,
        outgoing: SlotId,
    ) -> Self {
        Self {
            renderer,
            slots,
            config,
            outgoing,
            outgoing_animations: 0,
        }
    }

    /// Slot being animated away.
    pub fn outgoing(&self) -> SlotId {
        self.outgoing
    }

    /// Slot holding the incoming image.
    pub fn incoming(&self) -> SlotId {
        self.outgoing.other()
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        self.config
    }

    /// Configured transition duration.
    pub fn duration(&self) -> Duration {
        self.config.effect_duration()
    }

    /// Current overrides on `slot`.
    pub fn slot(&self, slot: SlotId) -> &Slot {
        &self.slots[slot.index()]
    }

    /// Override `property` on `slot`.
    pub fn set(&mut self, slot: SlotId, property: VisualProperty, value: impl Into<String>) {
        let value = value.into();
        self.renderer.set_visual_property(slot, property, &value);
        self.slots[slot.index()]
            .visual_state
            .insert(property, value);
        if property.is_animated() && slot == self.outgoing {
            self.outgoing_animations += 1;
        }
    }

    /// Drop the override of `property` on `slot`, if any.
    pub fn clear(&mut self, slot: SlotId, property: VisualProperty) {
        if self.slots[slot.index()]
            .visual_state
            .remove(&property)
            .is_some()
        {
            self.renderer.clear_visual_property(slot, property);
        }
    }

    /// Drop every override on `slot`, the transition declaration first.
    pub fn reset(&mut self, slot: SlotId) {
        self.clear(slot, VisualProperty::Transition);
        let props: Vec<VisualProperty> = self.slots[slot.index()]
            .visual_state
            .keys()
            .copied()
            .collect();
        for p in props {
            self.clear(slot, p);
        }
    }

    /// Animated writes that target the outgoing slot.
    pub(crate) fn outgoing_animations(&self) -> usize {
        self.outgoing_animations
    }
}

/// Name-keyed table of effects, resolved at advance time.
#[derive(Clone, Default)]
pub struct EffectRegistry {
    effects: BTreeMap<String, Rc<dyn Effect>>,
}

impl std::fmt::Debug for EffectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectRegistry")
            .field("effects", &self.effects.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EffectRegistry {
    /// Registry with no effects.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with `fadeOut`, `slideUp`, `slideLeft` and `zoomFadeOut`.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        builtin::register_all(&mut reg);
        reg
    }

    /// Add or replace an effect; returns the one it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        effect: impl Effect + 'static,
    ) -> Option<Rc<dyn Effect>> {
        self.effects.insert(name.into(), Rc::new(effect))
    }

    /// Whether `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.effects.contains_key(name.trim())
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.effects.keys().map(String::as_str)
    }

    /// Look up an effect by name.
    pub fn resolve(&self, name: &str) -> SlideshowResult<Rc<dyn Effect>> {
        let name = name.trim();
        self.effects
            .get(name)
            .cloned()
            .ok_or_else(|| SlideshowError::unknown_effect(name))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/registry.rs"]
mod tests;
