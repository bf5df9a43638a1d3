use crate::effects::{
    property::VisualProperty,
    registry::{Effect, EffectCtx, EffectRegistry},
};

/// Animates a fixed set of properties on the outgoing slot to target values.
///
/// The incoming slot is left neutral, so it shows its image at full
/// visibility underneath while the outgoing slot animates away.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingTween {
    targets: Vec<(VisualProperty, String)>,
}

impl OutgoingTween {
    /// Tween towards `targets`; each property reports settlement on its own.
    pub fn new<I, V>(targets: I) -> Self
    where
        I: IntoIterator<Item = (VisualProperty, V)>,
        V: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(|(p, v)| (p, v.into())).collect(),
        }
    }

    /// Opacity to zero.
    pub fn fade_out() -> Self {
        Self::new([(VisualProperty::Opacity, "0.0")])
    }

    /// Height collapses to zero.
    pub fn slide_up() -> Self {
        Self::new([(VisualProperty::Height, "0")])
    }

    /// Width collapses to zero.
    pub fn slide_left() -> Self {
        Self::new([(VisualProperty::Width, "0")])
    }

    /// Slight zoom while fading out.
    pub fn zoom_fade_out() -> Self {
        Self::new([
            (VisualProperty::Transform, "scale(1.1)"),
            (VisualProperty::Opacity, "0.0"),
        ])
    }

    /// Properties this tween animates.
    pub fn properties(&self) -> impl Iterator<Item = VisualProperty> + '_ {
        self.targets.iter().map(|(p, _)| *p)
    }

    fn transition_decl(&self, ms: u64) -> String {
        self.targets
            .iter()
            .map(|(p, _)| format!("{} {ms}ms", p.css_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Effect for OutgoingTween {
    fn start(&self, ctx: &mut EffectCtx<'_>) {
        let incoming = ctx.incoming();
        let outgoing = ctx.outgoing();
        ctx.reset(incoming);

        let decl = self.transition_decl(ctx.config().effect_duration_ms);
        ctx.set(outgoing, VisualProperty::Transition, decl);
        for (p, v) in &self.targets {
            ctx.set(outgoing, *p, v.clone());
        }
    }

    fn cleanup(&self, ctx: &mut EffectCtx<'_>) {
        let outgoing = ctx.outgoing();
        ctx.clear(outgoing, VisualProperty::Transition);
        for p in self.properties() {
            ctx.clear(outgoing, p);
        }
    }
}

pub(crate) fn register_all(reg: &mut EffectRegistry) {
    reg.register("fadeOut", OutgoingTween::fade_out());
    reg.register("slideUp", OutgoingTween::slide_up());
    reg.register("slideLeft", OutgoingTween::slide_left());
    reg.register("zoomFadeOut", OutgoingTween::zoom_fade_out());
}

#[cfg(test)]
#[path = "../../tests/unit/effects/builtin.rs"]
mod tests;
