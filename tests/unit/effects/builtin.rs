use super::*;
use crate::{
    config::model::Config, foundation::core::SlotId, host::headless::RecordingRenderer,
    slideshow::slot::Slot,
};

fn run_start(fx: &OutgoingTween, cfg: &Config) -> (RecordingRenderer, [Slot; 2]) {
    let mut r = RecordingRenderer::new();
    let mut slots = [Slot::new(0), Slot::new(-1)];
    let mut ctx = EffectCtx::new(&mut r, &mut slots, cfg, SlotId::FIRST);
    fx.start(&mut ctx);
    (r, slots)
}

#[test]
fn fade_out_animates_opacity_of_outgoing_only() {
    let cfg = Config::default();
    let (r, slots) = run_start(&OutgoingTween::fade_out(), &cfg);
    assert_eq!(
        r.property(SlotId::FIRST, VisualProperty::Transition),
        Some("opacity 1000ms")
    );
    assert_eq!(r.property(SlotId::FIRST, VisualProperty::Opacity), Some("0.0"));
    assert!(r.is_neutral(SlotId::SECOND));
    assert!(slots[1].is_neutral());
    assert_eq!(r.pending_settles(), 1);
}

#[test]
fn zoom_fade_out_touches_two_properties() {
    let cfg = Config::default().with_effect_duration_ms(400);
    let (r, _) = run_start(&OutgoingTween::zoom_fade_out(), &cfg);
    assert_eq!(
        r.property(SlotId::FIRST, VisualProperty::Transition),
        Some("transform 400ms, opacity 400ms")
    );
    assert_eq!(
        r.property(SlotId::FIRST, VisualProperty::Transform),
        Some("scale(1.1)")
    );
    assert_eq!(r.pending_settles(), 2);
}

#[test]
fn slides_collapse_one_dimension() {
    let cfg = Config::default();
    let (r, _) = run_start(&OutgoingTween::slide_up(), &cfg);
    assert_eq!(r.property(SlotId::FIRST, VisualProperty::Height), Some("0"));
    let (r, _) = run_start(&OutgoingTween::slide_left(), &cfg);
    assert_eq!(r.property(SlotId::FIRST, VisualProperty::Width), Some("0"));
}

#[test]
fn cleanup_restores_a_neutral_slot() {
    let cfg = Config::default();
    let fx = OutgoingTween::zoom_fade_out();
    let (mut r, mut slots) = run_start(&fx, &cfg);

    let mut ctx = EffectCtx::new(&mut r, &mut slots, &cfg, SlotId::FIRST);
    fx.cleanup(&mut ctx);

    assert!(slots[0].is_neutral());
    assert!(r.is_neutral(SlotId::FIRST));
}

#[test]
fn start_clears_leftovers_on_the_incoming_slot() {
    let cfg = Config::default();
    let mut r = RecordingRenderer::new();
    let mut slots = [Slot::new(0), Slot::new(-1)];
    slots[1]
        .visual_state
        .insert(VisualProperty::Opacity, "0.0".to_string());

    let mut ctx = EffectCtx::new(&mut r, &mut slots, &cfg, SlotId::FIRST);
    OutgoingTween::fade_out().start(&mut ctx);

    assert!(slots[1].is_neutral());
    assert!(r.calls().contains(&crate::host::headless::RenderCall::ClearProperty {
        slot: SlotId::SECOND,
        property: VisualProperty::Opacity,
    }));
}
