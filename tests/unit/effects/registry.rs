use super::*;
use crate::host::headless::RecordingRenderer;

struct Noop;

impl Effect for Noop {
    fn start(&self, _ctx: &mut EffectCtx<'_>) {}
    fn cleanup(&self, _ctx: &mut EffectCtx<'_>) {}
}

#[test]
fn builtins_are_registered_by_name() {
    let reg = EffectRegistry::with_builtins();
    let names: Vec<&str> = reg.names().collect();
    assert_eq!(names, vec!["fadeOut", "slideLeft", "slideUp", "zoomFadeOut"]);
    assert!(reg.resolve("fadeOut").is_ok());
    assert!(reg.resolve(" slideUp ").is_ok());
}

#[test]
fn unknown_name_is_unknown_effect() {
    let reg = EffectRegistry::with_builtins();
    let err = reg.resolve("spin").err().unwrap();
    assert!(matches!(err, SlideshowError::UnknownEffect(ref n) if n == "spin"));
}

#[test]
fn lookup_is_case_sensitive() {
    let reg = EffectRegistry::with_builtins();
    assert!(!reg.contains("fadeout"));
}

#[test]
fn register_replaces_and_returns_previous() {
    let mut reg = EffectRegistry::new();
    assert!(reg.register("custom", Noop).is_none());
    assert!(reg.register("custom", Noop).is_some());
    assert!(reg.contains("custom"));
}

#[test]
fn ctx_counts_only_animated_writes_on_the_outgoing_slot() {
    let cfg = Config::default();
    let mut r = RecordingRenderer::new();
    let mut slots = [Slot::new(0), Slot::new(-1)];
    let mut ctx = EffectCtx::new(&mut r, &mut slots, &cfg, SlotId::SECOND);
    assert_eq!(ctx.incoming(), SlotId::FIRST);

    ctx.set(SlotId::SECOND, VisualProperty::Transition, "opacity 10ms");
    assert_eq!(ctx.outgoing_animations(), 0);
    ctx.set(SlotId::FIRST, VisualProperty::Opacity, "1.0");
    assert_eq!(ctx.outgoing_animations(), 0);
    ctx.set(SlotId::SECOND, VisualProperty::Opacity, "0.0");
    assert_eq!(ctx.outgoing_animations(), 1);

    ctx.reset(SlotId::SECOND);
    assert!(ctx.slot(SlotId::SECOND).is_neutral());
}

#[test]
fn clearing_an_absent_property_does_not_reach_the_renderer() {
    let cfg = Config::default();
    let mut r = RecordingRenderer::new();
    let mut slots = [Slot::new(0), Slot::new(-1)];
    let mut ctx = EffectCtx::new(&mut r, &mut slots, &cfg, SlotId::FIRST);
    ctx.clear(SlotId::FIRST, VisualProperty::Width);
    assert!(r.calls().is_empty());
}
