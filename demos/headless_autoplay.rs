use bgslide::{Config, HeadlessSlideshow, ImageRef, RenderCall};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let images = ImageRef::list_from_json(
        r#"["dawn.jpg", ["noon.jpg", "zoomFadeOut"], ["dusk.jpg", "slideLeft"], "night.jpg"]"#,
    )?;
    let cfg = Config::from_json(r#"{ "autoplayTimeoutMs": 2000, "effectDurationMs": 600 }"#)?;

    let mut show = HeadlessSlideshow::headless();
    show.initialize(images, cfg)?;
    show.complete_preload()?;

    for cycle in 1..=6 {
        if !show.fire_next_timer()? {
            break;
        }
        let effect = show.running_effect().unwrap_or("-").to_string();
        let raw = show.pump_settled()?;
        println!(
            "cycle {cycle}: {effect:<12} raw notifications={raw} now showing #{} on {:?}",
            show.current_image_index(),
            show.active_slot(),
        );
    }

    show.pause()?;
    let paints = show
        .renderer()
        .calls()
        .iter()
        .filter(|c| matches!(c, RenderCall::Paint { .. }))
        .count();
    println!(
        "paused after {} transitions, {paints} paints",
        show.completed_transitions()
    );
    Ok(())
}
