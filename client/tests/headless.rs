use std::time::Duration;

use bevy::prelude::*;

use corridor_client::{config::frame_pool, headless_app, resources::HeadlessRun, run_headless};
use corridor_common::{
    camera::LoopMode, corridor::CorridorModel, portal::PortalState, scene::SceneAssembler, theme::ThemeConfig,
};

fn scene(theme: &ThemeConfig, loop_mode: LoopMode) -> SceneAssembler {
    let frames = frame_pool(Vec::new()).unwrap();
    let corridor = CorridorModel::build(10, 12.0, theme, &frames).unwrap();
    SceneAssembler::new(corridor, theme, loop_mode)
}

fn run(ticks: u64) -> HeadlessRun {
    HeadlessRun {
        ticks_left: ticks,
        report_every: 0,
    }
}

#[test]
fn headless_app_exits_after_its_tick_budget() {
    let theme = ThemeConfig::sinister();
    let mut app = headless_app(scene(&theme, LoopMode::FixedOffset), run(5), Duration::from_secs_f64(1.0 / 60.0));

    for _ in 0..4 {
        app.update();
        assert!(app.should_exit().is_none());
    }
    app.update();
    assert_eq!(app.should_exit(), Some(AppExit::Success));

    // The first update only starts the clock, so five ticks cover four steps
    let elapsed = app.world().resource::<Time>().elapsed_secs();
    assert!((elapsed - 4.0 / 60.0).abs() < 1e-4);

    let scene = app.world().resource::<SceneAssembler>();
    assert_eq!(scene.ticks(), 5);
    let expected = theme.camera.start_z - theme.camera.speed * elapsed;
    assert!((scene.camera().position.z - expected).abs() < 1e-4, "z = {}", scene.camera().position.z);
}

#[test]
fn long_headless_run_stays_inside_the_loop_band() {
    let theme = ThemeConfig::warm();
    let mut app = headless_app(scene(&theme, LoopMode::Wrap), run(3000), Duration::from_millis(50));

    assert_eq!(run_headless(&mut app), AppExit::Success);

    let scene = app.world().resource::<SceneAssembler>();
    assert_eq!(scene.ticks(), 3000);
    let z = scene.camera().position.z;
    assert!(z >= scene.corridor().loop_threshold() && z < 12.0, "z = {z}");
}

#[test]
fn portal_follows_the_fixed_clock() {
    let theme = ThemeConfig::natural();
    let mut app = headless_app(scene(&theme, LoopMode::FixedOffset), run(10), Duration::from_millis(100));
    run_headless(&mut app);

    let elapsed = app.world().resource::<Time>().elapsed_secs();
    assert!(elapsed > 0.0);
    let scene = app.world().resource::<SceneAssembler>();
    let expected = PortalState::at(elapsed);
    assert!((scene.portal().primary.scale - expected.primary.scale).abs() < 1e-4);
    assert!((scene.portal().glow - expected.glow).abs() < 1e-4);
}
