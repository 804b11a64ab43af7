use corridor_common::{
    camera::{LoopMode, ViewportClass},
    corridor::CorridorModel,
    element::ElementRole,
    images::ImagePool,
    scene::SceneAssembler,
    theme::{ThemeConfig, ThemeKind},
};

fn scene(kind: ThemeKind, loop_mode: LoopMode) -> SceneAssembler {
    let theme = ThemeConfig::preset(kind);
    let pool = ImagePool::new((1..=8).map(|i| format!("frame{i}.jpg")).collect()).unwrap();
    let corridor = CorridorModel::build(10, 12.0, &theme, &pool).unwrap();
    SceneAssembler::new(corridor, &theme, loop_mode)
}

#[test]
fn camera_walks_forever_inside_the_loop_band() {
    for kind in ThemeKind::ALL {
        let mut scene = scene(kind, LoopMode::FixedOffset);
        let threshold = scene.corridor().loop_threshold();
        let start_z = scene.camera().position.z;
        let delta = 1.0 / 60.0;

        // Roughly ten minutes at 60 Hz
        for tick in 1..=36_000 {
            let frame = scene.tick(tick as f32 * delta, delta, ViewportClass::Wide);
            let z = frame.camera.position.z;
            assert!(z >= threshold && z <= start_z + scene.corridor().segment_length(), "{kind}: z = {z}");
        }
    }
}

#[test]
fn loop_reset_preserves_the_view_within_a_segment() {
    let mut scene = scene(ThemeKind::Sinister, LoopMode::FixedOffset);
    let length = scene.corridor().segment_length();
    let delta = 0.05;
    let mut previous = scene.camera().position.z;
    let mut resets = 0;

    for tick in 1..=2_000 {
        scene.advance(tick as f32 * delta, delta, ViewportClass::Wide);
        let z = scene.camera().position.z;
        if z > previous {
            resets += 1;
            // Backward jump is a whole number of segments minus the step taken
            let jump = z - previous + 4.5 * delta;
            let segments = jump / length;
            assert!((segments - segments.round()).abs() < 1e-3, "jump {jump}");
        }
        previous = z;
    }
    assert!(resets > 0);
}

#[test]
fn wrap_mode_survives_a_stalled_host() {
    let mut scene = scene(ThemeKind::Warm, LoopMode::Wrap);
    let threshold = scene.corridor().loop_threshold();
    let band = scene.corridor().loop_offset();
    for (tick, delta) in [0.016, 30.0, 0.016, 500.0, 3_600.0].into_iter().enumerate() {
        scene.advance(tick as f32, delta, ViewportClass::Narrow);
        let z = scene.camera().position.z;
        assert!(z >= threshold && z < threshold + band, "z = {z}");
    }
}

#[test]
fn portal_sits_inside_the_last_segment() {
    let scene = scene(ThemeKind::Natural, LoopMode::FixedOffset);
    let portal_z = scene.rig().origin.translation.z;
    let last = scene.corridor().segment(scene.corridor().num_segments() - 1);
    assert!(portal_z < last.origin_z && portal_z > last.origin_z - scene.corridor().segment_length());

    let frames = scene
        .frame()
        .static_elements
        .iter()
        .filter(|element| matches!(element.role, ElementRole::FrameImage(_)))
        .count();
    assert_eq!(frames, 40);
}
