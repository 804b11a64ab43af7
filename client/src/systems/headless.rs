use bevy::prelude::*;

use corridor_common::scene::SceneAssembler;

use crate::resources::HeadlessRun;

// ============================================================================
// Headless Run System
// ============================================================================

// Log the camera now and then and exit once the tick budget is spent
pub fn headless_report_system(
    scene: Res<SceneAssembler>,
    mut run: ResMut<HeadlessRun>,
    mut exit: MessageWriter<AppExit>,
) {
    run.ticks_left = run.ticks_left.saturating_sub(1);

    let ticks = scene.ticks();
    let camera = scene.camera();
    if run.report_every > 0 && ticks % run.report_every == 0 {
        info!("tick {ticks}: camera at {} fov {:.1}", camera.position, camera.fov);
    }

    if run.ticks_left == 0 {
        info!("finished after {ticks} ticks, camera at {}", camera.position);
        exit.write(AppExit::Success);
    }
}
