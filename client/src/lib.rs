pub mod config;
pub mod constants;
pub mod layout;
pub mod markers;
pub mod resources;
pub mod spawning;
pub mod systems;

use std::time::{Duration, Instant};

use bevy::{prelude::*, time::TimeUpdateStrategy};

use corridor_common::{camera::ViewportClass, images::ImagePool, scene::SceneAssembler, systems::advance_scene_system};

use crate::{
    config::FrameSource,
    constants::{LOG_FILTER, WINDOW_TITLE},
    resources::{CorridorSpawned, FrameSources, HeadlessRun},
    systems::{
        cameras::{camera_sync_system, setup_camera_system, viewport_classify_system},
        headless::headless_report_system,
        portal::portal_sync_system,
        scene::{load_frame_images_system, setup_environment_system, spawn_corridor_system},
    },
};

pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub assets_dir: String,
}

// ============================================================================
// Windowed App
// ============================================================================

pub fn windowed_app(scene: SceneAssembler, frames: ImagePool<FrameSource>, window: WindowSettings) -> App {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    resolution: (window.width, window.height).into(),
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: window.assets_dir,
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                filter: LOG_FILTER.to_string(),
                ..default()
            }),
    )
    .insert_resource(scene)
    .insert_resource(FrameSources(frames))
    .init_resource::<ViewportClass>()
    .add_systems(
        Startup,
        (setup_environment_system, setup_camera_system, load_frame_images_system),
    )
    .add_systems(
        Update,
        (
            // Waits for the frame images, then spawns everything once
            spawn_corridor_system,
            // Must run in order: the tick reads the viewport, the syncs read the tick
            (
                viewport_classify_system,
                advance_scene_system.run_if(resource_exists::<CorridorSpawned>),
                camera_sync_system,
                portal_sync_system,
            )
                .chain(),
        ),
    );
    app
}

// ============================================================================
// Headless App
// ============================================================================

// Fixed time step, no window, no renderer
pub fn headless_app(scene: SceneAssembler, run: HeadlessRun, step: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(step))
        .insert_resource(scene)
        .insert_resource(run)
        .init_resource::<ViewportClass>()
        .add_systems(Update, (advance_scene_system, headless_report_system).chain());
    app
}

// Drive updates until a system asks to exit
pub fn run_headless(app: &mut App) -> AppExit {
    app.finish();
    app.cleanup();

    let started = Instant::now();
    let exit = loop {
        app.update();
        if let Some(exit) = app.should_exit() {
            break exit;
        }
    };

    let ticks = app.world().resource::<SceneAssembler>().ticks();
    info!("headless run of {ticks} ticks took {:.2}ms", started.elapsed().as_secs_f64() * 1000.0);
    exit
}
