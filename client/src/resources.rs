use bevy::prelude::*;

use corridor_common::images::ImagePool;

use crate::config::FrameSource;

// ============================================================================
// Client Resources
// ============================================================================

// Where each frame image comes from, in pool order
#[derive(Resource)]
pub struct FrameSources(pub ImagePool<FrameSource>);

// Texture handles in pool order, filled once at startup
#[derive(Resource, Default)]
pub struct FrameImages(pub Vec<Handle<Image>>);

// Present once the corridor entities exist; ticking waits for it
#[derive(Resource)]
pub struct CorridorSpawned;

// Tick budget for headless runs
#[derive(Resource)]
pub struct HeadlessRun {
    pub ticks_left: u64,
    pub report_every: u64,
}
