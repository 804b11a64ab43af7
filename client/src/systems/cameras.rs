use bevy::{
    pbr::{DistanceFog, FogFalloff},
    post_process::bloom::{Bloom, BloomPrefilter},
    prelude::*,
    render::view::Hdr,
    window::PrimaryWindow,
};

use corridor_common::{
    camera::ViewportClass,
    constants::{CAMERA_FAR, CAMERA_NEAR},
    scene::SceneAssembler,
};

use crate::{
    constants::BLOOM_INTENSITY_SCALE,
    markers::CorridorCameraMarker,
    spawning::{exposure, srgb},
};

// ============================================================================
// Camera Setup System
// ============================================================================

pub fn setup_camera_system(mut commands: Commands, scene: Res<SceneAssembler>) {
    let environment = scene.environment();
    let camera = scene.camera();

    // HDR so untonemapped emissives can exceed 1.0 and feed the bloom pass
    commands.spawn((
        CorridorCameraMarker,
        Camera3d::default(),
        Hdr,
        Projection::from(PerspectiveProjection {
            fov: camera.fov.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(camera.position),
        exposure(environment.exposure),
        Bloom {
            intensity: environment.bloom.intensity * BLOOM_INTENSITY_SCALE,
            prefilter: BloomPrefilter {
                threshold: environment.bloom.luminance_threshold,
                threshold_softness: environment.bloom.luminance_smoothing.clamp(0.0, 1.0),
            },
            ..Bloom::NATURAL
        },
        DistanceFog {
            color: srgb(environment.fog.color),
            falloff: FogFalloff::Linear {
                start: environment.fog.near,
                end: environment.fog.far,
            },
            ..default()
        },
    ));
}

// ============================================================================
// Camera Sync System
// ============================================================================

// Copy the engine's camera pose and FOV onto the render camera
pub fn camera_sync_system(
    scene: Res<SceneAssembler>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<CorridorCameraMarker>>,
) {
    if !scene.is_changed() {
        return;
    }

    let camera = scene.camera();
    for (mut transform, mut projection) in &mut cameras {
        transform.translation = camera.position;
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = camera.fov.to_radians();
        }
    }
}

// ============================================================================
// Viewport Classification System
// ============================================================================

pub fn viewport_classify_system(windows: Query<&Window, With<PrimaryWindow>>, mut viewport: ResMut<ViewportClass>) {
    let Ok(window) = windows.single() else {
        return;
    };

    let class = ViewportClass::from_size(window.width(), window.height());
    if viewport.set_if_neq(class) {
        debug!("viewport is now {class:?} ({}x{})", window.width(), window.height());
    }
}
