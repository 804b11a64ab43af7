use bevy::{asset::LoadState, prelude::*};

use corridor_common::scene::SceneAssembler;

use crate::{
    config::FrameSource,
    constants::{AMBIENT_BRIGHTNESS_SCALE, DIRECTIONAL_ILLUMINANCE_SCALE},
    resources::{CorridorSpawned, FrameImages, FrameSources},
    spawning::{CorridorAssets, load_clamped_texture, placeholder_image, spawn_corridor_element, spawn_portal, srgb},
};

// ============================================================================
// Environment Setup System
// ============================================================================

pub fn setup_environment_system(mut commands: Commands, scene: Res<SceneAssembler>) {
    let environment = scene.environment();

    commands.insert_resource(ClearColor(srgb(environment.background)));

    commands.insert_resource(AmbientLight {
        color: srgb(environment.ambient.color),
        brightness: environment.ambient.intensity * AMBIENT_BRIGHTNESS_SCALE,
        affects_lightmapped_meshes: false,
    });

    // Dim fill light shining straight down the corridor's vertical axis
    commands.spawn((
        DirectionalLight {
            color: srgb(environment.fill_light.color),
            illuminance: environment.fill_light.intensity * DIRECTIONAL_ILLUMINANCE_SCALE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(0.0, environment.fill_light.height, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
    ));
}

// ============================================================================
// Frame Image Loading System
// ============================================================================

pub fn load_frame_images_system(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    sources: Res<FrameSources>,
) {
    let count = sources.0.len().get();
    let handles: Vec<Handle<Image>> = sources
        .0
        .iter()
        .map(|source| match source {
            FrameSource::File(path) => load_clamped_texture(&asset_server, path.clone()),
            FrameSource::Placeholder(index) => images.add(placeholder_image(*index, count)),
        })
        .collect();

    if sources.0.iter().all(FrameSource::is_placeholder) {
        warn!("no frame images found, using {count} placeholder swatches");
    } else {
        info!("loading {count} frame images");
    }

    commands.insert_resource(FrameImages(handles));
}

// ============================================================================
// Corridor Spawning System
// ============================================================================

// Spawn the corridor exactly once, after every frame image has loaded or failed
pub fn spawn_corridor_system(
    mut commands: Commands,
    scene: Res<SceneAssembler>,
    frame_images: Option<Res<FrameImages>>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut spawned: Local<bool>,
) {
    if *spawned {
        return;
    }
    let Some(frame_images) = frame_images else {
        return;
    };

    let failed = |handle: &Handle<Image>| matches!(asset_server.load_state(handle.id()), LoadState::Failed(_));
    let settled = frame_images
        .0
        .iter()
        .all(|handle| images.contains(handle.id()) || failed(handle));
    if !settled {
        return;
    }

    let failures = frame_images.0.iter().filter(|&handle| failed(handle)).count();
    if failures > 0 {
        warn!("{failures} frame images failed to load, their frames stay blank");
    }

    let frame = scene.frame();
    let mut assets = CorridorAssets::new(&mut meshes, &mut materials, &frame_images.0);
    for element in frame.static_elements {
        spawn_corridor_element(&mut commands, &mut assets, element);
    }
    spawn_portal(&mut commands, &mut assets, scene.rig(), &frame.portal);

    info!(
        "spawned {} corridor elements using {} meshes and {} materials",
        frame.static_elements.len(),
        assets.mesh_count(),
        assets.material_count()
    );

    commands.insert_resource(CorridorSpawned);
    *spawned = true;
}
