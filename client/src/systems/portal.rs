use bevy::prelude::*;

use corridor_common::{portal::PortalRig, scene::SceneAssembler};

use crate::{
    markers::{PortalLightMarker, PortalPartMarker},
    spawning::transform_from_placement,
};

// ============================================================================
// Portal Sync System
// ============================================================================

// Apply the current ring poses and glow to the portal entities
pub fn portal_sync_system(
    scene: Res<SceneAssembler>,
    mut parts: Query<(&PortalPartMarker, &mut Transform)>,
    mut lights: Query<(&PortalLightMarker, &mut PointLight)>,
) {
    if !scene.is_changed() {
        return;
    }

    let state = scene.portal();
    for (marker, mut transform) in &mut parts {
        *transform = transform_from_placement(&scene.rig().part_placement(marker.0, &state));
    }
    for (marker, mut light) in &mut lights {
        light.intensity = PortalRig::light_intensity(marker.base_intensity, &state);
    }
}
