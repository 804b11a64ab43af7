use bevy::prelude::*;

use corridor_common::{
    element::{ElementKind, ElementRole},
    portal::{PortalRig, PortalState},
};

use super::{
    corridor::CorridorAssets,
    helpers::{point_light, transform_from_placement},
};
use crate::markers::{PortalLightMarker, PortalPartMarker};

#[derive(Bundle)]
struct PortalPartBundle {
    mesh: Mesh3d,
    material: MeshMaterial3d<StandardMaterial>,
    transform: Transform,
    visibility: Visibility,
    marker: PortalPartMarker,
}

#[derive(Bundle)]
struct PortalLightBundle {
    light: PointLight,
    transform: Transform,
    marker: PortalLightMarker,
}

// Spawn the portal rings, orb and lights at their current pose
pub fn spawn_portal(commands: &mut Commands, assets: &mut CorridorAssets, rig: &PortalRig, state: &PortalState) {
    for element in &rig.elements {
        match (element.role, &element.kind) {
            (ElementRole::Portal(part), ElementKind::Mesh { shape, material }) => {
                commands.spawn(PortalPartBundle {
                    mesh: Mesh3d(assets.mesh(shape)),
                    material: MeshMaterial3d(assets.material(material)),
                    transform: transform_from_placement(&rig.part_placement(part, state)),
                    visibility: Visibility::default(),
                    marker: PortalPartMarker(part),
                });
            }
            (_, ElementKind::PointLight { light }) => {
                let mut light = point_light(light);
                let base_intensity = light.intensity;
                light.intensity = PortalRig::light_intensity(base_intensity, state);
                commands.spawn(PortalLightBundle {
                    light,
                    transform: transform_from_placement(&rig.origin.then(&element.placement)),
                    marker: PortalLightMarker { base_intensity },
                });
            }
            (role, kind) => warn!("unexpected portal element {role:?} ({kind:?})"),
        }
    }
}
