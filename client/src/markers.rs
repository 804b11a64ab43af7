use bevy::prelude::*;

use corridor_common::{element::ElementRole, portal::PortalPart};

// ============================================================================
// Camera Markers
// ============================================================================

// Marker component for the corridor camera
#[derive(Component)]
pub struct CorridorCameraMarker;

// ============================================================================
// Corridor Markers
// ============================================================================

// Static corridor geometry and lights
#[derive(Component)]
pub struct CorridorElementMarker(pub ElementRole);

// Animated portal mesh
#[derive(Component)]
pub struct PortalPartMarker(pub PortalPart);

// Portal light; intensity before the glow factor, in lumens
#[derive(Component)]
pub struct PortalLightMarker {
    pub base_intensity: f32,
}
