use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        PORTAL_CENTER_Y, PORTAL_GLOW_AMPLITUDE, PORTAL_ORB_RADIUS, PORTAL_OUTER_RING_RADIUS, PORTAL_OUTER_RING_SPIN,
        PORTAL_OUTER_RING_TUBE, PORTAL_PULSE_AMPLITUDE, PORTAL_PULSE_RATE, PORTAL_RING_RADIUS, PORTAL_RING_SPIN,
        PORTAL_RING_TUBE, PORTAL_THIRD_RING_RADIUS, PORTAL_THIRD_RING_SPIN_X, PORTAL_THIRD_RING_SPIN_Z,
        PORTAL_THIRD_RING_TUBE,
    },
    corridor::CorridorModel,
    element::{ElementKind, ElementRole, PlacedElement, Placement, Shape},
    theme::ThemeConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalPart {
    Ring,
    OuterRing,
    Orb,
    ThirdRing,
}

impl PortalPart {
    pub const ALL: [Self; 4] = [Self::Ring, Self::OuterRing, Self::Orb, Self::ThirdRing];
}

// ============================================================================
// Portal Animation
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RingPose {
    pub rotation_x: f32,
    pub rotation_z: f32,
    pub scale: f32,
}

impl RingPose {
    pub const REST: Self = Self {
        rotation_x: 0.0,
        rotation_z: 0.0,
        scale: 1.0,
    };

    #[must_use]
    pub fn placement(&self) -> Placement {
        Placement::IDENTITY
            .with_euler(self.rotation_x, 0.0, self.rotation_z)
            .with_scale(self.scale)
    }
}

// Poses of the three animated rings plus the light intensity factor. The orb
// never moves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalState {
    pub primary: RingPose,
    pub secondary: RingPose,
    pub tertiary: RingPose,
    pub glow: f32,
}

impl Default for PortalState {
    fn default() -> Self {
        Self::at(0.0)
    }
}

impl PortalState {
    // Pure function of elapsed seconds
    #[must_use]
    pub fn at(t: f32) -> Self {
        let t = if t.is_finite() { t } else { 0.0 };
        let pulse = (t * PORTAL_PULSE_RATE).sin();

        Self {
            primary: RingPose {
                rotation_x: 0.0,
                rotation_z: t * PORTAL_RING_SPIN,
                scale: pulse.mul_add(PORTAL_PULSE_AMPLITUDE, 1.0),
            },
            secondary: RingPose {
                rotation_x: 0.0,
                rotation_z: t * PORTAL_OUTER_RING_SPIN,
                scale: 1.0,
            },
            tertiary: RingPose {
                rotation_x: t * PORTAL_THIRD_RING_SPIN_X,
                rotation_z: t * PORTAL_THIRD_RING_SPIN_Z,
                scale: 1.0,
            },
            glow: pulse.mul_add(PORTAL_GLOW_AMPLITUDE, 1.0),
        }
    }

    #[must_use]
    pub const fn pose(&self, part: PortalPart) -> RingPose {
        match part {
            PortalPart::Ring => self.primary,
            PortalPart::OuterRing => self.secondary,
            PortalPart::ThirdRing => self.tertiary,
            PortalPart::Orb => RingPose::REST,
        }
    }
}

// ============================================================================
// Portal Rig
// ============================================================================

// Portal geometry in portal-local space, anchored past the last segment's midpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalRig {
    pub origin: Placement,
    pub elements: Vec<PlacedElement>,
}

impl PortalRig {
    #[must_use]
    pub fn build(theme: &ThemeConfig, corridor: &CorridorModel) -> Self {
        let style = &theme.portal;
        let torus = |radius, tube| Shape::Torus { radius, tube };

        let mut elements = vec![
            PlacedElement::mesh(
                ElementRole::Portal(PortalPart::Ring),
                torus(PORTAL_RING_RADIUS, PORTAL_RING_TUBE),
                style.ring,
                Placement::IDENTITY,
            ),
            PlacedElement::mesh(
                ElementRole::Portal(PortalPart::OuterRing),
                torus(PORTAL_OUTER_RING_RADIUS, PORTAL_OUTER_RING_TUBE),
                style.outer_ring,
                Placement::IDENTITY,
            ),
            PlacedElement::mesh(
                ElementRole::Portal(PortalPart::Orb),
                Shape::Sphere {
                    radius: PORTAL_ORB_RADIUS,
                },
                style.orb,
                Placement::IDENTITY,
            ),
            PlacedElement::mesh(
                ElementRole::Portal(PortalPart::ThirdRing),
                torus(PORTAL_THIRD_RING_RADIUS, PORTAL_THIRD_RING_TUBE),
                style.third_ring,
                Placement::IDENTITY,
            ),
        ];
        elements.extend(
            style
                .lights
                .iter()
                .map(|light| PlacedElement::light(ElementRole::PortalLight, *light, Placement::IDENTITY)),
        );

        Self {
            origin: Placement::from_xyz(0.0, PORTAL_CENTER_Y, corridor.portal_origin_z()),
            elements,
        }
    }

    #[must_use]
    pub fn part_placement(&self, part: PortalPart, state: &PortalState) -> Placement {
        self.origin.then(&state.pose(part).placement())
    }

    #[must_use]
    pub fn light_intensity(base: f32, state: &PortalState) -> f32 {
        base * state.glow
    }

    // World-space portal elements with the current poses and glow applied
    #[must_use]
    pub fn animated(&self, state: &PortalState) -> Vec<PlacedElement> {
        self.elements
            .iter()
            .map(|element| match (element.role, element.kind) {
                (ElementRole::Portal(part), _) => PlacedElement {
                    placement: self.part_placement(part, state),
                    ..*element
                },
                (_, ElementKind::PointLight { mut light }) => {
                    light.intensity = Self::light_intensity(light.intensity, state);
                    PlacedElement::light(element.role, light, self.origin.then(&element.placement))
                }
                _ => element.within(&self.origin),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::ImagePool;
    use std::f32::consts::FRAC_PI_3;

    #[test]
    fn everything_rests_at_time_zero() {
        let state = PortalState::at(0.0);
        for part in PortalPart::ALL {
            assert_eq!(state.pose(part), RingPose::REST);
        }
        assert!((state.glow - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn primary_ring_peaks_at_a_third_of_pi() {
        let state = PortalState::at(FRAC_PI_3);
        assert!((state.primary.scale - 1.05).abs() < 1e-5);
        assert!((state.primary.rotation_z - FRAC_PI_3 * 0.4).abs() < 1e-6);
        assert!((state.secondary.rotation_z + FRAC_PI_3 * 0.6).abs() < 1e-6);
        assert!((state.tertiary.rotation_x - FRAC_PI_3 * 0.2).abs() < 1e-6);
        assert!((state.tertiary.rotation_z - FRAC_PI_3 * 0.3).abs() < 1e-6);
        assert!((state.glow - 1.15).abs() < 1e-5);
    }

    #[test]
    fn state_depends_only_on_time() {
        assert_eq!(PortalState::at(12.5), PortalState::at(12.5));
        assert_eq!(PortalState::at(f32::NAN), PortalState::at(0.0));
    }

    #[test]
    fn rig_sits_at_the_portal_origin() {
        let pool = ImagePool::new(vec![0_u8]).unwrap();
        let theme = ThemeConfig::sinister();
        let corridor = CorridorModel::build(10, 12.0, &theme, &pool).unwrap();
        let rig = PortalRig::build(&theme, &corridor);

        assert!((rig.origin.translation.z + 114.0).abs() < 1e-4);
        assert!((rig.origin.translation.y - 0.4).abs() < 1e-6);
        assert_eq!(rig.elements.iter().filter(|e| e.is_light()).count(), 2);
        assert_eq!(rig.elements.len(), 6);
    }

    #[test]
    fn animated_rig_scales_lights_and_poses_rings() {
        let pool = ImagePool::new(vec![0_u8]).unwrap();
        let theme = ThemeConfig::sinister();
        let corridor = CorridorModel::build(10, 12.0, &theme, &pool).unwrap();
        let rig = PortalRig::build(&theme, &corridor);
        let state = PortalState::at(FRAC_PI_3);

        for element in rig.animated(&state) {
            match (element.role, element.kind) {
                (ElementRole::Portal(PortalPart::Ring), _) => {
                    assert!((element.placement.scale - 1.05).abs() < 1e-5);
                }
                (ElementRole::Portal(PortalPart::Orb), _) => {
                    assert!((element.placement.scale - 1.0).abs() < f32::EPSILON);
                }
                (ElementRole::PortalLight, ElementKind::PointLight { light }) => {
                    assert!(light.intensity > 40.0 * 1.14);
                }
                _ => {}
            }
            assert!((element.placement.translation.z + 114.0).abs() < 1e-4);
        }
    }
}
