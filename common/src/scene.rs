use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    camera::{CameraMotionController, CameraState, LoopMode, TickInput, ViewportClass},
    corridor::CorridorModel,
    element::{PlacedElement, Rgb},
    portal::{PortalRig, PortalState},
    theme::{AmbientDesc, BloomDesc, FillLightDesc, FogDesc, ThemeConfig},
};

// ============================================================================
// Frame Description
// ============================================================================

// Scene-wide lighting and post-processing parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub background: Rgb,
    pub ambient: AmbientDesc,
    pub fill_light: FillLightDesc,
    pub fog: FogDesc,
    pub bloom: BloomDesc,
    pub exposure: f32,
}

impl Environment {
    #[must_use]
    pub const fn from_theme(theme: &ThemeConfig) -> Self {
        Self {
            background: theme.background,
            ambient: theme.ambient,
            fill_light: theme.fill_light,
            fog: theme.fog,
            bloom: theme.bloom,
            exposure: theme.exposure,
        }
    }
}

// Everything the renderer needs for one frame, in world space
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FrameDescription<'a> {
    pub environment: &'a Environment,
    pub static_elements: &'a [PlacedElement],
    pub portal_elements: &'a [PlacedElement],
    pub camera: CameraState,
    pub portal: PortalState,
}

// ============================================================================
// Scene Assembler
// ============================================================================

#[derive(Resource, Clone, Debug)]
pub struct SceneAssembler {
    corridor: CorridorModel,
    environment: Environment,
    static_elements: Vec<PlacedElement>,
    rig: PortalRig,
    controller: CameraMotionController,
    camera: CameraState,
    portal: PortalState,
    portal_elements: Vec<PlacedElement>,
    ticks: u64,
}

impl SceneAssembler {
    #[must_use]
    pub fn new(corridor: CorridorModel, theme: &ThemeConfig, loop_mode: LoopMode) -> Self {
        let controller = CameraMotionController::new(&theme.camera, &corridor).with_loop_mode(loop_mode);
        let static_elements: Vec<PlacedElement> = corridor.world_elements().collect();
        let rig = PortalRig::build(theme, &corridor);
        let portal = PortalState::at(0.0);
        let portal_elements = rig.animated(&portal);

        debug!(
            "scene assembled: {} static elements, {} portal elements, loop mode {loop_mode}",
            static_elements.len(),
            portal_elements.len()
        );

        Self {
            environment: Environment::from_theme(theme),
            camera: controller.initial_state(),
            corridor,
            static_elements,
            rig,
            controller,
            portal,
            portal_elements,
            ticks: 0,
        }
    }

    // One tick: camera and portal advance, portal elements are regenerated
    pub fn advance(&mut self, elapsed: f32, delta: f32, viewport: ViewportClass) {
        self.camera = self.controller.tick(
            self.camera,
            TickInput {
                elapsed,
                delta,
                viewport,
            },
        );
        self.portal = PortalState::at(elapsed);
        self.portal_elements = self.rig.animated(&self.portal);
        self.ticks += 1;
    }

    pub fn tick(&mut self, elapsed: f32, delta: f32, viewport: ViewportClass) -> FrameDescription<'_> {
        self.advance(elapsed, delta, viewport);
        self.frame()
    }

    #[must_use]
    pub fn frame(&self) -> FrameDescription<'_> {
        FrameDescription {
            environment: &self.environment,
            static_elements: &self.static_elements,
            portal_elements: &self.portal_elements,
            camera: self.camera,
            portal: self.portal,
        }
    }

    #[must_use]
    pub const fn corridor(&self) -> &CorridorModel {
        &self.corridor
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub const fn rig(&self) -> &PortalRig {
        &self.rig
    }

    #[must_use]
    pub const fn camera(&self) -> CameraState {
        self.camera
    }

    #[must_use]
    pub const fn portal(&self) -> PortalState {
        self.portal
    }

    #[must_use]
    pub const fn loop_mode(&self) -> LoopMode {
        self.controller.loop_mode()
    }

    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::ImagePool;

    fn assembler(theme: &ThemeConfig) -> SceneAssembler {
        let pool = ImagePool::new((0..8).collect::<Vec<u32>>()).unwrap();
        let corridor = CorridorModel::build(10, 12.0, theme, &pool).unwrap();
        SceneAssembler::new(corridor, theme, LoopMode::FixedOffset)
    }

    fn run(scene: &mut SceneAssembler, steps: &[(f32, f32, ViewportClass)]) {
        for &(elapsed, delta, viewport) in steps {
            scene.advance(elapsed, delta, viewport);
        }
    }

    #[test]
    fn first_frame_starts_at_the_camera_origin() {
        let theme = ThemeConfig::sinister();
        let scene = assembler(&theme);
        let frame = scene.frame();
        assert!((frame.camera.position.z - 2.0).abs() < 1e-6);
        assert_eq!(frame.portal, PortalState::at(0.0));
        assert_eq!(frame.static_elements.len(), scene.corridor().world_elements().count());
        assert_eq!(frame.portal_elements.len(), 6);
        assert_eq!(scene.loop_mode(), LoopMode::FixedOffset);
        assert!((frame.environment.bloom.intensity - 1.6).abs() < f32::EPSILON);
        assert!((frame.environment.exposure - 1.3).abs() < f32::EPSILON);
    }

    #[test]
    fn identical_tick_sequences_give_identical_frames() {
        let theme = ThemeConfig::warm();
        let steps: Vec<(f32, f32, ViewportClass)> = (1..=600)
            .map(|i| {
                let viewport = if i % 97 < 40 {
                    ViewportClass::Narrow
                } else {
                    ViewportClass::Wide
                };
                (i as f32 / 60.0, 1.0 / 60.0, viewport)
            })
            .collect();

        let mut a = assembler(&theme);
        let mut b = assembler(&theme);
        run(&mut a, &steps);
        // Reading intermediate frames must not disturb the result
        for &(elapsed, delta, viewport) in &steps {
            let _ = b.tick(elapsed, delta, viewport).camera;
            let _ = b.frame();
        }

        assert_eq!(a.frame(), b.frame());
        assert_eq!(a.ticks(), 600);
    }

    #[test]
    fn tick_moves_camera_and_portal_together() {
        let theme = ThemeConfig::sinister();
        let mut scene = assembler(&theme);
        let frame = scene.tick(1.0, 1.0, ViewportClass::Wide);
        assert!((frame.camera.position.z + 2.5).abs() < 1e-5);
        assert_eq!(frame.portal, PortalState::at(1.0));
    }

    #[test]
    fn static_layout_never_changes() {
        let theme = ThemeConfig::natural();
        let mut scene = assembler(&theme);
        let before = scene.frame().static_elements.to_vec();
        for i in 0..120 {
            scene.advance(i as f32 * 0.5, 0.5, ViewportClass::Wide);
        }
        assert_eq!(scene.frame().static_elements, before.as_slice());
    }
}
