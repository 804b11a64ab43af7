use std::{fmt, str::FromStr};

use bevy_ecs::prelude::Resource;
use bevy_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::{
    constants::NARROW_VIEWPORT_BREAKPOINT,
    corridor::CorridorModel,
    theme::{CameraConfig, Sway},
};

// ============================================================================
// Camera State & Inputs
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec3,
    pub fov: f32, // degrees, vertical
}

// Host-supplied viewport classification
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    #[default]
    Wide,
    Narrow,
}

impl ViewportClass {
    // Narrow when below the breakpoint or taller than wide (logical pixels)
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        if width < NARROW_VIEWPORT_BREAKPOINT || height > width {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickInput {
    pub elapsed: f32,
    pub delta: f32,
    pub viewport: ViewportClass,
}

// How the camera is carried back once it passes the loop threshold
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    // Add the loop offset once per tick
    #[default]
    FixedOffset,
    // Euclidean remainder into [threshold, threshold + offset)
    Wrap,
}

impl LoopMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FixedOffset => "fixed",
            Self::Wrap => "wrap",
        }
    }
}

impl fmt::Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LoopMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" | "fixed_offset" => Ok(Self::FixedOffset),
            "wrap" => Ok(Self::Wrap),
            other => Err(format!("unknown loop mode '{other}' (expected fixed or wrap)")),
        }
    }
}

// ============================================================================
// Camera Motion Controller
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct CameraMotionController {
    config: CameraConfig,
    loop_threshold: f32,
    loop_offset: f32,
    loop_mode: LoopMode,
}

impl CameraMotionController {
    #[must_use]
    pub fn new(config: &CameraConfig, corridor: &CorridorModel) -> Self {
        Self {
            config: *config,
            loop_threshold: corridor.loop_threshold(),
            loop_offset: corridor.loop_offset(),
            loop_mode: LoopMode::default(),
        }
    }

    #[must_use]
    pub const fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    #[must_use]
    pub const fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    #[must_use]
    pub const fn initial_state(&self) -> CameraState {
        CameraState {
            position: Vec3::new(0.0, self.config.base_y, self.config.start_z),
            fov: self.config.fov,
        }
    }

    // One step of forward motion, sway, FOV easing and loop reset
    #[must_use]
    pub fn tick(&self, state: CameraState, input: TickInput) -> CameraState {
        // Negative or non-finite deltas advance nothing
        let delta = if input.delta.is_finite() && input.delta > 0.0 {
            input.delta
        } else {
            0.0
        };
        let elapsed = if input.elapsed.is_finite() { input.elapsed } else { 0.0 };

        let mut position = state.position;
        position.z -= self.config.speed * delta;

        let (x, y) = sway_offset(self.config.sway, elapsed);
        position.x = x;
        position.y = self.config.base_y + y;

        position.z = self.loop_z(position.z);

        CameraState {
            position,
            fov: self.ease_fov(state.fov, input.viewport),
        }
    }

    fn ease_fov(&self, fov: f32, viewport: ViewportClass) -> f32 {
        let Some(easing) = self.config.fov_easing else {
            return self.config.fov;
        };
        let target = match viewport {
            ViewportClass::Narrow => easing.narrow_fov,
            ViewportClass::Wide => self.config.fov,
        };
        fov + (target - fov) * easing.easing
    }

    fn loop_z(&self, z: f32) -> f32 {
        if z >= self.loop_threshold || self.loop_offset <= 0.0 {
            return z;
        }
        match self.loop_mode {
            LoopMode::FixedOffset => z + self.loop_offset,
            LoopMode::Wrap => self.loop_threshold + (z - self.loop_threshold).rem_euclid(self.loop_offset),
        }
    }
}

fn sway_offset(sway: Option<Sway>, elapsed: f32) -> (f32, f32) {
    sway.map_or((0.0, 0.0), |sway| {
        (
            (elapsed * sway.freq_x).sin() * sway.amp_x,
            (elapsed * sway.freq_y).sin() * sway.amp_y,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{images::ImagePool, theme::ThemeConfig};

    fn corridor(theme: &ThemeConfig) -> CorridorModel {
        let pool = ImagePool::new((0..8).collect::<Vec<u32>>()).unwrap();
        CorridorModel::build(10, 12.0, theme, &pool).unwrap()
    }

    fn input(elapsed: f32, delta: f32) -> TickInput {
        TickInput {
            elapsed,
            delta,
            viewport: ViewportClass::Wide,
        }
    }

    #[test]
    fn one_second_moves_the_camera_by_its_speed() {
        let theme = ThemeConfig::sinister();
        let controller = CameraMotionController::new(&theme.camera, &corridor(&theme));
        let state = controller.tick(controller.initial_state(), input(1.0, 1.0));
        assert!((state.position.z + 2.5).abs() < 1e-5);
        assert!((state.position.y - 0.3).abs() < 1e-6);
        assert!(state.position.x.abs() < 1e-6);
    }

    #[test]
    fn crossing_the_threshold_resets_by_one_offset() {
        let theme = ThemeConfig::sinister();
        let controller = CameraMotionController::new(&theme.camera, &corridor(&theme));
        let mut state = controller.initial_state();
        state.position.z = -96.001;
        let state = controller.tick(state, input(0.0, 0.0));
        assert!((state.position.z - 11.999).abs() < 1e-3);
    }

    #[test]
    fn zero_delta_is_a_no_op_inside_the_band() {
        let theme = ThemeConfig::sinister();
        let controller = CameraMotionController::new(&theme.camera, &corridor(&theme));
        let start = controller.initial_state();
        assert_eq!(controller.tick(start, input(3.0, 0.0)), start);
    }

    #[test]
    fn negative_and_nan_deltas_do_not_move_the_camera() {
        let theme = ThemeConfig::sinister();
        let controller = CameraMotionController::new(&theme.camera, &corridor(&theme));
        let start = controller.initial_state();
        for delta in [-1.0, f32::NAN, f32::INFINITY] {
            let state = controller.tick(start, input(1.0, delta));
            assert!((state.position.z - start.position.z).abs() < 1e-6);
        }
    }

    #[test]
    fn fixed_offset_can_overshoot_on_a_huge_delta() {
        let theme = ThemeConfig::sinister();
        let controller = CameraMotionController::new(&theme.camera, &corridor(&theme));
        let state = controller.tick(controller.initial_state(), input(0.0, 100.0));
        // 2 - 450 + 108
        assert!((state.position.z + 340.0).abs() < 1e-3);
    }

    #[test]
    fn wrap_mode_stays_in_the_band_for_any_delta() {
        let theme = ThemeConfig::sinister();
        let controller =
            CameraMotionController::new(&theme.camera, &corridor(&theme)).with_loop_mode(LoopMode::Wrap);
        let mut state = controller.initial_state();
        for delta in [100.0, 1e4, 0.016, 7.3] {
            state = controller.tick(state, input(0.0, delta));
            assert!(state.position.z >= -96.0 && state.position.z < 12.0, "z = {}", state.position.z);
        }
    }

    #[test]
    fn wrap_mode_matches_fixed_offset_just_past_the_threshold() {
        let theme = ThemeConfig::sinister();
        let controller =
            CameraMotionController::new(&theme.camera, &corridor(&theme)).with_loop_mode(LoopMode::Wrap);
        let mut state = controller.initial_state();
        state.position.z = -96.001;
        let state = controller.tick(state, input(0.0, 0.0));
        assert!((state.position.z - 11.999).abs() < 1e-3);
    }

    #[test]
    fn sway_follows_the_oscillators() {
        let theme = ThemeConfig::warm();
        let sway = theme.camera.sway.unwrap();
        let controller = CameraMotionController::new(&theme.camera, &corridor(&theme));
        let t = 2.0;
        let state = controller.tick(controller.initial_state(), input(t, 0.0));
        assert!((state.position.x - (t * sway.freq_x).sin() * sway.amp_x).abs() < 1e-6);
        assert!((state.position.y - (theme.camera.base_y + (t * sway.freq_y).sin() * sway.amp_y)).abs() < 1e-6);
    }

    #[test]
    fn non_finite_elapsed_centers_the_sway() {
        let theme = ThemeConfig::natural();
        let controller = CameraMotionController::new(&theme.camera, &corridor(&theme));
        let state = controller.tick(controller.initial_state(), input(f32::NAN, 0.1));
        assert!(state.position.x.abs() < 1e-6);
        assert!((state.position.y - theme.camera.base_y).abs() < 1e-6);
    }

    #[test]
    fn fov_eases_toward_the_narrow_target_without_snapping() {
        let theme = ThemeConfig::warm();
        let target = theme.camera.fov_easing.unwrap().narrow_fov;
        let controller = CameraMotionController::new(&theme.camera, &corridor(&theme));
        let mut state = controller.initial_state();
        let narrow = TickInput {
            elapsed: 0.0,
            delta: 0.016,
            viewport: ViewportClass::Narrow,
        };

        let first = controller.tick(state, narrow);
        assert!(first.fov > state.fov && first.fov < target);

        let mut previous = state.fov;
        for _ in 0..200 {
            state = controller.tick(state, narrow);
            assert!(state.fov >= previous && state.fov <= target);
            previous = state.fov;
        }
        assert!((state.fov - target).abs() < 0.1);
    }

    #[test]
    fn fov_is_fixed_without_easing() {
        let theme = ThemeConfig::sinister();
        let controller = CameraMotionController::new(&theme.camera, &corridor(&theme));
        let state = controller.tick(
            controller.initial_state(),
            TickInput {
                elapsed: 1.0,
                delta: 0.1,
                viewport: ViewportClass::Narrow,
            },
        );
        assert!((state.fov - 75.0).abs() < 1e-6);
    }

    #[test]
    fn viewport_classification() {
        assert_eq!(ViewportClass::from_size(1280.0, 720.0), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_size(600.0, 400.0), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_size(900.0, 1600.0), ViewportClass::Narrow);
    }

    #[test]
    fn loop_mode_names_parse() {
        assert_eq!("wrap".parse::<LoopMode>().unwrap(), LoopMode::Wrap);
        assert_eq!("Fixed".parse::<LoopMode>().unwrap(), LoopMode::FixedOffset);
        assert!("modulo".parse::<LoopMode>().is_err());
    }
}
