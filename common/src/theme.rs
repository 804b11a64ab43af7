use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    constants::{
        CAMERA_BASE_Y, CAMERA_FOV_DEGREES, CAMERA_START_Z, CORRIDOR_HEIGHT, CORRIDOR_WIDTH, FRAME_OUTER_BORDER,
        TONE_MAPPING_EXPOSURE,
    },
    element::{LightDesc, MaterialDesc, Rgb},
    error::{CorridorError, Result},
};

// ============================================================================
// Theme Pieces
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmbientDesc {
    pub color: Rgb,
    pub intensity: f32,
}

// Directional fill light shining down from `height`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillLightDesc {
    pub color: Rgb,
    pub intensity: f32,
    pub height: f32,
}

// Linear distance fog
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FogDesc {
    pub color: Rgb,
    pub near: f32,
    pub far: f32,
}

// Parameters handed to the bloom pass
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomDesc {
    pub intensity: f32,
    pub luminance_threshold: f32,
    pub luminance_smoothing: f32,
}

// Glowing strips along both carpet edges
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarpetEdge {
    pub width: f32,
    pub material: MaterialDesc,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortalStyle {
    pub ring: MaterialDesc,
    pub outer_ring: MaterialDesc,
    pub orb: MaterialDesc,
    pub third_ring: MaterialDesc,
    pub lights: Vec<LightDesc>,
}

// Side-to-side and bobbing head motion. Frequencies in rad/s, amplitudes in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sway {
    pub freq_x: f32,
    pub amp_x: f32,
    pub freq_y: f32,
    pub amp_y: f32,
}

// Per-tick exponential approach toward the viewport's target FOV
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FovEasing {
    pub narrow_fov: f32,
    pub easing: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub speed: f32, // meters per second
    pub start_z: f32,
    pub base_y: f32,
    pub fov: f32, // degrees
    #[serde(default)]
    pub sway: Option<Sway>,
    #[serde(default)]
    pub fov_easing: Option<FovEasing>,
}

// ============================================================================
// Theme
// ============================================================================

// One complete visual style. Selected once at startup and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
    pub background: Rgb,
    pub ambient: AmbientDesc,
    pub fill_light: FillLightDesc,
    pub fog: FogDesc,
    pub bloom: BloomDesc,
    #[serde(default = "default_exposure")]
    pub exposure: f32,

    pub floor: MaterialDesc,
    pub ceiling: MaterialDesc,
    pub carpet: MaterialDesc,
    pub wall: MaterialDesc,
    pub baseboard: MaterialDesc,

    pub light_panel: MaterialDesc,
    pub ceiling_lights: Vec<LightDesc>,

    pub frame_outer: MaterialDesc,
    pub frame_inner: MaterialDesc,
    pub frame_image: MaterialDesc,
    #[serde(default)]
    pub frame_light: Option<LightDesc>,

    #[serde(default)]
    pub carpet_edge: Option<CarpetEdge>,

    pub portal: PortalStyle,
    pub camera: CameraConfig,

    pub carpet_width: f32,
    pub frame_width: f32,
    pub frame_height: f32,
    // Shift of the far frame pair within the image pool
    pub image_offset: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeKind {
    #[default]
    Sinister,
    Warm,
    Natural,
}

impl ThemeKind {
    pub const ALL: [Self; 3] = [Self::Sinister, Self::Warm, Self::Natural];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sinister => "sinister",
            Self::Warm => "warm",
            Self::Natural => "natural",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = CorridorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CorridorError::UnknownTheme(s.to_string()))
    }
}

const fn default_exposure() -> f32 {
    TONE_MAPPING_EXPOSURE
}

impl ThemeConfig {
    #[must_use]
    pub fn preset(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Sinister => Self::sinister(),
            ThemeKind::Warm => Self::warm(),
            ThemeKind::Natural => Self::natural(),
        }
    }

    // Load a complete theme from a JSON file and validate it
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CorridorError::ThemeRead {
            path: path.to_path_buf(),
            source,
        })?;
        let theme: Self = serde_json::from_str(&text).map_err(|source| CorridorError::ThemeParse {
            path: path.to_path_buf(),
            source,
        })?;
        theme.validate()?;
        debug!("loaded theme '{}' from {}", theme.name, path.display());
        Ok(theme)
    }

    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &str| {
            Err(CorridorError::InvalidTheme {
                name: self.name.clone(),
                reason: reason.to_string(),
            })
        };
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if self.name.trim().is_empty() {
            return fail("name is empty");
        }
        if !(1..=2).contains(&self.ceiling_lights.len()) {
            return fail("ceiling fixture needs one or two point lights");
        }
        if !positive(self.carpet_width) || self.carpet_width >= CORRIDOR_WIDTH {
            return fail("carpet must be narrower than the corridor");
        }
        if !positive(self.frame_width) || !positive(self.frame_height) {
            return fail("frame dimensions must be positive");
        }
        if self.frame_height + FRAME_OUTER_BORDER >= CORRIDOR_HEIGHT {
            return fail("frames must fit on the wall");
        }
        if !(self.fog.near >= 0.0 && self.fog.near < self.fog.far) {
            return fail("fog near must be below fog far");
        }
        if !positive(self.exposure) {
            return fail("exposure must be positive");
        }
        if !(self.camera.speed.is_finite() && self.camera.speed >= 0.0) {
            return fail("camera speed must be finite and non-negative");
        }
        if !(self.camera.fov > 0.0 && self.camera.fov < 180.0) {
            return fail("camera fov must be between 0 and 180 degrees");
        }
        if let Some(easing) = self.camera.fov_easing {
            if !(easing.easing > 0.0 && easing.easing <= 1.0) {
                return fail("fov easing factor must be in (0, 1]");
            }
            if !(easing.narrow_fov > 0.0 && easing.narrow_fov < 180.0) {
                return fail("narrow fov must be between 0 and 180 degrees");
            }
        }
        if let Some(edge) = self.carpet_edge
            && !positive(edge.width)
        {
            return fail("carpet edge width must be positive");
        }
        Ok(())
    }

    // ========================================================================
    // Presets
    // ========================================================================

    // Dark crimson hallway
    #[must_use]
    pub fn sinister() -> Self {
        Self {
            name: ThemeKind::Sinister.name().to_string(),
            background: Rgb::from_hex(0x05_0003),
            ambient: AmbientDesc {
                color: Rgb::from_hex(0x0d_0008),
                intensity: 0.6,
            },
            fill_light: FillLightDesc {
                color: Rgb::from_hex(0x20_0010),
                intensity: 0.3,
                height: 5.0,
            },
            fog: FogDesc {
                color: Rgb::from_hex(0x06_0004),
                near: 10.0,
                far: 58.0,
            },
            bloom: BloomDesc {
                intensity: 1.6,
                luminance_threshold: 0.25,
                luminance_smoothing: 0.85,
            },
            exposure: TONE_MAPPING_EXPOSURE,
            floor: MaterialDesc::new(Rgb::from_hex(0x0a_0008))
                .surface(0.85, 0.15)
                .emissive(Rgb::from_hex(0x1a_0015), 0.1),
            ceiling: MaterialDesc::new(Rgb::from_hex(0x06_000a))
                .surface(0.9, 0.05)
                .emissive(Rgb::from_hex(0x0d_0015), 0.08),
            carpet: MaterialDesc::new(Rgb::from_hex(0x8b_0000))
                .surface(0.8, 0.0)
                .emissive(Rgb::from_hex(0xcc_0000), 0.12),
            wall: MaterialDesc::new(Rgb::from_hex(0x0d_0008))
                .surface(0.95, 0.1)
                .emissive(Rgb::from_hex(0x1a_0020), 0.15),
            baseboard: MaterialDesc::new(Rgb::from_hex(0x1a_0010))
                .surface(0.3, 0.6)
                .emissive(Rgb::from_hex(0x44_0022), 0.3),
            light_panel: MaterialDesc::new(Rgb::WHITE)
                .emissive(Rgb::from_hex(0xff_6666), 2.5)
                .untonemapped(),
            ceiling_lights: vec![
                LightDesc::new(Rgb::from_hex(0xff_3333), 30.0, 14.0),
                LightDesc::new(Rgb::from_hex(0xff_9966), 8.0, 8.0),
            ],
            frame_outer: MaterialDesc::new(Rgb::from_hex(0x1a_0010))
                .surface(0.2, 0.9)
                .emissive(Rgb::from_hex(0xcc_0000), 0.3),
            frame_inner: MaterialDesc::new(Rgb::from_hex(0x33_0000))
                .surface(0.3, 0.7)
                .emissive(Rgb::from_hex(0xff_0000), 0.15),
            frame_image: MaterialDesc::new(Rgb::WHITE)
                .surface(0.1, 0.0)
                .emissive(Rgb::from_hex(0x22_0000), 0.05),
            frame_light: Some(LightDesc::new(Rgb::from_hex(0xcc_2200), 4.0, 3.0)),
            carpet_edge: None,
            portal: PortalStyle {
                ring: MaterialDesc::new(Rgb::from_hex(0xcc_0000))
                    .surface(0.1, 0.9)
                    .emissive(Rgb::from_hex(0xff_1111), 6.0)
                    .untonemapped(),
                outer_ring: MaterialDesc::new(Rgb::from_hex(0x66_0000))
                    .emissive(Rgb::from_hex(0xff_4444), 3.0)
                    .untonemapped(),
                orb: MaterialDesc::new(Rgb::from_hex(0x44_0000))
                    .surface(0.05, 0.8)
                    .emissive(Rgb::from_hex(0xff_0000), 4.0)
                    .untonemapped(),
                third_ring: MaterialDesc::new(Rgb::from_hex(0x33_0000))
                    .emissive(Rgb::from_hex(0xcc_2200), 2.0)
                    .untonemapped(),
                lights: vec![
                    LightDesc::new(Rgb::from_hex(0xff_0000), 80.0, 25.0),
                    LightDesc::new(Rgb::from_hex(0xff_4400), 40.0, 15.0),
                ],
            },
            camera: CameraConfig {
                speed: 4.5,
                start_z: CAMERA_START_Z,
                base_y: CAMERA_BASE_Y,
                fov: CAMERA_FOV_DEGREES,
                sway: None,
                fov_easing: None,
            },
            carpet_width: 1.6,
            frame_width: 1.6,
            frame_height: 2.4,
            image_offset: 4,
        }
    }

    // Bright gallery: cream walls, gilded frames, gold carpet trim
    #[must_use]
    pub fn warm() -> Self {
        Self {
            name: ThemeKind::Warm.name().to_string(),
            background: Rgb::from_hex(0x1a_120b),
            ambient: AmbientDesc {
                color: Rgb::from_hex(0xff_f1e0),
                intensity: 1.2,
            },
            fill_light: FillLightDesc {
                color: Rgb::from_hex(0xff_e2b8),
                intensity: 0.8,
                height: 5.0,
            },
            fog: FogDesc {
                color: Rgb::from_hex(0x2a_1d12),
                near: 14.0,
                far: 70.0,
            },
            bloom: BloomDesc {
                intensity: 1.1,
                luminance_threshold: 0.45,
                luminance_smoothing: 0.7,
            },
            exposure: TONE_MAPPING_EXPOSURE,
            floor: MaterialDesc::new(Rgb::from_hex(0x5a_3a22))
                .surface(0.6, 0.05)
                .emissive(Rgb::from_hex(0x2a_1608), 0.05),
            ceiling: MaterialDesc::new(Rgb::from_hex(0xf3_e6d3))
                .surface(0.9, 0.0)
                .emissive(Rgb::from_hex(0x3a_2a18), 0.1),
            carpet: MaterialDesc::new(Rgb::from_hex(0xb3_122e))
                .surface(0.85, 0.0)
                .emissive(Rgb::from_hex(0x7a_0a1a), 0.08),
            wall: MaterialDesc::new(Rgb::from_hex(0xe8_d5b5))
                .surface(0.85, 0.0)
                .emissive(Rgb::from_hex(0x4a_3520), 0.08),
            baseboard: MaterialDesc::new(Rgb::from_hex(0x3b_2414))
                .surface(0.5, 0.3)
                .emissive(Rgb::from_hex(0x1a_0f08), 0.1),
            light_panel: MaterialDesc::new(Rgb::from_hex(0xff_f8ee))
                .emissive(Rgb::from_hex(0xff_d9a0), 2.0)
                .untonemapped(),
            ceiling_lights: vec![LightDesc::new(Rgb::from_hex(0xff_d2a0), 36.0, 16.0)],
            frame_outer: MaterialDesc::new(Rgb::from_hex(0xc9_a13b))
                .surface(0.25, 0.95)
                .emissive(Rgb::from_hex(0x6b_4a12), 0.2),
            frame_inner: MaterialDesc::new(Rgb::from_hex(0x2b_1b0e)).surface(0.5, 0.4),
            frame_image: MaterialDesc::new(Rgb::WHITE)
                .surface(0.2, 0.0)
                .emissive(Rgb::from_hex(0x1a_1208), 0.03),
            frame_light: Some(LightDesc::new(Rgb::from_hex(0xff_e0b0), 5.0, 3.5)),
            carpet_edge: Some(CarpetEdge {
                width: 0.06,
                material: MaterialDesc::new(Rgb::from_hex(0xd4_af37))
                    .emissive(Rgb::from_hex(0xff_cc55), 1.5)
                    .untonemapped(),
            }),
            portal: PortalStyle {
                ring: MaterialDesc::new(Rgb::from_hex(0xf0_c060))
                    .surface(0.1, 0.9)
                    .emissive(Rgb::from_hex(0xff_d27a), 5.0)
                    .untonemapped(),
                outer_ring: MaterialDesc::new(Rgb::from_hex(0xa8_742a))
                    .emissive(Rgb::from_hex(0xff_b347), 2.5)
                    .untonemapped(),
                orb: MaterialDesc::new(Rgb::from_hex(0xff_f3d6))
                    .surface(0.05, 0.6)
                    .emissive(Rgb::from_hex(0xff_e6b0), 3.5)
                    .untonemapped(),
                third_ring: MaterialDesc::new(Rgb::from_hex(0x8a_5a20))
                    .emissive(Rgb::from_hex(0xff_9f40), 1.8)
                    .untonemapped(),
                lights: vec![
                    LightDesc::new(Rgb::from_hex(0xff_d08a), 70.0, 25.0),
                    LightDesc::new(Rgb::from_hex(0xff_b060), 30.0, 15.0),
                ],
            },
            camera: CameraConfig {
                speed: 3.6,
                start_z: CAMERA_START_Z,
                base_y: 0.35,
                fov: 72.0,
                sway: Some(Sway {
                    freq_x: 0.6,
                    amp_x: 0.06,
                    freq_y: 1.2,
                    amp_y: 0.03,
                }),
                fov_easing: Some(FovEasing {
                    narrow_fov: 90.0,
                    easing: 0.05,
                }),
            },
            carpet_width: 1.8,
            frame_width: 1.5,
            frame_height: 2.1,
            image_offset: 6,
        }
    }

    // Moss-green walls, oxblood runner, pale green light
    #[must_use]
    pub fn natural() -> Self {
        Self {
            name: ThemeKind::Natural.name().to_string(),
            background: Rgb::from_hex(0x05_0806),
            ambient: AmbientDesc {
                color: Rgb::from_hex(0x1c_2a1e),
                intensity: 0.5,
            },
            fill_light: FillLightDesc {
                color: Rgb::from_hex(0x2f_4a36),
                intensity: 0.35,
                height: 5.0,
            },
            fog: FogDesc {
                color: Rgb::from_hex(0x0a_120c),
                near: 8.0,
                far: 50.0,
            },
            bloom: BloomDesc {
                intensity: 1.3,
                luminance_threshold: 0.3,
                luminance_smoothing: 0.8,
            },
            exposure: TONE_MAPPING_EXPOSURE,
            floor: MaterialDesc::new(Rgb::from_hex(0x1b_1510))
                .surface(0.95, 0.0)
                .emissive(Rgb::from_hex(0x0b_0905), 0.05),
            ceiling: MaterialDesc::new(Rgb::from_hex(0x0f_1410))
                .surface(0.95, 0.0)
                .emissive(Rgb::from_hex(0x0a_120b), 0.05),
            carpet: MaterialDesc::new(Rgb::from_hex(0x5c_1a14))
                .surface(0.9, 0.0)
                .emissive(Rgb::from_hex(0x3a_0c08), 0.08),
            wall: MaterialDesc::new(Rgb::from_hex(0x1e_2b20))
                .surface(0.9, 0.05)
                .emissive(Rgb::from_hex(0x0f_1a11), 0.1),
            baseboard: MaterialDesc::new(Rgb::from_hex(0x2a_1f14))
                .surface(0.6, 0.2)
                .emissive(Rgb::from_hex(0x12_0d08), 0.1),
            light_panel: MaterialDesc::new(Rgb::from_hex(0xe8_f5e0))
                .emissive(Rgb::from_hex(0xb8_e0a0), 1.8)
                .untonemapped(),
            ceiling_lights: vec![
                LightDesc::new(Rgb::from_hex(0xa8_d8a0), 24.0, 13.0),
                LightDesc::new(Rgb::from_hex(0xe0_c890), 6.0, 7.0),
            ],
            frame_outer: MaterialDesc::new(Rgb::from_hex(0x2b_2216))
                .surface(0.6, 0.5)
                .emissive(Rgb::from_hex(0x1a_3a1a), 0.15),
            frame_inner: MaterialDesc::new(Rgb::from_hex(0x3d_5a3a))
                .surface(0.7, 0.3)
                .emissive(Rgb::from_hex(0x20_4020), 0.1),
            frame_image: MaterialDesc::new(Rgb::WHITE)
                .surface(0.3, 0.0)
                .emissive(Rgb::from_hex(0x0a_140a), 0.03),
            frame_light: None,
            carpet_edge: None,
            portal: PortalStyle {
                ring: MaterialDesc::new(Rgb::from_hex(0x3c_8a50))
                    .surface(0.15, 0.8)
                    .emissive(Rgb::from_hex(0x6c_ff9a), 5.0)
                    .untonemapped(),
                outer_ring: MaterialDesc::new(Rgb::from_hex(0x1f_4a2a))
                    .emissive(Rgb::from_hex(0x8c_ffb0), 2.5)
                    .untonemapped(),
                orb: MaterialDesc::new(Rgb::from_hex(0x10_301a))
                    .surface(0.05, 0.7)
                    .emissive(Rgb::from_hex(0x40_ff80), 3.5)
                    .untonemapped(),
                third_ring: MaterialDesc::new(Rgb::from_hex(0x1a_3a20))
                    .emissive(Rgb::from_hex(0x50_c070), 1.8)
                    .untonemapped(),
                lights: vec![
                    LightDesc::new(Rgb::from_hex(0x40_ff80), 60.0, 25.0),
                    LightDesc::new(Rgb::from_hex(0xa0_ffc0), 25.0, 15.0),
                ],
            },
            camera: CameraConfig {
                speed: 3.2,
                start_z: CAMERA_START_Z,
                base_y: CAMERA_BASE_Y,
                fov: CAMERA_FOV_DEGREES,
                sway: Some(Sway {
                    freq_x: 0.35,
                    amp_x: 0.08,
                    freq_y: 0.8,
                    amp_y: 0.04,
                }),
                fov_easing: Some(FovEasing {
                    narrow_fov: 92.0,
                    easing: 0.04,
                }),
            },
            carpet_width: 1.4,
            frame_width: 1.4,
            frame_height: 2.0,
            image_offset: 5,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::sinister()
    }
}
