use bevy_math::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::{error::CorridorError, portal::PortalPart};

// ============================================================================
// Colors
// ============================================================================

// sRGB color with components in 0..=1. Serialized as "#rrggbb".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::from_hex(0x00_0000);
    pub const WHITE: Self = Self::from_hex(0xff_ffff);

    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    #[must_use]
    pub fn to_hex(self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = CorridorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let digits = value
            .strip_prefix('#')
            .filter(|digits| digits.len() == 6)
            .ok_or_else(|| CorridorError::InvalidColor(value.clone()))?;
        let hex = u32::from_str_radix(digits, 16).map_err(|_| CorridorError::InvalidColor(value.clone()))?;
        Ok(Self::from_hex(hex))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        format!("#{:06x}", color.to_hex())
    }
}

// ============================================================================
// Material & Light Descriptors
// ============================================================================

// Standard PBR surface. Defaults match an untextured standard material:
// fully rough, non-metallic, no emission, tone mapped.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDesc {
    pub color: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub tone_mapped: bool,
    // Index into the image pool, already reduced modulo the pool length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<usize>,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self::new(Rgb::WHITE)
    }
}

impl MaterialDesc {
    #[must_use]
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            emissive: Rgb::BLACK,
            emissive_intensity: 1.0,
            roughness: 1.0,
            metalness: 0.0,
            tone_mapped: true,
            image: None,
        }
    }

    #[must_use]
    pub const fn emissive(mut self, emissive: Rgb, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    #[must_use]
    pub const fn surface(mut self, roughness: f32, metalness: f32) -> Self {
        self.roughness = roughness;
        self.metalness = metalness;
        self
    }

    #[must_use]
    pub const fn untonemapped(mut self) -> Self {
        self.tone_mapped = false;
        self
    }

    #[must_use]
    pub const fn with_image(mut self, index: usize) -> Self {
        self.image = Some(index);
        self
    }
}

// Point light with physical falloff. Intensity is in candela.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightDesc {
    pub color: Rgb,
    pub intensity: f32,
    pub distance: f32,
    pub decay: f32,
}

impl LightDesc {
    #[must_use]
    pub const fn new(color: Rgb, intensity: f32, distance: f32) -> Self {
        Self {
            color,
            intensity,
            distance,
            decay: 2.0,
        }
    }
}

// ============================================================================
// Shapes & Roles
// ============================================================================

// Geometry primitives. Planes lie in local XY facing +Z; tori ring the local Z axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Plane { width: f32, height: f32 },
    Cuboid { width: f32, height: f32, depth: f32 },
    Torus { radius: f32, tube: f32 },
    Sphere { radius: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    // -1 for left, +1 for right (x axis)
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameDepth {
    Near,
    Far,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameSlot {
    pub side: Side,
    pub depth: FrameDepth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", content = "at", rename_all = "snake_case")]
pub enum ElementRole {
    Floor,
    Carpet,
    CarpetEdge(Side),
    Ceiling,
    Wall(Side),
    Baseboard(Side),
    LightPanel,
    CeilingLight,
    FrameOuter(FrameSlot),
    FrameInner(FrameSlot),
    FrameImage(FrameSlot),
    FrameLight(FrameSlot),
    Portal(PortalPart),
    PortalLight,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    Mesh { shape: Shape, material: MaterialDesc },
    PointLight { light: LightDesc },
}

// ============================================================================
// Placement
// ============================================================================

// Position, rotation and uniform scale relative to a parent space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Placement {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: 1.0,
    };

    #[must_use]
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }

    // Euler angles in XYZ order
    #[must_use]
    pub fn with_euler(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Quat::from_euler(EulerRot::XYZ, x, y, z);
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    // Express `child` (given in this placement's space) in the parent space
    #[must_use]
    pub fn then(&self, child: &Self) -> Self {
        Self {
            translation: self.translation + self.rotation * (child.translation * self.scale),
            rotation: self.rotation * child.rotation,
            scale: self.scale * child.scale,
        }
    }

    // Direction a plane with this placement faces
    #[must_use]
    pub fn facing(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

// ============================================================================
// Placed Elements
// ============================================================================

// One static visual primitive: what it is, how it looks, where it sits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedElement {
    pub role: ElementRole,
    pub kind: ElementKind,
    pub placement: Placement,
}

impl PlacedElement {
    #[must_use]
    pub const fn mesh(role: ElementRole, shape: Shape, material: MaterialDesc, placement: Placement) -> Self {
        Self {
            role,
            kind: ElementKind::Mesh { shape, material },
            placement,
        }
    }

    #[must_use]
    pub const fn light(role: ElementRole, light: LightDesc, placement: Placement) -> Self {
        Self {
            role,
            kind: ElementKind::PointLight { light },
            placement,
        }
    }

    // Same element moved into `parent` space
    #[must_use]
    pub fn within(&self, parent: &Placement) -> Self {
        Self {
            placement: parent.then(&self.placement),
            ..*self
        }
    }

    #[must_use]
    pub const fn material(&self) -> Option<&MaterialDesc> {
        match &self.kind {
            ElementKind::Mesh { material, .. } => Some(material),
            ElementKind::PointLight { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_light(&self) -> bool {
        matches!(self.kind, ElementKind::PointLight { .. })
    }
}
