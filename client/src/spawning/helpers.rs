use std::f32::consts::FRAC_PI_2;

use bevy::{
    asset::{AssetPath, RenderAssetUsages},
    camera::Exposure,
    image::{ImageAddressMode, ImageFilterMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor},
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};

use corridor_common::element::{LightDesc, MaterialDesc, Placement, Rgb, Shape};

use crate::constants::*;

// ============================================================================
// Textures
// ============================================================================

// Load a texture with clamp-to-edge addressing so frame edges never repeat.
pub fn load_clamped_texture(asset_server: &AssetServer, path: impl Into<AssetPath<'static>>) -> Handle<Image> {
    asset_server.load_with_settings(path, |settings: &mut ImageLoaderSettings| {
        settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::ClampToEdge,
            address_mode_v: ImageAddressMode::ClampToEdge,
            address_mode_w: ImageAddressMode::ClampToEdge,
            mag_filter: ImageFilterMode::Linear,
            min_filter: ImageFilterMode::Linear,
            ..default()
        });
    })
}

// Single-pixel swatch standing in for a missing frame image
#[must_use]
pub fn placeholder_image(index: usize, count: usize) -> Image {
    let hue = 360.0 * index as f32 / count.max(1) as f32;
    let color = Color::hsl(hue, PLACEHOLDER_SATURATION, PLACEHOLDER_LIGHTNESS).to_srgba();
    Image::new_fill(
        Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &color.to_u8_array(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
}

// ============================================================================
// Descriptor Conversion
// ============================================================================

#[must_use]
pub fn srgb(color: Rgb) -> Color {
    Color::srgb(color.r, color.g, color.b)
}

#[must_use]
pub fn transform_from_placement(placement: &Placement) -> Transform {
    Transform {
        translation: placement.translation,
        rotation: placement.rotation,
        scale: Vec3::splat(placement.scale),
    }
}

// Planes face +Z, tori are turned from the XZ plane into XY
#[must_use]
pub fn mesh_for_shape(shape: &Shape) -> Mesh {
    match *shape {
        Shape::Plane { width, height } => Mesh::from(Rectangle::new(width, height)),
        Shape::Cuboid { width, height, depth } => Mesh::from(Cuboid::new(width, height, depth)),
        Shape::Torus { radius, tube } => Torus {
            minor_radius: tube,
            major_radius: radius,
        }
        .mesh()
        .major_resolution(TORUS_MAJOR_RESOLUTION)
        .minor_resolution(TORUS_MINOR_RESOLUTION)
        .build()
        .rotated_by(Quat::from_rotation_x(FRAC_PI_2)),
        Shape::Sphere { radius } => Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS),
    }
}

#[must_use]
pub fn standard_material(desc: &MaterialDesc, texture: Option<Handle<Image>>) -> StandardMaterial {
    let boost = if desc.tone_mapped {
        1.0
    } else {
        UNTONEMAPPED_EMISSIVE_BOOST
    };
    let strength = desc.emissive_intensity * EMISSIVE_SCALE * boost;
    let emissive = srgb(desc.emissive).to_linear();

    StandardMaterial {
        base_color: srgb(desc.color),
        base_color_texture: texture,
        emissive: LinearRgba::rgb(emissive.red * strength, emissive.green * strength, emissive.blue * strength),
        perceptual_roughness: desc.roughness,
        metallic: desc.metalness,
        ..default()
    }
}

// A linear exposure multiplier as a shift from Bevy's default EV100
#[must_use]
pub fn exposure(multiplier: f32) -> Exposure {
    Exposure {
        ev100: Exposure::EV100_BLENDER - multiplier.log2(),
    }
}

#[must_use]
pub fn point_light(desc: &LightDesc) -> PointLight {
    PointLight {
        color: srgb(desc.color),
        intensity: desc.intensity * POINT_LIGHT_LUMENS_PER_CANDELA,
        range: if desc.distance > 0.0 {
            desc.distance
        } else {
            DEFAULT_POINT_LIGHT_RANGE
        },
        shadows_enabled: false,
        ..default()
    }
}
