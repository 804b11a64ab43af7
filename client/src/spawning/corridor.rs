use std::collections::HashMap;

use bevy::prelude::*;

use corridor_common::element::{ElementKind, MaterialDesc, PlacedElement, Shape};

use super::helpers::{mesh_for_shape, point_light, standard_material, transform_from_placement};
use crate::markers::CorridorElementMarker;

#[derive(Bundle)]
struct CorridorMeshBundle {
    mesh: Mesh3d,
    material: MeshMaterial3d<StandardMaterial>,
    transform: Transform,
    visibility: Visibility,
    marker: CorridorElementMarker,
}

#[derive(Bundle)]
struct CorridorLightBundle {
    light: PointLight,
    transform: Transform,
    marker: CorridorElementMarker,
}

// ============================================================================
// Asset Cache
// ============================================================================

// Segments repeat the same handful of shapes and materials; share the handles.
pub struct CorridorAssets<'a> {
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
    frame_images: &'a [Handle<Image>],
    mesh_cache: HashMap<[u32; 4], Handle<Mesh>>,
    material_cache: HashMap<Vec<u32>, Handle<StandardMaterial>>,
}

impl<'a> CorridorAssets<'a> {
    pub fn new(
        meshes: &'a mut Assets<Mesh>,
        materials: &'a mut Assets<StandardMaterial>,
        frame_images: &'a [Handle<Image>],
    ) -> Self {
        Self {
            meshes,
            materials,
            frame_images,
            mesh_cache: HashMap::new(),
            material_cache: HashMap::new(),
        }
    }

    pub fn mesh(&mut self, shape: &Shape) -> Handle<Mesh> {
        let key = shape_key(shape);
        if let Some(handle) = self.mesh_cache.get(&key) {
            return handle.clone();
        }
        let handle = self.meshes.add(mesh_for_shape(shape));
        self.mesh_cache.insert(key, handle.clone());
        handle
    }

    pub fn material(&mut self, desc: &MaterialDesc) -> Handle<StandardMaterial> {
        let key = material_key(desc);
        if let Some(handle) = self.material_cache.get(&key) {
            return handle.clone();
        }
        let texture = desc
            .image
            .and_then(|index| self.frame_images.get(index % self.frame_images.len().max(1)))
            .cloned();
        let handle = self.materials.add(standard_material(desc, texture));
        self.material_cache.insert(key, handle.clone());
        handle
    }

    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.mesh_cache.len()
    }

    #[must_use]
    pub fn material_count(&self) -> usize {
        self.material_cache.len()
    }
}

fn shape_key(shape: &Shape) -> [u32; 4] {
    match *shape {
        Shape::Plane { width, height } => [0, width.to_bits(), height.to_bits(), 0],
        Shape::Cuboid { width, height, depth } => [1, width.to_bits(), height.to_bits(), depth.to_bits()],
        Shape::Torus { radius, tube } => [2, radius.to_bits(), tube.to_bits(), 0],
        Shape::Sphere { radius } => [3, radius.to_bits(), 0, 0],
    }
}

fn material_key(desc: &MaterialDesc) -> Vec<u32> {
    let mut key: Vec<u32> = [
        desc.color.r,
        desc.color.g,
        desc.color.b,
        desc.emissive.r,
        desc.emissive.g,
        desc.emissive.b,
        desc.emissive_intensity,
        desc.roughness,
        desc.metalness,
    ]
    .iter()
    .map(|value| value.to_bits())
    .collect();
    key.push(u32::from(desc.tone_mapped));
    key.push(desc.image.map_or(u32::MAX, |index| index as u32));
    key
}

// ============================================================================
// Spawning
// ============================================================================

// Spawn one world-space corridor element
pub fn spawn_corridor_element(commands: &mut Commands, assets: &mut CorridorAssets, element: &PlacedElement) {
    let transform = transform_from_placement(&element.placement);
    let marker = CorridorElementMarker(element.role);

    match &element.kind {
        ElementKind::Mesh { shape, material } => {
            commands.spawn(CorridorMeshBundle {
                mesh: Mesh3d(assets.mesh(shape)),
                material: MeshMaterial3d(assets.material(material)),
                transform,
                visibility: Visibility::default(),
                marker,
            });
        }
        ElementKind::PointLight { light } => {
            commands.spawn(CorridorLightBundle {
                light: point_light(light),
                transform,
                marker,
            });
        }
    }
}
