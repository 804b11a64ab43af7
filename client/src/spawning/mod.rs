pub mod corridor;
pub mod helpers;
pub mod portal;

pub use corridor::{CorridorAssets, spawn_corridor_element};
pub use helpers::{exposure, load_clamped_texture, placeholder_image, srgb, transform_from_placement};
pub use portal::spawn_portal;
