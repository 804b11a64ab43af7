pub mod camera;
pub mod constants;
pub mod corridor;
pub mod element;
pub mod error;
pub mod images;
pub mod portal;
pub mod scene;
pub mod segment;
pub mod systems;
pub mod theme;

pub use error::{CorridorError, Result};
