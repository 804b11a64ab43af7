// Re-export all systems modules
pub mod cameras;
pub mod headless;
pub mod portal;
pub mod scene;
