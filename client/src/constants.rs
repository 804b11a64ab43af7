use std::f32::consts::PI;

// ============================================================================
// Client Constants
// ============================================================================

pub const LOG_FILTER: &str = "wgpu=error,naga=warn";

pub const WINDOW_TITLE: &str = "Endless Corridor";
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 800;

// Headless runs
pub const DEFAULT_TICK_HZ: f64 = 60.0;
pub const DEFAULT_HEADLESS_TICKS: u64 = 600;
pub const HEADLESS_REPORT_INTERVAL: u64 = 120; // ticks between position logs

// ============================================================================
// Frame Images
// ============================================================================

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_FRAMES_DIR: &str = "frames"; // relative to the assets dir
pub const FRAME_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
pub const PLACEHOLDER_FRAME_COUNT: usize = 8;
pub const PLACEHOLDER_SATURATION: f32 = 0.45;
pub const PLACEHOLDER_LIGHTNESS: f32 = 0.35;

// ============================================================================
// Renderer Units
// ============================================================================

// Theme values are tuned for a physically based renderer with unit exposure;
// these scales bring them into the ranges the default camera exposure expects.
pub const POINT_LIGHT_LUMENS_PER_CANDELA: f32 = 4.0 * PI * 1000.0;
pub const AMBIENT_BRIGHTNESS_SCALE: f32 = 500.0; // cd/m^2 per theme unit
pub const DIRECTIONAL_ILLUMINANCE_SCALE: f32 = 10_000.0; // lux per theme unit
pub const EMISSIVE_SCALE: f32 = 4.0;
pub const UNTONEMAPPED_EMISSIVE_BOOST: f32 = 2.5; // extra push so the glow blooms
pub const BLOOM_INTENSITY_SCALE: f32 = 0.15;
pub const DEFAULT_POINT_LIGHT_RANGE: f32 = 20.0; // used when a light has no cutoff distance

// ============================================================================
// Mesh Resolution
// ============================================================================

pub const TORUS_MAJOR_RESOLUTION: usize = 80;
pub const TORUS_MINOR_RESOLUTION: usize = 24;
pub const SPHERE_SECTORS: u32 = 32;
pub const SPHERE_STACKS: u32 = 32;
