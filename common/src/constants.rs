// ============================================================================
// Corridor Geometry
// ============================================================================

pub const CORRIDOR_WIDTH: f32 = 5.0; // Wall to wall (meters)
pub const CORRIDOR_HEIGHT: f32 = 6.0; // Floor to ceiling (meters)
pub const SEGMENT_LENGTH: f32 = 12.0; // Length of one repeating unit
pub const NUM_SEGMENTS: usize = 10; // Segments built at startup

// ============================================================================
// Surfaces
// ============================================================================

pub const CARPET_LIFT: f32 = 0.01; // Carpet above floor to avoid z-fighting
pub const CARPET_EDGE_LIFT: f32 = 0.015; // Edge strips above carpet

pub const BASEBOARD_THICKNESS: f32 = 0.08;
pub const BASEBOARD_HEIGHT: f32 = 0.3;
pub const BASEBOARD_INSET: f32 = 0.04; // Center offset from the wall plane

// ============================================================================
// Ceiling Fixture
// ============================================================================

pub const LIGHT_PANEL_WIDTH: f32 = 1.2;
pub const LIGHT_PANEL_THICKNESS: f32 = 0.08;
pub const LIGHT_PANEL_LENGTH: f32 = 3.5;
pub const LIGHT_PANEL_DROP: f32 = 0.05; // Panel center below the ceiling plane

// ============================================================================
// Wall Frames
// ============================================================================

pub const FRAME_NEAR_FRACTION: f32 = 0.28; // Near pair, fraction of segment length
pub const FRAME_FAR_FRACTION: f32 = 0.72; // Far pair, fraction of segment length
pub const FRAME_WALL_INSET: f32 = 0.06; // Distance from wall surface
pub const FRAME_CENTER_Y: f32 = 0.4; // Frame center height above corridor center
pub const FRAME_OUTER_BORDER: f32 = 0.18; // Added to image width/height
pub const FRAME_OUTER_DEPTH: f32 = 0.06;
pub const FRAME_INNER_BORDER: f32 = 0.08;
pub const FRAME_INNER_DEPTH: f32 = 0.03;
pub const FRAME_INNER_OFFSET: f32 = 0.03; // Inner border pushed out from outer
pub const FRAME_IMAGE_OFFSET: f32 = 0.06; // Image plane pushed out from outer
pub const FRAME_LIGHT_OFFSET: f32 = 0.2; // Frame light distance from the frame

// ============================================================================
// Portal
// ============================================================================

pub const PORTAL_CENTER_Y: f32 = 0.4;
pub const PORTAL_RING_RADIUS: f32 = 1.1;
pub const PORTAL_RING_TUBE: f32 = 0.12;
pub const PORTAL_OUTER_RING_RADIUS: f32 = 1.5;
pub const PORTAL_OUTER_RING_TUBE: f32 = 0.04;
pub const PORTAL_ORB_RADIUS: f32 = 0.55;
pub const PORTAL_THIRD_RING_RADIUS: f32 = 1.8;
pub const PORTAL_THIRD_RING_TUBE: f32 = 0.025;

// Oscillator rates (radians per second)
pub const PORTAL_RING_SPIN: f32 = 0.4;
pub const PORTAL_OUTER_RING_SPIN: f32 = -0.6;
pub const PORTAL_THIRD_RING_SPIN_Z: f32 = 0.3;
pub const PORTAL_THIRD_RING_SPIN_X: f32 = 0.2;
pub const PORTAL_PULSE_RATE: f32 = 1.5;
pub const PORTAL_PULSE_AMPLITUDE: f32 = 0.05; // Ring scale swing
pub const PORTAL_GLOW_AMPLITUDE: f32 = 0.15; // Light intensity swing

// ============================================================================
// Camera
// ============================================================================

pub const CAMERA_START_Z: f32 = 2.0;
pub const CAMERA_BASE_Y: f32 = 0.3;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const TONE_MAPPING_EXPOSURE: f32 = 1.3; // linear multiplier before tone mapping

// Viewports narrower than this (logical pixels) count as narrow
pub const NARROW_VIEWPORT_BREAKPOINT: f32 = 768.0;
