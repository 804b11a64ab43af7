use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        BASEBOARD_HEIGHT, BASEBOARD_INSET, BASEBOARD_THICKNESS, CARPET_EDGE_LIFT, CARPET_LIFT, CORRIDOR_HEIGHT,
        CORRIDOR_WIDTH, FRAME_CENTER_Y, FRAME_FAR_FRACTION, FRAME_IMAGE_OFFSET, FRAME_INNER_BORDER,
        FRAME_INNER_DEPTH, FRAME_INNER_OFFSET, FRAME_LIGHT_OFFSET, FRAME_NEAR_FRACTION, FRAME_OUTER_BORDER,
        FRAME_OUTER_DEPTH, FRAME_WALL_INSET, LIGHT_PANEL_DROP, LIGHT_PANEL_LENGTH, LIGHT_PANEL_THICKNESS,
        LIGHT_PANEL_WIDTH, SEGMENT_LENGTH,
    },
    element::{ElementRole, FrameDepth, FrameSlot, PlacedElement, Placement, Shape, Side},
    images::{ImagePool, assign},
    theme::ThemeConfig,
};

// ============================================================================
// Dimensions
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorridorDimensions {
    pub width: f32,
    pub height: f32,
    pub segment_length: f32,
}

impl Default for CorridorDimensions {
    fn default() -> Self {
        Self::with_segment_length(SEGMENT_LENGTH)
    }
}

impl CorridorDimensions {
    #[must_use]
    pub const fn with_segment_length(segment_length: f32) -> Self {
        Self {
            width: CORRIDOR_WIDTH,
            height: CORRIDOR_HEIGHT,
            segment_length,
        }
    }

    const fn floor_y(&self) -> f32 {
        -self.height / 2.0
    }

    const fn ceiling_y(&self) -> f32 {
        self.height / 2.0
    }

    const fn mid_z(&self) -> f32 {
        -self.segment_length / 2.0
    }
}

// ============================================================================
// Segment
// ============================================================================

// One repeating unit of the corridor. Elements are segment-local: the segment
// spans local z from 0 down to -segment_length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    pub origin_z: f32,
    pub elements: Vec<PlacedElement>,
}

impl Segment {
    #[must_use]
    pub const fn origin(&self) -> Placement {
        Placement::from_xyz(0.0, 0.0, self.origin_z)
    }

    pub fn with_role(&self, role: ElementRole) -> impl Iterator<Item = &PlacedElement> {
        self.elements.iter().filter(move |element| element.role == role)
    }
}

// Lay out segment `index`. Same inputs always produce the same element list.
#[must_use]
pub fn build_segment<T>(index: usize, dims: &CorridorDimensions, theme: &ThemeConfig, pool: &ImagePool<T>) -> Segment {
    let mut elements = Vec::with_capacity(32);

    push_surfaces(&mut elements, dims, theme);
    push_ceiling_fixture(&mut elements, dims, theme);

    let images = assign(index, pool.len(), theme.image_offset);
    let slots = [
        (Side::Left, FrameDepth::Near, images.left_near),
        (Side::Right, FrameDepth::Near, images.right_near),
        (Side::Left, FrameDepth::Far, images.left_far),
        (Side::Right, FrameDepth::Far, images.right_far),
    ];
    for (side, depth, image) in slots {
        push_frame(&mut elements, dims, theme, FrameSlot { side, depth }, image);
    }

    Segment {
        index,
        origin_z: -(index as f32) * dims.segment_length,
        elements,
    }
}

// Floor, carpet, ceiling, walls, baseboards and optional carpet trim
fn push_surfaces(elements: &mut Vec<PlacedElement>, dims: &CorridorDimensions, theme: &ThemeConfig) {
    let length = dims.segment_length;
    let mid_z = dims.mid_z();

    elements.push(PlacedElement::mesh(
        ElementRole::Floor,
        Shape::Plane {
            width: dims.width,
            height: length,
        },
        theme.floor,
        Placement::from_xyz(0.0, dims.floor_y(), mid_z).with_euler(-FRAC_PI_2, 0.0, 0.0),
    ));

    elements.push(PlacedElement::mesh(
        ElementRole::Carpet,
        Shape::Plane {
            width: theme.carpet_width,
            height: length,
        },
        theme.carpet,
        Placement::from_xyz(0.0, dims.floor_y() + CARPET_LIFT, mid_z).with_euler(-FRAC_PI_2, 0.0, 0.0),
    ));

    if let Some(edge) = theme.carpet_edge {
        for side in Side::BOTH {
            elements.push(PlacedElement::mesh(
                ElementRole::CarpetEdge(side),
                Shape::Plane {
                    width: edge.width,
                    height: length,
                },
                edge.material,
                Placement::from_xyz(side.sign() * theme.carpet_width / 2.0, dims.floor_y() + CARPET_EDGE_LIFT, mid_z)
                    .with_euler(-FRAC_PI_2, 0.0, 0.0),
            ));
        }
    }

    elements.push(PlacedElement::mesh(
        ElementRole::Ceiling,
        Shape::Plane {
            width: dims.width,
            height: length,
        },
        theme.ceiling,
        Placement::from_xyz(0.0, dims.ceiling_y(), mid_z).with_euler(FRAC_PI_2, 0.0, 0.0),
    ));

    for side in Side::BOTH {
        // Turned about Y so the plane faces the corridor center
        elements.push(PlacedElement::mesh(
            ElementRole::Wall(side),
            Shape::Plane {
                width: length,
                height: dims.height,
            },
            theme.wall,
            Placement::from_xyz(side.sign() * dims.width / 2.0, 0.0, mid_z).with_euler(
                0.0,
                -side.sign() * FRAC_PI_2,
                0.0,
            ),
        ));
    }

    for side in Side::BOTH {
        elements.push(PlacedElement::mesh(
            ElementRole::Baseboard(side),
            Shape::Cuboid {
                width: BASEBOARD_THICKNESS,
                height: BASEBOARD_HEIGHT,
                depth: length,
            },
            theme.baseboard,
            Placement::from_xyz(
                side.sign() * (dims.width / 2.0 - BASEBOARD_INSET),
                dims.floor_y() + BASEBOARD_HEIGHT / 2.0,
                mid_z,
            ),
        ));
    }
}

// Emissive panel plus the theme's point lights, centered in the segment
fn push_ceiling_fixture(elements: &mut Vec<PlacedElement>, dims: &CorridorDimensions, theme: &ThemeConfig) {
    let fixture = Placement::from_xyz(0.0, dims.ceiling_y() - LIGHT_PANEL_DROP, dims.mid_z());

    elements.push(
        PlacedElement::mesh(
            ElementRole::LightPanel,
            Shape::Cuboid {
                width: LIGHT_PANEL_WIDTH,
                height: LIGHT_PANEL_THICKNESS,
                depth: LIGHT_PANEL_LENGTH,
            },
            theme.light_panel,
            Placement::IDENTITY,
        )
        .within(&fixture),
    );

    for light in &theme.ceiling_lights {
        elements.push(PlacedElement::light(ElementRole::CeilingLight, *light, Placement::IDENTITY).within(&fixture));
    }
}

fn push_frame(
    elements: &mut Vec<PlacedElement>,
    dims: &CorridorDimensions,
    theme: &ThemeConfig,
    slot: FrameSlot,
    image: usize,
) {
    let fraction = match slot.depth {
        FrameDepth::Near => FRAME_NEAR_FRACTION,
        FrameDepth::Far => FRAME_FAR_FRACTION,
    };
    let sign = slot.side.sign();

    // Frame-local +Z points away from the wall
    let frame = Placement::from_xyz(
        sign * (dims.width / 2.0 - FRAME_WALL_INSET),
        FRAME_CENTER_Y,
        -dims.segment_length * fraction,
    )
    .with_euler(0.0, -sign * FRAC_PI_2, 0.0);

    let (w, h) = (theme.frame_width, theme.frame_height);

    elements.push(
        PlacedElement::mesh(
            ElementRole::FrameOuter(slot),
            Shape::Cuboid {
                width: w + FRAME_OUTER_BORDER,
                height: h + FRAME_OUTER_BORDER,
                depth: FRAME_OUTER_DEPTH,
            },
            theme.frame_outer,
            Placement::IDENTITY,
        )
        .within(&frame),
    );

    elements.push(
        PlacedElement::mesh(
            ElementRole::FrameInner(slot),
            Shape::Cuboid {
                width: w + FRAME_INNER_BORDER,
                height: h + FRAME_INNER_BORDER,
                depth: FRAME_INNER_DEPTH,
            },
            theme.frame_inner,
            Placement::from_xyz(0.0, 0.0, FRAME_INNER_OFFSET),
        )
        .within(&frame),
    );

    elements.push(
        PlacedElement::mesh(
            ElementRole::FrameImage(slot),
            Shape::Plane { width: w, height: h },
            theme.frame_image.with_image(image),
            Placement::from_xyz(0.0, 0.0, FRAME_IMAGE_OFFSET),
        )
        .within(&frame),
    );

    if let Some(light) = theme.frame_light {
        elements.push(
            PlacedElement::light(
                ElementRole::FrameLight(slot),
                light,
                Placement::from_xyz(0.0, 0.0, FRAME_LIGHT_OFFSET),
            )
            .within(&frame),
        );
    }
}
