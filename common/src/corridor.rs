use tracing::debug;

use crate::{
    element::PlacedElement,
    error::{CorridorError, Result},
    images::ImagePool,
    segment::{CorridorDimensions, Segment, build_segment},
    theme::ThemeConfig,
};

// ============================================================================
// Corridor Model
// ============================================================================

// The full run of segments plus the derived loop geometry. Built once at
// startup and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct CorridorModel {
    dims: CorridorDimensions,
    segments: Vec<Segment>,
}

impl CorridorModel {
    pub fn build<T>(num_segments: usize, segment_length: f32, theme: &ThemeConfig, pool: &ImagePool<T>) -> Result<Self> {
        if num_segments < 1 {
            return Err(CorridorError::NoSegments(num_segments));
        }
        if !segment_length.is_finite() || segment_length <= 0.0 {
            return Err(CorridorError::InvalidSegmentLength(segment_length));
        }
        theme.validate()?;

        let dims = CorridorDimensions::with_segment_length(segment_length);
        let segments: Vec<Segment> = (0..num_segments)
            .map(|index| build_segment(index, &dims, theme, pool))
            .collect();

        let element_count: usize = segments.iter().map(|segment| segment.elements.len()).sum();
        debug!(
            "built corridor: {} segments x {segment_length}m, {element_count} elements, theme '{}'",
            segments.len(),
            theme.name
        );

        Ok(Self { dims, segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    // Panics when `index` is out of range
    #[must_use]
    pub fn segment(&self, index: usize) -> &Segment {
        &self.segments[index]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    #[must_use]
    pub const fn dimensions(&self) -> &CorridorDimensions {
        &self.dims
    }

    #[must_use]
    pub const fn segment_length(&self) -> f32 {
        self.dims.segment_length
    }

    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn total_length(&self) -> f32 {
        self.segments.len() as f32 * self.dims.segment_length
    }

    // Center of the last segment
    #[must_use]
    pub fn portal_origin_z(&self) -> f32 {
        -(self.total_length() - 0.5 * self.segment_length())
    }

    // Camera z below which it is moved back toward the start
    #[must_use]
    pub fn loop_threshold(&self) -> f32 {
        -(self.total_length() - 2.0 * self.segment_length())
    }

    // Whole number of segments, so the view is identical before and after a reset
    #[must_use]
    pub fn loop_offset(&self) -> f32 {
        self.total_length() - self.segment_length()
    }

    // Every element of every segment in world space
    pub fn world_elements(&self) -> impl Iterator<Item = PlacedElement> + '_ {
        self.segments.iter().flat_map(|segment| {
            let origin = segment.origin();
            segment.elements.iter().map(move |element| element.within(&origin))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementRole;

    fn pool() -> ImagePool<&'static str> {
        ImagePool::new(vec!["a", "b", "c", "d", "e", "f", "g", "h"]).unwrap()
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn default_corridor_geometry() {
        let corridor = CorridorModel::build(10, 12.0, &ThemeConfig::sinister(), &pool()).unwrap();
        assert!(close(corridor.total_length(), 120.0));
        assert!(close(corridor.portal_origin_z(), -114.0));
        assert!(close(corridor.loop_threshold(), -96.0));
        assert!(close(corridor.loop_offset(), 108.0));
        assert_eq!(corridor.segments().len(), 10);
    }

    #[test]
    fn segments_are_contiguous() {
        let corridor = CorridorModel::build(6, 9.0, &ThemeConfig::natural(), &pool()).unwrap();
        for pair in corridor.segments().windows(2) {
            assert!(close(pair[0].origin_z - pair[1].origin_z, 9.0));
            assert_eq!(pair[0].index + 1, pair[1].index);
        }
        assert!(close(corridor.segment(0).origin_z, 0.0));
    }

    #[test]
    fn zero_segments_is_rejected() {
        assert!(matches!(
            CorridorModel::build(0, 12.0, &ThemeConfig::sinister(), &pool()),
            Err(CorridorError::NoSegments(0))
        ));
    }

    #[test]
    fn bad_segment_lengths_are_rejected() {
        for length in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                CorridorModel::build(10, length, &ThemeConfig::sinister(), &pool()),
                Err(CorridorError::InvalidSegmentLength(_))
            ));
        }
    }

    #[test]
    fn invalid_theme_is_rejected_before_building() {
        let mut theme = ThemeConfig::warm();
        theme.ceiling_lights.clear();
        assert!(matches!(
            CorridorModel::build(10, 12.0, &theme, &pool()),
            Err(CorridorError::InvalidTheme { .. })
        ));
    }

    #[test]
    fn single_segment_corridor_still_builds() {
        let corridor = CorridorModel::build(1, 12.0, &ThemeConfig::sinister(), &pool()).unwrap();
        assert!(close(corridor.portal_origin_z(), -6.0));
        assert!(corridor.get(1).is_none());
    }

    #[test]
    #[should_panic]
    fn segment_out_of_range_panics() {
        let corridor = CorridorModel::build(2, 12.0, &ThemeConfig::sinister(), &pool()).unwrap();
        let _ = corridor.segment(2);
    }

    #[test]
    fn world_elements_apply_segment_origins() {
        let corridor = CorridorModel::build(3, 12.0, &ThemeConfig::sinister(), &pool()).unwrap();
        let floors: Vec<f32> = corridor
            .world_elements()
            .filter(|element| element.role == ElementRole::Floor)
            .map(|element| element.placement.translation.z)
            .collect();
        assert_eq!(floors.len(), 3);
        for (index, z) in floors.into_iter().enumerate() {
            assert!(close(z, -6.0 - 12.0 * index as f32));
        }
    }
}
