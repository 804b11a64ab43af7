use std::num::NonZeroUsize;

use crate::error::{CorridorError, Result};

// ============================================================================
// Image Pool
// ============================================================================

// Ordered, non-empty set of decorative image identifiers. The layout only ever
// stores indices into the pool; the renderer resolves them to textures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePool<T> {
    images: Vec<T>,
}

impl<T> ImagePool<T> {
    pub fn new(images: Vec<T>) -> Result<Self> {
        if images.is_empty() {
            return Err(CorridorError::EmptyImagePool);
        }
        Ok(Self { images })
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.images.len()).unwrap_or(NonZeroUsize::MIN)
    }

    // Wraps around, so every index resolves
    #[must_use]
    pub fn get(&self, index: usize) -> &T {
        &self.images[index % self.images.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.images.iter()
    }
}

// ============================================================================
// Image Distribution
// ============================================================================

// Pool indices for the four frames of one segment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageAssignment {
    pub left_near: usize,
    pub right_near: usize,
    pub left_far: usize,
    pub right_far: usize,
}

// Consecutive segments walk the pool two images at a time; the far pair is
// shifted by `offset` so it differs from the near pair even in small pools.
#[must_use]
pub fn assign(segment_index: usize, pool_len: NonZeroUsize, offset: usize) -> ImageAssignment {
    let len = pool_len.get();
    let base = (2 * (segment_index % len)) % len;
    let offset = offset % len;
    let at = |shift: usize| (base + shift) % len;

    ImageAssignment {
        left_near: at(0),
        right_near: at(1),
        left_far: at(offset),
        right_far: at(offset + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn first_segment_of_eight_images() {
        let a = assign(0, pool_len(8), 4);
        assert_eq!((a.left_near, a.right_near, a.left_far, a.right_far), (0, 1, 4, 5));
    }

    #[test]
    fn far_pair_wraps_around_the_pool() {
        let a = assign(3, pool_len(8), 4);
        assert_eq!((a.left_near, a.right_near, a.left_far, a.right_far), (6, 7, 2, 3));
    }

    #[test]
    fn indices_stay_in_bounds_for_any_pool() {
        for len in 1..=13 {
            for segment in 0..64 {
                for offset in [4, 5, 6] {
                    let a = assign(segment, pool_len(len), offset);
                    for index in [a.left_near, a.right_near, a.left_far, a.right_far] {
                        assert!(index < len, "segment {segment} len {len} offset {offset} -> {index}");
                    }
                }
            }
        }
    }

    #[test]
    fn huge_segment_indices_do_not_overflow() {
        let a = assign(usize::MAX, pool_len(7), 5);
        assert!(a.right_far < 7);
    }

    #[test]
    fn single_image_pool_uses_it_everywhere() {
        let a = assign(9, pool_len(1), 6);
        assert_eq!((a.left_near, a.right_near, a.left_far, a.right_far), (0, 0, 0, 0));
    }

    #[test]
    fn empty_pool_is_rejected() {
        assert!(matches!(ImagePool::<u8>::new(Vec::new()), Err(CorridorError::EmptyImagePool)));
    }

    #[test]
    fn pool_lookup_wraps() {
        let pool = ImagePool::new(vec!["a", "b", "c"]).unwrap();
        assert_eq!(*pool.get(4), "b");
        assert_eq!(pool.len().get(), 3);
    }
}
