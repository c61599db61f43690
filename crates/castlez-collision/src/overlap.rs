//! Pairwise overlap tests between two boxes.
//!
//! The resolvers only see [`OverlapTest`], so an exact interval test can
//! replace corner sampling without touching them.

use castlez_core::types::Vec2;

use crate::rect::Rect;

/// Decides whether a moving box hits another box.
pub trait OverlapTest {
    /// `mover` is the box of the entity asking; `other` the candidate collider.
    /// Implementations need not be symmetric.
    fn overlaps(&self, mover: &Rect, other: &Rect) -> bool;
}

/// Cheap approximate test: four points of the mover's box against the other box.
///
/// Thin or small obstacles can slip between the samples. Known limitation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerSampling;

impl CornerSampling {
    /// Points probed for a box at `origin` with `size`.
    pub fn samples(origin: Vec2, size: Vec2) -> [Vec2; 4] {
        [
            origin + Vec2::new(0.0, 1.0),
            origin + size,
            origin + Vec2::new(size.x, 1.0),
            origin + Vec2::new(0.0, size.y),
        ]
    }
}

impl OverlapTest for CornerSampling {
    fn overlaps(&self, mover: &Rect, other: &Rect) -> bool {
        Self::samples(mover.start, mover.size())
            .into_iter()
            .any(|point| other.contains(point))
    }
}
