//! # Projection Model
//!
//! Turns front-facing 2D outlines into faces that suggest depth. The only
//! implementation today is [`DepthOffsetProjection`], a 2.5D trick that
//! slides every back edge along a fixed diagonal. Builders only talk to the
//! [`ProjectionModel`] trait, so a real projection matrix can replace it
//! without touching them.

use serde::Serialize;

use super::Point;
use crate::units::Pixels;

/// Strategy for mapping a front-plane point to its back-plane counterpart.
pub trait ProjectionModel {
    /// Back-plane position of a front-plane point
    fn project(&self, p: Point) -> Point;

    /// Extrude an open front polyline into a closed face.
    ///
    /// The face walks the front points in order, then returns along their
    /// projections in reverse: `[a, b] -> [a, b, b', a']`.
    fn extrude(&self, front: &[Point]) -> Vec<Point> {
        front
            .iter()
            .copied()
            .chain(front.iter().rev().map(|p| self.project(*p)))
            .collect()
    }
}

/// Fixed-vector depth offset: `p' = p + (offset, -offset)`
/// with `offset = depth * 0.4`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthOffsetProjection {
    offset: f64,
}

impl DepthOffsetProjection {
    /// Share of the building depth used as the diagonal offset length
    pub const DEPTH_FACTOR: f64 = 0.4;

    /// Projection for a building of the given drawn depth
    pub fn for_depth(depth: Pixels) -> Self {
        DepthOffsetProjection {
            offset: depth.0 * Self::DEPTH_FACTOR,
        }
    }

    /// Offset length along each axis
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The translation applied to every back point (up and to the right)
    pub fn offset_vector(&self) -> Point {
        Point::new(self.offset, -self.offset)
    }
}

impl ProjectionModel for DepthOffsetProjection {
    fn project(&self, p: Point) -> Point {
        p + self.offset_vector()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_from_depth() {
        // 16 ft deep = 240 px, offset = 96 px
        let proj = DepthOffsetProjection::for_depth(Pixels(240.0));
        assert_eq!(proj.offset(), 96.0);
        assert_eq!(proj.project(Point::new(10.0, 0.0)), Point::new(106.0, -96.0));
    }

    #[test]
    fn test_extrude_edge() {
        let proj = DepthOffsetProjection::for_depth(Pixels(100.0));
        let face = proj.extrude(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert_eq!(
            face,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(50.0, -40.0),
                Point::new(40.0, -40.0),
            ]
        );
    }

    #[test]
    fn test_zero_depth_is_flat() {
        let proj = DepthOffsetProjection::for_depth(Pixels(0.0));
        let p = Point::new(3.0, -4.0);
        assert_eq!(proj.project(p), p);
    }
}
