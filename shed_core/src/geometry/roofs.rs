//! Per-archetype roof builders.
//!
//! Each builder receives the wall frame and the projection strategy and
//! returns the roof faces for one roof topology. Builders emit front-face
//! outlines only; every extruded face goes through the projection.

use super::projection::ProjectionModel;
use super::{Point, Polygon, WallFrame};

/// Roof faces produced by one builder
#[derive(Debug, Clone, PartialEq)]
pub struct RoofFaces {
    /// Main roof plane(s) as seen from the front
    pub roof: Polygon,
    /// Receding roof face, absent for single-slope roofs
    pub side_roof: Option<Polygon>,
    /// Front gable infill between wall top and roof line
    pub gable: Polygon,
}

/// Signature shared by every roof builder
pub type RoofBuilder = fn(&WallFrame, &dyn ProjectionModel) -> RoofFaces;

/// Eave overhang for gable and gambrel roofs (px)
const EAVE_OVERHANG: f64 = 5.0;
/// Overhang of the single-slope studio roof (px)
const STUDIO_OVERHANG: f64 = 10.0;
/// Overhang of the saltbox roof (px)
const SALTBOX_OVERHANG: f64 = 15.0;
/// Rear eave lift and front eave drop of the saltbox roof (px)
const SALTBOX_REAR_LIFT: f64 = 5.0;
const SALTBOX_FRONT_DROP: f64 = 15.0;

/// Gable, Utility and A-Frame: one centred peak at `roof_height`.
pub fn gable(frame: &WallFrame, proj: &dyn ProjectionModel) -> RoofFaces {
    let peak = Point::new(0.0, frame.top - frame.roof_height);
    let eave_l = Point::new(frame.left - EAVE_OVERHANG, frame.top);
    let eave_r = Point::new(frame.right + EAVE_OVERHANG, frame.top);

    RoofFaces {
        roof: Polygon::new(vec![eave_l, eave_r, peak]),
        side_roof: Some(Polygon::new(proj.extrude(&[peak, eave_r]))),
        gable: Polygon::new(vec![frame.top_left(), peak, frame.top_right()]),
    }
}

/// Modern Studio: single slope rising to an offset peak over the right wall.
pub fn single_slope(frame: &WallFrame, proj: &dyn ProjectionModel) -> RoofFaces {
    let peak_y = frame.top - frame.roof_height * 1.2;
    let low = Point::new(frame.left - STUDIO_OVERHANG, frame.top);
    let high = Point::new(frame.right + STUDIO_OVERHANG, peak_y);

    RoofFaces {
        roof: Polygon::new(proj.extrude(&[low, high])),
        side_roof: None,
        gable: Polygon::new(vec![
            frame.top_left(),
            Point::new(frame.right, peak_y),
            frame.top_right(),
        ]),
    }
}

/// Quaker: saltbox peak at 70% of the width, long rear slope and a short
/// steep front slope ending below the wall top.
pub fn saltbox(frame: &WallFrame, proj: &dyn ProjectionModel) -> RoofFaces {
    let peak = Point::new(
        frame.left + frame.width_px * 0.7,
        frame.top - frame.roof_height * 1.6,
    );
    let rear_eave = Point::new(frame.left - SALTBOX_OVERHANG, frame.top - SALTBOX_REAR_LIFT);
    let front_eave = Point::new(frame.right + SALTBOX_OVERHANG, frame.top + SALTBOX_FRONT_DROP);

    RoofFaces {
        roof: Polygon::new(proj.extrude(&[rear_eave, peak, front_eave])),
        side_roof: Some(Polygon::new(proj.extrude(&[peak, front_eave]))),
        gable: Polygon::new(vec![frame.top_left(), peak, frame.top_right()]),
    }
}

/// Lofted Barn: gambrel with two knuckles breaking up to a high centre peak.
pub fn gambrel(frame: &WallFrame, proj: &dyn ProjectionModel) -> RoofFaces {
    let knuckle_x = frame.width_px * 0.38;
    let knuckle_y = frame.top - frame.roof_height * 0.7;
    let peak = Point::new(0.0, frame.top - frame.roof_height * 1.5);
    let knuckle_l = Point::new(-knuckle_x, knuckle_y);
    let knuckle_r = Point::new(knuckle_x, knuckle_y);
    let eave_r = Point::new(frame.right + EAVE_OVERHANG, frame.top);

    RoofFaces {
        roof: Polygon::new(vec![
            Point::new(frame.left - EAVE_OVERHANG, frame.top),
            knuckle_l,
            peak,
            knuckle_r,
            eave_r,
        ]),
        side_roof: Some(Polygon::new(proj.extrude(&[peak, knuckle_r, eave_r]))),
        gable: Polygon::new(vec![
            frame.top_left(),
            knuckle_l,
            peak,
            knuckle_r,
            frame.top_right(),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::projection::DepthOffsetProjection;
    use crate::units::{Feet, Pixels};

    fn assert_near(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    fn frame(pitch: f64) -> (WallFrame, DepthOffsetProjection) {
        let frame = WallFrame::new(Feet(10.0), Feet(16.0), pitch);
        let proj = DepthOffsetProjection::for_depth(Pixels(frame.depth_px));
        (frame, proj)
    }

    #[test]
    fn test_gable_peak_is_centred() {
        let (f, p) = frame(6.0);
        let faces = gable(&f, &p);
        // roof_height = 150 * 6/24 = 37.5
        assert_near(faces.roof.points()[2], Point::new(0.0, -157.5));
        assert!(faces.side_roof.is_some());
    }

    #[test]
    fn test_single_slope_has_no_side_roof() {
        let (f, p) = frame(6.0);
        let faces = single_slope(&f, &p);
        assert!(faces.side_roof.is_none());
        assert_near(faces.gable.points()[1], Point::new(75.0, -165.0));
    }

    #[test]
    fn test_saltbox_is_asymmetric() {
        let (f, p) = frame(6.0);
        let faces = saltbox(&f, &p);
        let peak = faces.gable.points()[1];
        assert_near(peak, Point::new(30.0, -180.0));
        // front slope drops further over a shorter run than the rear slope
        let rear = faces.roof.points()[0];
        let front = faces.roof.points()[2];
        let rear_slope = (rear.y - peak.y) / (peak.x - rear.x);
        let front_slope = (front.y - peak.y) / (front.x - peak.x);
        assert!(front_slope > rear_slope);
    }

    #[test]
    fn test_gambrel_knuckles_below_peak() {
        let (f, p) = frame(6.0);
        let faces = gambrel(&f, &p);
        let pts = faces.gable.points();
        assert_near(pts[2], Point::new(0.0, -176.25));
        assert!(pts[1].y > pts[2].y);
        assert_eq!(pts[1].y, pts[3].y);
        assert_eq!(pts[1].x, -pts[3].x);
    }
}
