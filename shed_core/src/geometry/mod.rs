//! # Geometry Generator
//!
//! Turns (style, width, depth, pitch) into the named vector path fragments a
//! 2D drawing surface needs: `walls`, `walls3D`, `roof`, `sideRoof`, `gable`
//! and `floor`. Every fragment is a closed polygon of straight segments.
//!
//! ## Coordinate System
//!
//! Drawing space uses 15 px per foot. The ground line is `y = 0` with `y`
//! growing downward, the walls are centred on `x = 0` and the wall top sits
//! at `y = -120`. Roof height is `width_px * pitch / 24`, scaled per
//! archetype. Pitch is used as given, with no clamping.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::catalog::ShedStyle;
//! use shed_core::geometry::generate;
//!
//! let geo = generate(ShedStyle::Gable, 10.0, 12.0, 6.0).unwrap();
//! assert_eq!(geo.roof.path(), "M-80 -120 L80 -120 L0 -157.5 Z");
//! assert_eq!(geo, generate(ShedStyle::Gable, 10.0, 12.0, 6.0).unwrap());
//! ```

pub mod projection;
pub mod roofs;

use std::collections::HashMap;
use std::fmt::Write as _;
use std::ops::Add;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

use crate::catalog::ShedStyle;
use crate::errors::{check_dimension, check_pitch, ShedError, ShedResult};
use crate::units::{Feet, Pixels};

pub use projection::{DepthOffsetProjection, ProjectionModel};
pub use roofs::{RoofBuilder, RoofFaces};

/// Wall top height in drawing space (px above the ground line)
pub const WALL_HEIGHT_PX: f64 = 120.0;

/// A point in drawing space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A closed polygon of straight segments.
///
/// Serializes as its path string (`"M x y L x y ... Z"`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon(Vec<Point>);

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Polygon(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Render as a vector path string.
    ///
    /// Coordinates are rounded to 1/1000 px so float noise never leaks into
    /// the output; identical inputs always give identical strings.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.0.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            let _ = write!(out, "{cmd}{} {}", fmt_coord(p.x), fmt_coord(p.y));
        }
        if !self.0.is_empty() {
            out.push_str(" Z");
        }
        out
    }
}

impl Serialize for Polygon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

fn fmt_coord(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}

/// Bounding frame of the walls plus the derived roof and depth measures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallFrame {
    /// Drawn width (px)
    pub width_px: f64,
    /// Drawn depth (px)
    pub depth_px: f64,
    /// Left wall x (negative half-width)
    pub left: f64,
    /// Right wall x (half-width)
    pub right: f64,
    /// Wall top y
    pub top: f64,
    /// Base roof rise before archetype scaling: `width_px * pitch / 24`
    pub roof_height: f64,
}

impl WallFrame {
    pub fn new(width: Feet, depth: Feet, pitch: f64) -> Self {
        let width_px = Pixels::from(width).0;
        let depth_px = Pixels::from(depth).0;
        WallFrame {
            width_px,
            depth_px,
            left: -width_px / 2.0,
            right: width_px / 2.0,
            top: -WALL_HEIGHT_PX,
            roof_height: width_px * (pitch / 24.0),
        }
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, 0.0)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, 0.0)
    }
}

/// Named path fragments for one building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryDescriptor {
    pub style: ShedStyle,
    /// Wall frame the fragments were built on (anchors for overlays)
    pub frame: WallFrame,
    /// Diagonal depth offset used for every extruded face (px)
    pub depth_offset: f64,
    /// Front wall rectangle
    pub walls: Polygon,
    /// Receding right-hand wall
    #[serde(rename = "walls3D")]
    pub walls_3d: Polygon,
    pub roof: Polygon,
    /// Receding roof face; `None` for single-slope roofs
    #[serde(rename = "sideRoof")]
    pub side_roof: Option<Polygon>,
    pub gable: Polygon,
    /// Floor parallelogram
    pub floor: Polygon,
}

/// Style → roof builder dispatch table.
///
/// New archetypes register a builder here; existing builders are untouched.
static ROOF_BUILDERS: Lazy<HashMap<ShedStyle, RoofBuilder>> = Lazy::new(|| {
    let mut builders: HashMap<ShedStyle, RoofBuilder> = HashMap::new();
    builders.insert(ShedStyle::Gable, roofs::gable);
    builders.insert(ShedStyle::Utility, roofs::gable);
    builders.insert(ShedStyle::AFrame, roofs::gable);
    builders.insert(ShedStyle::ModernStudio, roofs::single_slope);
    builders.insert(ShedStyle::Quaker, roofs::saltbox);
    builders.insert(ShedStyle::LoftedBarn, roofs::gambrel);
    builders
});

/// Generate geometry with the standard depth-offset projection.
///
/// # Errors
///
/// * `InvalidDimension` - width or depth is zero or negative
/// * `UnknownStyle` - no roof builder is registered for the style
/// * `InvalidInput` - a non-finite width, depth or pitch
pub fn generate(style: ShedStyle, width_ft: f64, depth_ft: f64, pitch: f64) -> ShedResult<GeometryDescriptor> {
    check_dimension("width_ft", width_ft)?;
    check_dimension("depth_ft", depth_ft)?;
    let projection = DepthOffsetProjection::for_depth(Pixels::from(Feet(depth_ft)));
    generate_with(style, width_ft, depth_ft, pitch, &projection)
}

/// Generate geometry for a style given by name.
///
/// Unrecognized names fail with `UnknownStyle`; there is no fallback archetype.
///
/// ```rust
/// use shed_core::geometry::generate_named;
///
/// let err = generate_named("Nomad Mobile", 8.0, 20.0, 4.0).unwrap_err();
/// assert_eq!(err.error_code(), "UNKNOWN_STYLE");
///
/// let err = generate_named("Quaker", 0.0, 16.0, 6.0).unwrap_err();
/// assert_eq!(err.error_code(), "INVALID_DIMENSION");
/// ```
pub fn generate_named(style: &str, width_ft: f64, depth_ft: f64, pitch: f64) -> ShedResult<GeometryDescriptor> {
    let style = ShedStyle::from_str_flexible(style)?;
    generate(style, width_ft, depth_ft, pitch)
}

/// Generate geometry using a caller-supplied projection strategy.
pub fn generate_with(
    style: ShedStyle,
    width_ft: f64,
    depth_ft: f64,
    pitch: f64,
    projection: &dyn ProjectionModel,
) -> ShedResult<GeometryDescriptor> {
    check_dimension("width_ft", width_ft)?;
    check_dimension("depth_ft", depth_ft)?;
    check_pitch(pitch)?;

    let builder = ROOF_BUILDERS
        .get(&style)
        .ok_or_else(|| ShedError::unknown_style(style.display_name()))?;

    let frame = WallFrame::new(Feet(width_ft), Feet(depth_ft), pitch);
    let faces = builder(&frame, projection);

    let walls = Polygon::new(vec![
        frame.bottom_right(),
        frame.top_right(),
        frame.top_left(),
        frame.bottom_left(),
    ]);
    let walls_3d = Polygon::new(projection.extrude(&[frame.bottom_right(), frame.top_right()]));
    let floor = Polygon::new(projection.extrude(&[frame.bottom_left(), frame.bottom_right()]));
    let depth_offset = projection.project(Point::default()).x;

    tracing::debug!(%style, width_ft, depth_ft, pitch, "generated geometry");

    Ok(GeometryDescriptor {
        style,
        frame,
        depth_offset,
        walls,
        walls_3d,
        roof: faces.roof,
        side_roof: faces.side_roof,
        gable: faces.gable,
        floor,
    })
}
