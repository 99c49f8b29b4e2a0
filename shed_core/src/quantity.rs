//! # Quantity Takeoff
//!
//! Integer material counts derived mechanically from the building
//! dimensions. Every count is rounded up, so the takeoff never under-supplies.
//!
//! ## Formulas
//!
//! ```text
//! perimeter   = 2 (w + d)
//! studs       = ⌈perimeter / 1.33⌉ + (35 if perimeter > 40 else 20)   16" o.c. + corners/blocking
//! sheathing   = ⌈(perimeter·h + w·d) / 32⌉                            4x8 sheets
//! roofArea    = w·d·(1 + pitch/12)
//! shingles    = ⌈roofArea / 33⌉                                        bundles
//! trim        = ⌈perimeter + 4h⌉                                       linear ft
//! joists      = ⌈d / 1.33⌉·2 + 4                                       2x6 rim + floor joists
//! dripEdge    = ⌈perimeter / 10⌉                                       10 ft sections
//! feltSquares = ⌈roofArea / 100⌉                                       15 lb felt rolls
//! ```
//!
//! ## Example
//!
//! ```rust
//! use shed_core::quantity::estimate;
//!
//! let q = estimate(10.0, 16.0, 8.0, 6.0).unwrap();
//! assert_eq!(q.studs, 75);
//! assert_eq!(q.sheathing, 18);
//! assert_eq!(q.shingles, 8);
//!
//! assert!(estimate(0.0, 16.0, 8.0, 6.0).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{check_dimension, check_pitch, ShedResult};
use crate::spec::ShedSpec;
use crate::units::{Feet, SqFt};

/// Wall height assumed for every catalog building (ft)
pub const STANDARD_WALL_HEIGHT_FT: f64 = 8.0;

/// Stud spacing, 16" on centre (ft)
const STUD_SPACING_FT: f64 = 1.33;
/// Perimeter above which the larger corner/blocking allowance applies (ft)
const LARGE_PERIMETER_FT: f64 = 40.0;
const CORNER_STUDS_LARGE: u32 = 35;
const CORNER_STUDS_SMALL: u32 = 20;
const SHEET_AREA_SQFT: f64 = 32.0;
const BUNDLE_COVERAGE_SQFT: f64 = 33.0;
const RIM_JOISTS: u32 = 4;
const DRIP_EDGE_SECTION_FT: f64 = 10.0;
const FELT_ROLL_COVERAGE_SQFT: f64 = 100.0;

/// Material lines in the takeoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialItem {
    Studs,
    Sheathing,
    Shingles,
    Trim,
    Joists,
    DripEdge,
    FeltSquares,
}

impl MaterialItem {
    pub const ALL: [MaterialItem; 7] = [
        MaterialItem::Studs,
        MaterialItem::Sheathing,
        MaterialItem::Shingles,
        MaterialItem::Trim,
        MaterialItem::Joists,
        MaterialItem::DripEdge,
        MaterialItem::FeltSquares,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MaterialItem::Studs => "Wall studs",
            MaterialItem::Sheathing => "Sheathing",
            MaterialItem::Shingles => "Shingles",
            MaterialItem::Trim => "Trim",
            MaterialItem::Joists => "Floor joists",
            MaterialItem::DripEdge => "Drip edge",
            MaterialItem::FeltSquares => "Roofing felt",
        }
    }

    /// Counting unit for this line
    pub fn unit(&self) -> &'static str {
        match self {
            MaterialItem::Studs => "2x4",
            MaterialItem::Sheathing => "4x8 sheet",
            MaterialItem::Shingles => "bundle",
            MaterialItem::Trim => "linear ft",
            MaterialItem::Joists => "2x6",
            MaterialItem::DripEdge => "10 ft section",
            MaterialItem::FeltSquares => "roll",
        }
    }
}

impl std::fmt::Display for MaterialItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Intermediate measures the counts are derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeoffMeasures {
    pub perimeter: Feet,
    pub wall_area: SqFt,
    pub floor_area: SqFt,
    /// Floor area inflated by the pitch
    pub roof_area: SqFt,
}

impl TakeoffMeasures {
    pub fn new(width: Feet, depth: Feet, height: Feet, pitch: f64) -> Self {
        let perimeter = (width + depth) * 2.0;
        let floor_area = width * depth;
        TakeoffMeasures {
            perimeter,
            wall_area: perimeter * height,
            floor_area,
            roof_area: floor_area * (1.0 + pitch / 12.0),
        }
    }
}

/// Material counts for one building.
///
/// ## JSON Example
///
/// ```json
/// {
///   "studs": 75,
///   "sheathing": 18,
///   "shingles": 8,
///   "trim": 84,
///   "joists": 30,
///   "drip_edge": 6,
///   "felt_squares": 3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QuantityEstimate {
    pub studs: u32,
    pub sheathing: u32,
    pub shingles: u32,
    pub trim: u32,
    pub joists: u32,
    pub drip_edge: u32,
    pub felt_squares: u32,
}

impl QuantityEstimate {
    /// Count for a single line
    pub fn get(&self, item: MaterialItem) -> u32 {
        match item {
            MaterialItem::Studs => self.studs,
            MaterialItem::Sheathing => self.sheathing,
            MaterialItem::Shingles => self.shingles,
            MaterialItem::Trim => self.trim,
            MaterialItem::Joists => self.joists,
            MaterialItem::DripEdge => self.drip_edge,
            MaterialItem::FeltSquares => self.felt_squares,
        }
    }

    /// All lines with their counts, in takeoff order
    pub fn items(&self) -> impl Iterator<Item = (MaterialItem, u32)> + '_ {
        MaterialItem::ALL.into_iter().map(move |item| (item, self.get(item)))
    }
}

/// Round up to a whole count. Negative values (only reachable with a pitch
/// below -12) count as zero.
fn ceil_count(value: f64) -> u32 {
    value.ceil().max(0.0) as u32
}

/// Estimate material quantities.
///
/// # Arguments
///
/// * `width_ft`, `depth_ft` - footprint, must be positive
/// * `height_ft` - wall height, must be positive
/// * `pitch` - roof rise per 12 of run, any finite value
///
/// # Errors
///
/// * `InvalidDimension` - a non-positive width, depth or height
/// * `InvalidInput` - a non-finite input
pub fn estimate(width_ft: f64, depth_ft: f64, height_ft: f64, pitch: f64) -> ShedResult<QuantityEstimate> {
    check_dimension("width_ft", width_ft)?;
    check_dimension("depth_ft", depth_ft)?;
    check_dimension("height_ft", height_ft)?;
    check_pitch(pitch)?;

    let m = TakeoffMeasures::new(Feet(width_ft), Feet(depth_ft), Feet(height_ft), pitch);
    let perimeter = m.perimeter.value();

    let corner_studs = if perimeter > LARGE_PERIMETER_FT {
        CORNER_STUDS_LARGE
    } else {
        CORNER_STUDS_SMALL
    };

    let quantities = QuantityEstimate {
        studs: ceil_count(perimeter / STUD_SPACING_FT) + corner_studs,
        sheathing: ceil_count((m.wall_area + m.floor_area).value() / SHEET_AREA_SQFT),
        shingles: ceil_count(m.roof_area.value() / BUNDLE_COVERAGE_SQFT),
        trim: ceil_count(perimeter + height_ft * 4.0),
        joists: ceil_count(depth_ft / STUD_SPACING_FT) * 2 + RIM_JOISTS,
        drip_edge: ceil_count(perimeter / DRIP_EDGE_SECTION_FT),
        felt_squares: ceil_count(m.roof_area.value() / FELT_ROLL_COVERAGE_SQFT),
    };

    tracing::debug!(width_ft, depth_ft, height_ft, pitch, ?quantities, "estimated quantities");
    Ok(quantities)
}

/// Estimate quantities for a spec at the standard wall height.
pub fn estimate_for_spec(spec: &ShedSpec) -> ShedResult<QuantityEstimate> {
    estimate(spec.width_ft, spec.depth_ft, STANDARD_WALL_HEIGHT_FT, spec.pitch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ShedError;

    #[test]
    fn test_quaker_10x16() {
        let q = estimate(10.0, 16.0, 8.0, 6.0).unwrap();
        // perimeter = 52, 52/1.33 = 39.1 -> 40 + 35
        assert_eq!(q.studs, 75);
        // (416 + 160) / 32 = 18
        assert_eq!(q.sheathing, 18);
        // 160 * 1.5 = 240 / 33 = 7.3 -> 8
        assert_eq!(q.shingles, 8);
        assert_eq!(q.trim, 84);
        // 16/1.33 = 12.03 -> 13 * 2 + 4
        assert_eq!(q.joists, 30);
        assert_eq!(q.drip_edge, 6);
        assert_eq!(q.felt_squares, 3);
    }

    #[test]
    fn test_small_perimeter_uses_small_allowance() {
        // perimeter = 32
        let q = estimate(8.0, 8.0, 8.0, 4.0).unwrap();
        assert_eq!(q.studs, 25 + 20);
    }

    #[test]
    fn test_perimeter_boundary_is_exclusive() {
        // perimeter exactly 40 still gets the small allowance
        let q = estimate(10.0, 10.0, 8.0, 4.0).unwrap();
        assert_eq!(q.studs, 31 + 20);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            estimate(0.0, 16.0, 8.0, 6.0).unwrap_err(),
            ShedError::invalid_dimension("width_ft", 0.0)
        );
        assert!(estimate(10.0, 16.0, -8.0, 6.0).is_err());
        assert!(estimate(10.0, 16.0, 8.0, f64::NAN).is_err());
    }

    #[test]
    fn test_flat_roof() {
        let q = estimate(10.0, 10.0, 8.0, 0.0).unwrap();
        // roof area = floor area = 100
        assert_eq!(q.shingles, 4);
        assert_eq!(q.felt_squares, 1);
    }

    #[test]
    fn test_items_order() {
        let q = estimate(10.0, 16.0, 8.0, 6.0).unwrap();
        let items: Vec<_> = q.items().collect();
        assert_eq!(items.len(), 7);
        assert_eq!(items[0], (MaterialItem::Studs, 75));
        assert_eq!(items[6], (MaterialItem::FeltSquares, 3));
    }

    #[test]
    fn test_spec_uses_standard_height() {
        let spec = ShedSpec::new(crate::catalog::ShedStyle::Quaker, 10.0, 16.0, 6.0);
        assert_eq!(estimate_for_spec(&spec).unwrap(), estimate(10.0, 16.0, 8.0, 6.0).unwrap());
    }
}
