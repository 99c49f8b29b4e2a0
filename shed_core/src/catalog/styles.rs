//! Building archetypes and their showroom data.
//!
//! Each archetype carries a generic base price, an insulation R-value and a
//! showroom floor area. A short table of exact-size overrides replaces the
//! generic base price for the flagship models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ShedError, ShedResult};
use crate::units::{Dollars, Feet};

/// Supported building archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShedStyle {
    /// Steep A-frame, single centred peak
    AFrame,
    /// Single-slope studio with an offset high wall
    ModernStudio,
    /// Classic symmetric gable
    Gable,
    /// Saltbox roof with an off-centre peak
    Quaker,
    /// Gambrel roof with knuckles and a loft
    LoftedBarn,
    /// Plain utility gable
    Utility,
}

/// Showroom data for one archetype
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleData {
    /// Generic base price used when no size override matches
    pub base_price: Dollars,
    /// Wall insulation R-value
    pub r_value: u32,
    /// Showroom floor area (ft²)
    pub base_area_sqft: f64,
}

impl ShedStyle {
    /// All archetypes, in showroom order
    pub const ALL: [ShedStyle; 6] = [
        ShedStyle::AFrame,
        ShedStyle::ModernStudio,
        ShedStyle::Gable,
        ShedStyle::Quaker,
        ShedStyle::LoftedBarn,
        ShedStyle::Utility,
    ];

    /// Get display name (also the serialized form)
    pub fn display_name(&self) -> &'static str {
        match self {
            ShedStyle::AFrame => "A-Frame",
            ShedStyle::ModernStudio => "Modern Studio",
            ShedStyle::Gable => "Gable",
            ShedStyle::Quaker => "Quaker",
            ShedStyle::LoftedBarn => "Lofted Barn",
            ShedStyle::Utility => "Utility",
        }
    }

    /// Parse from common string representations.
    ///
    /// Case-insensitive; spaces, dashes and underscores are interchangeable.
    /// Anything else is rejected with `UnknownStyle`, never mapped to a default.
    pub fn from_str_flexible(s: &str) -> ShedResult<Self> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();
        match key.as_str() {
            "aframe" => Ok(ShedStyle::AFrame),
            "modernstudio" | "studio" => Ok(ShedStyle::ModernStudio),
            "gable" => Ok(ShedStyle::Gable),
            "quaker" | "saltbox" => Ok(ShedStyle::Quaker),
            "loftedbarn" | "barn" => Ok(ShedStyle::LoftedBarn),
            "utility" => Ok(ShedStyle::Utility),
            _ => Err(ShedError::unknown_style(s)),
        }
    }

    /// Showroom data for this archetype
    pub fn data(&self) -> StyleData {
        let (price, r_value, area) = match self {
            ShedStyle::AFrame => (6531.0, 12, 180.0),
            ShedStyle::ModernStudio => (6200.0, 19, 200.0),
            ShedStyle::Gable => (5100.0, 15, 160.0),
            ShedStyle::Quaker => (7975.0, 16, 160.0),
            ShedStyle::LoftedBarn => (8436.0, 14, 240.0),
            ShedStyle::Utility => (6415.0, 15, 120.0),
        };
        StyleData {
            base_price: Dollars(price),
            r_value,
            base_area_sqft: area,
        }
    }
}

impl std::fmt::Display for ShedStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ShedStyle {
    type Err = ShedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShedStyle::from_str_flexible(s)
    }
}

impl TryFrom<String> for ShedStyle {
    type Error = ShedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ShedStyle::from_str_flexible(&value)
    }
}

impl From<ShedStyle> for String {
    fn from(style: ShedStyle) -> Self {
        style.display_name().to_string()
    }
}

/// A fixed price for one exact (style, width, depth) combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceOverride {
    pub style: ShedStyle,
    pub width_ft: f64,
    pub depth_ft: f64,
    pub price: Dollars,
}

/// Flagship model prices. Matched on exact dimensions only.
pub const PRICE_OVERRIDES: [PriceOverride; 4] = [
    PriceOverride { style: ShedStyle::LoftedBarn, width_ft: 12.0, depth_ft: 28.0, price: Dollars(14950.0) },
    PriceOverride { style: ShedStyle::Utility, width_ft: 10.0, depth_ft: 20.0, price: Dollars(9185.0) },
    PriceOverride { style: ShedStyle::Quaker, width_ft: 10.0, depth_ft: 16.0, price: Dollars(7975.0) },
    PriceOverride { style: ShedStyle::AFrame, width_ft: 10.0, depth_ft: 18.0, price: Dollars(6531.0) },
];

/// Base price for a building: a size override when one matches, else the
/// archetype's generic price.
///
/// ```rust
/// use shed_core::catalog::{base_price, ShedStyle};
/// use shed_core::units::{Dollars, Feet};
///
/// assert_eq!(base_price(ShedStyle::LoftedBarn, Feet(12.0), Feet(28.0)), Dollars(14950.0));
/// assert_eq!(base_price(ShedStyle::LoftedBarn, Feet(12.0), Feet(24.0)), Dollars(8436.0));
/// ```
pub fn base_price(style: ShedStyle, width: Feet, depth: Feet) -> Dollars {
    PRICE_OVERRIDES
        .iter()
        .find(|o| o.style == style && o.width_ft == width.0 && o.depth_ft == depth.0)
        .map(|o| o.price)
        .unwrap_or_else(|| style.data().base_price)
}
