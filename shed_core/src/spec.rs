//! # Shed Specification
//!
//! [`ShedSpec`] is the single input shared by both computation paths: the
//! geometry/scene path and the quantity/cost path. It is a plain value; any
//! change to it means a full recomputation, there is no incremental state.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "style": "Quaker",
//!   "width_ft": 10.0,
//!   "depth_ft": 16.0,
//!   "pitch": 6.0,
//!   "siding": "lap",
//!   "door": "double",
//!   "wall_color": "#991b1b",
//!   "trim_color": "#f8fafc",
//!   "addons": { "ramp": true },
//!   "electrical_tier": "30A",
//!   "terrain": "gravel",
//!   "time": 35.0,
//!   "view_mode": "exterior",
//!   "render_mode": "3D",
//!   "landscape": [{ "id": "tree-1", "x": -140.0, "y": -20.0, "scale": 1.5 }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Addons, ShedStyle};
use crate::electrical::ElectricalTier;
use crate::errors::{check_dimension, check_pitch, ShedError, ShedResult};
use crate::units::Feet;

/// Wall cladding profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidingType {
    /// Horizontal lap siding
    #[default]
    Lap,
    /// Board and batten
    Board,
}

impl SidingType {
    /// Pattern id used as the wall fill in 3D mode
    pub fn pattern_id(&self) -> &'static str {
        match self {
            SidingType::Lap => "lapSiding",
            SidingType::Board => "boardSiding",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SidingType::Lap => "Horizontal Lap",
            SidingType::Board => "Board & Batten",
        }
    }
}

/// Front door option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorType {
    #[default]
    Single,
    Double,
    French,
}

impl DoorType {
    /// Horizontal anchor of the door (and anything hung off it, like the ramp)
    pub fn anchor_x(&self) -> f64 {
        match self {
            DoorType::Double => -35.0,
            DoorType::Single | DoorType::French => -20.0,
        }
    }

    /// Outline sub-paths of the door leaf/leaves, in door-local coordinates
    pub fn outline_paths(&self) -> &'static [&'static str] {
        match self {
            DoorType::Single => &["M0 0 L40 0 L40 80 L0 80 Z", "M5 5 L35 5 L35 75 L5 75 Z"],
            DoorType::Double | DoorType::French => {
                &["M0 0 L35 0 L35 80 L0 80 Z", "M40 0 L75 0 L75 80 L40 80 Z"]
            }
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DoorType::Single => "Single Door",
            DoorType::Double => "Double Barn",
            DoorType::French => "French Doors",
        }
    }
}

/// Ground surface the building sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    Grass,
    Gravel,
    Concrete,
}

impl Terrain {
    /// Ground fill colour
    pub fn color(&self) -> &'static str {
        match self {
            Terrain::Grass => "#14532d",
            Terrain::Gravel => "#4b5563",
            Terrain::Concrete => "#94a3b8",
        }
    }
}

/// Camera position relative to the building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Exterior,
    /// Roof lifted away, floor plane revealed
    Interior,
}

/// Rendering style of the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Shaded, textured geometry with addon overlays
    #[default]
    #[serde(rename = "3D", alias = "3d")]
    Shaded,
    /// Dashed outlines with dimension annotations
    #[serde(rename = "blueprint", alias = "BLUEPRINT")]
    Blueprint,
}

/// One landscape prop placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandscapeProp {
    /// Asset id from the landscape catalog (e.g. "tree-1")
    pub id: String,
    pub x: f64,
    /// Depth key for the painter's sort; the building sits at y = 0
    pub y: f64,
    pub scale: f64,
}

impl LandscapeProp {
    pub fn new(id: impl Into<String>, x: f64, y: f64, scale: f64) -> Self {
        LandscapeProp {
            id: id.into(),
            x,
            y,
            scale,
        }
    }
}

/// Full design input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShedSpec {
    /// Building archetype
    pub style: ShedStyle,

    /// Gable-end width in feet
    pub width_ft: f64,

    /// Side length in feet
    pub depth_ft: f64,

    /// Roof slope as rise per 12 of run. Not clamped.
    pub pitch: f64,

    #[serde(default)]
    pub siding: SidingType,

    #[serde(default)]
    pub door: DoorType,

    #[serde(default = "default_wall_color")]
    pub wall_color: String,

    #[serde(default = "default_trim_color")]
    pub trim_color: String,

    #[serde(default)]
    pub addons: Addons,

    /// Electrical service tier, `None` for no service
    #[serde(default)]
    pub electrical_tier: Option<ElectricalTier>,

    #[serde(default)]
    pub terrain: Terrain,

    /// Time of day, 0 (dawn) to 100 (dusk), noon at 50
    #[serde(default = "default_time")]
    pub time: f64,

    #[serde(default)]
    pub view_mode: ViewMode,

    #[serde(default)]
    pub render_mode: RenderMode,

    /// Landscape props, in placement order
    #[serde(default)]
    pub landscape: Vec<LandscapeProp>,
}

fn default_wall_color() -> String {
    "#f8fafc".to_string()
}

fn default_trim_color() -> String {
    "#334155".to_string()
}

fn default_time() -> f64 {
    50.0
}

impl Default for ShedSpec {
    fn default() -> Self {
        ShedSpec::new(ShedStyle::ModernStudio, 10.0, 12.0, 6.0)
    }
}

impl ShedSpec {
    /// Create a spec with the given shape and default finishes.
    ///
    /// ```rust
    /// use shed_core::catalog::ShedStyle;
    /// use shed_core::spec::ShedSpec;
    ///
    /// let spec = ShedSpec::new(ShedStyle::Quaker, 10.0, 16.0, 6.0);
    /// assert_eq!(spec.time, 50.0);
    /// assert!(spec.validate().is_ok());
    /// ```
    pub fn new(style: ShedStyle, width_ft: f64, depth_ft: f64, pitch: f64) -> Self {
        ShedSpec {
            style,
            width_ft,
            depth_ft,
            pitch,
            siding: SidingType::default(),
            door: DoorType::default(),
            wall_color: default_wall_color(),
            trim_color: default_trim_color(),
            addons: Addons::default(),
            electrical_tier: None,
            terrain: Terrain::default(),
            time: default_time(),
            view_mode: ViewMode::default(),
            render_mode: RenderMode::default(),
            landscape: Vec::new(),
        }
    }

    /// Parse a spec from JSON
    pub fn from_json(json: &str) -> ShedResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate input parameters.
    ///
    /// Runs before any geometry or quantity computation.
    pub fn validate(&self) -> ShedResult<()> {
        check_dimension("width_ft", self.width_ft)?;
        check_dimension("depth_ft", self.depth_ft)?;
        check_pitch(self.pitch)?;
        if !self.time.is_finite() {
            return Err(ShedError::invalid_input(
                "time",
                self.time.to_string(),
                "Time must be a finite number",
            ));
        }
        for prop in &self.landscape {
            if !(prop.x.is_finite() && prop.y.is_finite() && prop.scale.is_finite()) {
                return Err(ShedError::invalid_input(
                    "landscape",
                    prop.id.clone(),
                    "Prop position and scale must be finite",
                ));
            }
        }
        Ok(())
    }

    pub fn width(&self) -> Feet {
        Feet(self.width_ft)
    }

    pub fn depth(&self) -> Feet {
        Feet(self.depth_ft)
    }
}
