//! # Electrical Service
//!
//! Electrical tiers are a flat surcharge on the estimate; they do not scale
//! with load. The load profile estimates how hard the selected addons will
//! push the service, for the informational power gauge.

use serde::{Deserialize, Serialize};

use crate::catalog::Addons;
use crate::errors::{ShedError, ShedResult};
use crate::units::Dollars;

/// Electrical service tier (low / mid / high)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElectricalTier {
    /// 20 A tether
    #[serde(rename = "20A")]
    Amp20,
    /// 30 A tether
    #[serde(rename = "30A")]
    Amp30,
    /// Off-grid package
    #[serde(rename = "offgrid")]
    OffGrid,
}

/// Service rating assumed when no tier (or off-grid) is selected
pub const DEFAULT_SERVICE_AMPS: f64 = 15.0;

impl ElectricalTier {
    pub const ALL: [ElectricalTier; 3] = [ElectricalTier::Amp20, ElectricalTier::Amp30, ElectricalTier::OffGrid];

    /// Flat surcharge for the tier
    pub fn surcharge(&self) -> Dollars {
        Dollars(match self {
            ElectricalTier::Amp20 => 300.0,
            ElectricalTier::Amp30 => 900.0,
            ElectricalTier::OffGrid => 2500.0,
        })
    }

    /// Service rating in amps
    pub fn max_amps(&self) -> f64 {
        match self {
            ElectricalTier::Amp20 => 20.0,
            ElectricalTier::Amp30 => 30.0,
            ElectricalTier::OffGrid => DEFAULT_SERVICE_AMPS,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ElectricalTier::Amp20 => "20A",
            ElectricalTier::Amp30 => "30A",
            ElectricalTier::OffGrid => "offgrid",
        }
    }

    /// Parse from "20A", "30a", "offgrid", "off-grid", or low/mid/high
    pub fn from_str_flexible(s: &str) -> ShedResult<Self> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "20a" | "20" | "low" => Ok(ElectricalTier::Amp20),
            "30a" | "30" | "mid" => Ok(ElectricalTier::Amp30),
            "offgrid" | "high" => Ok(ElectricalTier::OffGrid),
            _ => Err(ShedError::invalid_input("electrical_tier", s, "Expected 20A, 30A or offgrid")),
        }
    }
}

impl std::fmt::Display for ElectricalTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Surcharge for an optional tier; no service costs nothing
pub fn surcharge(tier: Option<ElectricalTier>) -> Dollars {
    tier.map(|t| t.surcharge()).unwrap_or_default()
}

/// Expected steady-state draw against the service rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerLoad {
    pub max_amps: f64,
    /// Estimated draw in amps
    pub load_amps: f64,
    /// `load_amps / max_amps`, clamped to 0.1–0.95 for display
    pub load_factor: f64,
}

/// Estimate the load the selected addons put on the service.
///
/// Idle draw is 2 A; AC adds 8.5 A, the workbench 4 A, and solar offsets 3 A.
pub fn load_profile(tier: Option<ElectricalTier>, addons: &Addons) -> PowerLoad {
    let max_amps = tier.map(|t| t.max_amps()).unwrap_or(DEFAULT_SERVICE_AMPS);

    let mut load_amps = 2.0;
    if addons.ac {
        load_amps += 8.5;
    }
    if addons.workbench {
        load_amps += 4.0;
    }
    if addons.solar {
        load_amps -= 3.0;
    }

    PowerLoad {
        max_amps,
        load_amps,
        load_factor: (load_amps / max_amps).clamp(0.1, 0.95),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Addon;

    #[test]
    fn test_surcharges() {
        assert_eq!(surcharge(None), Dollars(0.0));
        assert_eq!(surcharge(Some(ElectricalTier::Amp20)), Dollars(300.0));
        assert_eq!(surcharge(Some(ElectricalTier::Amp30)), Dollars(900.0));
        assert_eq!(surcharge(Some(ElectricalTier::OffGrid)), Dollars(2500.0));
    }

    #[test]
    fn test_tier_parsing() {
        assert_eq!(ElectricalTier::from_str_flexible("30a").unwrap(), ElectricalTier::Amp30);
        assert_eq!(ElectricalTier::from_str_flexible("off-grid").unwrap(), ElectricalTier::OffGrid);
        assert_eq!(ElectricalTier::from_str_flexible("low").unwrap(), ElectricalTier::Amp20);
        assert!(ElectricalTier::from_str_flexible("100A").is_err());
    }

    #[test]
    fn test_tier_serialization() {
        assert_eq!(serde_json::to_string(&ElectricalTier::OffGrid).unwrap(), "\"offgrid\"");
        let tier: ElectricalTier = serde_json::from_str("\"20A\"").unwrap();
        assert_eq!(tier, ElectricalTier::Amp20);
    }

    #[test]
    fn test_idle_load() {
        let load = load_profile(None, &Addons::default());
        assert_eq!(load.max_amps, 15.0);
        assert_eq!(load.load_amps, 2.0);
    }

    #[test]
    fn test_heavy_load_is_capped() {
        let addons = Addons::default().with(Addon::AirConditioner).with(Addon::Workbench);
        let load = load_profile(Some(ElectricalTier::Amp20), &addons);
        assert_eq!(load.load_amps, 14.5);
        assert!((load.load_factor - 0.725).abs() < 1e-9);

        let load = load_profile(None, &addons);
        assert_eq!(load.load_factor, 0.95);
    }

    #[test]
    fn test_solar_floor() {
        let addons = Addons::default().with(Addon::Solar);
        let load = load_profile(Some(ElectricalTier::Amp30), &addons);
        assert_eq!(load.load_factor, 0.1);
    }
}
