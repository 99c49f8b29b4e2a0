//! Optional upgrades that can be bolted onto any building.

use serde::{Deserialize, Serialize};

use crate::errors::{ShedError, ShedResult};
use crate::units::Dollars;

/// A purchasable upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Addon {
    #[serde(rename = "ramp")]
    Ramp,
    #[serde(rename = "power_20a")]
    Power20A,
    #[serde(rename = "power_30a")]
    Power30A,
    #[serde(rename = "power_50a")]
    Power50A,
    #[serde(rename = "ac")]
    AirConditioner,
    #[serde(rename = "solar")]
    Solar,
    #[serde(rename = "loft")]
    Loft,
    #[serde(rename = "workbench")]
    Workbench,
    #[serde(rename = "shedLoo")]
    ShedLoo,
    #[serde(rename = "shedcare")]
    ShedCare,
}

impl Addon {
    /// All upgrades, in catalog order
    pub const ALL: [Addon; 10] = [
        Addon::Ramp,
        Addon::Power20A,
        Addon::Power30A,
        Addon::Power50A,
        Addon::AirConditioner,
        Addon::Solar,
        Addon::Loft,
        Addon::Workbench,
        Addon::ShedLoo,
        Addon::ShedCare,
    ];

    /// Catalog id (matches the serialized form)
    pub fn id(&self) -> &'static str {
        match self {
            Addon::Ramp => "ramp",
            Addon::Power20A => "power_20a",
            Addon::Power30A => "power_30a",
            Addon::Power50A => "power_50a",
            Addon::AirConditioner => "ac",
            Addon::Solar => "solar",
            Addon::Loft => "loft",
            Addon::Workbench => "workbench",
            Addon::ShedLoo => "shedLoo",
            Addon::ShedCare => "shedcare",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Addon::Ramp => "Aluminium Ramp",
            Addon::Power20A => "20A Creator Kit",
            Addon::Power30A => "30A Comfort Kit",
            Addon::Power50A => "50A Pro Service",
            Addon::AirConditioner => "Climate Control (AC)",
            Addon::Solar => "Solar Array",
            Addon::Loft => "Lofted Storage",
            Addon::Workbench => "Smart Workbench",
            Addon::ShedLoo => "The Shed Loo",
            Addon::ShedCare => "ShedCare (Year 1)",
        }
    }

    /// Flat installed cost
    pub fn cost(&self) -> Dollars {
        Dollars(match self {
            Addon::Ramp => 450.0,
            Addon::Power20A => 1200.0,
            Addon::Power30A => 1850.0,
            Addon::Power50A => 3500.0,
            Addon::AirConditioner => 1450.0,
            Addon::Solar => 2200.0,
            Addon::Loft => 600.0,
            Addon::Workbench => 350.0,
            Addon::ShedLoo => 850.0,
            Addon::ShedCare => 299.0,
        })
    }

    /// Parse a catalog id, case-insensitively
    pub fn from_id(id: &str) -> ShedResult<Self> {
        let wanted = id.trim();
        Addon::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ShedError::invalid_input("addon", id, "Unknown addon id"))
    }

    /// Whether this addon is one of the power kits
    pub fn is_power_kit(&self) -> bool {
        matches!(self, Addon::Power20A | Addon::Power30A | Addon::Power50A)
    }
}

impl std::fmt::Display for Addon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The set of named addon flags on a design.
///
/// Missing keys deserialize as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Addons {
    pub ramp: bool,
    pub solar: bool,
    pub ac: bool,
    pub loft: bool,
    pub workbench: bool,
    #[serde(rename = "shedLoo")]
    pub shed_loo: bool,
    pub power_20a: bool,
    pub power_30a: bool,
    pub power_50a: bool,
    pub shedcare: bool,
}

impl Addons {
    /// Whether a given addon is switched on
    pub fn is_active(&self, addon: Addon) -> bool {
        match addon {
            Addon::Ramp => self.ramp,
            Addon::Power20A => self.power_20a,
            Addon::Power30A => self.power_30a,
            Addon::Power50A => self.power_50a,
            Addon::AirConditioner => self.ac,
            Addon::Solar => self.solar,
            Addon::Loft => self.loft,
            Addon::Workbench => self.workbench,
            Addon::ShedLoo => self.shed_loo,
            Addon::ShedCare => self.shedcare,
        }
    }

    /// Switch an addon on or off
    pub fn set(&mut self, addon: Addon, on: bool) {
        let flag = match addon {
            Addon::Ramp => &mut self.ramp,
            Addon::Power20A => &mut self.power_20a,
            Addon::Power30A => &mut self.power_30a,
            Addon::Power50A => &mut self.power_50a,
            Addon::AirConditioner => &mut self.ac,
            Addon::Solar => &mut self.solar,
            Addon::Loft => &mut self.loft,
            Addon::Workbench => &mut self.workbench,
            Addon::ShedLoo => &mut self.shed_loo,
            Addon::ShedCare => &mut self.shedcare,
        };
        *flag = on;
    }

    /// Builder-style enable
    pub fn with(mut self, addon: Addon) -> Self {
        self.set(addon, true);
        self
    }

    /// Active addons in catalog order
    pub fn active(&self) -> impl Iterator<Item = Addon> + '_ {
        Addon::ALL.into_iter().filter(move |a| self.is_active(*a))
    }

    /// Total cost of the active addons
    pub fn total_cost(&self) -> Dollars {
        self.active().map(|a| a.cost()).sum()
    }

    /// Any power kit selected
    pub fn has_power_kit(&self) -> bool {
        self.active().any(|a| a.is_power_kit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_addons_cost_nothing() {
        assert_eq!(Addons::default().total_cost(), Dollars(0.0));
        assert!(!Addons::default().has_power_kit());
    }

    #[test]
    fn test_total_cost() {
        let addons = Addons::default().with(Addon::Ramp).with(Addon::Solar);
        assert_eq!(addons.total_cost(), Dollars(2650.0));
        assert_eq!(addons.active().collect::<Vec<_>>(), vec![Addon::Ramp, Addon::Solar]);
    }

    #[test]
    fn test_from_id() {
        assert_eq!(Addon::from_id("shedloo").unwrap(), Addon::ShedLoo);
        assert_eq!(Addon::from_id("POWER_30A").unwrap(), Addon::Power30A);
        assert!(Addon::from_id("hot-tub").is_err());
    }

    #[test]
    fn test_power_kit_detection() {
        assert!(Addons::default().with(Addon::Power50A).has_power_kit());
    }

    #[test]
    fn test_partial_json() {
        let addons: Addons = serde_json::from_str(r#"{"ramp": true, "shedLoo": true}"#).unwrap();
        assert!(addons.ramp);
        assert!(addons.shed_loo);
        assert!(!addons.solar);
    }
}
