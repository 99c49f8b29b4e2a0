//! # Cost Assembler
//!
//! Prices a quantity takeoff against a spec.
//!
//! ```text
//! material = Σ(quantity × unit price) + Σ(addon cost) + basePrice(style, w, d) + electrical surcharge
//! labor    = 0.40 × material
//! total    = material + labor
//! ```
//!
//! The base price always enters the material sum unchanged and every other
//! term is non-negative, so `material >= basePrice` holds for any addon and
//! tier combination.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::catalog::ShedStyle;
//! use shed_core::cost::estimate_cost;
//! use shed_core::spec::ShedSpec;
//! use shed_core::units::Dollars;
//!
//! let spec = ShedSpec::new(ShedStyle::Quaker, 10.0, 16.0, 6.0);
//! let cost = estimate_cost(&spec).unwrap();
//! assert!(cost.material >= Dollars(7975.0));
//! assert!((cost.total.value() - (cost.material + cost.labor).value()).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{base_price, Addon};
use crate::electrical;
use crate::errors::ShedResult;
use crate::quantity::{self, MaterialItem, QuantityEstimate};
use crate::spec::ShedSpec;
use crate::units::Dollars;

/// Labor as a fraction of material cost
pub const LABOR_RATE: f64 = 0.40;

/// Supplier price per counting unit of each material line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPrices {
    pub stud: Dollars,
    pub sheathing: Dollars,
    pub shingle_bundle: Dollars,
    pub trim: Dollars,
    pub joist: Dollars,
    pub drip_edge: Dollars,
    pub felt: Dollars,
}

impl Default for UnitPrices {
    fn default() -> Self {
        UnitPrices {
            stud: Dollars(5.25),
            sheathing: Dollars(32.0),
            shingle_bundle: Dollars(45.0),
            trim: Dollars(2.50),
            joist: Dollars(12.0),
            drip_edge: Dollars(15.0),
            felt: Dollars(25.0),
        }
    }
}

impl UnitPrices {
    pub fn price_of(&self, item: MaterialItem) -> Dollars {
        match item {
            MaterialItem::Studs => self.stud,
            MaterialItem::Sheathing => self.sheathing,
            MaterialItem::Shingles => self.shingle_bundle,
            MaterialItem::Trim => self.trim,
            MaterialItem::Joists => self.joist,
            MaterialItem::DripEdge => self.drip_edge,
            MaterialItem::FeltSquares => self.felt,
        }
    }
}

/// The three headline figures
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostEstimate {
    pub material: Dollars,
    pub labor: Dollars,
    pub total: Dollars,
}

/// One priced material line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineItem {
    pub item: MaterialItem,
    pub quantity: u32,
    pub unit_price: Dollars,
    pub cost: Dollars,
}

/// One priced addon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AddonLine {
    pub addon: Addon,
    pub cost: Dollars,
}

/// Itemized estimate, for receipts and the CLI quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub base_price: Dollars,
    pub line_items: Vec<LineItem>,
    /// Sum of the material line items
    pub materials_subtotal: Dollars,
    pub addons: Vec<AddonLine>,
    pub addons_subtotal: Dollars,
    pub electrical_surcharge: Dollars,
    pub estimate: CostEstimate,
}

/// Assemble the headline estimate with the standard unit prices.
///
/// # Errors
///
/// Fails when the spec does not validate; nothing is priced in that case.
pub fn assemble(quantities: &QuantityEstimate, spec: &ShedSpec) -> ShedResult<CostEstimate> {
    Ok(assemble_detailed(quantities, spec, &UnitPrices::default())?.estimate)
}

/// Assemble an itemized estimate against the given unit prices.
pub fn assemble_detailed(
    quantities: &QuantityEstimate,
    spec: &ShedSpec,
    prices: &UnitPrices,
) -> ShedResult<CostBreakdown> {
    spec.validate()?;

    let base = base_price(spec.style, spec.width(), spec.depth());

    let line_items: Vec<LineItem> = quantities
        .items()
        .map(|(item, quantity)| {
            let unit_price = prices.price_of(item);
            LineItem {
                item,
                quantity,
                unit_price,
                cost: unit_price * f64::from(quantity),
            }
        })
        .collect();
    let materials_subtotal: Dollars = line_items.iter().map(|l| l.cost).sum();

    let addons: Vec<AddonLine> = spec
        .addons
        .active()
        .map(|addon| AddonLine {
            addon,
            cost: addon.cost(),
        })
        .collect();
    let addons_subtotal: Dollars = addons.iter().map(|a| a.cost).sum();

    let electrical_surcharge = electrical::surcharge(spec.electrical_tier);

    let material = materials_subtotal + addons_subtotal + base + electrical_surcharge;
    let labor = material * LABOR_RATE;
    let estimate = CostEstimate {
        material,
        labor,
        total: material + labor,
    };

    tracing::debug!(
        style = %spec.style,
        base = base.value(),
        material = material.value(),
        total = estimate.total.value(),
        "assembled cost estimate"
    );

    Ok(CostBreakdown {
        base_price: base,
        line_items,
        materials_subtotal,
        addons,
        addons_subtotal,
        electrical_surcharge,
        estimate,
    })
}

/// Takeoff and pricing in one step at the standard wall height.
pub fn estimate_cost(spec: &ShedSpec) -> ShedResult<CostEstimate> {
    Ok(quote(spec)?.estimate)
}

/// Itemized takeoff and pricing in one step.
pub fn quote(spec: &ShedSpec) -> ShedResult<CostBreakdown> {
    let quantities = quantity::estimate_for_spec(spec)?;
    assemble_detailed(&quantities, spec, &UnitPrices::default())
}
