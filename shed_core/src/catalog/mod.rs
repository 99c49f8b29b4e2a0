//! # Product Catalog
//!
//! Static product data: building archetypes with their pricing, optional
//! upgrades, and the landscape props available to the scene.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::catalog::{Addon, Addons, ShedStyle};
//!
//! let style: ShedStyle = "Lofted Barn".parse().unwrap();
//! assert_eq!(style.data().r_value, 14);
//!
//! let addons = Addons::default().with(Addon::Ramp);
//! println!("Addons: {}", addons.total_cost());
//! ```

pub mod addons;
pub mod landscape;
pub mod styles;

pub use addons::{Addon, Addons};
pub use landscape::{find_asset, NatureAsset, NATURE_ASSETS};
pub use styles::{base_price, PriceOverride, ShedStyle, StyleData, PRICE_OVERRIDES};
