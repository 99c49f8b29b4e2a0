//! # shed_core - Parametric Shed Design Engine
//!
//! `shed_core` turns a [`ShedSpec`] into everything a configurator shows: a
//! vector drawing of the building in a simulated environment, a material
//! takeoff, and a priced estimate. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Pure**: every component is a synchronous function of its inputs, with
//!   no I/O and no shared mutable state
//! - **Two paths, one input**: `spec → geometry → scene` and
//!   `spec → quantities → cost` never depend on each other
//! - **Fail closed**: bad dimensions and unknown styles are rejected before
//!   anything is computed
//! - **Injected time**: the season comes from a [`environment::Clock`], never
//!   read implicitly
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Month;
//! use shed_core::catalog::ShedStyle;
//! use shed_core::environment::Weather;
//! use shed_core::spec::ShedSpec;
//! use shed_core::view_model::evaluate;
//!
//! let spec = ShedSpec::new(ShedStyle::Quaker, 10.0, 16.0, 6.0);
//! let outputs = evaluate(&spec, Weather::Clear, Month::June).unwrap();
//!
//! assert_eq!(outputs.cost.base_price.value(), 7975.0);
//! println!("{}", serde_json::to_string_pretty(&outputs.geometry).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`spec`] - The design input
//! - [`catalog`] - Styles, price overrides, addons and landscape assets
//! - [`geometry`] - Path fragments per roof archetype, with the projection strategy
//! - [`environment`] - Time of day, shadows and seasonal weather
//! - [`scene`] - Painter-ordered render descriptor
//! - [`quantity`] - Material takeoff
//! - [`cost`] - Priced estimate
//! - [`electrical`] - Service tiers and load profile
//! - [`view_model`] - Memoized evaluation of all of the above
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod cost;
pub mod electrical;
pub mod environment;
pub mod errors;
pub mod geometry;
pub mod quantity;
pub mod scene;
pub mod spec;
pub mod units;
pub mod view_model;

// Re-export commonly used types at crate root for convenience
pub use catalog::{Addon, Addons, ShedStyle};
pub use cost::{CostBreakdown, CostEstimate};
pub use environment::{EnvironmentState, Weather};
pub use errors::{ShedError, ShedResult};
pub use geometry::GeometryDescriptor;
pub use quantity::QuantityEstimate;
pub use scene::SceneDescriptor;
pub use spec::ShedSpec;
pub use view_model::{DesignOutputs, DesignSession};
