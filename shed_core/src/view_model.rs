//! # Design Session
//!
//! The memoizing layer a front end sits on. It decides *when* to run the
//! pure components, never *how*: [`evaluate`] runs every component for one
//! input, and [`DesignSession`] caches that result keyed by the full
//! `(spec, weather, month)` value. Any change to the key recomputes
//! everything; nothing is updated incrementally.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Month;
//! use shed_core::environment::{FixedClock, Weather};
//! use shed_core::spec::ShedSpec;
//! use shed_core::view_model::DesignSession;
//!
//! let mut session = DesignSession::new(FixedClock(Month::June));
//! let spec = ShedSpec::default();
//!
//! session.evaluate(&spec, Weather::Clear).unwrap();
//! session.evaluate(&spec, Weather::Clear).unwrap();
//! assert_eq!(session.recompute_count(), 1);
//! ```

use chrono::Month;
use serde::Serialize;

use crate::cost::{self, CostBreakdown, UnitPrices};
use crate::electrical::{self, PowerLoad};
use crate::environment::{Clock, EnvironmentSimulator, SystemClock, Weather};
use crate::errors::ShedResult;
use crate::geometry::{self, GeometryDescriptor};
use crate::quantity::{self, QuantityEstimate};
use crate::scene::{self, SceneDescriptor};
use crate::spec::ShedSpec;

/// Everything a front end renders for one design
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignOutputs {
    pub geometry: GeometryDescriptor,
    pub scene: SceneDescriptor,
    pub quantities: QuantityEstimate,
    pub cost: CostBreakdown,
    pub power: PowerLoad,
}

/// Run every component for one input.
///
/// The spec is validated once up front; on failure nothing is computed.
pub fn evaluate(spec: &ShedSpec, weather: Weather, month: Month) -> ShedResult<DesignOutputs> {
    spec.validate()?;

    let geometry = geometry::generate(spec.style, spec.width_ft, spec.depth_ft, spec.pitch)?;
    let environment = crate::environment::simulate(spec.time, month, weather);
    let scene = scene::compose(spec, &geometry, &environment);

    let quantities = quantity::estimate_for_spec(spec)?;
    let cost = cost::assemble_detailed(&quantities, spec, &UnitPrices::default())?;
    let power = electrical::load_profile(spec.electrical_tier, &spec.addons);

    Ok(DesignOutputs {
        geometry,
        scene,
        quantities,
        cost,
        power,
    })
}

#[derive(Debug, Clone, PartialEq)]
struct DesignKey {
    spec: ShedSpec,
    weather: Weather,
    month: Month,
}

/// Memoized evaluation bound to a clock.
#[derive(Debug)]
pub struct DesignSession<C: Clock = SystemClock> {
    simulator: EnvironmentSimulator<C>,
    cached: Option<(DesignKey, DesignOutputs)>,
    recomputes: usize,
}

impl Default for DesignSession<SystemClock> {
    fn default() -> Self {
        DesignSession::new(SystemClock)
    }
}

impl<C: Clock> DesignSession<C> {
    pub fn new(clock: C) -> Self {
        DesignSession {
            simulator: EnvironmentSimulator::new(clock),
            cached: None,
            recomputes: 0,
        }
    }

    /// Outputs for `spec`, recomputed only when the spec, the weather or the
    /// clock's month differ from the previous call.
    pub fn evaluate(&mut self, spec: &ShedSpec, weather: Weather) -> ShedResult<&DesignOutputs> {
        let key = DesignKey {
            spec: spec.clone(),
            weather,
            month: self.simulator.month(),
        };

        let outputs = match self.cached.take() {
            Some((cached, outputs)) if cached == key => outputs,
            previous => match evaluate(&key.spec, key.weather, key.month) {
                Ok(outputs) => {
                    self.recomputes += 1;
                    tracing::debug!(recomputes = self.recomputes, style = %spec.style, "design recomputed");
                    outputs
                }
                Err(e) => {
                    self.cached = previous;
                    return Err(e);
                }
            },
        };

        let (_, outputs) = self.cached.insert((key, outputs));
        Ok(outputs)
    }

    /// Number of full recomputations so far
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }

    /// Drop the cached result
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
