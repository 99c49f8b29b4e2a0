//! Turns flags, an optional spec file and the configured defaults into one
//! validated design input.

use anyhow::Context;
use chrono::Month;
use shed_core::catalog::{Addon, ShedStyle};
use shed_core::electrical::ElectricalTier;
use shed_core::environment::{month_from_number, Clock, SystemClock, Weather};
use shed_core::spec::ShedSpec;

use crate::cli::SpecArgs;
use crate::config::AppConfig;

/// Everything the core needs for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    pub spec: ShedSpec,
    pub weather: Weather,
    pub month: Month,
}

/// Resolve the design input. Flags win over the spec file, which wins over
/// the configured defaults.
pub fn resolve(args: &SpecArgs, config: &AppConfig) -> anyhow::Result<Design> {
    let mut spec = match &args.spec {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read spec file {}", path.display()))?;
            ShedSpec::from_json(&text)
                .with_context(|| format!("Invalid spec file {}", path.display()))?
        }
        None => {
            let d = &config.defaults;
            let mut spec = ShedSpec::new(d.style, d.width_ft, d.depth_ft, d.pitch);
            spec.time = d.time;
            spec
        }
    };

    if let Some(style) = &args.style {
        spec.style = ShedStyle::from_str_flexible(style)?;
    }
    if let Some(width) = args.width {
        spec.width_ft = width;
    }
    if let Some(depth) = args.depth {
        spec.depth_ft = depth;
    }
    if let Some(pitch) = args.pitch {
        spec.pitch = pitch;
    }
    if let Some(time) = args.time {
        spec.time = time;
    }
    for id in &args.addons {
        spec.addons.set(Addon::from_id(id)?, true);
    }
    if let Some(tier) = &args.electrical {
        spec.electrical_tier = if tier.trim().eq_ignore_ascii_case("none") {
            None
        } else {
            Some(ElectricalTier::from_str_flexible(tier)?)
        };
    }
    if let Some(view) = args.view {
        spec.view_mode = view.into();
    }
    if let Some(render) = args.render {
        spec.render_mode = render.into();
    }
    if let Some(door) = args.door {
        spec.door = door.into();
    }
    if let Some(siding) = args.siding {
        spec.siding = siding.into();
    }
    if let Some(terrain) = args.terrain {
        spec.terrain = terrain.into();
    }

    let weather = args.weather.map(Weather::from).unwrap_or(config.defaults.weather);
    let month = match args.month.or(config.clock.month) {
        Some(month) => month_from_number(month)?,
        None => SystemClock.month(),
    };

    spec.validate()?;
    tracing::debug!(style = %spec.style, width = spec.width_ft, depth = spec.depth_ft, ?weather, ?month, "resolved design");

    Ok(Design { spec, weather, month })
}
