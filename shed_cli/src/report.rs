//! Human-readable reports.
//!
//! Each function renders one command's result as plain text; `main` decides
//! whether to print this or the JSON form.

use std::fmt::Write as _;

use shed_core::catalog::{ShedStyle, PRICE_OVERRIDES};
use shed_core::cost::CostBreakdown;
use shed_core::electrical::PowerLoad;
use shed_core::environment::EnvironmentState;
use shed_core::geometry::GeometryDescriptor;
use shed_core::scene::{DrawItem, SceneDescriptor};
use shed_core::spec::ShedSpec;

const RULE: &str = "═══════════════════════════════════════";

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  {title}");
    let _ = writeln!(out, "{RULE}");
    out.push('\n');
}

fn design_line(out: &mut String, spec: &ShedSpec) {
    let _ = writeln!(
        out,
        "Design:   {} {}' x {}' @ {}/12",
        spec.style, spec.width_ft, spec.depth_ft, spec.pitch
    );
}

pub fn geometry(spec: &ShedSpec, geo: &GeometryDescriptor) -> String {
    let mut out = String::new();
    banner(&mut out, "GEOMETRY");
    design_line(&mut out, spec);
    let _ = writeln!(out, "Offset:   {} px", geo.depth_offset);
    out.push('\n');
    let fragments = [
        ("walls", Some(&geo.walls)),
        ("walls3D", Some(&geo.walls_3d)),
        ("roof", Some(&geo.roof)),
        ("sideRoof", geo.side_roof.as_ref()),
        ("gable", Some(&geo.gable)),
        ("floor", Some(&geo.floor)),
    ];
    for (name, polygon) in fragments {
        let path = polygon.map(|p| p.path()).unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  {name:<9} {path}");
    }
    out
}

pub fn environment(env: &EnvironmentState) -> String {
    let mut out = String::new();
    banner(&mut out, "ENVIRONMENT");
    let _ = writeln!(out, "Time:     {}", env.time);
    let _ = writeln!(out, "Shadow:   {}°", env.shadow_skew_deg);
    let _ = writeln!(out, "Night:    {}", if env.is_night { "yes" } else { "no" });
    let weather = format!("{:?}", env.weather).to_lowercase();
    if env.weather_overridden() {
        let requested = format!("{:?}", env.requested_weather).to_lowercase();
        let _ = writeln!(out, "Weather:  {weather} (requested {requested}, seasonal override)");
    } else {
        let _ = writeln!(out, "Weather:  {weather}");
    }
    out
}

pub fn scene(spec: &ShedSpec, scene: &SceneDescriptor) -> String {
    let mut out = String::new();
    banner(&mut out, "SCENE");
    design_line(&mut out, spec);
    let _ = writeln!(
        out,
        "Viewport: origin ({}, {}) scale {}",
        scene.viewport.origin.x, scene.viewport.origin.y, scene.viewport.scale
    );
    out.push('\n');
    let _ = writeln!(out, "Paint order:");
    for (i, item) in scene.draw_list.iter().enumerate() {
        match item {
            DrawItem::Structure { shapes, labels, .. } => {
                let _ = writeln!(
                    out,
                    "  {:>2}. building  y=0  ({} shapes, {} labels)",
                    i + 1,
                    shapes.len(),
                    labels.len()
                );
            }
            DrawItem::Prop { name, y, .. } => {
                let _ = writeln!(out, "  {:>2}. {name:<9} y={y}", i + 1);
            }
        }
    }
    out
}

pub fn quote(spec: &ShedSpec, breakdown: &CostBreakdown, power: &PowerLoad) -> String {
    let mut out = String::new();
    banner(&mut out, "QUOTE");
    design_line(&mut out, spec);
    out.push('\n');

    let _ = writeln!(out, "Materials:");
    for line in &breakdown.line_items {
        let _ = writeln!(
            out,
            "  {:<14} {:>4} {:<13} @ {:>7} = {:>10}",
            line.item.display_name(),
            line.quantity,
            line.item.unit(),
            line.unit_price.to_string(),
            line.cost.to_string()
        );
    }
    out.push('\n');

    let _ = writeln!(out, "Base price:   {:>12}", breakdown.base_price.to_string());
    let _ = writeln!(out, "Materials:    {:>12}", breakdown.materials_subtotal.to_string());
    for addon in &breakdown.addons {
        let _ = writeln!(out, "  + {:<24} {}", addon.addon.display_name(), addon.cost);
    }
    let _ = writeln!(out, "Addons:       {:>12}", breakdown.addons_subtotal.to_string());
    let _ = writeln!(out, "Electrical:   {:>12}", breakdown.electrical_surcharge.to_string());
    out.push('\n');

    let _ = writeln!(
        out,
        "Power load:   {:.1} A of {:.0} A ({:.0}%)",
        power.load_amps,
        power.max_amps,
        power.load_factor * 100.0
    );
    out.push('\n');

    let estimate = &breakdown.estimate;
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  MATERIAL: {}", estimate.material);
    let _ = writeln!(out, "  LABOR:    {}", estimate.labor);
    let _ = writeln!(out, "  TOTAL:    {}", estimate.total);
    let _ = writeln!(out, "{RULE}");
    out
}

pub fn styles() -> String {
    let mut out = String::new();
    banner(&mut out, "STYLES");
    for style in ShedStyle::ALL {
        let data = style.data();
        let _ = writeln!(
            out,
            "  {:<14} from {:>10}   R-{:<3} {:>4} sq ft",
            style.display_name(),
            data.base_price.to_string(),
            data.r_value,
            data.base_area_sqft
        );
        for o in PRICE_OVERRIDES.iter().filter(|o| o.style == style) {
            let _ = writeln!(out, "      {}' x {}' model: {}", o.width_ft, o.depth_ft, o.price);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;
    use shed_core::environment::Weather;
    use shed_core::view_model::evaluate;

    #[test]
    fn quote_shows_total() {
        let spec = ShedSpec::new(ShedStyle::Quaker, 10.0, 16.0, 6.0);
        let o = evaluate(&spec, Weather::Clear, Month::June).unwrap();
        let text = quote(&spec, &o.cost, &o.power);
        assert!(text.contains("TOTAL:    $14055.65"));
        assert!(text.contains("Wall studs"));
    }

    #[test]
    fn environment_mentions_override() {
        let env = shed_core::environment::simulate(50.0, Month::January, Weather::Clear);
        assert!(environment(&env).contains("seasonal override"));
    }

    #[test]
    fn styles_lists_every_archetype() {
        let text = styles();
        for style in ShedStyle::ALL {
            assert!(text.contains(style.display_name()));
        }
        assert!(text.contains("12' x 28' model: $14950.00"));
    }

    #[test]
    fn geometry_marks_missing_side_roof() {
        let spec = ShedSpec::new(ShedStyle::ModernStudio, 10.0, 12.0, 6.0);
        let geo = shed_core::geometry::generate(spec.style, 10.0, 12.0, 6.0).unwrap();
        let text = geometry(&spec, &geo);
        assert!(text.contains("sideRoof  -"));
    }
}
