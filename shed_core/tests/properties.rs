//! Property-based tests for the design engine invariants using `proptest`.

use chrono::Month;
use proptest::prelude::*;

use shed_core::catalog::{base_price, Addon, Addons, ShedStyle};
use shed_core::cost::estimate_cost;
use shed_core::electrical::ElectricalTier;
use shed_core::environment::{simulate, Weather};
use shed_core::geometry::{generate, Point};
use shed_core::quantity::estimate;
use shed_core::scene::{compose_spec, DrawItem};
use shed_core::spec::{LandscapeProp, ShedSpec};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_style() -> impl Strategy<Value = ShedStyle> {
    prop::sample::select(ShedStyle::ALL.to_vec())
}

/// Positive building dimension in feet
fn arb_dim() -> impl Strategy<Value = f64> {
    1.0f64..60.0
}

fn arb_pitch() -> impl Strategy<Value = f64> {
    0.0f64..24.0
}

fn arb_addons() -> impl Strategy<Value = Addons> {
    prop::collection::vec(prop::sample::select(Addon::ALL.to_vec()), 0..6).prop_map(|list| {
        list.into_iter().fold(Addons::default(), |addons, addon| addons.with(addon))
    })
}

fn arb_tier() -> impl Strategy<Value = Option<ElectricalTier>> {
    prop::option::of(prop::sample::select(ElectricalTier::ALL.to_vec()))
}

// ---------------------------------------------------------------------------
// 1. Determinism: identical inputs give byte-identical paths
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn geometry_is_deterministic(style in arb_style(), w in arb_dim(), d in arb_dim(), p in arb_pitch()) {
        let a = generate(style, w, d, p).unwrap();
        let b = generate(style, w, d, p).unwrap();
        prop_assert_eq!(a.walls.path(), b.walls.path());
        prop_assert_eq!(a.roof.path(), b.roof.path());
        prop_assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }
}

// ---------------------------------------------------------------------------
// 2. Monotonicity: studs and sheathing never drop as the footprint grows
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn studs_and_sheathing_monotonic_in_width(w in arb_dim(), extra in 0.0f64..20.0, d in arb_dim(), p in arb_pitch()) {
        let small = estimate(w, d, 8.0, p).unwrap();
        let large = estimate(w + extra, d, 8.0, p).unwrap();
        prop_assert!(large.studs >= small.studs);
        prop_assert!(large.sheathing >= small.sheathing);
    }

    #[test]
    fn studs_and_sheathing_monotonic_in_depth(w in arb_dim(), d in arb_dim(), extra in 0.0f64..20.0, p in arb_pitch()) {
        let small = estimate(w, d, 8.0, p).unwrap();
        let large = estimate(w, d + extra, 8.0, p).unwrap();
        prop_assert!(large.studs >= small.studs);
        prop_assert!(large.sheathing >= small.sheathing);
    }
}

// ---------------------------------------------------------------------------
// 3. Cost floor: material never falls below the base price
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn material_covers_base_price(
        style in arb_style(),
        w in arb_dim(),
        d in arb_dim(),
        p in arb_pitch(),
        addons in arb_addons(),
        tier in arb_tier(),
    ) {
        let mut spec = ShedSpec::new(style, w, d, p);
        spec.addons = addons;
        spec.electrical_tier = tier;
        let cost = estimate_cost(&spec).unwrap();
        prop_assert!(cost.material >= base_price(style, spec.width(), spec.depth()));
        prop_assert!((cost.labor.value() - 0.4 * cost.material.value()).abs() < 1e-6);
        prop_assert!((cost.total.value() - (cost.material + cost.labor).value()).abs() < 1e-6);
    }
}

// ---------------------------------------------------------------------------
// 4. Parallelogram: floor back corners are the front corners plus the offset
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn floor_is_parallelogram(style in arb_style(), w in arb_dim(), d in arb_dim(), p in arb_pitch()) {
        let geo = generate(style, w, d, p).unwrap();
        let pts = geo.floor.points();
        let offset = Point::new(geo.depth_offset, -geo.depth_offset);
        prop_assert_eq!(pts.len(), 4);
        prop_assert_eq!(pts[2], pts[1] + offset);
        prop_assert_eq!(pts[3], pts[0] + offset);
    }
}

// ---------------------------------------------------------------------------
// 5. Paint order: draw list sorted by y, building first on ties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn draw_list_is_sorted(ys in prop::collection::vec(-5i32..5, 0..12)) {
        let mut spec = ShedSpec::new(ShedStyle::Gable, 10.0, 12.0, 6.0);
        spec.landscape = ys.iter().map(|y| LandscapeProp::new("bush-1", 0.0, f64::from(*y), 1.0)).collect();
        let scene = compose_spec(&spec, Month::June, Weather::Clear).unwrap();

        prop_assert_eq!(scene.draw_list.len(), ys.len() + 1);
        prop_assert!(scene.draw_list.windows(2).all(|w| w[0].y() <= w[1].y()));
        let shed_at = scene.draw_list.iter().position(DrawItem::is_structure).unwrap();
        prop_assert!(scene.draw_list[..shed_at].iter().all(|item| item.y() < 0.0));
    }
}

// ---------------------------------------------------------------------------
// 6. Environment stays in range for any time value
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn shadow_skew_is_bounded(time in -50.0f64..150.0) {
        let env = simulate(time, Month::June, Weather::Clear);
        prop_assert!((0.0..=100.0).contains(&env.time));
        prop_assert!(env.shadow_skew_deg.abs() <= 60.0);
    }
}
