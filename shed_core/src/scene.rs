//! # Scene Composer
//!
//! Joins the building geometry, the environment state and the landscape
//! props into a render descriptor for a generic 2D drawing surface.
//!
//! ## Paint Order
//!
//! The building (at `y = 0`) and every landscape prop are stable-sorted by
//! `y` ascending and drawn in that order. On a tie the building paints first,
//! then props in placement order.
//!
//! ## Modes
//!
//! | | 3D | blueprint |
//! |---|---|---|
//! | fills | colours, siding pattern | none, dashed outlines |
//! | ground and shadow | yes | no |
//! | receding faces | yes | no |
//! | addon overlays | exterior only | no |
//! | dimension annotations | no | yes |
//!
//! Interior view fades the walls, lifts the roof assembly 150 px out of
//! frame and reveals the floor plane.

use chrono::Month;
use serde::Serialize;

use crate::catalog::find_asset;
use crate::environment::{simulate, EnvironmentState, Weather};
use crate::errors::ShedResult;
use crate::geometry::{generate, GeometryDescriptor, Point, WallFrame};
use crate::spec::{LandscapeProp, RenderMode, ShedSpec, ViewMode};

/// Canvas position of the ground origin
pub const ORIGIN: Point = Point::new(250.0, 360.0);
/// Zoom applied in blueprint mode
pub const BLUEPRINT_SCALE: f64 = 1.2;
/// How far the roof assembly is lifted in interior view (px)
pub const ROOF_LIFT_PX: f64 = 150.0;

const LINE_COLOR: &str = "#020617";
const BLUEPRINT_LINE: &str = "#ffffff";
const BLUEPRINT_WALL: &str = "#1e3a8a";
const BLUEPRINT_DASH: &str = "4 4";
const ROOF_COLOR: &str = "#1e293b";
const SNOW_ROOF_COLOR: &str = "#e2e8f0";
const SNOW_GROUND_COLOR: &str = "#f1f5f9";
const FLOOR_COLOR: &str = "#334155";
const DOOR_COLOR: &str = "#ffffff";
const GROUND_PATH: &str = "M-220 0 L0 80 L220 0 L0 -80 Z";
const DOOR_TOP_Y: f64 = -95.0;
const ROOF_TRIM_WIDTH: f64 = 4.0;

/// Canvas transform for the whole scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub origin: Point,
    pub scale: f64,
}

/// Affine placement of a shape: translate, then rotate, then scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub translate: Point,
    pub rotate_deg: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            translate: Point::default(),
            rotate_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Transform {
            translate: Point::new(x, y),
            ..Transform::default()
        }
    }

    pub fn rotated(mut self, deg: f64) -> Self {
        self.rotate_deg = deg;
        self
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// Named role of a shape in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Ground,
    Floor,
    Walls3d,
    Walls,
    SideRoof,
    Roof,
    Gable,
    RoofTrim,
    Door,
    ShedLoo,
    Ramp,
    Solar,
    AirConditioner,
    PowerInlet,
    Dimension,
    Prop,
}

/// One filled and/or stroked path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub layer: Layer,
    pub path: String,
    /// Colour, `url(#pattern)` or `none`
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<&'static str>,
    pub opacity: f64,
    pub transform: Transform,
}

/// Text placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub transform: Transform,
}

/// Blurred ground shadow, skewed with the sun
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadow {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    pub skew_x_deg: f64,
    pub translate_x: f64,
    pub opacity: f64,
}

/// Rain or snow particles
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Precipitation {
    pub kind: Weather,
    pub opacity_scale: f64,
}

/// An entry of the painter's list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawItem {
    /// The building with its overlays and annotations
    Structure {
        y: f64,
        shapes: Vec<Shape>,
        labels: Vec<Label>,
    },
    /// A landscape prop
    Prop { id: String, name: String, y: f64, shape: Shape },
}

impl DrawItem {
    /// Sort key
    pub fn y(&self) -> f64 {
        match self {
            DrawItem::Structure { y, .. } | DrawItem::Prop { y, .. } => *y,
        }
    }

    pub fn is_structure(&self) -> bool {
        matches!(self, DrawItem::Structure { .. })
    }
}

/// Complete render descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescriptor {
    pub viewport: Viewport,
    pub environment: EnvironmentState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<Precipitation>,
    /// Draw in order
    pub draw_list: Vec<DrawItem>,
}

impl SceneDescriptor {
    /// The building's entry in the draw list
    pub fn structure(&self) -> Option<&DrawItem> {
        self.draw_list.iter().find(|item| item.is_structure())
    }

    /// Shapes of the building, in paint order
    pub fn structure_shapes(&self) -> &[Shape] {
        match self.structure() {
            Some(DrawItem::Structure { shapes, .. }) => shapes,
            _ => &[],
        }
    }

    /// Whether the building has a shape on the given layer
    pub fn has_layer(&self, layer: Layer) -> bool {
        self.structure_shapes().iter().any(|s| s.layer == layer)
    }
}

/// Resolved colours and switches for one pass
struct Palette<'a> {
    blueprint: bool,
    interior: bool,
    line: &'a str,
    wall: &'a str,
    trim: &'a str,
    roof: &'a str,
    siding: String,
}

impl<'a> Palette<'a> {
    fn new(spec: &'a ShedSpec, env: &EnvironmentState) -> Self {
        let blueprint = spec.render_mode == RenderMode::Blueprint;
        let roof = if blueprint {
            "none"
        } else if env.weather == Weather::Snow {
            SNOW_ROOF_COLOR
        } else {
            ROOF_COLOR
        };
        Palette {
            blueprint,
            interior: spec.view_mode == ViewMode::Interior,
            line: if blueprint { BLUEPRINT_LINE } else { LINE_COLOR },
            wall: if blueprint { BLUEPRINT_WALL } else { &spec.wall_color },
            trim: if blueprint { BLUEPRINT_LINE } else { &spec.trim_color },
            roof,
            siding: format!("url(#{})", spec.siding.pattern_id()),
        }
    }

    fn stroke_width(&self) -> f64 {
        if self.blueprint {
            1.5
        } else {
            1.2
        }
    }

    fn dash(&self) -> Option<&'static str> {
        self.blueprint.then_some(BLUEPRINT_DASH)
    }

    /// Fill, or `none` in blueprint mode
    fn fill(&self, color: &str) -> String {
        if self.blueprint {
            "none".to_string()
        } else {
            color.to_string()
        }
    }

    fn shape(&self, layer: Layer, path: String, fill: String) -> Shape {
        Shape {
            layer,
            path,
            fill,
            stroke: self.line.to_string(),
            stroke_width: self.stroke_width(),
            dash: self.dash(),
            opacity: 1.0,
            transform: Transform::default(),
        }
    }
}

/// Compose the scene for a spec.
///
/// `geometry` and `env` must come from the same spec; the composer only
/// arranges them and never recomputes either.
pub fn compose(spec: &ShedSpec, geometry: &GeometryDescriptor, env: &EnvironmentState) -> SceneDescriptor {
    let palette = Palette::new(spec, env);

    let viewport = Viewport {
        origin: ORIGIN,
        scale: if palette.blueprint { BLUEPRINT_SCALE } else { 1.0 },
    };

    let (ground, shadow) = if palette.blueprint {
        (None, None)
    } else {
        let ground_color = if env.weather == Weather::Snow {
            SNOW_GROUND_COLOR
        } else {
            spec.terrain.color()
        };
        let ground = Shape {
            layer: Layer::Ground,
            path: GROUND_PATH.to_string(),
            fill: ground_color.to_string(),
            stroke: "none".to_string(),
            stroke_width: 0.0,
            dash: None,
            opacity: 1.0,
            transform: Transform::default(),
        };
        let shadow = Shadow {
            center: Point::new(0.0, 10.0),
            rx: geometry.frame.width_px / 1.5,
            ry: 35.0,
            skew_x_deg: env.shadow_skew_deg,
            translate_x: -1.5 * env.shadow_skew_deg,
            opacity: env.shadow_opacity,
        };
        (Some(ground), Some(shadow))
    };

    let precipitation = match env.weather {
        _ if palette.blueprint => None,
        Weather::Clear => None,
        kind => Some(Precipitation {
            kind,
            opacity_scale: env.particle_opacity_scale,
        }),
    };

    let mut shapes = structure_shapes(spec, geometry, &palette);
    if !palette.blueprint && !palette.interior {
        shapes.extend(addon_overlays(spec, &geometry.frame));
    }
    let labels = if palette.blueprint {
        shapes.extend(dimension_lines(&geometry.frame));
        blueprint_labels(spec, &geometry.frame)
    } else {
        Vec::new()
    };

    let draw_list = paint_order(
        DrawItem::Structure {
            y: 0.0,
            shapes,
            labels,
        },
        &spec.landscape,
        &palette,
    );

    tracing::debug!(
        style = %spec.style,
        items = draw_list.len(),
        blueprint = palette.blueprint,
        interior = palette.interior,
        "composed scene"
    );

    SceneDescriptor {
        viewport,
        environment: *env,
        ground,
        shadow,
        precipitation,
        draw_list,
    }
}

/// Validate a spec, generate its geometry, simulate its environment and
/// compose the scene.
pub fn compose_spec(spec: &ShedSpec, month: Month, weather: Weather) -> ShedResult<SceneDescriptor> {
    spec.validate()?;
    let geometry = generate(spec.style, spec.width_ft, spec.depth_ft, spec.pitch)?;
    let env = simulate(spec.time, month, weather);
    Ok(compose(spec, &geometry, &env))
}

fn structure_shapes(spec: &ShedSpec, geo: &GeometryDescriptor, p: &Palette<'_>) -> Vec<Shape> {
    let frame = &geo.frame;
    let mut shapes = Vec::new();

    let mut floor = p.shape(Layer::Floor, geo.floor.path(), p.fill(FLOOR_COLOR));
    floor.opacity = if p.interior { 1.0 } else { 0.0 };
    shapes.push(floor);

    let wall_opacity = if p.interior { 0.4 } else { 1.0 };
    if !p.blueprint {
        let mut walls_3d = p.shape(Layer::Walls3d, geo.walls_3d.path(), p.siding.clone());
        walls_3d.opacity = wall_opacity;
        shapes.push(walls_3d);
    }
    let mut walls = p.shape(Layer::Walls, geo.walls.path(), p.fill(&p.siding));
    walls.opacity = wall_opacity;
    shapes.push(walls);

    // roof assembly, lifted together in interior view
    let roof_transform = if p.interior {
        Transform::translate(0.0, -ROOF_LIFT_PX)
    } else {
        Transform::default()
    };
    let roof_opacity = if p.interior { 0.3 } else { 1.0 };
    let mut roof_shapes = Vec::new();
    if !p.blueprint {
        if let Some(side_roof) = &geo.side_roof {
            roof_shapes.push(p.shape(Layer::SideRoof, side_roof.path(), p.roof.to_string()));
        }
    }
    roof_shapes.push(p.shape(Layer::Roof, geo.roof.path(), p.roof.to_string()));
    roof_shapes.push(p.shape(Layer::Gable, geo.gable.path(), p.fill(p.wall)));
    let mut trim = p.shape(Layer::RoofTrim, geo.roof.path(), "none".to_string());
    trim.stroke = p.trim.to_string();
    trim.stroke_width = ROOF_TRIM_WIDTH;
    roof_shapes.push(trim);
    for mut shape in roof_shapes {
        shape.transform = roof_transform;
        shape.opacity = roof_opacity;
        shapes.push(shape);
    }

    let mut door = p.shape(Layer::Door, spec.door.outline_paths().join(" "), p.fill(DOOR_COLOR));
    door.transform = Transform::translate(spec.door.anchor_x(), DOOR_TOP_Y);
    door.opacity = if p.interior { 0.3 } else { 1.0 };
    shapes.push(door);

    if spec.addons.shed_loo && !p.interior {
        let mut annex = p.shape(
            Layer::ShedLoo,
            "M0 0 L25 0 L25 35 L0 35 Z M0 0 L12.5 -8 L25 0".to_string(),
            p.fill(p.wall),
        );
        annex.transform = Transform::translate(frame.left - 20.0, -15.0);
        shapes.push(annex);
    }

    shapes
}

/// Overlays anchored to the door and walls. 3D exterior only.
fn addon_overlays(spec: &ShedSpec, frame: &WallFrame) -> Vec<Shape> {
    let overlay = |layer: Layer, path: &str, fill: &str, transform: Transform| Shape {
        layer,
        path: path.to_string(),
        fill: fill.to_string(),
        stroke: LINE_COLOR.to_string(),
        stroke_width: 1.0,
        dash: None,
        opacity: 1.0,
        transform,
    };

    let mut shapes = Vec::new();
    if spec.addons.ramp {
        shapes.push(overlay(
            Layer::Ramp,
            "M0 0 L40 0 L45 15 L-5 15 Z",
            "#94a3b8",
            Transform::translate(spec.door.anchor_x(), 0.0),
        ));
    }
    if spec.addons.solar {
        shapes.push(overlay(
            Layer::Solar,
            "M0 0 L40 0 L40 25 L0 25 Z M0 8 H40 M0 16 H40 M13 0 V25 M26 0 V25",
            "#1e293b",
            Transform::translate(frame.left + 20.0, frame.top - 80.0).rotated(-15.0),
        ));
    }
    if spec.addons.ac {
        shapes.push(overlay(
            Layer::AirConditioner,
            "M0 0 L20 0 L20 25 L0 25 Z",
            "#e2e8f0",
            Transform::translate(frame.right + 5.0, -40.0),
        ));
    }
    if spec.addons.has_power_kit() {
        shapes.push(overlay(
            Layer::PowerInlet,
            "M-5 0 A5 5 0 1 0 5 0 A5 5 0 1 0 -5 0 Z",
            "#1e293b",
            Transform::translate(frame.right - 15.0, -20.0),
        ));
    }
    shapes
}

fn dimension_lines(frame: &WallFrame) -> Vec<Shape> {
    let line = |path: String, transform: Transform| Shape {
        layer: Layer::Dimension,
        path,
        fill: "none".to_string(),
        stroke: BLUEPRINT_LINE.to_string(),
        stroke_width: 1.0,
        dash: Some(BLUEPRINT_DASH),
        opacity: 1.0,
        transform,
    };
    vec![
        line(format!("M{} 40 L{} 40", frame.left, frame.right), Transform::default()),
        line(
            format!("M0 0 L{} 0", frame.depth_px * 0.5),
            depth_anchor(frame),
        ),
    ]
}

fn depth_anchor(frame: &WallFrame) -> Transform {
    Transform::translate(frame.right + 25.0, -frame.depth_px * 0.2).rotated(-45.0)
}

fn blueprint_labels(spec: &ShedSpec, frame: &WallFrame) -> Vec<Label> {
    let data = spec.style.data();
    let notes_x = frame.left - 60.0;
    let notes_y = frame.top - 40.0;

    let mut labels = vec![
        Label {
            text: format!("{}'", spec.width_ft),
            transform: Transform::translate(0.0, 55.0),
        },
        Label {
            text: format!("{}'", spec.depth_ft),
            transform: Transform {
                translate: Point::new(frame.right + 25.0, -frame.depth_px * 0.2 - 8.0),
                ..depth_anchor(frame)
            },
        },
    ];
    let notes = [
        spec.style.display_name().to_uppercase(),
        format!("R-VALUE: {}", data.r_value),
        format!("PITCH: {}/12", spec.pitch),
    ];
    for (i, text) in notes.into_iter().enumerate() {
        labels.push(Label {
            text,
            transform: Transform::translate(notes_x, notes_y + 12.0 * i as f64),
        });
    }
    labels
}

/// Stable painter's sort of the building and the props.
fn paint_order(structure: DrawItem, props: &[LandscapeProp], p: &Palette<'_>) -> Vec<DrawItem> {
    let mut items = vec![structure];
    for prop in props {
        let Some(asset) = find_asset(&prop.id) else {
            tracing::warn!(id = %prop.id, "unknown landscape prop skipped");
            continue;
        };
        let shape = Shape {
            layer: Layer::Prop,
            path: asset.path.to_string(),
            fill: p.fill(asset.color),
            stroke: (if p.blueprint { BLUEPRINT_LINE } else { "none" }).to_string(),
            stroke_width: if p.blueprint { 1.0 } else { 0.0 },
            dash: None,
            opacity: 1.0,
            transform: Transform::translate(prop.x, prop.y).scaled(prop.scale),
        };
        items.push(DrawItem::Prop {
            id: asset.id.to_string(),
            name: asset.name.to_string(),
            y: prop.y,
            shape,
        });
    }
    // stable and total: the building stays ahead of props at y = 0, NaN sorts last
    items.sort_by(|a, b| a.y().total_cmp(&b.y()));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Addon, ShedStyle};
    use crate::spec::DoorType;

    fn scene(spec: &ShedSpec) -> SceneDescriptor {
        compose_spec(spec, Month::July, Weather::Clear).unwrap()
    }

    fn layer<'a>(scene: &'a SceneDescriptor, layer: Layer) -> &'a Shape {
        scene
            .structure_shapes()
            .iter()
            .find(|s| s.layer == layer)
            .unwrap()
    }

    #[test]
    fn test_paint_order_sorts_by_y() {
        let mut spec = ShedSpec::new(ShedStyle::Gable, 10.0, 12.0, 6.0);
        spec.landscape = vec![
            LandscapeProp::new("tree-1", -140.0, 5.0, 1.0),
            LandscapeProp::new("bush-1", 120.0, -3.0, 1.0),
            LandscapeProp::new("tree-1", 160.0, 0.0, 1.2),
        ];
        let scene = scene(&spec);
        let ys: Vec<f64> = scene.draw_list.iter().map(DrawItem::y).collect();
        assert_eq!(ys, vec![-3.0, 0.0, 0.0, 5.0]);
        // the building wins the tie at y = 0
        assert!(scene.draw_list[1].is_structure());
        assert!(!scene.draw_list[2].is_structure());
    }

    #[test]
    fn test_unknown_prop_is_skipped() {
        let mut spec = ShedSpec::default();
        spec.landscape = vec![
            LandscapeProp::new("hot-tub", 0.0, 10.0, 1.0),
            LandscapeProp::new("bush-1", 0.0, 10.0, 1.0),
        ];
        let scene = scene(&spec);
        assert_eq!(scene.draw_list.len(), 2);
    }

    #[test]
    fn test_shaded_exterior_layers() {
        let spec = ShedSpec::new(ShedStyle::Gable, 10.0, 12.0, 6.0);
        let scene = scene(&spec);
        assert!(scene.ground.is_some());
        assert_eq!(scene.viewport.scale, 1.0);
        assert!(scene.has_layer(Layer::Walls3d));
        assert!(scene.has_layer(Layer::SideRoof));
        assert_eq!(layer(&scene, Layer::Walls).fill, "url(#lapSiding)");
        assert_eq!(layer(&scene, Layer::Floor).opacity, 0.0);
        assert_eq!(layer(&scene, Layer::Roof).fill, ROOF_COLOR);
    }

    #[test]
    fn test_studio_has_no_side_roof() {
        let spec = ShedSpec::new(ShedStyle::ModernStudio, 10.0, 12.0, 6.0);
        assert!(!scene(&spec).has_layer(Layer::SideRoof));
    }

    #[test]
    fn test_blueprint_strips_fills_and_annotates() {
        let mut spec = ShedSpec::new(ShedStyle::Quaker, 10.0, 16.0, 6.0);
        spec.render_mode = RenderMode::Blueprint;
        spec.addons = spec.addons.with(Addon::Ramp).with(Addon::Solar);
        let scene = scene(&spec);

        assert!(scene.ground.is_none());
        assert!(scene.shadow.is_none());
        assert_eq!(scene.viewport.scale, BLUEPRINT_SCALE);
        assert!(!scene.has_layer(Layer::Walls3d));
        assert!(!scene.has_layer(Layer::SideRoof));
        assert!(!scene.has_layer(Layer::Ramp));
        assert_eq!(layer(&scene, Layer::Walls).fill, "none");
        assert_eq!(layer(&scene, Layer::Walls).dash, Some(BLUEPRINT_DASH));
        assert_eq!(layer(&scene, Layer::Dimension).path, "M-75 40 L75 40");

        let Some(DrawItem::Structure { labels, .. }) = scene.structure() else {
            panic!("no structure");
        };
        let texts: Vec<&str> = labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["10'", "16'", "QUAKER", "R-VALUE: 16", "PITCH: 6/12"]);
    }

    #[test]
    fn test_overlays_follow_door_anchor() {
        let mut spec = ShedSpec::new(ShedStyle::Utility, 10.0, 20.0, 4.0);
        spec.door = DoorType::Double;
        spec.addons = spec.addons.with(Addon::Ramp).with(Addon::Power30A).with(Addon::AirConditioner);
        let scene = scene(&spec);
        assert_eq!(layer(&scene, Layer::Ramp).transform.translate, Point::new(-35.0, 0.0));
        assert_eq!(layer(&scene, Layer::Door).transform.translate, Point::new(-35.0, -95.0));
        assert_eq!(layer(&scene, Layer::AirConditioner).transform.translate, Point::new(80.0, -40.0));
        assert!(scene.has_layer(Layer::PowerInlet));
    }

    #[test]
    fn test_interior_hides_overlays_and_lifts_roof() {
        let mut spec = ShedSpec::new(ShedStyle::LoftedBarn, 12.0, 28.0, 8.0);
        spec.view_mode = ViewMode::Interior;
        spec.addons = spec.addons.with(Addon::Ramp).with(Addon::ShedLoo);
        let scene = scene(&spec);
        assert!(!scene.has_layer(Layer::Ramp));
        assert!(!scene.has_layer(Layer::ShedLoo));
        assert_eq!(layer(&scene, Layer::Floor).opacity, 1.0);
        assert_eq!(layer(&scene, Layer::Roof).transform.translate.y, -ROOF_LIFT_PX);
        assert_eq!(layer(&scene, Layer::Door).opacity, 0.3);
    }

    #[test]
    fn test_snow_whitens_roof_and_ground() {
        let spec = ShedSpec::new(ShedStyle::Gable, 10.0, 12.0, 6.0);
        let scene = compose_spec(&spec, Month::January, Weather::Clear).unwrap();
        assert_eq!(scene.environment.weather, Weather::Snow);
        assert_eq!(layer(&scene, Layer::Roof).fill, SNOW_ROOF_COLOR);
        assert_eq!(scene.ground.as_ref().map(|g| g.fill.as_str()), Some(SNOW_GROUND_COLOR));
        assert_eq!(scene.precipitation.map(|p| p.kind), Some(Weather::Snow));
    }

    #[test]
    fn test_shadow_tracks_sun() {
        let mut spec = ShedSpec::new(ShedStyle::Gable, 10.0, 12.0, 6.0);
        spec.time = 0.0;
        let shadow = scene(&spec).shadow.unwrap();
        assert_eq!(shadow.skew_x_deg, 60.0);
        assert_eq!(shadow.translate_x, -90.0);
        assert_eq!(shadow.rx, 100.0);
        assert_eq!(shadow.opacity, 0.4);
    }

    #[test]
    fn test_nan_prop_depth_sorts_without_panic() {
        let mut spec = ShedSpec::new(ShedStyle::Gable, 10.0, 12.0, 6.0);
        spec.landscape = (0..64)
            .map(|i| {
                let y = if i % 3 == 0 { f64::NAN } else { f64::from(i % 7) - 3.0 };
                LandscapeProp::new("bush-1", 0.0, y, 1.0)
            })
            .collect();
        let geo = generate(spec.style, spec.width_ft, spec.depth_ft, spec.pitch).unwrap();
        let env = simulate(spec.time, Month::July, Weather::Clear);
        let scene = compose(&spec, &geo, &env);

        assert_eq!(scene.draw_list.len(), 65);
        let finite: Vec<f64> = scene.draw_list.iter().map(DrawItem::y).filter(|y| !y.is_nan()).collect();
        assert!(finite.windows(2).all(|w| w[0] <= w[1]));
        assert!(scene.draw_list.last().unwrap().y().is_nan());
    }

    #[test]
    fn test_addon_overlay_shapes() {
        let mut spec = ShedSpec::new(ShedStyle::Quaker, 10.0, 16.0, 6.0);
        spec.addons = spec
            .addons
            .with(Addon::Solar)
            .with(Addon::AirConditioner)
            .with(Addon::Power20A)
            .with(Addon::ShedLoo);
        let scene = scene(&spec);

        let solar = layer(&scene, Layer::Solar);
        assert_eq!(solar.transform.translate, Point::new(-55.0, -200.0));
        assert_eq!(solar.transform.rotate_deg, -15.0);
        assert!(solar.path.starts_with("M0 0 L40 0 L40 25 L0 25 Z"));
        assert_eq!(layer(&scene, Layer::AirConditioner).path, "M0 0 L20 0 L20 25 L0 25 Z");
        assert!(layer(&scene, Layer::PowerInlet).path.contains("A5 5"));

        let annex = layer(&scene, Layer::ShedLoo);
        assert_eq!(annex.transform.translate, Point::new(-95.0, -15.0));
        assert!(annex.path.starts_with("M0 0 L25 0 L25 35 L0 35 Z"));
        assert_eq!(layer(&scene, Layer::Walls3d).fill, "url(#lapSiding)");
    }

    #[test]
    fn test_blueprint_has_no_precipitation() {
        let mut spec = ShedSpec::new(ShedStyle::Gable, 10.0, 12.0, 6.0);
        spec.render_mode = RenderMode::Blueprint;
        let scene = compose_spec(&spec, Month::January, Weather::Clear).unwrap();
        assert_eq!(scene.environment.weather, Weather::Snow);
        assert!(scene.precipitation.is_none());
    }

    #[test]
    fn test_invalid_spec_is_rejected() {
        let spec = ShedSpec::new(ShedStyle::Gable, -1.0, 12.0, 6.0);
        assert!(compose_spec(&spec, Month::July, Weather::Clear).is_err());
    }
}
