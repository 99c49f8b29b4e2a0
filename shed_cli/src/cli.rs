//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use shed_core::environment::Weather;
use shed_core::spec::{DoorType, RenderMode, SidingType, Terrain, ViewMode};

/// Parametric shed designer: drawings, material takeoff and quotes.
#[derive(Debug, Parser)]
#[command(name = "shed", version, author, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the path fragments of the building
    Geometry(SpecArgs),
    /// Compose the full render descriptor
    Scene(SpecArgs),
    /// Material takeoff and priced estimate
    Quote(SpecArgs),
    /// Shadow, day/night and effective weather for a time of day
    Environment(SpecArgs),
    /// List the building styles with their showroom data
    Styles,
}

/// Arguments accepted by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`). Conflicts with `--quiet`.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable coloured log output
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE", env = "SHED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of the human report
    #[arg(long = "json", global = true)]
    pub json: bool,
}

/// Design input. Flags override a `--spec` file, which overrides the
/// configured defaults.
#[derive(Debug, Default, Args)]
pub struct SpecArgs {
    /// Read the full design from a JSON file
    #[arg(long, value_name = "FILE.json")]
    pub spec: Option<PathBuf>,

    /// Building style, e.g. "Quaker" or lofted-barn
    #[arg(long)]
    pub style: Option<String>,

    /// Width in feet
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<f64>,

    /// Depth in feet
    #[arg(long, allow_negative_numbers = true)]
    pub depth: Option<f64>,

    /// Roof pitch, rise per 12 of run
    #[arg(long, allow_negative_numbers = true)]
    pub pitch: Option<f64>,

    /// Time of day, 0 (dawn) to 100 (dusk)
    #[arg(long, allow_negative_numbers = true)]
    pub time: Option<f64>,

    /// Requested weather
    #[arg(long, value_enum)]
    pub weather: Option<WeatherArg>,

    /// Calendar month 1-12 (default: configured or current month)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Enable an addon by id (repeatable), e.g. ramp, solar, power_30a
    #[arg(long = "addon", value_name = "ID")]
    pub addons: Vec<String>,

    /// Electrical tier: 20A, 30A or offgrid
    #[arg(long)]
    pub electrical: Option<String>,

    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    #[arg(long, value_enum)]
    pub render: Option<RenderArg>,

    #[arg(long, value_enum)]
    pub door: Option<DoorArg>,

    #[arg(long, value_enum)]
    pub siding: Option<SidingArg>,

    #[arg(long, value_enum)]
    pub terrain: Option<TerrainArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WeatherArg {
    Clear,
    Rain,
    Snow,
}

impl From<WeatherArg> for Weather {
    fn from(arg: WeatherArg) -> Self {
        match arg {
            WeatherArg::Clear => Weather::Clear,
            WeatherArg::Rain => Weather::Rain,
            WeatherArg::Snow => Weather::Snow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Exterior,
    Interior,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Exterior => ViewMode::Exterior,
            ViewArg::Interior => ViewMode::Interior,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderArg {
    #[value(name = "3d")]
    Shaded,
    Blueprint,
}

impl From<RenderArg> for RenderMode {
    fn from(arg: RenderArg) -> Self {
        match arg {
            RenderArg::Shaded => RenderMode::Shaded,
            RenderArg::Blueprint => RenderMode::Blueprint,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DoorArg {
    Single,
    Double,
    French,
}

impl From<DoorArg> for DoorType {
    fn from(arg: DoorArg) -> Self {
        match arg {
            DoorArg::Single => DoorType::Single,
            DoorArg::Double => DoorType::Double,
            DoorArg::French => DoorType::French,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SidingArg {
    Lap,
    Board,
}

impl From<SidingArg> for SidingType {
    fn from(arg: SidingArg) -> Self {
        match arg {
            SidingArg::Lap => SidingType::Lap,
            SidingArg::Board => SidingType::Board,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TerrainArg {
    Grass,
    Gravel,
    Concrete,
}

impl From<TerrainArg> for Terrain {
    fn from(arg: TerrainArg) -> Self {
        match arg {
            TerrainArg::Grass => Terrain::Grass,
            TerrainArg::Gravel => Terrain::Gravel,
            TerrainArg::Concrete => Terrain::Concrete,
        }
    }
}
