//! # Shed CLI
//!
//! Command-line front end for `shed_core`: reads a design from flags or a
//! JSON file and prints geometry, the scene descriptor, the environment or a
//! priced quote, as a human report or as JSON.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal error                   |
//! |  2   | Invalid design input or flags    |
//! |  4   | Configuration error              |

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use serde_json::json;
use shed_core::catalog::{ShedStyle, PRICE_OVERRIDES};
use shed_core::environment::simulate;
use shed_core::errors::ShedError;
use shed_core::geometry::generate;
use shed_core::scene::compose;
use shed_core::view_model::evaluate;

use crate::cli::{Cli, Commands, SpecArgs};
use crate::config::{AppConfig, OutputFormat};
use crate::logging::init_logging;
use crate::resolve::resolve;

mod cli;
mod config;
mod logging;
mod report;
mod resolve;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(4);
        }
    };

    let format = if cli.global.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match run(&cli.command, &config, format) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => ExitCode::from(handle_error(&e)),
    }
}

/// Run one command and render its output.
fn run(command: &Commands, config: &AppConfig, format: OutputFormat) -> anyhow::Result<String> {
    match command {
        Commands::Geometry(args) => {
            let design = resolve(args, config)?;
            let spec = &design.spec;
            let geo = generate(spec.style, spec.width_ft, spec.depth_ft, spec.pitch)?;
            render(format, &geo, || report::geometry(spec, &geo))
        }
        Commands::Scene(args) => {
            let design = resolve(args, config)?;
            let spec = &design.spec;
            let geo = generate(spec.style, spec.width_ft, spec.depth_ft, spec.pitch)?;
            let env = simulate(spec.time, design.month, design.weather);
            let scene = compose(spec, &geo, &env);
            render(format, &scene, || report::scene(spec, &scene))
        }
        Commands::Quote(args) => {
            let design = resolve(args, config)?;
            let outputs = evaluate(&design.spec, design.weather, design.month)?;
            let value = json!({
                "spec": &design.spec,
                "quantities": &outputs.quantities,
                "cost": &outputs.cost,
                "power": &outputs.power,
            });
            render(format, &value, || {
                report::quote(&design.spec, &outputs.cost, &outputs.power)
            })
        }
        Commands::Environment(args) => environment(args, config, format),
        Commands::Styles => {
            let value: Vec<_> = ShedStyle::ALL
                .into_iter()
                .map(|style| {
                    let overrides: Vec<_> = PRICE_OVERRIDES.iter().filter(|o| o.style == style).collect();
                    json!({ "style": style, "data": style.data(), "overrides": overrides })
                })
                .collect();
            render(format, &value, report::styles)
        }
    }
}

fn environment(args: &SpecArgs, config: &AppConfig, format: OutputFormat) -> anyhow::Result<String> {
    let design = resolve(args, config)?;
    let env = simulate(design.spec.time, design.month, design.weather);
    render(format, &env, || report::environment(&env))
}

fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    human: impl FnOnce() -> String,
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(value)?),
        OutputFormat::Human => human(),
    })
}

/// Print the error and, for design errors, its JSON form. Returns the exit
/// code: 2 for design errors, 1 for anything else.
fn handle_error(err: &anyhow::Error) -> u8 {
    eprintln!("Error: {err:#}");
    match err.downcast_ref::<ShedError>() {
        Some(shed_err) => {
            tracing::debug!(code = shed_err.error_code(), "design input rejected");
            if let Ok(json) = serde_json::to_string_pretty(shed_err) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
            2
        }
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        assert_eq!(Cli::command().get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn json_quote_has_headline_figures() {
        let args = SpecArgs {
            style: Some("Quaker".into()),
            width: Some(10.0),
            depth: Some(16.0),
            pitch: Some(6.0),
            month: Some(6),
            ..SpecArgs::default()
        };
        let out = run(&Commands::Quote(args), &AppConfig::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["cost"]["base_price"], 7975.0);
        assert_eq!(value["quantities"]["studs"], 75);
    }

    #[test]
    fn design_errors_exit_with_two() {
        let err = anyhow::Error::new(ShedError::unknown_style("Nomad Mobile"));
        assert_eq!(handle_error(&err), 2);
        assert_eq!(handle_error(&anyhow::anyhow!("disk on fire")), 1);
    }
}
