//! Log output for the `shed` binary.
//!
//! `shed_core` emits `tracing` events and never installs a subscriber. The
//! binary installs one here, writing to stderr so `--json` output on stdout
//! can be piped. Module targets are shown from `-vv` upward.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::GlobalArgs;

/// Crates whose events the default filter lets through.
const LOG_TARGETS: [&str; 2] = ["shed", "shed_core"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args.verbose, args.quiet);

    // RUST_LOG, when set, replaces the flag-derived filter entirely
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(default_directives(level)),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(level >= LevelFilter::DEBUG)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

fn default_directives(level: LevelFilter) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_without_flags() {
        assert_eq!(level_for(0, false), LevelFilter::WARN);
    }

    #[test]
    fn test_each_v_raises_level() {
        assert_eq!(level_for(1, false), LevelFilter::INFO);
        assert_eq!(level_for(2, false), LevelFilter::DEBUG);
        assert_eq!(level_for(5, false), LevelFilter::TRACE);
    }

    #[test]
    fn test_quiet_wins() {
        assert_eq!(level_for(3, true), LevelFilter::ERROR);
    }

    #[test]
    fn test_directives_cover_both_crates() {
        let directives = default_directives(LevelFilter::DEBUG).to_lowercase();
        assert_eq!(directives, "shed=debug,shed_core=debug");
    }
}
