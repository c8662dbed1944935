//! # Shot Dashboard Shell
//!
//! Command-line stand-in for the interactive page: optionally performs
//! the load action for one shot, then prints the page chrome and the
//! composed view as Plotly-ready JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Load shot 10086 and print the three panels
//! dashboard-shell --shot 10086 --pretty
//!
//! # Reproducible noise for the same shot number
//! dashboard-shell --shot 10086 --seeded
//!
//! # Show the empty-session prompt
//! dashboard-shell --no-load
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use dashboard_panels::chrome::PageChrome;
use dashboard_panels::{Dashboard, DashboardView};
use dashboard_types::config::{DashboardConfig, SeedPolicy};
use dashboard_types::constants::DEFAULT_SHOT;
use dashboard_types::state::ShotNumber;

/// Shot Dashboard - synthetic EAST discharge panels as JSON
#[derive(Parser)]
#[command(name = "dashboard-shell")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Shot number to load
    #[arg(short, long, default_value_t = DEFAULT_SHOT, allow_negative_numbers = true)]
    shot: i64,

    /// Dashboard config JSON (defaults built in)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed the noise from the shot number
    #[arg(long)]
    seeded: bool,

    /// Skip the load action and render the empty session
    #[arg(long)]
    no_load: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Page<'a> {
    chrome: &'a PageChrome,
    view: DashboardView,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(&path.to_string_lossy())
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if cli.seeded {
        config.synth.seed = SeedPolicy::PerShot;
    }

    let mut dashboard = Dashboard::new(config).context("Invalid dashboard configuration")?;

    if !cli.no_load {
        dashboard.load(ShotNumber(cli.shot));
    }

    let view = dashboard.render();
    info!(
        "Rendered {}",
        if view.is_prompt() {
            "prompt".to_string()
        } else {
            format!("{} panels", view.panels().len())
        }
    );

    let page = Page {
        chrome: dashboard.chrome(),
        view,
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{json}").context("Failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["dashboard-shell"]).unwrap();
        assert_eq!(cli.shot, DEFAULT_SHOT);
        assert!(cli.config.is_none());
        assert!(!cli.seeded);
        assert!(!cli.no_load);
    }

    #[test]
    fn test_cli_negative_shot_and_flags() {
        let cli =
            Cli::try_parse_from(["dashboard-shell", "--shot", "-5", "--seeded", "--pretty", "-vv"])
                .unwrap();
        assert_eq!(cli.shot, -5);
        assert!(cli.seeded);
        assert!(cli.pretty);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_page_json_shape() {
        let dashboard = Dashboard::default();
        let page = Page {
            chrome: dashboard.chrome(),
            view: dashboard.render(),
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["chrome"]["shot_input"]["default"], DEFAULT_SHOT);
        assert_eq!(json["view"]["view"], "prompt");
    }
}
