mod cmd;
mod output;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cmd::catalog::CatalogSubcommand;
use curator_core::catalog::Catalog;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "habitual",
    about = "Habitual Curator — quirky, science-backed micro-habits that fit your life",
    version,
    propagate_version = true
)]
struct Cli {
    /// Habit catalog file (YAML). Defaults to the built-in catalog.
    #[arg(long, global = true, env = "HABITUAL_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive app: welcome → onboarding → dashboard
    Run {
        /// Current streak in days (supplied, never computed)
        #[arg(long, default_value_t = 7)]
        streak: u32,
    },

    /// Inspect the active habit catalog
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },

    /// Run the recommendation filter for a profile without the UI
    Match {
        /// Name to address output to
        #[arg(long, default_value = "you")]
        name: String,

        /// Personality: analytical, spontaneous, methodical, or creative
        #[arg(long)]
        personality: curator_core::types::Personality,

        /// Goal (repeatable, at least one required)
        #[arg(long = "goal", required = true)]
        goals: Vec<curator_core::types::Goal>,

        /// Time preference (repeatable, at least one required)
        #[arg(long = "preference", required = true)]
        preferences: Vec<curator_core::types::TimeSlot>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = load_catalog(cli.catalog.as_deref()).and_then(|catalog| match cli.command {
        Commands::Run { streak } => cmd::run::run(catalog, streak),
        Commands::Catalog { subcommand } => cmd::catalog::run(&catalog, subcommand, cli.json),
        Commands::Match {
            name,
            personality,
            goals,
            preferences,
        } => cmd::matches::run(&catalog, name, personality, goals, preferences, cli.json),
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn load_catalog(path: Option<&std::path::Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(p) => {
            Catalog::load(p).with_context(|| format!("failed to load catalog {}", p.display()))
        }
        None => Ok(Catalog::builtin()),
    }
}
