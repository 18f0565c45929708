//! citegen CLI - Main entry point

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::Config;

#[derive(Parser)]
#[command(name = "citegen")]
#[command(version)]
#[command(about = "Generate academic citations in APA, MLA, Chicago, Harvard and IEEE", long_about = None)]
struct Cli {
    /// Path to a citegen.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported source types
    Types,

    /// List the supported citation styles
    Styles,

    /// Show the fields collected for a source type
    Schema {
        /// Source type tag (see `citegen types`)
        #[arg(value_name = "TYPE")]
        source_type: String,

        /// Print the schema as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate field values and print the full and in-text citations
    Cite {
        /// Source type tag (see `citegen types`)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        source_type: String,

        /// Citation style (apa, mla, chicago, harvard, ieee)
        #[arg(short, long)]
        style: Option<String>,

        /// Field value (ID=VALUE); repeat an id to add another entry
        #[arg(short = 'f', long = "field", value_name = "ID=VALUE")]
        fields: Vec<String>,

        /// JSON file with field values
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the citation as JSON
        #[arg(long)]
        json: bool,

        /// Also write a plain-text export to FILE (or into DIR)
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },

    /// Classify a DOI, ISBN, ISSN or URL
    Identify {
        /// The identifier to classify
        identifier: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "citegen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());
    let json = cli.command.wants_json() || config.as_ref().is_ok_and(Config::wants_json);

    let result = config
        .map_err(anyhow::Error::from)
        .and_then(|config| run(cli.command, &config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", commands::report(&err, json));
            ExitCode::FAILURE
        }
    }
}

impl Commands {
    /// Whether `--json` was passed to a command that takes it.
    fn wants_json(&self) -> bool {
        match self {
            Commands::Schema { json, .. }
            | Commands::Cite { json, .. }
            | Commands::Identify { json, .. } => *json,
            Commands::Types | Commands::Styles => false,
        }
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Types => commands::types::execute(),
        Commands::Styles => commands::styles::execute(),
        Commands::Schema { source_type, json } => {
            commands::schema::execute(&source_type, json || config.wants_json())
        }
        Commands::Cite {
            source_type,
            style,
            fields,
            input,
            json,
            export,
        } => commands::cite::execute(
            commands::cite::CiteArgs {
                source_type,
                style,
                fields,
                input,
                json,
                export,
            },
            config,
        ),
        Commands::Identify { identifier, json } => {
            commands::identify::execute(&identifier, json || config.wants_json())
        }
    }
}
