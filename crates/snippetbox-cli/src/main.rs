//! Snippetbox CLI
//!
//! Command-line front end for publishing and reading snippets

use clap::{Parser, Subcommand};
use snippetbox_cli::commands::{self, CommandError};
use snippetbox_cli::config::{self, Overrides, Settings};
use snippetbox_core::logging_facility;
use snippetbox_core_types::RequestContext;
use snippetbox_store::SnippetStore;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "snippetbox")]
#[command(about = "Snippetbox - publish short-lived text snippets", long_about = None)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to the SQLite database
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Publish a new snippet
    Create(commands::create::CreateArgs),
    /// Show one live snippet
    View(commands::view::ViewArgs),
    /// List the most recent live snippets
    Latest(commands::latest::LatestArgs),
}

impl Commands {
    fn route(&self) -> &'static str {
        match self {
            Commands::Create(_) => "create",
            Commands::View(_) => "view",
            Commands::Latest(_) => "latest",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let settings = match config::load(&Overrides {
        config_file: cli.config,
        db_path: cli.db,
    }) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    logging_facility::init(settings.log_profile.into());

    let ctx = RequestContext::new().with_route(cli.command.route());
    let span = ctx.span();
    let _entered = span.enter();

    match run(&settings, cli.command) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            report(&e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(settings: &Settings, command: Commands) -> Result<String, CommandError> {
    if let Some(parent) = settings.db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CommandError::Internal(Box::new(e)))?;
        }
    }

    let store = SnippetStore::open(&settings.db_path, &settings.store_options())?;

    match command {
        Commands::Create(args) => commands::create::execute(&store, args),
        Commands::View(args) => commands::view::execute(&store, args),
        Commands::Latest(args) => commands::latest::execute(&store, args),
    }
}

fn report(err: &CommandError) {
    match err {
        CommandError::Internal(cause) => {
            tracing::error!(error = %cause, "request failed");
            eprintln!("Error: {}", err);
        }
        CommandError::Invalid(errors) => {
            eprintln!("Error: {}", err);
            for (field, message) in errors.sorted() {
                eprintln!("  {}: {}", field, message);
            }
        }
        CommandError::BadRequest(_) | CommandError::NotFound => {
            eprintln!("Error: {}", err);
        }
    }
}
