use autocomplete::errors::AutocompleteError;
use autocomplete::stores::{MatchSource, MemorySource, SqliteSource};
use autocomplete::utils::env_config::{resolve_database_path, resolve_limit};
use autocomplete::{App, Query};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "autocomplete",
    version,
    about = "Refine rough candidate lists into short autocomplete suggestions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest completions for a pattern
    Suggest {
        /// Autocomplete type, e.g. name, location, species_list
        #[arg(short = 't', long = "type")]
        kind: String,

        /// Maximum number of suggestions (falls back to AUTOCOMPLETE_LIMIT)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Candidate file, one entry per line
        #[arg(short, long, conflicts_with = "db")]
        candidates: Option<PathBuf>,

        /// SQLite database to query (falls back to AUTOCOMPLETE_DB)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Table holding the candidates
        #[arg(long, default_value = "candidates")]
        table: String,

        /// Column holding the candidate text
        #[arg(long, default_value = "name")]
        column: String,

        /// Print JSON instead of one entry per line
        #[arg(long)]
        json: bool,

        pattern: String,
    },

    /// List registered autocomplete types
    Types,
}

fn open_source(
    candidates: Option<PathBuf>,
    db: Option<PathBuf>,
    table: &str,
    column: &str,
) -> Result<Arc<dyn MatchSource>, AutocompleteError> {
    if let Some(path) = candidates {
        return Ok(Arc::new(MemorySource::from_file(&path)?));
    }
    match resolve_database_path(db) {
        Some(path) => Ok(Arc::new(SqliteSource::open(&path, table, column)?)),
        None => Err(AutocompleteError::configuration("No match source configured")
            .with_hint("Pass --candidates FILE, --db PATH, or set AUTOCOMPLETE_DB.")),
    }
}

fn run(cli: Cli) -> Result<(), AutocompleteError> {
    let app = App::initialize()?;
    match cli.command {
        Commands::Suggest {
            kind,
            limit,
            candidates,
            db,
            table,
            column,
            json,
            pattern,
        } => {
            let limit = resolve_limit(limit)?;
            let source = open_source(candidates, db, &table, &column)?;
            let engine = app.engine(&kind, source)?;
            let suggestions = engine.run(&Query::new(pattern, limit)?)?;
            if json {
                let rendered = serde_json::to_string_pretty(&suggestions)
                    .map_err(|err| AutocompleteError::internal(err.to_string()))?;
                println!("{}", rendered);
            } else {
                println!("{}", suggestions.refined);
                for entry in &suggestions.matches {
                    println!("{}", entry);
                }
            }
        }
        Commands::Types => {
            for (identifier, type_name) in app
                .registry
                .identifiers()
                .iter()
                .zip(app.registry.type_names())
            {
                println!("{:<14} {}", identifier, type_name);
            }
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("autocomplete: {}", err);
        if let Some(hint) = &err.hint {
            eprintln!("hint: {}", hint);
        }
        std::process::exit(1);
    }
}
