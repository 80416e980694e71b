//! QuillDB CLI
//!
//! Command-line interface for inspecting and mutating a QuillDB store.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use quilldb::{Config, Formatter, JsonFormatter, JsonRecord, Store, TableConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// QuillDB CLI
#[derive(Parser, Debug)]
#[command(name = "quilldb-cli")]
#[command(about = "CLI for the QuillDB file-backed record store")]
#[command(version)]
struct Args {
    /// Storage root directory
    #[arg(short, long, default_value = "./quilldb_data")]
    root: String,

    /// Write documents as compact single-line JSON
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get one record by id, or all records of a table
    Get {
        /// The table to read from
        table: String,

        /// Record id; omit to list the whole table
        id: Option<String>,
    },

    /// Insert or update a record from a JSON object
    Put {
        /// The table to write to
        table: String,

        /// Record as a JSON object; an "id" field targets an existing record
        json: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,quilldb=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> quilldb::Result<()> {
    let formatter: Arc<dyn Formatter> = if args.compact {
        Arc::new(JsonFormatter::compact())
    } else {
        Arc::new(JsonFormatter::new())
    };

    let config = Config::builder().root(&args.root).formatter(formatter).build();
    let store = Store::open(config)?;

    match args.command {
        Commands::Get { table, id } => {
            let table = store.table::<JsonRecord>(TableConfig::new(table))?;

            match id {
                Some(id) => match table.get(&id)? {
                    Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                    None => println!("(nil)"),
                },
                None => {
                    for record in table.get_all()? {
                        println!("{}", serde_json::to_string(&record)?);
                    }
                }
            }
        }

        Commands::Put { table, json } => {
            let record = JsonRecord::from_value(serde_json::from_str(&json)?)?;
            let table = store.table::<JsonRecord>(TableConfig::new(table))?;

            let stored = table.put(record)?;
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
    }

    Ok(())
}
