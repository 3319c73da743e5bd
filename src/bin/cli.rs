//! FolioDB Admin CLI
//!
//! Runs the store operations against a local database root.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use foliodb::{Config, Database, Document, ReadPolicy};

/// FolioDB CLI
#[derive(Parser, Debug)]
#[command(name = "foliodb-cli")]
#[command(about = "Admin CLI for the FolioDB document store")]
#[command(version)]
struct Args {
    /// Database root directory
    #[arg(short, long, default_value = "./foliodb_data")]
    data_dir: String,

    /// Surface unreadable document files as errors instead of skipping them
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a document from a JSON object
    Create {
        /// Collection to create in
        collection: String,

        /// Document body as a JSON object
        body: String,
    },

    /// Get a document by id
    Get {
        /// Collection to read from
        collection: String,

        /// Document id
        id: String,
    },

    /// Merge a partial JSON object into an existing document
    Update {
        /// Collection holding the document
        collection: String,

        /// Document id
        id: String,

        /// Partial body as a JSON object
        body: String,
    },

    /// Delete a document by id
    Delete {
        /// Collection holding the document
        collection: String,

        /// Document id
        id: String,
    },

    /// List all documents in a collection
    List {
        /// Collection to list
        collection: String,
    },

    /// List the collections under the database root
    Collections,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,foliodb=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> foliodb::Result<()> {
    let read_policy = if args.strict {
        ReadPolicy::Strict
    } else {
        ReadPolicy::Lenient
    };

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .read_policy(read_policy)
        .build();

    let db = Database::open(config)?;

    match args.command {
        Commands::Create { collection, body } => {
            let body: Document = serde_json::from_str(&body)?;
            let stored = db.collection(&collection)?.create(body)?;
            print_json(&stored)?;
        }

        Commands::Get { collection, id } => match db.collection(&collection)?.read(&id)? {
            Some(document) => print_json(&document)?,
            None => println!("not found"),
        },

        Commands::Update {
            collection,
            id,
            body,
        } => {
            let partial: Document = serde_json::from_str(&body)?;
            let store = db.collection(&collection)?;
            store.update(&id, partial)?;

            match store.read(&id)? {
                Some(document) => print_json(&document)?,
                None => println!("not found"),
            }
        }

        Commands::Delete { collection, id } => {
            db.collection(&collection)?.delete(&id)?;
        }

        Commands::List { collection } => {
            print_json(&db.collection(&collection)?.list()?)?;
        }

        Commands::Collections => {
            for name in db.collection_names()? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> foliodb::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
