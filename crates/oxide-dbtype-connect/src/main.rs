//! oxide-dbtype CLI
//!
//! Command-line tool for inspecting dialects and managing tables.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use oxide_dbtype_connect::prelude::*;

/// Per-database SQL dialect rules and table DDL.
#[derive(Parser)]
#[command(name = "oxide-dbtype")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL (`jdbc:` prefixed or native).
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    database: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dialect rules of the database.
    Describe,

    /// Check that the database answers its ping statement.
    Ping,

    /// Print the CREATE TABLE statements for a schema file.
    Ddl {
        /// JSON table schema.
        #[arg(short, long)]
        schema: PathBuf,

        /// Add IF NOT EXISTS where supported.
        #[arg(long)]
        if_not_exists: bool,
    },

    /// Create the table described by a schema file.
    CreateTable {
        /// JSON table schema.
        #[arg(short, long)]
        schema: PathBuf,

        /// Add IF NOT EXISTS where supported.
        #[arg(long)]
        if_not_exists: bool,

        /// Show SQL without executing (dry run).
        #[arg(long)]
        dry_run: bool,
    },

    /// Drop the table described by a schema file.
    DropTable {
        /// JSON table schema.
        #[arg(short, long)]
        schema: PathBuf,

        /// Keep going when a statement fails.
        #[arg(long)]
        ignore_errors: bool,

        /// Show SQL without executing (dry run).
        #[arg(long)]
        dry_run: bool,
    },
}

fn read_schema(path: &Path) -> Result<TableInfo> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Describe => {
            let target = ConnectionTarget::parse(&cli.database)?;
            let db = target.database_type();
            println!("{}", serde_json::to_string_pretty(db.profile())?);
            println!(
                "driver available: {}",
                if db.is_driver_available() { "yes" } else { "no" }
            );
        }

        Commands::Ping => {
            let source = ConnectionSource::open(&cli.database).await?;
            let db = source.database_type();
            let value = source.ping().await?;
            check_ping(db, value)?;
            info!(dialect = db.name(), statement = db.ping_statement(), "Database is alive");
            source.close().await;
        }

        Commands::Ddl {
            schema,
            if_not_exists,
        } => {
            let db = ConnectionTarget::parse(&cli.database)?.database_type();
            let table = read_schema(&schema)?;
            let ddl = db.create_table_statements(&table, if_not_exists)?;
            println!("{}{} for {}", db.comment_line_prefix(), table.name, db.name());
            for sql in ddl.all_sql() {
                println!("{sql};");
            }
        }

        Commands::CreateTable {
            schema,
            if_not_exists,
            dry_run,
        } => {
            let table = read_schema(&schema)?;
            let source = ConnectionSource::open(&cli.database).await?;
            if dry_run {
                info!("Dry run mode - SQL will be printed but not executed.");
            }
            let executor = TableExecutor::new(source.clone()).dry_run(dry_run);
            if if_not_exists {
                executor.create_table_if_not_exists(&table).await?;
            } else {
                executor.create_table(&table).await?;
            }
            source.close().await;
        }

        Commands::DropTable {
            schema,
            ignore_errors,
            dry_run,
        } => {
            let table = read_schema(&schema)?;
            let source = ConnectionSource::open(&cli.database).await?;
            if dry_run {
                info!("Dry run mode - SQL will be printed but not executed.");
            }
            TableExecutor::new(source.clone())
                .dry_run(dry_run)
                .drop_table(&table, ignore_errors)
                .await?;
            source.close().await;
        }
    }

    Ok(())
}
