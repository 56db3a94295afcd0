//! CLI administration tool for short-url.
//!
//! Provides schema setup, diagnostics, and direct allocation/lookup against
//! the PostgreSQL store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the urls table
//! cargo run --bin admin -- db migrate
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Shorten or resolve from the command line
//! cargo run --bin admin -- shorten https://example.com/a
//! cargo run --bin admin -- resolve aB3dE5f
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection, required
//! - `CODE_LENGTH`, `MAX_ALLOCATION_ATTEMPTS`, `MAX_URL_LENGTH`: as for the server

use short_url::application::services::{AllocatorService, LookupService};
use short_url::config::{self, Config, mask_connection_string};
use short_url::domain::repositories::UrlRepository;
use short_url::infrastructure::persistence::{PgUrlRepository, pool};
use short_url::utils::base_url::with_trailing_slash;
use short_url::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-url.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Show statistics
    Stats,

    /// Shorten a URL
    Shorten {
        /// Long URL starting with http:// or https://
        url: String,
    },

    /// Look up the long URL behind a short code
    Resolve {
        /// Short code
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create or upgrade the schema
    Migrate,

    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Stats => handle_stats(repository(&pool)).await?,
        Commands::Shorten { url } => handle_shorten(&config, repository(&pool), &url).await?,
        Commands::Resolve { code } => handle_resolve(repository(&pool), &code).await?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL (or DB_USER, DB_PASSWORD, DB_NAME) must be set")?;

    pool::connect(config, database_url).await.with_context(|| {
        format!(
            "Failed to connect to database {}",
            mask_connection_string(database_url)
        )
    })
}

fn repository(pool: &PgPool) -> Arc<dyn UrlRepository> {
    Arc::new(PgUrlRepository::new(Arc::new(pool.clone())))
}

/// Handles database schema and diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            pool::run_migrations(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "✅ Database tables created successfully!".green().bold());
        }
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Displays the number of stored URLs.
async fn handle_stats(repository: Arc<dyn UrlRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = repository
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;

    println!("  URLs: {}", count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Allocates a short code for `url` and prints it.
async fn handle_shorten(
    config: &Config,
    repository: Arc<dyn UrlRepository>,
    url: &str,
) -> Result<()> {
    let allocator =
        AllocatorService::new(repository, Arc::new(RandomCodeGenerator::new(config.code_length)))
            .with_max_attempts(config.max_allocation_attempts)
            .with_max_url_length(config.max_url_length);

    let allocation = allocator
        .allocate(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    let code = allocation.record.short_code;
    if allocation.created {
        println!("{} {}", "✅ Created:".green().bold(), code.bright_yellow().bold());
    } else {
        println!(
            "{} {}",
            "ℹ️  URL already shortened:".yellow(),
            code.bright_yellow().bold()
        );
    }

    if let Some(ref base) = config.base_url {
        println!("  {}", format!("{}{}", with_trailing_slash(base), code).cyan());
    }

    Ok(())
}

/// Prints the long URL behind `code`.
async fn handle_resolve(repository: Arc<dyn UrlRepository>, code: &str) -> Result<()> {
    let lookup = LookupService::new(repository);

    match lookup.resolve(code).await {
        Ok(long_url) => {
            println!("  {} → {}", code.cyan(), long_url.bright_white());
            Ok(())
        }
        Err(short_url::AppError::NotFound(message)) => {
            println!("{}", format!("❌ {}", message).red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Lookup failed: {}", e)),
    }
}
