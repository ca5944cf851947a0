//! CLI administration tool for the book catalog.
//!
//! Talks to the PostgreSQL store directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection and row counts
//! cargo run --bin admin -- db check
//!
//! # Insert the sample books (skipped when books exist)
//! cargo run --bin admin -- seed
//!
//! # List all books
//! cargo run --bin admin -- books list
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use book_catalog::application::seed::seed_catalog;
use book_catalog::config::Config;
use book_catalog::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the book catalog.
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

    /// Insert the sample books into an empty catalog
    Seed,

    /// Book operations
    Books {
        #[command(subcommand)]
        action: BooksAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and show row counts
    Check,
}

/// Book subcommands.
#[derive(Subcommand)]
enum BooksAction {
    /// List all books with price and authors
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Seed => handle_seed(&pool).await?,
        Commands::Books { action } => handle_books_action(action, &pool).await?,
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
            println!();

            let state = AppState::postgres(Arc::new(pool.clone()));
            let books = state.book_service.count_books().await?;
            let authors = state.author_service.count_authors().await?;

            println!("  Books:   {}", books.to_string().bright_green().bold());
            println!("  Authors: {}", authors.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

/// Runs migrations and inserts the sample books.
async fn handle_seed(pool: &PgPool) -> Result<()> {
    println!("{}", "Seeding catalog".bright_blue().bold());
    println!();

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    let state = AppState::postgres(Arc::new(pool.clone()));
    let seeded = seed_catalog(&state.book_service, &state.author_service).await?;

    if seeded.is_empty() {
        println!("{}", "  Catalog already has books, nothing inserted".yellow());
    } else {
        for book in &seeded {
            println!("  {} {}", "+".green().bold(), book.title.cyan());
        }
        println!();
        println!("{}", "Sample books inserted".green().bold());
    }
    println!();

    Ok(())
}

/// Dispatches book commands.
async fn handle_books_action(action: BooksAction, pool: &PgPool) -> Result<()> {
    match action {
        BooksAction::List => list_books(pool).await,
    }
}

/// Lists all books.
///
/// # Output Format
///
/// ```text
/// Books
///
///   ID  Title                          Published    Price          Authors
///   ----------------------------------------------------------------------------
///   1   Spring Microservices           2016-06-28   45.83 USD      Felipe Gutierrez
/// ```
async fn list_books(pool: &PgPool) -> Result<()> {
    println!("{}", "Books".bright_blue().bold());
    println!();

    let state = AppState::postgres(Arc::new(pool.clone()));
    let books = state.book_service.list_books().await?;

    if books.is_empty() {
        println!("{}", "  No books found".yellow());
        println!();
        println!("  Insert samples with: {} admin seed", "cargo run --bin".bright_cyan());
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<12} {:<14} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Published".bright_white().bold(),
        "Price".bright_white().bold(),
        "Authors".bright_white().bold()
    );
    println!("  {}", "-".repeat(76).bright_black());

    for book in &books {
        let authors = book
            .authors
            .iter()
            .map(|a| format!("{} {}", a.first_name, a.last_name))
            .collect::<Vec<_>>()
            .join(", ");

        println!(
            "  {:<3} {:<30} {:<12} {:<14} {}",
            book.id.to_string().bright_black(),
            book.title.cyan(),
            book.published_date.to_string().bright_black(),
            format!("{} {}", book.price.amount, book.price.currency),
            authors
        );
    }

    println!();
    println!("  Total: {}", books.len().to_string().bright_white().bold());
    println!();

    Ok(())
}
