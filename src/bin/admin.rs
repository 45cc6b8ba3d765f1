//! CLI administration tool for petclinic.
//!
//! Provides commands for browsing owners, removing records that the REST API
//! cannot delete, viewing statistics and performing database checks.
//!
//! # Usage
//!
//! ```bash
//! # List owners, optionally filtered by last-name prefix
//! cargo run --bin admin -- owner list --last-name Dav
//!
//! # Delete an owner together with their pets and visits
//! cargo run --bin admin -- owner delete 11
//!
//! # Delete a pet or a single visit without prompting
//! cargo run --bin admin -- pet delete 14 -y
//! cargo run --bin admin -- visit delete 5 -y
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_NAME`/`DB_USER`/`DB_PASSWORD`:
//!   PostgreSQL connection, resolved the same way as for the server

use petclinic::config::Config;
use petclinic::domain::entities::Owner;
use petclinic::domain::repositories::{OwnerRepository, PetRepository, VisitRepository};
use petclinic::infrastructure::persistence::{
    PgOwnerRepository, PgPetRepository, PgVisitRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing petclinic data.
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
    /// Browse and remove owners
    Owner {
        #[command(subcommand)]
        action: OwnerAction,
    },

    /// Remove pets
    Pet {
        #[command(subcommand)]
        action: DeleteAction,
    },

    /// Remove visits
    Visit {
        #[command(subcommand)]
        action: DeleteAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum OwnerAction {
    /// List owners with their pets
    List {
        /// Only owners whose last name starts with this prefix
        #[arg(short, long)]
        last_name: Option<String>,
    },

    /// Delete an owner, their pets and the pets' visits
    Delete {
        id: i32,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DeleteAction {
    /// Delete a record by id
    Delete {
        id: i32,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Owner { action } => handle_owner_action(action, pool).await?,
        Commands::Pet {
            action: DeleteAction::Delete { id, yes },
        } => delete_pet(PgPetRepository::new(pool), id, yes).await?,
        Commands::Visit {
            action: DeleteAction::Delete { id, yes },
        } => delete_visit(PgVisitRepository::new(pool), id, yes).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches owner commands.
async fn handle_owner_action(action: OwnerAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgOwnerRepository::new(pool);

    match action {
        OwnerAction::List { last_name } => list_owners(&repo, last_name).await?,
        OwnerAction::Delete { id, yes } => delete_owner(&repo, id, yes).await?,
    }

    Ok(())
}

/// Lists owners with their pets.
///
/// # Output Format
///
/// ```text
/// Owners
///
///   ID  Name                     City            Telephone   Pets
///   ────────────────────────────────────────────────────────────────
///   1   George Franklin          Madison         6085551023  Leo
/// ```
async fn list_owners(repo: &PgOwnerRepository, last_name: Option<String>) -> Result<()> {
    println!("{}", "📋 Owners".bright_blue().bold());
    println!();

    let owners = match last_name.as_deref() {
        Some(prefix) => repo.find_by_last_name(prefix).await,
        None => repo.find_all().await,
    }
    .map_err(|e| anyhow::anyhow!("Failed to list owners: {}", e))?;

    if owners.is_empty() {
        println!("{}", "  No owners found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<24} {:<15} {:<11} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "City".bright_white().bold(),
        "Telephone".bright_white().bold(),
        "Pets".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for owner in &owners {
        println!(
            "  {:<4} {:<24} {:<15} {:<11} {}",
            owner_id(owner).bright_black(),
            full_name(owner).cyan(),
            owner.city,
            owner.telephone.bright_black(),
            pet_names(owner)
        );
    }

    println!();
    println!(
        "  Total: {}",
        owners.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes an owner after confirmation (default: No).
async fn delete_owner(repo: &PgOwnerRepository, id: i32, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Owner".bright_blue().bold());
    println!();

    let owner = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Owner not found")?;

    println!("  Owner: {}", full_name(&owner).cyan());
    println!("  ID:    {}", id.to_string().bright_black());
    if !owner.pets().is_empty() {
        println!("  Pets:  {}", pet_names(&owner).yellow());
    }
    println!();

    if !skip_confirm && !confirm("Delete this owner, their pets and visits?")? {
        return Ok(());
    }

    repo.delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete owner: {}", e))?;

    println!("{}", "✅ Owner deleted".green().bold());
    Ok(())
}

async fn delete_pet(repo: PgPetRepository, id: i32, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Pet".bright_blue().bold());
    println!();

    let pet = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Pet not found")?;

    println!("  Pet:    {}", pet.name.cyan());
    println!("  Visits: {}", pet.visits().len().to_string().bright_black());
    println!();

    if !skip_confirm && !confirm("Delete this pet and its visits?")? {
        return Ok(());
    }

    repo.delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete pet: {}", e))?;

    println!("{}", "✅ Pet deleted".green().bold());
    Ok(())
}

async fn delete_visit(repo: PgVisitRepository, id: i32, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Visit".bright_blue().bold());
    println!();

    if !skip_confirm && !confirm(&format!("Delete visit {id}?"))? {
        return Ok(());
    }

    let deleted = repo
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete visit: {}", e))?;

    if deleted {
        println!("{}", "✅ Visit deleted".green().bold());
    } else {
        println!("{}", "⚠️  Visit not found".yellow());
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
    }

    Ok(confirmed)
}

/// Displays record counts per table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for (label, table) in [
        ("Owners", "owners"),
        ("Pets", "pets"),
        ("Visits", "visits"),
        ("Vets", "vets"),
        ("Pet types", "types"),
        ("Specialties", "specialties"),
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count {table}"))?;

        println!(
            "  {:<13}{}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
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
            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

fn owner_id(owner: &Owner) -> String {
    owner.id.map(|id| id.to_string()).unwrap_or_default()
}

fn full_name(owner: &Owner) -> String {
    format!("{} {}", owner.first_name(), owner.last_name())
}

fn pet_names(owner: &Owner) -> String {
    owner
        .pets()
        .iter()
        .map(|pet| pet.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
