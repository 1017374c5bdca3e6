//! Load a school's content record from a JSON file into `tenant_sites`.
//!
//! Usage:
//!   DATABASE_URL=... ./import-content --school greenfield --template classic1 --file greenfield.json
//!   ./import-content --school greenfield --template classic1 --file greenfield.json --dry-run

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use schoolsite_api::{
    db,
    middleware::tenant::is_valid_slug,
    models::content::TenantContent,
    services::{derive, normalize::normalize, tenants::TenantService},
    templates,
};

#[derive(Parser)]
#[command(name = "import-content", about = "Import a school's website content")]
struct Args {
    /// School slug the content is published under
    #[arg(long)]
    school: String,

    /// Template id used when the school's site is served
    #[arg(long)]
    template: String,

    /// Path to the content JSON document
    #[arg(long)]
    file: PathBuf,

    /// Validate and summarise without writing to the database
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    if !is_valid_slug(&args.school) {
        anyhow::bail!("Invalid school slug: {}", args.school);
    }
    templates::registry()
        .lookup(&args.template)
        .with_context(|| format!("Cannot import with template {}", args.template))?;

    let raw = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {:?}", args.file))?;
    let content: TenantContent = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {:?}", args.file))?;
    content.validate()?;
    if content.meta.school_id != args.school {
        tracing::warn!(
            "meta.schoolId ({}) differs from --school ({}); stored under --school",
            content.meta.school_id,
            args.school
        );
    }

    let site = normalize(content.clone());
    let now = Utc::now();
    tracing::info!(
        "{}: {} active announcement(s), {} upcoming featured event(s), {} facility group(s), {} gallery image(s)",
        site.meta.school_name,
        derive::active_announcements(&site, now).len(),
        derive::upcoming_featured_events(&site, now, derive::DEFAULT_EVENT_LIMIT).len(),
        derive::grouped_facilities(&site).len(),
        site.gallery.len(),
    );

    if args.dry_run {
        tracing::info!("Dry run: nothing written");
        return Ok(());
    }

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL required")?;
    let pool = db::create_pool(&database_url).await?;
    db::run_migrations(&pool).await?;

    let row = TenantService::upsert(&pool, &args.school, &args.template, &content).await?;
    tracing::info!("Stored content for {} (site {}, template {})", row.school_id, row.id, row.template_id);

    Ok(())
}
