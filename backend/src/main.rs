use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use schoolsite_api::{config::Config, db, routes, templates, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(Config::from_env()?);

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    info!("Database connected and migrations applied");

    let ids: Vec<&str> = templates::registry().list().iter().map(|t| t.id).collect();
    info!("Templates registered: {}", ids.join(", "));

    let state = AppState {
        db: pool,
        config: config.clone(),
    };
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!(
        "School site API listening on {} (templates under {}/<template_id>)",
        addr, config.site_base_path
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
