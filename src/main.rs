use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use healthlog_api::{config::Config, db, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    info!("Record store ready at {}", config.database_url);
    info!(
        "Daily goal {} kcal, estimator weight {} kg",
        config.daily_goal, config.user_weight_kg
    );

    let addr = format!("{}:{}", config.host, config.port);
    let app = router(AppState::new(pool, config));

    info!("healthlog API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
