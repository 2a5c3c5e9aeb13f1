use std::sync::Arc;

use usersvc::{app, build_app, db, users::PgUserStore, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "usersvc=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;

    let pool = db::connect(&config.database).await?;
    tracing::info!("connected to the database");
    db::migrate(&pool).await?;

    let (host, port) = (config.host.clone(), config.port);
    let state = AppState::new(Arc::new(PgUserStore::new(pool.clone())), config);

    let result = app::serve(build_app(state), &host, port).await;

    pool.close().await;
    tracing::info!("database pool closed");
    result
}
