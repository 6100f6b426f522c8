use sea_orm::Database;
use tracing::info;

use holocron_migration::{Migrator, MigratorTrait};

use holocron_server::config::HolocronConfig;
use holocron_server::router::build_router;
use holocron_server::state::AppState;
use holocron_server::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = HolocronConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    let state = AppState { db };
    let router = build_router(state);

    let http_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("holocron listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
