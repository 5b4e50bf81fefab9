use std::sync::Arc;

use catalog_demo::config::ServiceConfig;
use catalog_demo::service::{self, ServiceInfo};
use catalog_demo::store::postgres::{connect, PgCategoryStore};
use catalog_demo::seed;
use tracing::info;

const INFO: ServiceInfo = ServiceInfo {
    resource: "categories",
    name: "categories-api",
    title: "Categories API",
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = ServiceConfig::from_env(8000)?;

    info!("Connecting to PostgreSQL...");
    let pool = connect(&config.database_url).await?;
    let store = PgCategoryStore::new(pool);
    store.provision(&seed::categories()).await?;

    let addr = format!("{}:{}", config.host, config.port);
    service::serve(INFO, Arc::new(store), &addr).await
}
