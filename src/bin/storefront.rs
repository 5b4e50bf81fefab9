use catalog_demo::client::{self, CatalogClient, ViewState};
use catalog_demo::config::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = ClientConfig::from_env();
    let catalog = CatalogClient::new(config);

    println!("{}", client::render(&ViewState::Loading));
    let state = catalog.load().await;
    println!("{}", client::render(&state));

    if matches!(state, ViewState::Error(_)) {
        std::process::exit(1);
    }
    Ok(())
}
