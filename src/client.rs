//! The aggregating client behind the `storefront` binary: fetches the full
//! product and category lists from the two resource services and renders a
//! unified catalog view.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::models::{Category, Product};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to fetch {resource}: {source}")]
    Transport {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to fetch {resource}: server returned {status}")]
    Status {
        resource: &'static str,
        status: StatusCode,
    },
}

/// Everything the storefront shows on one screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

/// Render state of the storefront. Either fetch failing fails the whole
/// view; there is no partial rendering.
#[derive(Debug)]
pub enum ViewState {
    Loading,
    Error(String),
    Ready(CatalogView),
}

pub struct CatalogClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Both fetches run concurrently; no invariant depends on their order.
    pub async fn fetch_catalog(&self) -> Result<CatalogView, ClientError> {
        let (products, categories) = tokio::try_join!(
            self.fetch_list::<Product>(&self.config.products_api, "products"),
            self.fetch_list::<Category>(&self.config.categories_api, "categories"),
        )?;

        Ok(CatalogView {
            products,
            categories,
        })
    }

    pub async fn load(&self) -> ViewState {
        match self.fetch_catalog().await {
            Ok(view) => ViewState::Ready(view),
            Err(e) => {
                tracing::error!("Error fetching data: {}", e);
                ViewState::Error(e.to_string())
            }
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        base_url: &str,
        resource: &'static str,
    ) -> Result<Vec<T>, ClientError> {
        let url = format!("{}/api/{}", base_url.trim_end_matches('/'), resource);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Transport { resource, source })?;

        if !response.status().is_success() {
            return Err(ClientError::Status {
                resource,
                status: response.status(),
            });
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Transport { resource, source })
    }
}

/// Terminal rendering of the view state. Empty lists come out as empty
/// sections, not errors.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::Loading => "Loading...".to_string(),
        ViewState::Error(message) => format!("Error: {}", message),
        ViewState::Ready(view) => {
            let mut out = String::new();
            out.push_str("Catalog\n=======\n");

            out.push_str(&format!("\nProducts ({})\n", view.products.len()));
            for product in &view.products {
                out.push_str(&format!(
                    "  {:<12} ${:>8}  {}\n",
                    product.name, product.price, product.description
                ));
            }

            out.push_str(&format!("\nCategories ({})\n", view.categories.len()));
            for category in &view.categories {
                out.push_str(&format!(
                    "  {:<12} {}\n",
                    category.name, category.description
                ));
            }

            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::Router;

    use crate::seed;
    use crate::service::{self, ServiceInfo};
    use crate::store::memory::{MemoryStore, UnavailableStore};

    const PRODUCTS: ServiceInfo = ServiceInfo {
        resource: "products",
        name: "products-api",
        title: "Products API",
    };

    const CATEGORIES: ServiceInfo = ServiceInfo {
        resource: "categories",
        name: "categories-api",
        title: "Categories API",
    };

    /// Serve `app` on an ephemeral port, returning its base URL.
    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn client_against(products: Router, categories: Router) -> CatalogClient {
        let config = ClientConfig {
            products_api: spawn(products).await,
            categories_api: spawn(categories).await,
        };
        CatalogClient::new(config)
    }

    #[tokio::test]
    async fn fetches_and_merges_both_backends() {
        let client = client_against(
            service::router(PRODUCTS, Arc::new(MemoryStore::new(seed::products()))),
            service::router(CATEGORIES, Arc::new(MemoryStore::new(seed::categories()))),
        )
        .await;

        let view = client.fetch_catalog().await.unwrap();
        assert_eq!(view.products.len(), 5);
        assert_eq!(view.categories.len(), 5);
        assert_eq!(view.products[0].name, "Laptop");
    }

    #[tokio::test]
    async fn one_failing_backend_fails_the_whole_view() {
        // Products succeed (200 with an empty list); categories return 500.
        let client = client_against(
            service::router(
                PRODUCTS,
                Arc::new(MemoryStore::new(Vec::<Product>::new())),
            ),
            service::router(CATEGORIES, Arc::new(UnavailableStore::<Category>::new())),
        )
        .await;

        match client.load().await {
            ViewState::Error(message) => {
                assert!(message.contains("categories"), "got: {}", message);
                assert!(message.contains("500"), "got: {}", message);
            }
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Nothing listens on this port once the listener is dropped.
        let dead = {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };
        let config = ClientConfig {
            products_api: dead,
            categories_api: spawn(service::router(
                CATEGORIES,
                Arc::new(MemoryStore::new(seed::categories())),
            ))
            .await,
        };

        let result = CatalogClient::new(config).fetch_catalog().await;
        assert!(matches!(
            result,
            Err(ClientError::Transport { resource: "products", .. })
        ));
    }

    #[tokio::test]
    async fn empty_lists_render_as_empty_sections() {
        let client = client_against(
            service::router(PRODUCTS, Arc::new(MemoryStore::new(Vec::<Product>::new()))),
            service::router(
                CATEGORIES,
                Arc::new(MemoryStore::new(Vec::<Category>::new())),
            ),
        )
        .await;

        let state = client.load().await;
        let rendered = render(&state);
        assert!(rendered.contains("Products (0)"));
        assert!(rendered.contains("Categories (0)"));
        assert!(!rendered.starts_with("Error"));
    }

    #[test]
    fn render_loading_and_error_states() {
        assert_eq!(render(&ViewState::Loading), "Loading...");
        assert_eq!(
            render(&ViewState::Error("boom".to_string())),
            "Error: boom"
        );
    }
}
