use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::error::AppResult;
use crate::models::{Category, Product};
use crate::store::RecordStore;

pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

// ── Products ──────────────────────────────────────────────────────────────────

pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the table if needed and apply the fixed seed rows. Safe to run
    /// on every startup; existing rows are left untouched.
    pub async fn provision(&self, seed: &[Product]) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id          SERIAL PRIMARY KEY,
                name        TEXT NOT NULL,
                description TEXT NOT NULL,
                price       NUMERIC(10, 2) NOT NULL CHECK (price >= 0)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        for product in seed {
            sqlx::query(
                "INSERT INTO products (id, name, description, price)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .execute(&self.pool)
            .await?;
        }

        // Seeding writes explicit ids; keep the serial in step with them.
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('products', 'id'),
                           (SELECT COALESCE(MAX(id), 1) FROM products))",
        )
        .execute(&self.pool)
        .await?;

        info!("Provisioned products table ({} seed rows)", seed.len());
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgProductStore {
    type Entity = Product;

    async fn list_all(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}

// ── Categories ────────────────────────────────────────────────────────────────

pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn provision(&self, seed: &[Category]) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id          INTEGER PRIMARY KEY,
                name        TEXT NOT NULL,
                description TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        for category in seed {
            sqlx::query(
                "INSERT INTO categories (id, name, description)
                 VALUES ($1, $2, $3)
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.description)
            .execute(&self.pool)
            .await?;
        }

        info!("Provisioned categories table ({} seed rows)", seed.len());
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgCategoryStore {
    type Entity = Category;

    async fn list_all(&self) -> AppResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }
}
