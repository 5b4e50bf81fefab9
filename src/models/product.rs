use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product. Rows are written once at provisioning time; the service
/// exposes no write path, so instances are effectively immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Stored as NUMERIC(10,2); serializes as a plain JSON number.
    pub price: Decimal,
}
