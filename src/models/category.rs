use serde::{Deserialize, Serialize};

/// Catalog category. Seeded once at provisioning; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}
