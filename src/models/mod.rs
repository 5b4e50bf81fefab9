pub mod category;
pub mod product;

pub use category::Category;
pub use product::Product;

/// Entities addressable by their integer primary key.
pub trait HasId {
    fn id(&self) -> i32;
}

impl HasId for Product {
    fn id(&self) -> i32 {
        self.id
    }
}

impl HasId for Category {
    fn id(&self) -> i32 {
        self.id
    }
}
