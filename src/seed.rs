//! Fixed seed rows applied once when a store is provisioned. The services
//! expose no write endpoints, so these lists are the entire catalog.

use rust_decimal_macros::dec;

use crate::models::{Category, Product};

pub fn products() -> Vec<Product> {
    let rows = [
        (1, "Laptop", "High-performance laptop", dec!(1299.99)),
        (2, "Mouse", "Wireless mouse", dec!(29.99)),
        (3, "Keyboard", "Mechanical keyboard", dec!(89.99)),
        (4, "Monitor", "27-inch 4K monitor", dec!(449.99)),
        (5, "Headphones", "Noise-cancelling headphones", dec!(199.99)),
    ];

    rows.into_iter()
        .map(|(id, name, description, price)| Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
        })
        .collect()
}

pub fn categories() -> Vec<Category> {
    let rows = [
        (1, "Electronics", "Electronic devices and accessories"),
        (2, "Computers", "Laptops, desktops, and computer parts"),
        (3, "Peripherals", "Keyboards, mice, and other peripherals"),
        (4, "Audio", "Headphones, speakers, and audio equipment"),
        (5, "Displays", "Monitors and display devices"),
    ];

    rows.into_iter()
        .map(|(id, name, description)| Category {
            id,
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
}
