use uuid::Uuid;

use crate::models::Product;
use crate::store::ProductStore;

/// (name, price, category, in_stock) for the catalog loaded on every start.
static SEED: &[(&str, f64, &str, bool)] = &[
    ("Wireless Mouse", 29.99, "Electronics", true),
    ("Mechanical Keyboard", 89.99, "Electronics", true),
    ("USB-C Cable", 12.99, "Accessories", false),
    ("Laptop Stand", 45.00, "Accessories", true),
    ("Webcam HD", 79.99, "Electronics", true),
];

/// The seed products with freshly generated ids.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|&(name, price, category, in_stock)| Product {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price,
            category: category.to_string(),
            in_stock,
        })
        .collect()
}

/// A store holding only the seed products.
pub fn seeded_store() -> ProductStore {
    ProductStore::with_products(seed_products())
}
