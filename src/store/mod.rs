use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Product, ProductInput};

/// Authoritative in-memory set of products, keyed by id.
///
/// Reads (`list`, `get`) share the lock; writes (`create`, `update`, `delete`)
/// hold it exclusively. Every read hands back clones, so callers never see a
/// record change underneath them.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<HashMap<String, Product>>,
}

impl ProductStore {
    /// Loads records verbatim, keeping their ids and stock flags.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self {
            products: RwLock::new(products),
        }
    }

    /// Snapshot of every product. Order is unspecified.
    pub async fn list(&self) -> Vec<Product> {
        self.products.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: &str) -> Option<Product> {
        self.products.read().await.get(id).cloned()
    }

    /// Inserts under a fresh id. `in_stock` is always set to `true`, whatever
    /// the client sent.
    pub async fn create(&self, input: ProductInput) -> Product {
        let mut product = Product::from_input(Uuid::new_v4().to_string(), input);
        product.in_stock = true;

        self.products
            .write()
            .await
            .insert(product.id.clone(), product.clone());
        product
    }

    /// Replaces the whole record at `id`. Never inserts a missing id.
    pub async fn update(&self, id: &str, input: ProductInput) -> Option<Product> {
        let mut products = self.products.write().await;
        let slot = products.get_mut(id)?;
        *slot = Product::from_input(id.to_string(), input);
        Some(slot.clone())
    }

    /// Returns whether a record was removed.
    pub async fn delete(&self, id: &str) -> bool {
        self.products.write().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }
}
