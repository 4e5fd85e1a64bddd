use serde::{Deserialize, Deserializer, Serialize};

/// Core catalog entity. `id` is owned by the store and never taken from a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    pub fn from_input(id: String, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }
}

// ── Request payload ──────────────────────────────────────────────────────────

/// Body accepted by create and update.
///
/// Decoding is lenient: unknown keys (a client-sent `id` included) are dropped,
/// and absent or `null` fields fall back to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductInput {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub in_stock: bool,
}

impl ProductInput {
    /// Presence checks applied on create only. Update stores the body as-is.
    pub fn is_valid_for_create(&self) -> bool {
        !self.name.is_empty() && self.price > 0.0 && !self.category.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
