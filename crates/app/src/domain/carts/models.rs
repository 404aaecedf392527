//! Cart Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::products::models::ProductUuid, uuids::TypedUuid};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub uuid: CartUuid,
    pub products: Vec<ProductReference>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Cart {
    /// Whether the cart holds no product references.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Remove the first entry referring to `product`, keeping the order of the rest.
    pub fn remove_product(&mut self, product: ProductUuid) -> Option<ProductReference> {
        let index = self
            .products
            .iter()
            .position(|entry| entry.uuid == product)?;

        Some(self.products.remove(index))
    }
}

/// A product as embedded in a cart's product list.
///
/// Stored as one element of the cart's JSON document, so the field names here are the
/// persisted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReference {
    #[serde(rename = "id")]
    pub uuid: ProductUuid,
    pub quantity: u32,
}

impl ProductReference {
    #[must_use]
    pub fn new(uuid: ProductUuid, quantity: u32) -> Self {
        Self { uuid, quantity }
    }
}
