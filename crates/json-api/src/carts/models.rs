//! Cart request and response schemas.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carts_app::domain::carts::models::{Cart, ProductReference};

use crate::errors::ResponseStatus;

pub(crate) fn default_quantity() -> u32 {
    1
}

/// Product Reference Request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductReferenceRequest {
    /// The product to reference
    pub id: Uuid,

    /// How many units, defaults to 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Product Reference Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductReferenceResponse {
    /// The referenced product
    pub id: Uuid,

    /// How many units
    pub quantity: u32,
}

impl From<ProductReference> for ProductReferenceResponse {
    fn from(reference: ProductReference) -> Self {
        Self {
            id: reference.uuid.into(),
            quantity: reference.quantity,
        }
    }
}

/// Cart Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the cart
    pub id: Uuid,

    /// Product references in insertion order
    pub products: Vec<ProductReferenceResponse>,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.uuid.into(),
            products: cart
                .products
                .into_iter()
                .map(ProductReferenceResponse::from)
                .collect(),
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// Single cart envelope.
///
/// `cart` is `null` when a lookup by id found nothing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartEnvelope {
    /// Always `success`
    pub status: ResponseStatus,

    /// What the request changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The cart after the request
    pub cart: Option<CartResponse>,
}

impl CartEnvelope {
    pub(crate) fn new(cart: Option<Cart>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: None,
            cart: cart.map(CartResponse::from),
        }
    }

    pub(crate) fn with_message(cart: Cart, message: String) -> Self {
        Self {
            message: Some(message),
            ..Self::new(Some(cart))
        }
    }
}

/// Cart collection envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartsResponse {
    /// Always `success`
    pub status: ResponseStatus,

    /// Every stored cart
    pub carts: Vec<CartResponse>,
}

impl From<Vec<Cart>> for CartsResponse {
    fn from(carts: Vec<Cart>) -> Self {
        Self {
            status: ResponseStatus::Success,
            carts: carts.into_iter().map(CartResponse::from).collect(),
        }
    }
}
