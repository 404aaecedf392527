//! Add Product To Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carts_app::domain::carts::models::ProductReference;

use crate::{
    carts::{
        errors::from_carts_error,
        lookups::{cart_or_404, product_or_404},
        models::{CartEnvelope, default_quantity},
    },
    errors::CartsHttpError,
    extensions::*,
    state::State,
};

/// Add Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddProductRequest {
    /// How many units, defaults to 1
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl AddProductRequest {
    /// Decode the optional body; an empty one means a single unit.
    async fn from_request(req: &mut Request) -> Result<Self, CartsHttpError> {
        let payload = req
            .payload()
            .await
            .map_err(|source| CartsHttpError::InvalidRequestBody(source.to_string()))?;

        if payload.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self {
                quantity: default_quantity(),
            });
        }

        serde_json::from_slice(payload)
            .map_err(|source| CartsHttpError::InvalidRequestBody(source.to_string()))
    }
}

/// Add Product To Cart Handler
///
/// Appends a new entry even when the product is already in the cart. The body is optional and is
/// only checked once the product and cart are known to exist.
#[endpoint(
    tags("carts"),
    summary = "Add Product to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Product added"),
    ),
)]
#[tracing::instrument(
    name = "carts.products.create",
    skip(cart, product, req, depot),
    fields(
        cart_uuid = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartEnvelope>, CartsHttpError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let body = AddProductRequest::from_request(req).await;
    let cart = cart.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();

    span.record("cart_uuid", tracing::field::display(cart));
    span.record("product_uuid", tracing::field::display(product));

    let product = product_or_404(&state.app, product.into()).await?;
    let cart = cart_or_404(&state.app, cart.into()).await?;
    let quantity = body?.quantity;

    span.record("quantity", quantity);

    let updated = state
        .app
        .carts
        .add_product(cart.uuid, ProductReference::new(product.uuid, quantity))
        .await
        .map_err(from_carts_error)?;

    tracing::info!(cart_uuid = %updated.uuid, product_uuid = %product.uuid, "added product to cart");

    let message = format!("product {} added to cart {}", product.uuid, updated.uuid);

    Ok(Json(CartEnvelope::with_message(updated, message)))
}
