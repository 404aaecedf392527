//! Create Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    carts::{
        errors::from_carts_error,
        lookups::resolve_products,
        models::{CartEnvelope, ProductReferenceRequest},
    },
    errors::CartsHttpError,
    extensions::*,
    state::State,
};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Array of `{ id, quantity }` product references
    #[serde(default)]
    pub obj: Value,
}

impl CreateCartRequest {
    /// Decode `obj` into product references, rejecting anything that is not an array of them.
    fn into_references(self) -> Result<Vec<ProductReferenceRequest>, CartsHttpError> {
        if !self.obj.is_array() {
            return Err(CartsHttpError::ProductsNotAnArray);
        }

        serde_json::from_value(self.obj)
            .map_err(|source| CartsHttpError::InvalidProductReference(source.to_string()))
    }
}

/// Create Cart Handler
///
/// Every product must exist; the first unknown id aborts the request before anything is stored.
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart created"),
    ),
)]
#[tracing::instrument(
    name = "carts.create",
    skip(json, depot),
    fields(cart_uuid = tracing::field::Empty, products_count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartEnvelope>, CartsHttpError> {
    let requested = json.into_inner().into_references()?;
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let span = tracing::Span::current();

    span.record("products_count", requested.len());

    let products = resolve_products(&state.app, requested).await?;

    let cart = state
        .app
        .carts
        .create_cart(products)
        .await
        .map_err(from_carts_error)?;

    span.record("cart_uuid", tracing::field::display(cart.uuid));

    tracing::info!(cart_uuid = %cart.uuid, "created cart");

    Ok(Json(CartEnvelope::new(Some(cart))))
}
