//! Replace Cart Products Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{
        errors::from_carts_error,
        lookups::{cart_or_404, resolve_products},
        models::{CartEnvelope, ProductReferenceRequest},
    },
    errors::CartsHttpError,
    extensions::*,
    state::State,
};

/// Replace Cart Products Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReplaceProductsRequest {
    /// The cart's new product list
    pub products: Vec<ProductReferenceRequest>,
}

/// Replace Cart Products Handler
///
/// Products are checked before the cart; the list is swapped wholesale only when both exist.
#[endpoint(
    tags("carts"),
    summary = "Replace Cart Products",
    responses(
        (status_code = StatusCode::OK, description = "Cart products replaced"),
    ),
)]
#[tracing::instrument(
    name = "carts.update",
    skip(cart, json, depot),
    fields(cart_uuid = tracing::field::Empty, products_count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    json: JsonBody<ReplaceProductsRequest>,
    depot: &mut Depot,
) -> Result<Json<CartEnvelope>, CartsHttpError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let cart = cart.into_inner();

    let span = tracing::Span::current();

    span.record("cart_uuid", tracing::field::display(cart));
    span.record("products_count", request.products.len());

    let products = resolve_products(&state.app, request.products).await?;
    let cart = cart_or_404(&state.app, cart.into()).await?;

    let updated = state
        .app
        .carts
        .replace_products(cart.uuid, products)
        .await
        .map_err(from_carts_error)?;

    tracing::info!(cart_uuid = %updated.uuid, "replaced cart products");

    Ok(Json(CartEnvelope::new(Some(updated))))
}
