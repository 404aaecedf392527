//! Remove Product From Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{
        errors::from_carts_error,
        lookups::{cart_or_404, product_or_404},
        models::CartEnvelope,
    },
    errors::CartsHttpError,
    extensions::*,
    state::State,
};

/// Remove Product From Cart Handler
///
/// Only the first entry for the product is removed; later duplicates stay in place.
#[endpoint(
    tags("carts"),
    summary = "Remove Product from Cart",
    responses(
        (status_code = StatusCode::OK, description = "Product removed"),
    ),
)]
#[tracing::instrument(
    name = "carts.products.delete",
    skip(cart, product, depot),
    fields(cart_uuid = tracing::field::Empty, product_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartEnvelope>, CartsHttpError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();

    span.record("cart_uuid", tracing::field::display(cart));
    span.record("product_uuid", tracing::field::display(product));

    let product = product_or_404(&state.app, product.into()).await?;
    let mut cart = cart_or_404(&state.app, cart.into()).await?;

    if cart.remove_product(product.uuid).is_none() {
        return Err(CartsHttpError::ProductNotInCart {
            cart: cart.uuid,
            product: product.uuid,
        });
    }

    let updated = state
        .app
        .carts
        .replace_products(cart.uuid, cart.products)
        .await
        .map_err(from_carts_error)?;

    tracing::info!(cart_uuid = %updated.uuid, product_uuid = %product.uuid, "removed product from cart");

    let message = format!("product {} removed from cart {}", product.uuid, updated.uuid);

    Ok(Json(CartEnvelope::with_message(updated, message)))
}
