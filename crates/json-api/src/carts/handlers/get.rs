//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::from_carts_error, models::CartEnvelope},
    errors::CartsHttpError,
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// An unknown cart is not an error here: the envelope comes back with `cart: null`.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart, or null when it does not exist"),
    ),
)]
#[tracing::instrument(
    name = "carts.get",
    skip(cart, depot),
    fields(cart_uuid = tracing::field::Empty, found = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartEnvelope>, CartsHttpError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();

    let span = tracing::Span::current();

    span.record("cart_uuid", tracing::field::display(cart));

    let found = state
        .app
        .carts
        .find_cart(cart.into())
        .await
        .map_err(from_carts_error)?;

    span.record("found", found.is_some());

    Ok(Json(CartEnvelope::new(found)))
}
