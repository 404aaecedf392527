//! Empty Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    carts::{errors::from_carts_error, lookups::cart_or_404, models::CartEnvelope},
    errors::CartsHttpError,
    extensions::*,
    state::State,
};

/// Empty Cart Handler
///
/// The cart itself is kept; only its product list is cleared.
#[endpoint(
    tags("carts"),
    summary = "Empty Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart emptied"),
    ),
)]
#[tracing::instrument(
    name = "carts.empty",
    skip(cart, depot),
    fields(cart_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartEnvelope>, CartsHttpError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = cart.into_inner();

    tracing::Span::current().record("cart_uuid", tracing::field::display(cart));

    let cart = cart_or_404(&state.app, cart.into()).await?;

    if cart.is_empty() {
        return Err(CartsHttpError::CartAlreadyEmpty);
    }

    let emptied = state
        .app
        .carts
        .replace_products(cart.uuid, Vec::new())
        .await
        .map_err(from_carts_error)?;

    tracing::info!(cart_uuid = %emptied.uuid, "emptied cart");

    let message = format!("cart {} was emptied", emptied.uuid);

    Ok(Json(CartEnvelope::with_message(emptied, message)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use carts_app::domain::{
        carts::{
            MockCartsService,
            models::{CartUuid, ProductReference},
        },
        products::{MockProductsService, models::ProductUuid},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{cart_service, expect_cart, make_cart_with_uuid, read_only_carts},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        let mut products = MockProductsService::new();

        products.expect_find_product().never();

        cart_service(
            carts,
            products,
            Router::with_path("carts/{cart}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_empty_clears_products() -> TestResult {
        let mut carts = MockCartsService::new();
        let cart = CartUuid::new();

        expect_cart(
            &mut carts,
            cart,
            Some(make_cart_with_uuid(
                cart,
                vec![
                    ProductReference::new(ProductUuid::new(), 1),
                    ProductReference::new(ProductUuid::new(), 5),
                ],
            )),
        );

        carts
            .expect_replace_products()
            .once()
            .withf(move |uuid, references| *uuid == cart && references.is_empty())
            .return_once(|uuid, references| Ok(make_cart_with_uuid(uuid, references)));

        let mut res = TestClient::delete(format!("http://example.com/carts/{cart}"))
            .send(&make_service(carts))
            .await;

        let body: CartEnvelope = res.take_json().await?;
        let emptied = body.cart.ok_or("expected the emptied cart")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(emptied.products.is_empty(), "expected no products");
        assert_eq!(body.message, Some(format!("cart {cart} was emptied")));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_already_empty_cart_returns_404() -> TestResult {
        let mut carts = read_only_carts();
        let cart = CartUuid::new();

        expect_cart(&mut carts, cart, Some(make_cart_with_uuid(cart, Vec::new())));

        let mut res = TestClient::delete(format!("http://example.com/carts/{cart}"))
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, "cart is already empty");

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_unknown_cart_returns_404() -> TestResult {
        let mut carts = read_only_carts();
        let cart = CartUuid::new();

        expect_cart(&mut carts, cart, None);

        let mut res = TestClient::delete(format!("http://example.com/carts/{cart}"))
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.message, format!("cart with id {cart} does not exist"));

        Ok(())
    }
}
