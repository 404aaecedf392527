//! List Carts Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::from_carts_error, models::CartsResponse},
    errors::CartsHttpError,
    extensions::*,
    state::State,
};

/// List Carts Handler
///
/// Returns every cart in creation order.
#[endpoint(tags("carts"), summary = "List Carts")]
#[tracing::instrument(name = "carts.index", skip(depot), err)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartsResponse>, CartsHttpError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let carts = state
        .app
        .carts
        .list_carts()
        .await
        .map_err(from_carts_error)?;

    Ok(Json(carts.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use carts_app::domain::{
        carts::{CartsServiceError, MockCartsService, models::ProductReference},
        products::{MockProductsService, models::ProductUuid},
    };

    use crate::{
        errors::ErrorResponse,
        test_helpers::{cart_service, make_cart, read_only_carts},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        cart_service(
            carts,
            MockProductsService::new(),
            Router::with_path("carts").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_wraps_carts_in_named_field() -> TestResult {
        let mut carts = read_only_carts();

        let first = make_cart(vec![ProductReference::new(ProductUuid::new(), 1)]);
        let second = make_cart(Vec::new());
        let expected = vec![first.uuid.into_uuid(), second.uuid.into_uuid()];

        carts
            .expect_list_carts()
            .once()
            .return_once(move || Ok(vec![first, second]));

        let mut res = TestClient::get("http://example.com/carts")
            .send(&make_service(carts))
            .await;

        let body: CartsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.carts.iter().map(|cart| cart.id).collect::<Vec<_>>(),
            expected
        );
        assert_eq!(body.carts.first().map(|cart| cart.products.len()), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_with_no_carts_returns_empty_list() -> TestResult {
        let mut carts = read_only_carts();

        carts
            .expect_list_carts()
            .once()
            .return_once(|| Ok(Vec::new()));

        let mut res = TestClient::get("http://example.com/carts")
            .send(&make_service(carts))
            .await;

        let body: CartsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.carts.is_empty(), "expected no carts");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_failure_returns_500() -> TestResult {
        let mut carts = read_only_carts();

        carts
            .expect_list_carts()
            .once()
            .return_once(|| Err(CartsServiceError::InvalidData));

        let mut res = TestClient::get("http://example.com/carts")
            .send(&make_service(carts))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(body.message, "an error occurred while processing the request");

        Ok(())
    }
}
