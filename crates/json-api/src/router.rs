//! App Router

use salvo::Router;

use crate::carts;

/// Cart routes mounted under `collection`.
pub(crate) fn app_router(collection: &str) -> Router {
    Router::with_path(collection.trim_matches('/'))
        .get(carts::index::handler)
        .post(carts::create::handler)
        .push(
            Router::with_path("{cart}")
                .get(carts::get::handler)
                .put(carts::update::handler)
                .delete(carts::empty::handler)
                .push(
                    Router::with_path("products/{product}").post(carts::products::create::handler),
                )
                .push(
                    Router::with_path("product/{product}").delete(carts::products::delete::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use salvo::{
        http::StatusCode,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use carts_app::domain::{
        carts::{MockCartsService, models::ProductReference},
        products::{MockProductsService, models::ProductUuid},
    };

    use crate::{
        carts::models::CartEnvelope,
        errors::{ErrorResponse, ResponseStatus},
        test_helpers::{cart_service, expect_cart, expect_product, make_cart, read_only_carts},
    };

    use super::*;

    #[tokio::test]
    async fn collection_segment_is_configurable() -> TestResult {
        let mut carts = read_only_carts();

        carts
            .expect_list_carts()
            .once()
            .return_once(|| Ok(Vec::new()));

        let service = cart_service(carts, MockProductsService::new(), app_router("/baskets/"));

        let found = TestClient::get("http://example.com/baskets")
            .send(&service)
            .await;

        let missing = TestClient::get("http://example.com/carts")
            .send(&service)
            .await;

        assert_eq!(found.status_code, Some(StatusCode::OK));
        assert_eq!(missing.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn rejected_requests_keep_the_error_envelope() -> TestResult {
        let cart = uuid::Uuid::now_v7();
        let service = cart_service(
            read_only_carts(),
            MockProductsService::new(),
            app_router("carts"),
        );

        let responses = vec![
            TestClient::get("http://example.com/carts/not-a-uuid")
                .send(&service)
                .await,
            TestClient::put(format!("http://example.com/carts/{cart}"))
                .json(&json!({}))
                .send(&service)
                .await,
            TestClient::delete(format!("http://example.com/carts/{cart}/product/not-a-uuid"))
                .send(&service)
                .await,
        ];

        for mut res in responses {
            let body: ErrorResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
            assert_eq!(body.status, ResponseStatus::Error);
            assert!(!body.message.is_empty());
        }

        Ok(())
    }

    #[tokio::test]
    async fn unknown_route_keeps_the_error_envelope() -> TestResult {
        let service = cart_service(
            read_only_carts(),
            MockProductsService::new(),
            app_router("carts"),
        );

        let mut res = TestClient::get("http://example.com/baskets")
            .send(&service)
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.status, ResponseStatus::Error);

        Ok(())
    }

    #[tokio::test]
    async fn add_then_remove_scenario() -> TestResult {
        let first = ProductUuid::new();
        let second = ProductUuid::new();
        let cart = make_cart(vec![ProductReference::new(first, 1)]);
        let uuid = cart.uuid;

        let mut with_second = cart.clone();
        with_second.products.push(ProductReference::new(second, 3));

        let mut carts = MockCartsService::new();
        let mut products = MockProductsService::new();

        expect_product(&mut products, second);
        expect_cart(&mut carts, uuid, Some(cart.clone()));

        let added = with_second.clone();

        carts
            .expect_add_product()
            .once()
            .return_once(move |_, _| Ok(added));

        let service = cart_service(carts, products, app_router("carts"));

        let mut res = TestClient::post(format!(
            "http://example.com/carts/{uuid}/products/{second}"
        ))
        .json(&json!({ "quantity": 3 }))
        .send(&service)
        .await;

        let body: CartEnvelope = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.cart.map(|cart| cart.products.len()), Some(2));

        let mut carts = MockCartsService::new();
        let mut products = MockProductsService::new();

        expect_product(&mut products, second);
        expect_cart(&mut carts, uuid, Some(with_second));

        carts
            .expect_replace_products()
            .once()
            .withf(move |_, references| *references == [ProductReference::new(first, 1)])
            .return_once(move |_, _| Ok(cart));

        let service = cart_service(carts, products, app_router("carts"));

        let mut res = TestClient::delete(format!(
            "http://example.com/carts/{uuid}/product/{second}"
        ))
        .send(&service)
        .await;

        let body: CartEnvelope = res.take_json().await?;
        let cart = body.cart.ok_or("expected the cart")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            cart.products
                .iter()
                .map(|entry| (entry.id, entry.quantity))
                .collect::<Vec<_>>(),
            vec![(first.into_uuid(), 1)]
        );

        Ok(())
    }
}
