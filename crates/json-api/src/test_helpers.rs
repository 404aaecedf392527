//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use carts_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartUuid, ProductReference},
        },
        products::{
            MockProductsService,
            models::{Product, ProductUuid},
        },
    },
};

use crate::{errors::catcher, state::State};

/// Serve `route` with the given collaborator mocks injected as state.
pub(crate) fn cart_service(
    carts: MockCartsService,
    products: MockProductsService,
    route: Router,
) -> Service {
    let app = AppContext::new(Arc::new(carts), Arc::new(products));

    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
    .catcher(catcher())
}

/// A cart store mock that fails the test on any write.
pub(crate) fn read_only_carts() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_add_product().never();
    carts.expect_replace_products().never();

    carts
}

pub(crate) fn make_cart(products: Vec<ProductReference>) -> Cart {
    make_cart_with_uuid(CartUuid::new(), products)
}

pub(crate) fn make_cart_with_uuid(uuid: CartUuid, products: Vec<ProductReference>) -> Cart {
    Cart {
        uuid,
        products,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        title: "Test Product".to_string(),
        price: 1_299,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

/// Expect one lookup of `product`, answering with a stored record.
pub(crate) fn expect_product(products: &mut MockProductsService, product: ProductUuid) {
    products
        .expect_find_product()
        .once()
        .withf(move |uuid| *uuid == product)
        .return_once(move |uuid| Ok(Some(make_product(uuid))));
}

/// Expect one lookup of `product`, answering that it does not exist.
pub(crate) fn expect_missing_product(products: &mut MockProductsService, product: ProductUuid) {
    products
        .expect_find_product()
        .once()
        .withf(move |uuid| *uuid == product)
        .return_once(|_| Ok(None));
}

/// Expect one lookup of `cart`, answering with `found`.
pub(crate) fn expect_cart(carts: &mut MockCartsService, cart: CartUuid, found: Option<Cart>) {
    carts
        .expect_find_cart()
        .once()
        .withf(move |uuid| *uuid == cart)
        .return_once(move |_| Ok(found));
}
