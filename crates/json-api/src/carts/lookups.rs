//! Existence checks shared by the cart handlers.

use carts_app::{
    context::AppContext,
    domain::{
        carts::models::{Cart, CartUuid, ProductReference},
        products::models::{Product, ProductUuid},
    },
};

use crate::{
    carts::{
        errors::{from_carts_error, from_products_error},
        models::ProductReferenceRequest,
    },
    errors::CartsHttpError,
};

pub(super) async fn product_or_404(
    app: &AppContext,
    product: ProductUuid,
) -> Result<Product, CartsHttpError> {
    app.products
        .find_product(product)
        .await
        .map_err(from_products_error)?
        .ok_or(CartsHttpError::ProductNotFound(product))
}

pub(super) async fn cart_or_404(app: &AppContext, cart: CartUuid) -> Result<Cart, CartsHttpError> {
    app.carts
        .find_cart(cart)
        .await
        .map_err(from_carts_error)?
        .ok_or(CartsHttpError::CartNotFound(cart))
}

/// Look up each requested product in order, stopping at the first unknown one.
///
/// Ids come from the stored product records and quantities from the request.
pub(super) async fn resolve_products(
    app: &AppContext,
    requested: Vec<ProductReferenceRequest>,
) -> Result<Vec<ProductReference>, CartsHttpError> {
    let mut resolved = Vec::with_capacity(requested.len());

    for reference in requested {
        let product = product_or_404(app, reference.id.into()).await?;

        resolved.push(ProductReference::new(product.uuid, reference.quantity));
    }

    Ok(resolved)
}
