//! Errors

use tracing::error;

use carts_app::domain::{carts::CartsServiceError, products::ProductsServiceError};

use crate::errors::CartsHttpError;

/// Collaborator failures are never the caller's fault, so every variant is a 500.
pub(crate) fn from_carts_error(error: CartsServiceError) -> CartsHttpError {
    match error {
        CartsServiceError::Sql(source) => error!("cart store query failed: {source}"),
        CartsServiceError::NotFound => error!("cart disappeared during the request"),
        CartsServiceError::InvalidData => error!("stored cart document could not be decoded"),
        other => error!("cart store rejected the write: {other}"),
    }

    CartsHttpError::Internal
}

pub(crate) fn from_products_error(error: ProductsServiceError) -> CartsHttpError {
    match error {
        ProductsServiceError::Sql(source) => error!("product lookup failed: {source}"),
        other => error!("product lookup returned an error: {other}"),
    }

    CartsHttpError::Internal
}
