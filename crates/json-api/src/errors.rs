//! API error envelope.

use salvo::{
    Writer, async_trait,
    catcher::Catcher,
    http::ResBody,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use carts_app::domain::{carts::models::CartUuid, products::models::ProductUuid};

/// Outcome marker carried by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ResponseStatus {
    Success,
    Error,
}

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Always `error`
    pub status: ResponseStatus,

    /// Human-readable reason
    pub message: String,
}

/// Failures a cart request can end in.
///
/// The `Display` text is what clients see as `message`, so internal failures stay generic and
/// their cause is logged where they are raised.
#[derive(Debug, Error)]
pub(crate) enum CartsHttpError {
    #[error("products must be an array")]
    ProductsNotAnArray,

    #[error("invalid product reference: {0}")]
    InvalidProductReference(String),

    #[error("invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error("product with id {0} does not exist")]
    ProductNotFound(ProductUuid),

    #[error("cart with id {0} does not exist")]
    CartNotFound(CartUuid),

    #[error("product with id {product} is not in cart {cart}")]
    ProductNotInCart { cart: CartUuid, product: ProductUuid },

    #[error("cart is already empty")]
    CartAlreadyEmpty,

    #[error("an error occurred while processing the request")]
    Internal,
}

impl CartsHttpError {
    pub(crate) fn status_code(&self) -> StatusCode {
        match self {
            Self::ProductsNotAnArray
            | Self::InvalidProductReference(_)
            | Self::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            Self::ProductNotFound(_)
            | Self::CartNotFound(_)
            | Self::ProductNotInCart { .. }
            | Self::CartAlreadyEmpty => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[async_trait]
impl Writer for CartsHttpError {
    async fn write(self, _req: &mut Request, _depot: &mut Depot, res: &mut Response) {
        res.status_code(self.status_code());
        res.render(Json(ErrorResponse {
            status: ResponseStatus::Error,
            message: self.to_string(),
        }));
    }
}

/// Rewrites error responses produced outside the handlers (unmatched routes, rejected path or
/// body extractors) into the same `{status, message}` envelope.
#[handler]
async fn error_envelope(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    if !(status.is_client_error() || status.is_server_error()) {
        return;
    }

    let message = match &res.body {
        ResBody::None => status.canonical_reason().unwrap_or("error").to_owned(),
        ResBody::Error(error) if !error.brief.is_empty() => error.brief.clone(),
        ResBody::Error(error) => error.name.clone(),
        _ => return,
    };

    res.status_code(status);
    res.render(Json(ErrorResponse {
        status: ResponseStatus::Error,
        message,
    }));

    ctrl.skip_rest();
}

/// Catcher that keeps every error response in the JSON envelope.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(error_envelope)
}

impl EndpointOutRegister for CartsHttpError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Product or cart not found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description).add_content(
                    "application/json",
                    oapi::Content::new(ErrorResponse::to_schema(components)),
                ),
            );
        }
    }
}
