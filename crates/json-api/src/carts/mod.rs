//! Carts

pub(crate) mod errors;
pub(crate) mod handlers;
mod lookups;
pub(crate) mod models;
pub(crate) mod products;

pub(crate) use handlers::*;
