//! Products inside a cart

pub(crate) mod handlers;

pub(crate) use handlers::*;
