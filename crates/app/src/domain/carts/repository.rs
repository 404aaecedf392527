//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, types::Json};

use crate::domain::carts::models::{Cart, CartUuid, ProductReference};

const LIST_CARTS_SQL: &str = include_str!("sql/list_carts.sql");
const FIND_CART_SQL: &str = include_str!("sql/find_cart.sql");
const CREATE_CART_SQL: &str = include_str!("sql/create_cart.sql");
const APPEND_CART_PRODUCT_SQL: &str = include_str!("sql/append_cart_product.sql");
const REPLACE_CART_PRODUCTS_SQL: &str = include_str!("sql/replace_cart_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_carts(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(LIST_CARTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Option<Cart>, sqlx::Error> {
        query_as::<Postgres, Cart>(FIND_CART_SQL)
            .bind(cart.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        products: &[ProductReference],
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(CREATE_CART_SQL)
            .bind(cart.into_uuid())
            .bind(Json(products))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn append_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        product: ProductReference,
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(APPEND_CART_PRODUCT_SQL)
            .bind(cart.into_uuid())
            .bind(Json(product))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn replace_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        products: &[ProductReference],
    ) -> Result<Cart, sqlx::Error> {
        query_as::<Postgres, Cart>(REPLACE_CART_PRODUCTS_SQL)
            .bind(cart.into_uuid())
            .bind(Json(products))
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Cart {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let Json(products) = row.try_get::<Json<Vec<ProductReference>>, _>("products")?;

        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            products,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
