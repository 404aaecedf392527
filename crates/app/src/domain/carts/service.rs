//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::carts::{
        errors::CartsServiceError,
        models::{Cart, CartUuid, ProductReference},
        repository::PgCartsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    repository: PgCartsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCartsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let carts = self.repository.list_carts(&mut tx).await?;

        tx.commit().await?;

        Ok(carts)
    }

    async fn find_cart(&self, cart: CartUuid) -> Result<Option<Cart>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.repository.find_cart(&mut tx, cart).await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn create_cart(
        &self,
        products: Vec<ProductReference>,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_cart(&mut tx, CartUuid::new(), &products)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn add_product(
        &self,
        cart: CartUuid,
        product: ProductReference,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .append_product(&mut tx, cart, product)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn replace_products(
        &self,
        cart: CartUuid,
        products: Vec<ProductReference>,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .replace_products(&mut tx, cart, &products)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieves every cart, oldest first.
    async fn list_carts(&self) -> Result<Vec<Cart>, CartsServiceError>;

    /// Retrieve a single cart, or `None` when no cart has that UUID.
    async fn find_cart(&self, cart: CartUuid) -> Result<Option<Cart>, CartsServiceError>;

    /// Creates a new cart holding `products`; the store assigns its UUID.
    async fn create_cart(&self, products: Vec<ProductReference>)
    -> Result<Cart, CartsServiceError>;

    /// Appends one entry to the cart's product list. Existing entries for the same
    /// product are left alone, so repeated adds produce duplicates.
    async fn add_product(
        &self,
        cart: CartUuid,
        product: ProductReference,
    ) -> Result<Cart, CartsServiceError>;

    /// Overwrites the cart's product list.
    async fn replace_products(
        &self,
        cart: CartUuid,
        products: Vec<ProductReference>,
    ) -> Result<Cart, CartsServiceError>;
}
