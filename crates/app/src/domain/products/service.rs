//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn find_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.find_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let price = i64::try_from(product.price)?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_product(&mut tx, product, price)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Look up a live product, returning `None` when it doesn't exist or was deleted.
    async fn find_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<Product>, ProductsServiceError>;

    /// Creates a new product with the given UUID, title and price.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn create_product_returns_stored_fields() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ProductUuid::new();

        let product = ctx
            .products
            .create_product(NewProduct {
                uuid,
                title: "Espresso beans".to_string(),
                price: 1_299,
            })
            .await?;

        assert_eq!(product.uuid, uuid);
        assert_eq!(product.title, "Espresso beans");
        assert_eq!(product.price, 1_299);
        assert!(product.deleted_at.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn find_product_returns_created_product() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.create_product("Filter papers", 350).await;

        let found = ctx.products.find_product(created.uuid).await?;

        assert_eq!(found, Some(created));

        Ok(())
    }

    #[tokio::test]
    async fn find_product_unknown_uuid_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let found = ctx.products.find_product(ProductUuid::new()).await?;

        assert!(found.is_none(), "expected no product, got {found:?}");

        Ok(())
    }

    #[tokio::test]
    async fn find_product_skips_soft_deleted_products() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.create_product("Discontinued grinder", 8_900).await;

        sqlx::query("UPDATE products SET deleted_at = now() WHERE uuid = $1")
            .bind(created.uuid.into_uuid())
            .execute(ctx.db.pool())
            .await?;

        let found = ctx.products.find_product(created.uuid).await?;

        assert!(found.is_none(), "expected deleted product to be hidden");

        Ok(())
    }

    #[tokio::test]
    async fn create_product_duplicate_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx.create_product("Grinder", 8_900).await;

        let result = ctx
            .products
            .create_product(NewProduct {
                uuid: created.uuid,
                title: "Grinder (again)".to_string(),
                price: 100,
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_product_with_oversized_price_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx
            .products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                title: "Priceless".to_string(),
                price: u64::MAX,
            })
            .await;

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidPrice(_))),
            "expected InvalidPrice, got {result:?}"
        );
    }
}
