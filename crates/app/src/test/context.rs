//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        carts::PgCartsService,
        products::{
            PgProductsService, ProductsService,
            models::{NewProduct, Product, ProductUuid},
        },
    },
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub products: PgProductsService,
    pub carts: PgCartsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            products: PgProductsService::new(db.clone()),
            carts: PgCartsService::new(db),
            db: test_db,
        }
    }

    /// Seed a product for the lookup side of cart operations.
    pub async fn create_product(&self, title: &str, price: u64) -> Product {
        self.products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                title: title.to_string(),
                price,
            })
            .await
            .expect("Failed to create test product")
    }
}
