use carts_app::{
    database::{self, Db},
    domain::products::{
        PgProductsService, ProductsService,
        models::{NewProduct, ProductUuid},
    },
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product title
    #[arg(long)]
    title: String,

    /// Price in minor units (pence/cents)
    #[arg(long)]
    price: u64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional product UUID; generated when omitted
    #[arg(long)]
    uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    if args.title.trim().is_empty() {
        return Err("title cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    let product = service
        .create_product(NewProduct {
            uuid: args.uuid.map_or_else(ProductUuid::new, ProductUuid::from_uuid),
            title: args.title,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_uuid: {}", product.uuid);
    println!("product_title: {}", product.title);
    println!("product_price: {}", product.price);

    Ok(())
}
