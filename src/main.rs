use anyhow::Context;
use tracing::{info, warn, Instrument};

use catalog_services::product_actor::ProductRequest;
use catalog_services::user_actor::UserRequest;
use catalog_services::{setup_tracing, AppConfig, CatalogSystem, Lookup};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load_default()?;
    setup_tracing(&config.logging.level);

    info!("Starting catalog services");
    let system = CatalogSystem::new(&config);

    let span = tracing::info_span!("user_creation");
    let user = async {
        info!("Creating demo user");
        system.user_service.add_user(UserRequest {
            first_name: "Alice".into(),
            last_name: "Liddell".into(),
            email: "alice@example.com".into(),
            phone: String::new(),
            address: None,
        }).await
    }
    .instrument(span)
    .await?;
    println!("{}", serde_json::to_string_pretty(&user)?);

    let span = tracing::info_span!("product_lifecycle");
    async {
        let created = system.product_service.create_product(ProductRequest {
            name: "Widget".into(),
            price: 9.99,
            description: "A small blue gadget".into(),
            category: "Tools".into(),
            image_url: String::new(),
            stock_quantity: 10,
        }).await?;
        println!("{}", serde_json::to_string_pretty(&created)?);

        let id = created.id.context("store did not assign an identifier")?;
        system.product_service.delete_product(id).await?;

        match system.product_service.get_product_by_id(&id.to_string()).await? {
            Lookup::Found(product) => warn!(product_id = %id, active = product.active, "Deleted product still listed"),
            Lookup::NotFound => info!(product_id = %id, "Deleted product hidden from lookups"),
        }

        let matches = system.product_service.search_products("Widget").await?;
        println!("{}", serde_json::to_string_pretty(&matches)?);
        anyhow::Ok(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Catalog services completed successfully");
    Ok(())
}
