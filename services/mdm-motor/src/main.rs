//! mdm-motor Service - HV Motor Material Inventory

use std::sync::Arc;

use electra_bootstrap::{Infrastructure, run};
use tracing::info;

use mdm_motor::api::material_routes;
use mdm_motor::application::ServiceHandler;
use mdm_motor::infrastructure::PostgresMaterialRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    run(&config_dir, |infra: Infrastructure| async move {
        info!("Initializing mdm-motor Service...");

        let material_repo = Arc::new(PostgresMaterialRepository::new(infra.postgres_pool()));
        info!("Repositories initialized");

        let handler = Arc::new(ServiceHandler::new(material_repo));

        Ok(material_routes(handler))
    })
    .await
}
