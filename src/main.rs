//! main.rs
//! API HTTP para dar de alta y consultar campañas.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use whatsapp_campaigns::{
    app,
    config::app_config::StoreConfig,
    logger::init_logger,
    services::store_service::{AppwriteStore, CampaignStore},
};

const BIND_ADDR: (&str, u16) = ("0.0.0.0", 5022);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let store_config = StoreConfig::from_env().map_err(|e| {
        log::error!("Configuración inválida: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    let store: Arc<dyn CampaignStore> = Arc::new(AppwriteStore::new(store_config));

    log::info!("Levantando servidor en {}:{}", BIND_ADDR.0, BIND_ADDR.1);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(store.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind(BIND_ADDR)?
    .run()
    .await
}
