//! bin/send.rs
//! Envía la primera campaña `ready-to-send` a todos los contactos.

use std::sync::Arc;

use anyhow::{Context, Result};
use dotenv::dotenv;

use whatsapp_campaigns::{
    config::app_config::{DispatchSettings, StoreConfig, WhatsAppConfig},
    error::ConfigError,
    logger::init_logger,
    services::{
        campaign_runner::DispatchRun, dispatch_service::Dispatcher, store_service::AppwriteStore,
        whatsapp_service::WhatsAppSender,
    },
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logger();

    let store_config = StoreConfig::from_env().context("Invalid Appwrite configuration")?;
    if store_config.contacts_collection_id.is_none() {
        return Err(ConfigError::Missing("WHATSAPP_CONTACTS_COLLECTION_ID").into());
    }
    let whatsapp_config = WhatsAppConfig::from_env().context("Invalid WhatsApp configuration")?;
    let settings = DispatchSettings::from_env().context("Invalid dispatch settings")?;
    log::info!(
        "Delay entre mensajes={:?}, settle={:?}, test_mode={}",
        settings.delay_between_msgs,
        settings.settle_time,
        settings.test_mode
    );

    let dispatcher = Dispatcher::new(Arc::new(WhatsAppSender::new(whatsapp_config)), settings);
    let run = DispatchRun::new(Arc::new(AppwriteStore::new(store_config)), dispatcher);

    let mut rng = rand::thread_rng();
    match run.run(&mut rng).await {
        Ok(outcome) => log::info!("Corrida terminada: {:?}", outcome),
        Err(e) => log::error!("Corrida abortada: {:?}", e),
    }
    Ok(())
}
