//! bin/gen_msg.rs
//! Genera mensajes para una campaña `ready` elegida por el operador.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenv::dotenv;

use whatsapp_campaigns::{
    config::app_config::{GeneratorConfig, StoreConfig},
    logger::init_logger,
    services::{
        campaign_runner::GenerationRun, generation_service::OllamaClient,
        store_service::AppwriteStore,
    },
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logger();

    let store_config = StoreConfig::from_env().context("Invalid Appwrite configuration")?;
    let generator_config = GeneratorConfig::from_env();
    log::info!(
        "Usando Ollama en {} (modelo {})",
        generator_config.base_url,
        generator_config.model
    );

    let run = GenerationRun::new(
        Arc::new(AppwriteStore::new(store_config)),
        Arc::new(OllamaClient::new(generator_config)),
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut rng = rand::thread_rng();

    match run.run(&mut rng, &mut input, &mut output).await {
        Ok(outcome) => log::info!("Corrida terminada: {:?}", outcome),
        Err(e) => {
            log::error!("Corrida abortada: {:?}", e);
            writeln!(output, "❌ {:#}", e)?;
        }
    }
    Ok(())
}
