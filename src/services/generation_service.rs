//! services/generation_service.rs
//! Generación de variantes de mensaje con el modelo local (Ollama).

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::app_config::GeneratorConfig,
    error::GenerationError,
    models::generation_model::{GenerateRequest, GenerateResponse},
    services::{message_parser::parse_messages, prompt_service::MAX_MESSAGE_CHARS},
};

/// Endpoint de texto generativo: prompt -> completion cruda
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Clone)]
pub struct OllamaClient {
    http_client: Client,
    config: GeneratorConfig,
}

impl OllamaClient {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.config.base_url);
        log::info!(
            "(complete) POST {} model={} prompt_len={}",
            url,
            self.config.model,
            prompt.len()
        );

        let resp = self
            .http_client
            .post(&url)
            .json(&GenerateRequest {
                model: &self.config.model,
                prompt,
                stream: false,
            })
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            log::error!("(complete) Ollama respondió {}: {}", status, body);
            return Err(GenerationError::Status { status, body });
        }

        let result = resp.json::<GenerateResponse>().await?;
        Ok(result.response.trim().to_string())
    }
}

/// Pide los mensajes al modelo y los pasa por el parser tolerante.
/// Los que superan el largo máximo se descartan.
pub async fn generate_messages(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<Vec<String>, GenerationError> {
    let content = generator.complete(prompt).await?;
    log::info!("(generate_messages) Respuesta cruda del modelo:\n{}", content);

    let (messages, too_long): (Vec<String>, Vec<String>) = parse_messages(&content)?
        .into_iter()
        .partition(|m| m.chars().count() <= MAX_MESSAGE_CHARS);

    if !too_long.is_empty() {
        log::warn!(
            "(generate_messages) Se descartaron {} mensajes de más de {} caracteres",
            too_long.len(),
            MAX_MESSAGE_CHARS
        );
        for m in &too_long {
            log::debug!(
                "(generate_messages) Descartado ({} caracteres): {}",
                m.chars().count(),
                m
            );
        }
    }
    Ok(messages)
}
