//! models/generation_model.rs
//! Payloads de `/api/generate` de Ollama.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Texto crudo del modelo
    #[serde(default)]
    pub response: String,
}

/// Contexto efímero con el que se arma un prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub business_name: String,
    pub description: String,
    pub target: String,
    pub tone: &'static str,
}
