//! services/whatsapp_service.rs
//! Envío de texto por el puente REST de whatsapp-web (Chrome automatizado detrás).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config::app_config::WhatsAppConfig,
    error::SendError,
    models::whatsapp_model::{SendMessagePayload, SessionStatus},
};

/// "Enviar este texto a este número ahora", esperando `settle_time` antes del envío
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_text(
        &self,
        phone: &str,
        message: &str,
        settle_time: Duration,
    ) -> Result<(), SendError>;
}

#[derive(Clone)]
pub struct WhatsAppSender {
    http_client: Client,
    config: WhatsAppConfig,
}

impl WhatsAppSender {
    pub fn new(config: WhatsAppConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    /// Revisa que la sesión del navegador esté CONNECTED
    async fn ensure_connected(&self) -> Result<(), SendError> {
        let status_url = format!(
            "{}/session/status/{}",
            self.config.base_url,
            urlencoding::encode(&self.config.session_id)
        );
        log::debug!("(ensure_connected) Consultando status en URL={}", status_url);

        let resp = self.http_client.get(&status_url).send().await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            log::error!("(ensure_connected) La respuesta NO es exitosa. body='{}'", body);
            return Err(SendError::Status { status, body });
        }

        let session = resp.json::<SessionStatus>().await?;
        if !session.is_connected() {
            let state = session.state.unwrap_or_else(|| "unknown".to_string());
            log::error!("(ensure_connected) Sesión WhatsApp no está CONNECTED ({})", state);
            return Err(SendError::SessionNotConnected(state));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageSender for WhatsAppSender {
    async fn send_text(
        &self,
        phone: &str,
        message: &str,
        settle_time: Duration,
    ) -> Result<(), SendError> {
        self.ensure_connected().await?;

        // Margen para que la pestaña del chat cargue antes de escribir
        if !settle_time.is_zero() {
            tokio::time::sleep(settle_time).await;
        }

        let send_url = format!(
            "{}/client/sendMessage/{}",
            self.config.base_url,
            urlencoding::encode(&self.config.session_id)
        );
        let payload = SendMessagePayload::text(phone, message);
        log::info!(
            "(send_text) -> chat_id='{}', largo={}",
            payload.chat_id,
            message.chars().count()
        );

        let r = self.http_client.post(&send_url).json(&payload).send().await?;
        if !r.status().is_success() {
            let status = r.status().as_u16();
            let body = r.text().await.unwrap_or_default();
            log::error!("(send_text) -> Fallo al enviar texto a '{}': {}", phone, body);
            return Err(SendError::Status { status, body });
        }
        Ok(())
    }
}
