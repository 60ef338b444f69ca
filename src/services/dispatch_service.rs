//! services/dispatch_service.rs
//! Reparte los mensajes de una campaña entre los contactos, uno por contacto,
//! con una pausa fija entre envíos.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    config::app_config::DispatchSettings,
    models::{campaign_model::Campaign, contact_model::Contact},
    services::whatsapp_service::MessageSender,
};

const CTA_SEPARATOR: &str = " 👉 ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub attempted: usize,
    pub sent: usize,
    pub failed: usize,
    /// Contactos sin número
    pub skipped: usize,
}

#[derive(Clone)]
pub struct Dispatcher {
    sender: Arc<dyn MessageSender>,
    settings: DispatchSettings,
}

impl Dispatcher {
    pub fn new(sender: Arc<dyn MessageSender>, settings: DispatchSettings) -> Self {
        Dispatcher { sender, settings }
    }

    pub fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    /// Link de la campaña, o el default si no tiene
    pub fn campaign_link<'a>(&'a self, campaign: &'a Campaign) -> &'a str {
        campaign
            .link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(&self.settings.default_link)
    }

    /// Envía a todos los contactos (o solo al primero en modo prueba).
    /// Un envío fallido se registra y se sigue con el siguiente contacto.
    pub async fn dispatch<R: Rng + ?Sized>(
        &self,
        campaign: &Campaign,
        contacts: &[Contact],
        rng: &mut R,
    ) -> DispatchReport {
        let link = self.campaign_link(campaign);
        let targets = if self.settings.test_mode {
            log::info!("(dispatch) TEST_MODE activo: solo se envía al primer contacto");
            &contacts[..contacts.len().min(1)]
        } else {
            contacts
        };

        let mut report = DispatchReport::default();
        for contact in targets {
            log::info!(
                "(dispatch) Contacto: {} - número crudo: {:?}",
                contact.display_name(),
                contact.number
            );
            let raw = contact.raw_number();
            if raw.is_empty() {
                report.skipped += 1;
                continue;
            }
            let Some(message) = campaign.messages.choose(rng) else {
                break;
            };

            let phone = normalize_phone(raw, &self.settings.country_code);
            let text = add_cta(message, link);
            report.attempted += 1;

            log::info!("(dispatch) Enviando mensaje a {}...", phone);
            match self
                .sender
                .send_text(&phone, &text, self.settings.settle_time)
                .await
            {
                Ok(()) => {
                    log::info!("(dispatch) Mensaje enviado a {}", phone);
                    report.sent += 1;
                }
                Err(e) => {
                    log::error!("(dispatch) Fallo al enviar a {}: {}", phone, e);
                    report.failed += 1;
                }
            }

            if !self.settings.delay_between_msgs.is_zero() {
                tokio::time::sleep(self.settings.delay_between_msgs).await;
            }
        }

        report
    }
}

/// Prefija el código de país si el número no empieza con `+`
pub fn normalize_phone(raw: &str, country_code: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with('+') {
        raw.to_string()
    } else {
        format!("{}{}", country_code, raw)
    }
}

/// Agrega el link salvo que el mensaje ya traiga uno
pub fn add_cta(message: &str, link: &str) -> String {
    if message.contains("http") {
        message.to_string()
    } else {
        format!("{}{}{}", message, CTA_SEPARATOR, link)
    }
}
