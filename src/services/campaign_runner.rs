//! services/campaign_runner.rs
//! Las dos corridas del pipeline: generar mensajes y despachar una campaña.
//! Cada corrida es secuencial y termina limpia; el resultado dice en qué punto paró.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use rand::Rng;

use crate::{
    error::SelectionError,
    models::generation_model::PromptContext,
    services::{
        dispatch_service::{DispatchReport, Dispatcher},
        generation_service::{generate_messages, TextGenerator},
        lifecycle_service::CampaignLifecycle,
        prompt_service::build_prompt,
        selection_service::choose_campaign,
        store_service::CampaignStore,
    },
};

#[derive(Debug)]
pub enum GenerationOutcome {
    NoReadyCampaigns,
    InvalidSelection(SelectionError),
    NoMessages { campaign_id: String },
    Generated { campaign_id: String, count: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    NoCampaign,
    NoMessages { campaign_id: String },
    NoContacts { campaign_id: String },
    Delivered {
        campaign_id: String,
        report: DispatchReport,
        marked_sent: bool,
    },
}

#[derive(Clone)]
pub struct GenerationRun {
    lifecycle: CampaignLifecycle,
    generator: Arc<dyn TextGenerator>,
}

impl GenerationRun {
    pub fn new(store: Arc<dyn CampaignStore>, generator: Arc<dyn TextGenerator>) -> Self {
        GenerationRun {
            lifecycle: CampaignLifecycle::new(store),
            generator,
        }
    }

    pub async fn run<R, I, O>(
        &self,
        rng: &mut R,
        input: &mut I,
        output: &mut O,
    ) -> Result<GenerationOutcome>
    where
        R: Rng + ?Sized,
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        // El mantenimiento no bloquea la generación
        match self.lifecycle.demote_stale(Utc::now()).await {
            Ok(demotion) => log::info!("(run) Revisión de campañas viejas: {:?}", demotion),
            Err(e) => log::error!("(run) No se pudo revisar campañas viejas: {}", e),
        }

        let campaigns = self
            .lifecycle
            .list_ready()
            .await
            .context("Failed to list ready campaigns")?;
        if campaigns.is_empty() {
            writeln!(output, "🚫 No campaigns with 'ready' status found.")?;
            return Ok(GenerationOutcome::NoReadyCampaigns);
        }

        let selected = match choose_campaign(&campaigns, input, output) {
            Ok(c) => c,
            Err(e) => {
                writeln!(output, "❌ {}", e)?;
                return Ok(GenerationOutcome::InvalidSelection(e));
            }
        };
        writeln!(output, "\n✍️ Generating messages for: {}", selected.display_name())?;

        let ctx = PromptContext::from_campaign(selected, rng);
        log::info!(
            "(run) Campaña id={} objetivo='{}' tono='{}'",
            selected.id,
            ctx.target,
            ctx.tone
        );
        let prompt = build_prompt(&ctx);

        let messages = match generate_messages(self.generator.as_ref(), &prompt).await {
            Ok(m) => m,
            Err(e) => {
                log::error!("(run) Falló la generación para id={}: {}", selected.id, e);
                Vec::new()
            }
        };
        if messages.is_empty() {
            writeln!(output, "⚠️ No messages generated.")?;
            return Ok(GenerationOutcome::NoMessages {
                campaign_id: selected.id.clone(),
            });
        }

        let count = messages.len();
        self.lifecycle
            .promote_to_ready_to_send(&selected.id, messages, Utc::now())
            .await
            .with_context(|| format!("Failed to save messages for campaign {}", selected.id))?;
        writeln!(output, "✅ {} AI messages generated and saved to campaign.", count)?;

        Ok(GenerationOutcome::Generated {
            campaign_id: selected.id.clone(),
            count,
        })
    }
}

#[derive(Clone)]
pub struct DispatchRun {
    store: Arc<dyn CampaignStore>,
    lifecycle: CampaignLifecycle,
    dispatcher: Dispatcher,
}

impl DispatchRun {
    pub fn new(store: Arc<dyn CampaignStore>, dispatcher: Dispatcher) -> Self {
        DispatchRun {
            lifecycle: CampaignLifecycle::new(store.clone()),
            store,
            dispatcher,
        }
    }

    /// Toma la primera campaña `ready-to-send` y la envía
    pub async fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DispatchOutcome> {
        let campaign = match self
            .lifecycle
            .list_ready_to_send()
            .await
            .context("Failed to list ready-to-send campaigns")?
            .into_iter()
            .next()
        {
            Some(c) => c,
            None => {
                log::info!("(run) No hay campañas con status 'ready-to-send'");
                return Ok(DispatchOutcome::NoCampaign);
            }
        };
        log::info!("(run) Lanzando campaña: {}", campaign.display_name());

        if campaign.messages.is_empty() {
            log::warn!("(run) La campaña id={} no tiene mensajes", campaign.id);
            return Ok(DispatchOutcome::NoMessages {
                campaign_id: campaign.id,
            });
        }

        let contacts = self
            .store
            .list_contacts()
            .await
            .context("Failed to fetch contacts")?;
        if contacts.is_empty() {
            log::warn!("(run) No se encontraron contactos");
            return Ok(DispatchOutcome::NoContacts {
                campaign_id: campaign.id,
            });
        }

        let report = self.dispatcher.dispatch(&campaign, &contacts, rng).await;
        log::info!("(run) Resultado del envío: {:?}", report);

        if self.dispatcher.settings().test_mode {
            log::info!("(run) TEST_MODE: la campaña no se marca como enviada");
            return Ok(DispatchOutcome::Delivered {
                campaign_id: campaign.id,
                report,
                marked_sent: false,
            });
        }

        self.lifecycle
            .mark_sent(&campaign.id)
            .await
            .with_context(|| format!("Failed to mark campaign {} as sent", campaign.id))?;
        log::info!("(run) Campaña id={} marcada como 'sent'", campaign.id);

        Ok(DispatchOutcome::Delivered {
            campaign_id: campaign.id,
            report,
            marked_sent: true,
        })
    }
}
