//! services/lifecycle_service.rs
//! Transiciones del `status` de una campaña:
//! ready -> ready-to-send -> sent, más la vuelta ready-to-send -> ready por antigüedad.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};

use crate::{
    error::{LifecycleError, StoreError},
    models::campaign_model::{Campaign, CampaignStatus, CampaignUpdate},
    services::store_service::CampaignStore,
};

/// Resultado de una pasada de `demote_stale`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemotionReport {
    pub demoted: usize,
    pub fresh: usize,
    /// Sin `generated_at` o con fecha ilegible
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Clone)]
pub struct CampaignLifecycle {
    store: Arc<dyn CampaignStore>,
}

impl CampaignLifecycle {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        CampaignLifecycle { store }
    }

    pub async fn list_ready(&self) -> Result<Vec<Campaign>, StoreError> {
        self.store.list_campaigns(CampaignStatus::Ready).await
    }

    pub async fn list_ready_to_send(&self) -> Result<Vec<Campaign>, StoreError> {
        self.store.list_campaigns(CampaignStatus::ReadyToSend).await
    }

    /// Devuelve a `ready` las campañas `ready-to-send` generadas hace más de un día.
    /// Un fallo al actualizar una campaña no corta la pasada.
    pub async fn demote_stale(&self, now: DateTime<Utc>) -> Result<DemotionReport, StoreError> {
        let campaigns = self.list_ready_to_send().await?;
        let mut report = DemotionReport::default();

        for campaign in campaigns {
            let Some(generated_at) = campaign.generated_at.as_deref().and_then(parse_generated_at)
            else {
                log::warn!(
                    "(demote_stale) Campaña '{}' (id={}) sin generated_at válido ({:?}), se omite",
                    campaign.display_name(),
                    campaign.id,
                    campaign.generated_at
                );
                report.skipped += 1;
                continue;
            };

            if !is_stale(generated_at, now) {
                report.fresh += 1;
                continue;
            }

            match self
                .store
                .update_campaign(&campaign.id, &CampaignUpdate::status(CampaignStatus::Ready))
                .await
            {
                Ok(()) => {
                    log::info!(
                        "(demote_stale) Campaña '{}' vuelve a 'ready' (generada {})",
                        campaign.display_name(),
                        generated_at.to_rfc3339()
                    );
                    report.demoted += 1;
                }
                Err(e) => {
                    log::error!(
                        "(demote_stale) No se pudo actualizar la campaña id={}: {}",
                        campaign.id,
                        e
                    );
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// Guarda mensajes, status y generated_at en un único update
    pub async fn promote_to_ready_to_send(
        &self,
        campaign_id: &str,
        messages: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<(), LifecycleError> {
        if messages.is_empty() {
            return Err(LifecycleError::EmptyMessages(campaign_id.to_string()));
        }

        let update = CampaignUpdate {
            status: Some(CampaignStatus::ReadyToSend),
            messages: Some(messages),
            generated_at: Some(now.to_rfc3339()),
        };
        self.store.update_campaign(campaign_id, &update).await?;
        Ok(())
    }

    /// Solo cambia el status
    pub async fn mark_sent(&self, campaign_id: &str) -> Result<(), StoreError> {
        self.store
            .update_campaign(campaign_id, &CampaignUpdate::status(CampaignStatus::Sent))
            .await
    }
}

pub fn stale_after() -> Duration {
    Duration::days(1)
}

pub fn is_stale(generated_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(generated_at) > stale_after()
}

/// RFC 3339 con offset, o ISO-8601 sin zona (hora local, como se escribían antes)
pub fn parse_generated_at(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = raw.parse::<NaiveDateTime>().ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
