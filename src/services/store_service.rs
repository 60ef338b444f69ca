//! services/store_service.rs
//! Cliente de la colección de campañas/contactos en Appwrite.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::app_config::StoreConfig,
    error::StoreError,
    models::{
        campaign_model::{Campaign, CampaignStatus, CampaignUpdate, NewCampaign},
        contact_model::Contact,
        document_model::{CreateDocument, DocumentList, Query, UpdateDocument},
    },
};

/// Tamaño de página al recorrer contactos
const CONTACTS_PAGE_SIZE: u64 = 100;

/// Operaciones que el pipeline necesita del store
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Filtro por igualdad exacta de `status`
    async fn list_campaigns(&self, status: CampaignStatus) -> Result<Vec<Campaign>, StoreError>;

    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError>;

    async fn update_campaign(&self, id: &str, update: &CampaignUpdate) -> Result<(), StoreError>;

    async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, StoreError>;
}

#[derive(Clone)]
pub struct AppwriteStore {
    http_client: Client,
    config: StoreConfig,
}

impl AppwriteStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }

    fn documents_url(&self, collection_id: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint,
            urlencoding::encode(&self.config.database_id),
            urlencoding::encode(collection_id)
        )
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("X-Appwrite-Project", &self.config.project_id)
            .header("X-Appwrite-Key", &self.config.api_key)
    }

    async fn list_documents<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<DocumentList<T>, StoreError> {
        let mut params = Vec::with_capacity(queries.len());
        for q in queries {
            // Query solo tiene strings y números, no puede fallar
            let encoded = serde_json::to_string(q).unwrap_or_default();
            params.push(("queries[]", encoded));
        }

        let resp = self
            .authed(self.http_client.get(self.documents_url(collection_id)))
            .query(&params)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        Ok(resp.json::<DocumentList<T>>().await?)
    }

    fn contacts_collection(&self) -> &str {
        self.config
            .contacts_collection_id
            .as_deref()
            .unwrap_or_default()
    }
}

#[async_trait]
impl CampaignStore for AppwriteStore {
    async fn list_campaigns(&self, status: CampaignStatus) -> Result<Vec<Campaign>, StoreError> {
        log::info!("(list_campaigns) Consultando campañas con status={}", status);
        let list: DocumentList<Campaign> = self
            .list_documents(
                &self.config.campaigns_collection_id,
                &[Query::equal("status", status.as_str())],
            )
            .await?;
        log::info!(
            "(list_campaigns) {} campañas con status={} (total={})",
            list.documents.len(),
            status,
            list.total
        );
        Ok(list.documents)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        let collection = self.contacts_collection().to_string();
        let mut contacts = Vec::new();
        let mut offset = 0;

        loop {
            let page: DocumentList<Contact> = self
                .list_documents(
                    &collection,
                    &[Query::limit(CONTACTS_PAGE_SIZE), Query::offset(offset)],
                )
                .await?;
            let fetched = page.documents.len() as u64;
            contacts.extend(page.documents);
            offset += fetched;

            if fetched == 0 || offset >= page.total {
                break;
            }
        }

        log::info!("(list_contacts) {} contactos leídos", contacts.len());
        Ok(contacts)
    }

    async fn update_campaign(&self, id: &str, update: &CampaignUpdate) -> Result<(), StoreError> {
        let url = format!(
            "{}/{}",
            self.documents_url(&self.config.campaigns_collection_id),
            urlencoding::encode(id)
        );
        log::info!("(update_campaign) Actualizando campaña id={} -> {:?}", id, update);

        let resp = self
            .authed(self.http_client.patch(&url))
            .json(&UpdateDocument { data: update })
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign, StoreError> {
        let doc = CreateDocument {
            document_id: uuid::Uuid::new_v4().simple().to_string(),
            data: campaign,
        };
        log::info!(
            "(create_campaign) Creando campaña '{}' con id={}",
            campaign.business_name,
            doc.document_id
        );

        let resp = self
            .authed(
                self.http_client
                    .post(self.documents_url(&self.config.campaigns_collection_id)),
            )
            .json(&doc)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.json::<Campaign>().await?)
    }
}

async fn check_status(resp: Response) -> Result<Response, StoreError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    log::error!("(check_status) Appwrite respondió {}: {}", status, body);
    Err(StoreError::Status { status, body })
}
