//! models/campaign_model.rs
//! Documentos de campaña tal como viven en la colección de Appwrite.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Estados del ciclo de vida: ready -> ready-to-send -> sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignStatus {
    Ready,
    ReadyToSend,
    Sent,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Ready => "ready",
            CampaignStatus::ReadyToSend => "ready-to-send",
            CampaignStatus::Sent => "sent",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ready" => Ok(CampaignStatus::Ready),
            "ready-to-send" => Ok(CampaignStatus::ReadyToSend),
            "sent" => Ok(CampaignStatus::Sent),
            other => Err(format!("unknown campaign status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub target: String,
    #[serde(default)]
    pub link: Option<String>,
    pub status: CampaignStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<String>,
    /// ISO-8601, lo escribe la generación
    #[serde(default)]
    pub generated_at: Option<String>,
}

impl Campaign {
    pub fn display_name(&self) -> &str {
        if self.business_name.trim().is_empty() {
            "Unnamed"
        } else {
            &self.business_name
        }
    }
}

/// Campos a modificar en un solo `update`. Los `None` no se envían.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl CampaignUpdate {
    pub fn status(status: CampaignStatus) -> Self {
        CampaignUpdate {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Body de POST /api/campaigns (mismos campos que el formulario web)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaignRequest {
    pub business_name: String,
    pub description: String,
    pub category: Option<String>,
    pub target: String,
    pub link: Option<String>,
}

/// Datos con los que se crea el documento en Appwrite
#[derive(Debug, Clone, Serialize)]
pub struct NewCampaign {
    pub business_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub status: CampaignStatus,
    pub messages: Vec<String>,
}

impl From<CreateCampaignRequest> for NewCampaign {
    fn from(req: CreateCampaignRequest) -> Self {
        NewCampaign {
            business_name: req.business_name.trim().to_string(),
            description: req.description.trim().to_string(),
            category: req.category.filter(|c| !c.trim().is_empty()),
            target: req.target.trim().to_string(),
            link: req.link.filter(|l| !l.trim().is_empty()),
            status: CampaignStatus::Ready,
            messages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateCampaignResponse {
    pub success: bool,
    pub campaign_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListCampaignsResponse {
    pub status: CampaignStatus,
    pub total: usize,
    pub items: Vec<Campaign>,
}

/// Appwrite devuelve `null` en atributos vacíos
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
