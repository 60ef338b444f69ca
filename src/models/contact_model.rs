//! models/contact_model.rs
use serde::{Deserialize, Serialize};

/// Contacto de WhatsApp (solo lectura)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "$id", default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Puede venir sin código de país, o no venir
    #[serde(default)]
    pub number: Option<String>,
}

impl Contact {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    pub fn raw_number(&self) -> &str {
        self.number.as_deref().map(str::trim).unwrap_or("")
    }
}
