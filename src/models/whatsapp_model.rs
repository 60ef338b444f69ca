//! models/whatsapp_model.rs
//! Payloads del puente REST de whatsapp-web.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub state: Option<String>,
}

impl SessionStatus {
    pub fn is_connected(&self) -> bool {
        self.state.as_deref() == Some("CONNECTED")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessagePayload<'a> {
    pub chat_id: String,
    pub content_type: &'static str,
    pub content: &'a str,
}

impl<'a> SendMessagePayload<'a> {
    /// `+919876543210` -> `919876543210@c.us`
    pub fn text(phone: &str, content: &'a str) -> Self {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        SendMessagePayload {
            chat_id: format!("{}@c.us", digits),
            content_type: "string",
            content,
        }
    }
}
