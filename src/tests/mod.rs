//! tests/mod.rs
//! Dobles en memoria de los colaboradores externos, compartidos por los tests.

mod config_tests;
mod handler_tests;
mod prompt_tests;

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    config::app_config::DispatchSettings,
    error::{GenerationError, SendError, StoreError},
    models::{
        campaign_model::{Campaign, CampaignStatus, CampaignUpdate, NewCampaign},
        contact_model::Contact,
    },
    services::{
        generation_service::TextGenerator, store_service::CampaignStore,
        whatsapp_service::MessageSender,
    },
};

pub fn campaign(id: &str, status: CampaignStatus) -> Campaign {
    Campaign {
        id: id.to_string(),
        business_name: format!("Business {}", id),
        description: "Fresh masala chai every morning".to_string(),
        category: None,
        target: "growth".to_string(),
        link: None,
        status,
        messages: Vec::new(),
        generated_at: None,
    }
}

pub fn contact(name: &str, number: &str) -> Contact {
    Contact {
        id: format!("contact-{}", name),
        name: Some(name.to_string()),
        number: Some(number.to_string()),
    }
}

/// Sin pausas para que los tests no duerman
pub fn instant_settings(test_mode: bool) -> DispatchSettings {
    DispatchSettings {
        delay_between_msgs: Duration::ZERO,
        settle_time: Duration::ZERO,
        test_mode,
        ..DispatchSettings::default()
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub campaigns: Mutex<Vec<Campaign>>,
    pub contacts: Vec<Contact>,
    pub updates: Mutex<Vec<(String, CampaignUpdate)>>,
    pub fail_lists: bool,
    /// Falla solo el listado de ese status
    pub fail_status: Option<CampaignStatus>,
    pub fail_updates_for: HashSet<String>,
}

impl FakeStore {
    pub fn with_campaigns(campaigns: Vec<Campaign>) -> Self {
        FakeStore {
            campaigns: Mutex::new(campaigns),
            ..Default::default()
        }
    }

    pub fn get(&self, id: &str) -> Campaign {
        self.campaigns
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .expect("campaign exists")
    }

    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }
}

fn unavailable() -> StoreError {
    StoreError::Status {
        status: 503,
        body: "store unavailable".to_string(),
    }
}

#[async_trait]
impl CampaignStore for FakeStore {
    async fn list_campaigns(&self, status: CampaignStatus) -> Result<Vec<Campaign>, StoreError> {
        if self.fail_lists || self.fail_status == Some(status) {
            return Err(unavailable());
        }
        Ok(self
            .campaigns
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.status == status)
            .cloned()
            .collect())
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        if self.fail_lists {
            return Err(unavailable());
        }
        Ok(self.contacts.clone())
    }

    async fn update_campaign(&self, id: &str, update: &CampaignUpdate) -> Result<(), StoreError> {
        if self.fail_updates_for.contains(id) {
            return Err(unavailable());
        }
        let mut campaigns = self.campaigns.lock().unwrap();
        if let Some(c) = campaigns.iter_mut().find(|c| c.id == id) {
            if let Some(status) = update.status {
                c.status = status;
            }
            if let Some(messages) = &update.messages {
                c.messages = messages.clone();
            }
            if let Some(generated_at) = &update.generated_at {
                c.generated_at = Some(generated_at.clone());
            }
        }
        self.updates
            .lock()
            .unwrap()
            .push((id.to_string(), update.clone()));
        Ok(())
    }

    async fn create_campaign(&self, new: &NewCampaign) -> Result<Campaign, StoreError> {
        let mut campaigns = self.campaigns.lock().unwrap();
        let created = Campaign {
            id: format!("fake-{}", campaigns.len() + 1),
            business_name: new.business_name.clone(),
            description: new.description.clone(),
            category: new.category.clone(),
            target: new.target.clone(),
            link: new.link.clone(),
            status: new.status,
            messages: new.messages.clone(),
            generated_at: None,
        };
        campaigns.push(created.clone());
        Ok(created)
    }
}

/// Devuelve siempre la misma completion (o un error si `reply` es None)
pub struct FakeGenerator {
    pub reply: Option<String>,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn replying(reply: &str) -> Self {
        FakeGenerator {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        FakeGenerator {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(GenerationError::Status {
            status: 500,
            body: "model not loaded".to_string(),
        })
    }
}

#[derive(Default)]
pub struct FakeSender {
    pub sent: Mutex<Vec<(String, String)>>,
    pub failing_numbers: HashSet<String>,
}

impl FakeSender {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for FakeSender {
    async fn send_text(
        &self,
        phone: &str,
        message: &str,
        _settle_time: Duration,
    ) -> Result<(), SendError> {
        if self.failing_numbers.contains(phone) {
            return Err(SendError::SessionNotConnected("TIMEOUT".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((phone.to_string(), message.to_string()));
        Ok(())
    }
}
