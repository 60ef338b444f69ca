//! services/prompt_service.rs
//! Plantilla del prompt que se le manda al modelo.

use rand::Rng;

use crate::{
    models::{campaign_model::Campaign, generation_model::PromptContext},
    services::tone_service::pick_tone,
};

/// Cantidad de variantes que se le piden al modelo
pub const REQUESTED_MESSAGES: usize = 15;
pub const MAX_MESSAGE_CHARS: usize = 250;
pub const PLACEHOLDER_LINK: &str = "https://missh.space";

const DEFAULT_TARGET: &str = "Awareness";
const DEFAULT_BUSINESS_NAME: &str = "Your Brand";

impl PromptContext {
    /// Toma los campos de la campaña (con sus defaults) y sortea el tono
    pub fn from_campaign<R: Rng + ?Sized>(campaign: &Campaign, rng: &mut R) -> Self {
        let target = non_blank(&campaign.target).unwrap_or(DEFAULT_TARGET);
        let business_name = non_blank(&campaign.business_name).unwrap_or(DEFAULT_BUSINESS_NAME);

        PromptContext {
            business_name: business_name.to_string(),
            description: campaign.description.clone(),
            target: target.to_string(),
            tone: pick_tone(target, rng),
        }
    }
}

pub fn build_prompt(ctx: &PromptContext) -> String {
    format!(
        "You are a WhatsApp marketing assistant creating engaging campaign messages.\n\n\
         \x20 Business Name: {business}\n\
         \x20 Description: {description}\n\
         \x20 Goal: {target}\n\
         \x20 Tone Style: {tone}\n\n\
         \x20 Instructions:\n\
         - Generate {count} unique WhatsApp messages that match the business goal and tone.\n\
         - Each message must be under {max_chars} characters.\n\
         - Include CTAs like 'Visit us', 'Try now', 'DM us', 'Check this out'.\n\
         - Include a placeholder link like {link}.\n\
         - Return the result as a **JSON array of strings**.\n\n\
         \x20 Output Format Example:\n\
         \x20 [\"Message 1\", \"Message 2\", ..., \"Message {count}\"]\n\n\
         \x20 Only return the JSON list. No explanation or formatting.",
        business = ctx.business_name,
        description = ctx.description,
        target = ctx.target,
        tone = ctx.tone,
        count = REQUESTED_MESSAGES,
        max_chars = MAX_MESSAGE_CHARS,
        link = PLACEHOLDER_LINK,
    )
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
