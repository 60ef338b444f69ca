//! tests/prompt_tests.rs
//! Tono por objetivo y plantilla del prompt.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::{campaign_model::CampaignStatus, generation_model::PromptContext};
use crate::services::prompt_service::{build_prompt, REQUESTED_MESSAGES};
use crate::services::tone_service::{pick_tone, tones_for_target, DEFAULT_TONES};

use super::campaign;

#[test]
fn test_tone_always_from_target_candidates() {
    let mut rng = StdRng::seed_from_u64(7);
    for target in ["awareness", "growth", "engagement", "conversion", "other"] {
        let candidates = tones_for_target(target).expect("known target");
        for _ in 0..50 {
            let tone = pick_tone(target, &mut rng);
            assert!(candidates.contains(&tone), "{} no es tono de {}", tone, target);
        }
    }
}

#[test]
fn test_tone_target_is_case_insensitive() {
    let mut rng = StdRng::seed_from_u64(1);
    let candidates = tones_for_target("conversion").unwrap();
    for _ in 0..20 {
        assert!(candidates.contains(&pick_tone("  CONVERSION ", &mut rng)));
    }
}

#[test]
fn test_unknown_target_uses_default_tones() {
    assert!(tones_for_target("world domination").is_none());

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..30 {
        let tone = pick_tone("world domination", &mut rng);
        assert!(DEFAULT_TONES.contains(&tone));
    }
}

#[test]
fn test_tone_choice_covers_every_candidate() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..200 {
        seen.insert(pick_tone("growth", &mut rng));
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_prompt_contains_campaign_fields_and_count() {
    let ctx = PromptContext {
        business_name: "Chai Point".to_string(),
        description: "Hand-brewed chai, delivered hot in 20 minutes".to_string(),
        target: "Engagement".to_string(),
        tone: "fun",
    };

    let prompt = build_prompt(&ctx);

    assert!(prompt.contains("Business Name: Chai Point"));
    assert!(prompt.contains("Hand-brewed chai, delivered hot in 20 minutes"));
    assert!(prompt.contains("Goal: Engagement"));
    assert!(prompt.contains("Tone Style: fun"));
    assert!(prompt.contains(&format!("Generate {} unique WhatsApp messages", REQUESTED_MESSAGES)));
    assert!(prompt.contains("Generate 15 unique"));
    assert!(prompt.contains("under 250 characters"));
    assert!(prompt.contains("JSON array of strings"));
    assert!(prompt.contains("https://missh.space"));
}

#[test]
fn test_prompt_context_defaults_for_blank_fields() {
    let mut c = campaign("c1", CampaignStatus::Ready);
    c.business_name = "  ".to_string();
    c.target = String::new();

    let mut rng = StdRng::seed_from_u64(9);
    let ctx = PromptContext::from_campaign(&c, &mut rng);

    assert_eq!(ctx.business_name, "Your Brand");
    assert_eq!(ctx.target, "Awareness");
    assert!(tones_for_target("awareness").unwrap().contains(&ctx.tone));
}
