//! services/tone_service.rs
//! Elige el tono del mensaje según el objetivo de la campaña.

use rand::seq::SliceRandom;
use rand::Rng;

/// Tonos cuando el objetivo no se reconoce
pub const DEFAULT_TONES: &[&str] = &["friendly", "promotional"];

/// Candidatos por objetivo (minúsculas). `None` si el objetivo es desconocido.
pub fn tones_for_target(target: &str) -> Option<&'static [&'static str]> {
    let tones: &'static [&'static str] = match target.trim().to_lowercase().as_str() {
        "awareness" => &["informative", "friendly", "soft promotional"],
        "growth" => &["fomo", "promotional", "festive"],
        "engagement" => &["friendly", "interactive", "fun"],
        "conversion" => &["promotional", "fomo", "urgent"],
        "other" => &["friendly", "promotional"],
        _ => return None,
    };
    Some(tones)
}

/// Elección uniforme entre los candidatos del objetivo
pub fn pick_tone<R: Rng + ?Sized>(target: &str, rng: &mut R) -> &'static str {
    let candidates = tones_for_target(target).unwrap_or(DEFAULT_TONES);
    candidates.choose(rng).copied().unwrap_or(DEFAULT_TONES[0])
}
