//! services/mod.rs
//! Módulo que agrupa los colaboradores externos y la lógica del pipeline.

pub mod campaign_runner;
pub mod dispatch_service;
pub mod generation_service;
pub mod lifecycle_service;
pub mod message_parser;
pub mod prompt_service;
pub mod selection_service;
pub mod store_service;
pub mod tone_service;
pub mod whatsapp_service;
