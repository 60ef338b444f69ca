//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod campaign_model;
pub mod contact_model;
pub mod document_model;
pub mod generation_model;
pub mod whatsapp_model;
