//! lib.rs
//! Pipeline de campañas de WhatsApp: Appwrite (store) + Ollama (mensajes) + whatsapp-web (envío).

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;
