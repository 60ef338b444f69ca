//! error.rs
//! Errores tipados por colaborador (store, generador, WhatsApp, consola).
//! Los binarios los envuelven con `anyhow` en el borde.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("document store responded {status}: {body}")]
    Status { status: u16, body: String },
}

/// Fallos del parser tolerante de la salida del modelo.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("model output is not a list")]
    NotAnArray,

    #[error("model output could not be repaired: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation endpoint responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("whatsapp request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("whatsapp bridge responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("whatsapp session is not connected (state: {0})")]
    SessionNotConnected(String),
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("choice {choice} is out of range (1-{len})")]
    OutOfRange { choice: usize, len: usize },

    #[error("could not read the selection: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("refusing to mark campaign {0} ready-to-send without messages")]
    EmptyMessages(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
