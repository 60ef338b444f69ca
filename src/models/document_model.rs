//! models/document_model.rs
//! Sobres de la API REST de documentos de Appwrite.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub documents: Vec<T>,
}

/// Query en formato JSON (`queries[]=...`). El orden de campos importa
/// para la serialización, por eso es un struct y no un `json!`.
#[derive(Debug, Clone, Serialize)]
pub struct Query {
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<&'static str>,
    pub values: Vec<Value>,
}

impl Query {
    pub fn equal(attribute: &'static str, value: &str) -> Self {
        Query {
            method: "equal",
            attribute: Some(attribute),
            values: vec![Value::from(value)],
        }
    }

    pub fn limit(n: u64) -> Self {
        Query {
            method: "limit",
            attribute: None,
            values: vec![Value::from(n)],
        }
    }

    pub fn offset(n: u64) -> Self {
        Query {
            method: "offset",
            attribute: None,
            values: vec![Value::from(n)],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateDocument<'a, T> {
    pub data: &'a T,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocument<'a, T> {
    pub document_id: String,
    pub data: &'a T,
}
