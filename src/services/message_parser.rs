//! services/message_parser.rs
//! Parser tolerante para la salida del modelo.
//!
//! Primero intenta un parseo estricto de un arreglo JSON. Si falla y el texto
//! luce como una lista (`[` ... `]`), lo recorre una vez respetando strings y
//! escapes, y aplica reparaciones acotadas antes de reintentar:
//!
//! 1. strings con comilla simple (`'Try now'`) pasan a strings JSON;
//! 2. entre un string que cierra y otro que abre sin nada en medio se
//!    inserta `, ` (`"a" "b"` -> `"a", "b"`), el error más común de los
//!    modelos locales;
//! 3. se elimina una coma colgante antes del `]` final.
//!
//! Cualquier otra cosa es un [`ParseError`].

use std::collections::HashSet;
use std::str::Chars;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::ParseError;

fn trailing_comma() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r",\s*\]$").expect("regex válida"))
}

/// Devuelve los mensajes únicos, sin vacíos, en el orden de su primera aparición.
pub fn parse_messages(raw: &str) -> Result<Vec<String>, ParseError> {
    let items = parse_list(raw)?;
    Ok(clean_messages(items))
}

fn parse_list(raw: &str) -> Result<Vec<Value>, ParseError> {
    let content = strip_code_fence(raw.trim());

    if let Ok(items) = serde_json::from_str::<Vec<Value>>(content) {
        return Ok(items);
    }

    if !(content.starts_with('[') && content.ends_with(']')) {
        return Err(ParseError::NotAnArray);
    }

    let repaired = repair_literals(content);
    let repaired = trailing_comma().replace(&repaired, "]");
    log::debug!("(parse_list) Texto reparado: {}", repaired);

    serde_json::from_str::<Vec<Value>>(&repaired).map_err(|e| ParseError::Malformed(e.to_string()))
}

/// Reescribe todos los strings como JSON y separa los que quedaron pegados.
/// Fuera de los strings el texto se copia tal cual.
fn repair_literals(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 16);
    let mut chars = content.chars();
    let mut after_string = false;

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                if after_string {
                    out.push_str(", ");
                }
                copy_string(c, &mut chars, &mut out);
                after_string = true;
            }
            c if c.is_whitespace() => out.push(c),
            _ => {
                after_string = false;
                out.push(c);
            }
        }
    }
    out
}

/// Copia un string que abrió con `quote` como string JSON (comilla doble).
/// Si no cierra, queda abierto y el parseo final lo reporta.
fn copy_string(quote: char, chars: &mut Chars<'_>, out: &mut String) {
    out.push('"');
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                // `\'` no es un escape JSON
                Some('\'') => out.push('\''),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            c if c == quote => {
                out.push('"');
                return;
            }
            // Solo llega acá dentro de un string con comilla simple
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
}

/// Solo strings, recortados, sin vacíos y sin duplicados exactos
fn clean_messages(items: Vec<Value>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.trim().to_string()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}

/// Quita un bloque ```json ... ``` si el modelo lo agregó
fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim()
}
