// src/model/lenient.rs
//
// The API is loosely typed: codes and serials arrive as strings or numbers,
// flags as bools, 0/1 or "true". These accept all of them.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() { None } else { Some(s!(t)) }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// The `error` field of a reply, when it actually reports a failure.
/// `false`, `null`, numbers and blank strings do not.
pub(crate) fn error_message(v: &Value) -> Option<String> {
    match v.get("error")? {
        Value::String(s) if !s.trim().is_empty() => Some(s!(s.trim())),
        Value::Bool(true) => Some(s!("Server reported an error")),
        _ => None,
    }
}

pub(crate) fn opt_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(de)?;
    Ok(value_to_string(&v))
}

pub(crate) fn flag<'de, D>(de: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(de)?;
    Ok(match v {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1"),
        _ => false,
    })
}

pub(crate) fn opt_count<'de, D>(de: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(de)?;
    Ok(match v {
        Value::Number(n) => n.as_u64().map(|x| x.min(u32::MAX as u64) as u32),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

pub(crate) fn opt_len<'de, D>(de: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(de)?;
    Ok(v.as_array().map(|a| a.len() as u32))
}
