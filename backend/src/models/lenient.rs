//! Deserializers for tenant-authored content. One malformed entry must not
//! sink the whole record, so list fields drop the entries they cannot read.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// A list field: `null` or a non-list becomes empty, unreadable entries are skipped.
pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => {
            debug!(
                "Expected a list of {}, found {other}; ignoring",
                std::any::type_name::<T>()
            );
            return Ok(Vec::new());
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!(
                    "Skipping unreadable {} at index {idx}: {e}",
                    std::any::type_name::<T>()
                );
                None
            }
        })
        .collect())
}

/// A nested section: `null` or an unreadable value falls back to the default.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        value => Ok(serde_json::from_value(value).unwrap_or_else(|e| {
            debug!("Ignoring unreadable {}: {e}", std::any::type_name::<T>());
            T::default()
        })),
    }
}

/// An optional instant given as RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`
/// (taken as UTC) or a bare `YYYY-MM-DD` (midnight UTC).
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unreadable timestamp: {raw}"))),
    }
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Some(at) = parse_instant(raw) {
        return Some(at);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Only strings carrying a time of day; bare dates return `None`.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "list")]
        numbers: Vec<u32>,
        #[serde(default, deserialize_with = "timestamp")]
        at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "or_default")]
        label: Option<String>,
    }

    #[test]
    fn test_or_default_absorbs_wrong_shapes() {
        let holder: Holder = serde_json::from_value(json!({ "label": 7 })).unwrap();
        assert_eq!(holder.label, None);

        let holder: Holder = serde_json::from_value(json!({ "label": "Notices" })).unwrap();
        assert_eq!(holder.label.as_deref(), Some("Notices"));
    }

    #[test]
    fn test_list_skips_unreadable_entries() {
        let holder: Holder = serde_json::from_value(json!({ "numbers": [1, "two", 3, null] })).unwrap();
        assert_eq!(holder.numbers, vec![1, 3]);

        let holder: Holder = serde_json::from_value(json!({ "numbers": null })).unwrap();
        assert!(holder.numbers.is_empty());

        let holder: Holder = serde_json::from_value(json!({ "numbers": { "a": 1 } })).unwrap();
        assert!(holder.numbers.is_empty());
    }

    #[test]
    fn test_timestamp_shapes() {
        let parse = |v: Value| serde_json::from_value::<Holder>(json!({ "at": v })).map(|h| h.at);

        assert_eq!(
            parse(json!("2024-05-01")).unwrap().map(|t| t.to_rfc3339()),
            Some("2024-05-01T00:00:00+00:00".to_string())
        );
        assert_eq!(
            parse(json!("2024-07-09T22:00:00-05:00")).unwrap().map(|t| t.to_rfc3339()),
            Some("2024-07-10T03:00:00+00:00".to_string())
        );
        assert_eq!(
            parse(json!("2024-07-09T22:00:00")).unwrap().map(|t| t.to_rfc3339()),
            Some("2024-07-09T22:00:00+00:00".to_string())
        );
        assert_eq!(parse(json!(null)).unwrap(), None);
        assert_eq!(parse(json!("")).unwrap(), None);
        assert!(parse(json!("next tuesday")).is_err());
    }
}
