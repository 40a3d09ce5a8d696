//! Attendee domain types
//!
//! Records served by the event attendee list endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Attendee entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Attendee {
    pub fn has_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }
}

impl Record for Attendee {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

/// Attendee ids arrive as strings from some backends and integers from others.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_id_and_missing_check_in() {
        let attendee: Attendee = serde_json::from_value(serde_json::json!({
            "id": 42,
            "name": "Ada Lovelace",
            "email": "ADA@example.com",
            "createdAt": "2024-04-01T12:00:00Z",
            "checkedInAt": null
        }))
        .unwrap();

        assert_eq!(attendee.id(), "42");
        assert!(!attendee.has_checked_in());
    }

    #[test]
    fn decodes_string_id_and_check_in() {
        let attendee: Attendee = serde_json::from_value(serde_json::json!({
            "id": "a-1",
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "createdAt": "2024-04-01T12:00:00Z",
            "checkedInAt": "2024-04-02T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(attendee.id, "a-1");
        assert!(attendee.has_checked_in());
    }
}
