use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Activity {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Activities keyed by name, in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    // A repeated key keeps its first position but takes the later value,
    // same as assigning twice to a JS object.
    pub fn insert(&mut self, name: String, activity: Activity) {
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = activity;
            return;
        }
        self.entries.push((name, activity));
    }
}

impl FromIterator<(String, Activity)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = ActivityCatalog::default();
        for (name, activity) in iter {
            catalog.insert(name, activity);
        }
        catalog
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object mapping activity names to activities")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let mut catalog = ActivityCatalog::default();
        while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
            catalog.insert(name, activity);
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Success body of a signup: `{"message": "..."}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body: `{"detail": ...}`. FastAPI validation errors put a list here
/// instead of a string.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiError {
    /// Readable detail, or `None` when absent, null or an empty string.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_server_order() {
        let json = r#"{
            "Chess Club": {"description": "Strategy", "schedule": "Fri", "max_participants": 12, "participants": ["michael@mergington.edu"]},
            "Art Club": {"description": "Paint", "schedule": "Tue", "max_participants": 5, "participants": []},
            "Basketball": {"description": "Hoops", "schedule": "Mon", "max_participants": 15, "participants": []}
        }"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.names(), vec!["Chess Club", "Art Club", "Basketball"]);
        assert_eq!(
            catalog.get("Chess Club").unwrap().participants,
            vec!["michael@mergington.edu".to_string()]
        );
    }

    #[test]
    fn duplicate_key_keeps_position_takes_last_value() {
        let json = r#"{
            "A": {"max_participants": 1, "participants": []},
            "B": {"max_participants": 2, "participants": []},
            "A": {"max_participants": 9, "participants": []}
        }"#;
        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.names(), vec!["A", "B"]);
        assert_eq!(catalog.get("A").unwrap().max_participants, 9);
    }

    #[test]
    fn activity_without_roster_is_rejected() {
        let json = r#"{"A": {"description": "x", "schedule": "y", "max_participants": 3}}"#;
        assert!(serde_json::from_str::<ActivityCatalog>(json).is_err());
    }

    #[test]
    fn non_object_catalog_is_rejected() {
        assert!(serde_json::from_str::<ActivityCatalog>("[]").is_err());
        assert!(serde_json::from_str::<ActivityCatalog>("<html>").is_err());
    }

    #[test]
    fn detail_text_falls_through_on_empty_values() {
        let e: ApiError = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert_eq!(e.detail_text(), None);
        let e: ApiError = serde_json::from_str(r#"{"detail": null}"#).unwrap();
        assert_eq!(e.detail_text(), None);
        let e: ApiError = serde_json::from_str("{}").unwrap();
        assert_eq!(e.detail_text(), None);
        let e: ApiError = serde_json::from_str(r#"{"detail": "Activity not found"}"#).unwrap();
        assert_eq!(e.detail_text().as_deref(), Some("Activity not found"));
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let e: ApiError = serde_json::from_str(r#"{"detail": [{"loc": ["query", "email"]}]}"#).unwrap();
        assert_eq!(e.detail_text().as_deref(), Some(r#"[{"loc":["query","email"]}]"#));
    }
}
