//! Plain in-process collection data shared by the store adapters.

use roster_application::{Document, FieldUpdate, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// `{collection: {id: fields}}`, also the on-disk snapshot layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collections(BTreeMap<String, BTreeMap<String, Map<String, Value>>>);

impl Collections {
    pub fn list(&self, collection: &str) -> Vec<Document> {
        self.0
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get(&self, collection: &str, id: &str) -> Option<Document> {
        self.0
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone()))
    }

    pub fn insert(&mut self, collection: &str, id: String, fields: Map<String, Value>) {
        self.0
            .entry(collection.to_string())
            .or_default()
            .insert(id, fields);
    }

    pub fn update(
        &mut self,
        collection: &str,
        id: &str,
        updates: Vec<(String, FieldUpdate)>,
    ) -> Result<(), StoreError> {
        let fields = self
            .0
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;

        for (key, update) in updates {
            match update {
                FieldUpdate::Set(value) => {
                    fields.insert(key, value);
                }
                FieldUpdate::Increment(delta) => {
                    let next = incremented(fields.get(&key), delta);
                    fields.insert(key, next);
                }
            }
        }
        Ok(())
    }

    /// Returns whether a document was removed
    pub fn remove(&mut self, collection: &str, id: &str) -> bool {
        self.0
            .get_mut(collection)
            .is_some_and(|docs| docs.remove(id).is_some())
    }
}

/// Numeric add; integers stay integers, floats stay floats, anything else
/// counts as 0.
fn incremented(current: Option<&Value>, delta: i64) -> Value {
    match current {
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_i64() {
                Value::from(v.saturating_add(delta))
            } else if let Some(v) = n.as_f64() {
                Value::from(v + delta as f64)
            } else {
                Value::from(delta)
            }
        }
        _ => Value::from(delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_increment_integer_field() {
        assert_eq!(incremented(Some(&json!(2)), -1), json!(1));
        assert_eq!(incremented(Some(&json!(0)), 1), json!(1));
    }

    #[test]
    fn test_increment_float_field() {
        assert_eq!(incremented(Some(&json!(2.5)), 1), json!(3.5));
    }

    #[test]
    fn test_increment_missing_or_non_numeric_counts_from_zero() {
        assert_eq!(incremented(None, 1), json!(1));
        assert_eq!(incremented(Some(&json!("3")), 1), json!(1));
        assert_eq!(incremented(Some(&Value::Null), -1), json!(-1));
    }

    #[test]
    fn test_update_missing_document_is_not_found() {
        let mut collections = Collections::default();
        let err = collections
            .update("doctors", "ghost", vec![("name".into(), FieldUpdate::Set(json!("x")))])
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_merges_top_level_fields() {
        let mut collections = Collections::default();
        collections.insert(
            "specialty",
            "s1".into(),
            fields(json!({"name": "Cardiology", "doctorCount": 2})),
        );

        collections
            .update(
                "specialty",
                "s1",
                vec![
                    ("doctorCount".into(), FieldUpdate::Increment(1)),
                    ("description".into(), FieldUpdate::Set(json!("Heart"))),
                ],
            )
            .unwrap();

        let doc = collections.get("specialty", "s1").unwrap();
        assert_eq!(doc.fields["name"], "Cardiology");
        assert_eq!(doc.fields["doctorCount"], 3);
        assert_eq!(doc.fields["description"], "Heart");
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut collections = Collections::default();
        collections.insert("doctors", "d1".into(), Map::new());
        assert!(collections.remove("doctors", "d1"));
        assert!(!collections.remove("doctors", "d1"));
        assert!(!collections.remove("nowhere", "d1"));
    }
}
