use serde::{Deserialize, Deserializer, Serialize};

/// The record persisted between sessions under the addon's saved-variables name.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedVariables {
    #[serde(default, deserialize_with = "strings_only")]
    pub messages: Vec<String>,
}

/// Accepts any JSON array and keeps only its string entries.
fn strings_only<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match value {
            serde_json::Value::String(text) => Some(text),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_messages_field_defaults_to_empty() {
        let saved: SavedVariables = serde_json::from_str("{}").unwrap();
        assert!(saved.messages.is_empty());
    }

    #[test]
    fn null_messages_field_defaults_to_empty() {
        let saved: SavedVariables = serde_json::from_str(r#"{"messages": null}"#).unwrap();
        assert!(saved.messages.is_empty());
    }

    #[test]
    fn non_string_entries_are_dropped() {
        let saved: SavedVariables =
            serde_json::from_str(r#"{"messages": ["a", null, 3, "b", {"x": 1}]}"#).unwrap();
        assert_eq!(saved.messages, ["a", "b"]);
    }

    #[test]
    fn serializes_as_messages_record() {
        let saved = SavedVariables {
            messages: vec!["hello".to_string()],
        };
        assert_eq!(
            serde_json::to_string(&saved).unwrap(),
            r#"{"messages":["hello"]}"#
        );
    }
}
