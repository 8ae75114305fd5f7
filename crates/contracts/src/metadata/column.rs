//! The column metadata object built during a binding pass

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ModelValueType;
use crate::element::{DataEvent, EditRules, ElementOptions};

/// Metadata for one grid column, composed by the binding engine and
/// consumed by the rendering layer.
///
/// `field` and `value_type` describe the model property; the remaining
/// fields are filled in during binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    /// Model property name.
    pub field: String,
    /// Declared value type of the model property.
    pub value_type: ModelValueType,
    /// Validation rules: explicit flags plus the inferred numeric flag.
    #[serde(default, skip_serializing_if = "EditRules::is_empty")]
    pub edit_rules: EditRules,
    /// Composed rendering options.
    #[serde(default, skip_serializing_if = "ElementOptions::is_empty")]
    pub options: ElementOptions,
    /// Resolved data-source endpoint URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
    /// Extra attributes for the rendered element.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, serde_json::Value>,
    /// Events bound to the rendered element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<DataEvent>,
}

impl ColumnMetadata {
    /// Create metadata for a model property, with all output slots empty.
    pub fn new(field: impl Into<String>, value_type: ModelValueType) -> Self {
        Self {
            field: field.into(),
            value_type,
            edit_rules: EditRules::none(),
            options: ElementOptions::default(),
            data_url: None,
            attributes: IndexMap::new(),
            events: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metadata_has_empty_output_slots() {
        let meta = ColumnMetadata::new("unit_price", ModelValueType::Decimal);

        assert_eq!(meta.field, "unit_price");
        assert!(meta.edit_rules.is_empty());
        assert!(meta.options.is_empty());
        assert!(meta.data_url.is_none());
        assert!(meta.attributes.is_empty());
        assert!(meta.events.is_empty());
    }

    #[test]
    fn test_empty_slots_are_skipped_in_json() {
        let meta = ColumnMetadata::new("name", ModelValueType::Text);
        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "field": "name", "valueType": "text" })
        );
    }
}
