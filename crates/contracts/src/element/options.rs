//! Rendering options for a column element

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The set of value:label pairs offered by a select-style element.
///
/// Either a literal `"value1:Label 1;value2:Label 2"` string or an
/// ordered mapping resolved from a value provider. Mapping order is
/// preserved end to end; it determines the rendered option order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementValue {
    Literal(String),
    Mapping(IndexMap<String, String>),
}

/// Rendering options for an editable or searchable element.
///
/// Populated once per binding pass; not mutated afterward.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementOptions {
    /// Value list for select-style elements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ElementValue>,
    /// Default value shown in the input element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Client function that builds the select element when the server
    /// response cannot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_select: Option<String>,
    /// Client function called once when the element is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_init: Option<String>,
}

impl ElementOptions {
    /// Check if no option is set.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
            && self.default_value.is_none()
            && self.build_select.is_none()
            && self.data_init.is_none()
    }
}
