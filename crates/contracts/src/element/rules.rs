//! Validation rule flags for a column element

use serde::{Deserialize, Serialize};

/// Validation rules applied to the element's input value.
///
/// Flags are independently settable and additive; flags that are not set
/// are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRules {
    /// Validate with a custom client-side function.
    #[serde(default, skip_serializing_if = "is_false")]
    pub custom: bool,
    /// Name of the custom validation function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_function: Option<String>,
    /// Value must be a valid date.
    #[serde(default, skip_serializing_if = "is_false")]
    pub date: bool,
    /// Value must be a valid email address.
    #[serde(default, skip_serializing_if = "is_false")]
    pub email: bool,
    /// Value must be an integer.
    #[serde(default, skip_serializing_if = "is_false")]
    pub integer: bool,
    /// Value must be a number.
    #[serde(default, skip_serializing_if = "is_false")]
    pub number: bool,
    /// Value must be a valid time (hh:mm with optional am/pm).
    #[serde(default, skip_serializing_if = "is_false")]
    pub time: bool,
    /// Value must be a valid url.
    #[serde(default, skip_serializing_if = "is_false")]
    pub url: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl EditRules {
    /// Create empty rules (no flags set).
    pub const fn none() -> Self {
        Self {
            custom: false,
            custom_function: None,
            date: false,
            email: false,
            integer: false,
            number: false,
            time: false,
            url: false,
        }
    }

    /// Check if no rule is active.
    pub fn is_empty(&self) -> bool {
        !self.custom
            && self.custom_function.is_none()
            && !self.date
            && !self.email
            && !self.integer
            && !self.number
            && !self.time
            && !self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_are_skipped() {
        let rules = EditRules {
            integer: true,
            ..EditRules::none()
        };

        let json = serde_json::to_value(&rules).unwrap();
        assert_eq!(json, serde_json::json!({ "integer": true }));
    }

    #[test]
    fn test_empty_rules_serialize_to_empty_object() {
        let json = serde_json::to_value(EditRules::none()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn test_custom_function_uses_camel_case() {
        let rules = EditRules {
            custom: true,
            custom_function: Some("validatePrice".to_string()),
            ..EditRules::none()
        };

        let json = serde_json::to_value(&rules).unwrap();
        assert_eq!(json["customFunction"], "validatePrice");
    }
}
