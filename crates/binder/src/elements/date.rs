//! Date picker element

use chrono::NaiveDate;
use contracts::metadata::ColumnMetadata;
use indexmap::IndexMap;
use serde_json::json;

use super::ColumnElement;
use crate::bind::BindContext;
use crate::descriptor::ElementDescriptor;
use crate::error::BindError;

const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Date input backed by a client-side picker.
pub struct DateElement {
    descriptor: ElementDescriptor,
    format: String,
}

impl DateElement {
    pub fn new(descriptor: ElementDescriptor) -> Self {
        Self {
            descriptor,
            format: DEFAULT_FORMAT.to_string(),
        }
    }

    /// strftime-style format the picker reads and writes.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

impl ColumnElement for DateElement {
    fn descriptor(&self) -> &ElementDescriptor {
        &self.descriptor
    }

    fn on_bind(&self, meta: &mut ColumnMetadata, _ctx: &BindContext<'_>) -> Result<(), BindError> {
        // a default value that the picker cannot parse is a configuration
        // smell, not a binding failure
        if let Some(default_value) = &meta.options.default_value {
            if NaiveDate::parse_from_str(default_value, &self.format).is_err() {
                tracing::warn!(
                    "column {}: default value '{}' does not match date format '{}'",
                    meta.field,
                    default_value,
                    self.format
                );
            }
        }
        Ok(())
    }

    fn html_attributes(&self) -> IndexMap<String, serde_json::Value> {
        let mut attributes = IndexMap::new();
        attributes.insert("data-date-format".to_string(), json!(self.format));
        attributes
    }
}
