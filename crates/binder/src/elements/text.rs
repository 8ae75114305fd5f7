//! Plain text input element

use contracts::metadata::ColumnMetadata;
use indexmap::IndexMap;
use serde_json::json;

use super::ColumnElement;
use crate::bind::BindContext;
use crate::descriptor::ElementDescriptor;
use crate::error::BindError;

/// Single-line text input.
pub struct TextElement {
    descriptor: ElementDescriptor,
    max_length: Option<u32>,
}

impl TextElement {
    pub fn new(descriptor: ElementDescriptor) -> Self {
        Self {
            descriptor,
            max_length: None,
        }
    }

    /// Limit the input to `max_length` characters.
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

impl ColumnElement for TextElement {
    fn descriptor(&self) -> &ElementDescriptor {
        &self.descriptor
    }

    fn on_bind(&self, _meta: &mut ColumnMetadata, _ctx: &BindContext<'_>) -> Result<(), BindError> {
        Ok(())
    }

    fn html_attributes(&self) -> IndexMap<String, serde_json::Value> {
        let mut attributes = IndexMap::new();
        if let Some(max_length) = self.max_length {
            attributes.insert("maxlength".to_string(), json!(max_length));
        }
        attributes
    }
}
