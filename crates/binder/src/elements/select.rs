//! Select box element

use contracts::element::ElementValue;
use contracts::metadata::ColumnMetadata;
use indexmap::IndexMap;
use serde_json::json;

use super::ColumnElement;
use crate::bind::BindContext;
use crate::descriptor::ElementDescriptor;
use crate::error::BindError;
use crate::routing::resolve_data_url;

/// Select box backed by a literal value list, a registered value
/// provider, or a server data source.
pub struct SelectElement {
    descriptor: ElementDescriptor,
    multiple: bool,
    route_values: IndexMap<String, String>,
}

impl SelectElement {
    pub fn new(descriptor: ElementDescriptor) -> Self {
        Self {
            descriptor,
            multiple: false,
            route_values: IndexMap::new(),
        }
    }

    /// Allow selecting more than one option.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Additional route value sent with the data-source request.
    pub fn with_route_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_values.insert(key.into(), value.into());
        self
    }
}

impl ColumnElement for SelectElement {
    fn descriptor(&self) -> &ElementDescriptor {
        &self.descriptor
    }

    fn on_bind(&self, meta: &mut ColumnMetadata, ctx: &BindContext<'_>) -> Result<(), BindError> {
        // a provider mapping replaces the literal value copied by the binder
        if let Some(binding) = self.descriptor.provider() {
            let mapping = ctx.providers.resolve(&binding.provider, &binding.method)?;
            meta.options.value = Some(ElementValue::Mapping(mapping));
        }

        if let Some(route) = self.descriptor.route() {
            meta.data_url = resolve_data_url(
                ctx.routes,
                ctx.request,
                route,
                self.route_values().as_ref(),
            )?;
        }

        Ok(())
    }

    fn route_values(&self) -> Option<IndexMap<String, String>> {
        if self.route_values.is_empty() {
            None
        } else {
            Some(self.route_values.clone())
        }
    }

    fn html_attributes(&self) -> IndexMap<String, serde_json::Value> {
        let mut attributes = IndexMap::new();
        if self.multiple {
            attributes.insert("multiple".to_string(), json!(true));
        }
        attributes
    }
}
