//! Per-column element descriptor
//!
//! A descriptor is built once, at declaration time, via
//! [`DescriptorBuilder`], and is read-only afterwards. One descriptor
//! instance serves every binding pass for its column, possibly from
//! several request-handling threads at once, so configuration must not
//! change after the first binding call begins; the builder enforces that
//! contract instead of leaving it to convention.

use contracts::element::{EditRules, ElementOptions};
use indexmap::IndexMap;

use crate::routing::RouteBinding;

/// Reference to a registered value provider and one of its zero-argument
/// methods. Both halves are required; a provider identifier without a
/// method (or the reverse) cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderBinding {
    pub provider: String,
    pub method: String,
}

/// Declarative configuration for one grid column element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementDescriptor {
    rules: EditRules,
    options: ElementOptions,
    value: Option<String>,
    provider: Option<ProviderBinding>,
    route: Option<RouteBinding>,
}

impl ElementDescriptor {
    pub fn builder() -> DescriptorBuilder {
        DescriptorBuilder::default()
    }

    /// Explicitly configured validation flags.
    pub fn rules(&self) -> &EditRules {
        &self.rules
    }

    /// Rendering options configured at declaration time.
    pub fn options(&self) -> &ElementOptions {
        &self.options
    }

    /// Literal value:label list, copied into the element options at bind
    /// time unless a provider mapping replaces it.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn provider(&self) -> Option<&ProviderBinding> {
        self.provider.as_ref()
    }

    pub fn route(&self) -> Option<&RouteBinding> {
        self.route.as_ref()
    }
}

/// Builder exposing the declarative configuration surface.
#[derive(Debug, Clone, Default)]
pub struct DescriptorBuilder {
    rules: EditRules,
    options: ElementOptions,
    value: Option<String>,
    provider: Option<ProviderBinding>,
    route_name: Option<String>,
    route_base: IndexMap<String, String>,
    route_overrides: IndexMap<String, String>,
}

impl DescriptorBuilder {
    /// Client function that builds the select element when the server
    /// response cannot.
    pub fn build_select(mut self, function: impl Into<String>) -> Self {
        self.options.build_select = Some(function.into());
        self
    }

    /// Validate the value with a custom client-side function.
    pub fn custom_validation(mut self, enabled: bool) -> Self {
        self.rules.custom = enabled;
        self
    }

    /// Name of the custom validation function.
    pub fn custom_validation_function(mut self, function: impl Into<String>) -> Self {
        self.rules.custom_function = Some(function.into());
        self
    }

    /// Client function called once when the element is created.
    pub fn data_init(mut self, function: impl Into<String>) -> Self {
        self.options.data_init = Some(function.into());
        self
    }

    /// Require the value to be a valid date.
    pub fn date_validation(mut self, enabled: bool) -> Self {
        self.rules.date = enabled;
        self
    }

    /// Default value shown in the input element.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.options.default_value = Some(value.into());
        self
    }

    /// Require the value to be a valid email address.
    pub fn email_validation(mut self, enabled: bool) -> Self {
        self.rules.email = enabled;
        self
    }

    /// Require the value to be a valid time.
    pub fn time_validation(mut self, enabled: bool) -> Self {
        self.rules.time = enabled;
        self
    }

    /// Require the value to be a valid url.
    pub fn url_validation(mut self, enabled: bool) -> Self {
        self.rules.url = enabled;
        self
    }

    /// Literal value:label list for a select-style element.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Resolve the element's value list through a registered provider.
    pub fn value_provider(
        mut self,
        provider: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        self.provider = Some(ProviderBinding {
            provider: provider.into(),
            method: method.into(),
        });
        self
    }

    /// Resolve the element's data-source URL from a named route.
    pub fn data_route(mut self, name: impl Into<String>) -> Self {
        self.route_name = Some(name.into());
        self
    }

    /// Base route value, overridden by `route_value` entries on conflict.
    pub fn base_route_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_base.insert(key.into(), value.into());
        self
    }

    /// Route value that takes precedence when keys collide.
    pub fn route_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_overrides.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> ElementDescriptor {
        let route = if self.route_name.is_some()
            || !self.route_base.is_empty()
            || !self.route_overrides.is_empty()
        {
            Some(RouteBinding {
                name: self.route_name.unwrap_or_default(),
                base: self.route_base,
                overrides: self.route_overrides,
            })
        } else {
            None
        };

        ElementDescriptor {
            rules: self.rules,
            options: self.options,
            value: self.value,
            provider: self.provider,
            route,
        }
    }
}
