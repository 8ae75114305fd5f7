//! Numeric input element

use contracts::metadata::ColumnMetadata;
use indexmap::IndexMap;
use serde_json::json;

use super::ColumnElement;
use crate::bind::BindContext;
use crate::descriptor::ElementDescriptor;
use crate::error::BindError;

/// Numeric input with optional range and step constraints.
///
/// The integer/number validation flag itself comes from rule inference
/// against the model value type; this element only contributes the input
/// attributes.
pub struct NumericElement {
    descriptor: ElementDescriptor,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
}

impl NumericElement {
    pub fn new(descriptor: ElementDescriptor) -> Self {
        Self {
            descriptor,
            min: None,
            max: None,
            step: None,
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}

impl ColumnElement for NumericElement {
    fn descriptor(&self) -> &ElementDescriptor {
        &self.descriptor
    }

    fn on_bind(&self, _meta: &mut ColumnMetadata, _ctx: &BindContext<'_>) -> Result<(), BindError> {
        Ok(())
    }

    fn html_attributes(&self) -> IndexMap<String, serde_json::Value> {
        let mut attributes = IndexMap::new();
        if let Some(min) = self.min {
            attributes.insert("min".to_string(), json!(min));
        }
        if let Some(max) = self.max {
            attributes.insert("max".to_string(), json!(max));
        }
        if let Some(step) = self.step {
            attributes.insert("step".to_string(), json!(step));
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_and_step_become_attributes() {
        let element = NumericElement::new(ElementDescriptor::builder().build())
            .with_range(0.0, 100.0)
            .with_step(0.5);

        let attributes = element.html_attributes();
        assert_eq!(attributes["min"], json!(0.0));
        assert_eq!(attributes["max"], json!(100.0));
        assert_eq!(attributes["step"], json!(0.5));
    }

    #[test]
    fn test_unconstrained_element_has_no_attributes() {
        let element = NumericElement::new(ElementDescriptor::builder().build());
        assert!(element.html_attributes().is_empty());
    }
}
