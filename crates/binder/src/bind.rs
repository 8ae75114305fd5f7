//! Metadata binding orchestration

use contracts::element::{EditRules, ElementValue};
use contracts::metadata::{ColumnMetadata, ModelValueType};

use crate::elements::ColumnElement;
use crate::error::BindError;
use crate::providers::ValueProviderRegistry;
use crate::routing::{RequestContext, RouteResolver};

/// Collaborators available to a binding pass.
///
/// All fields are shared references to internally immutable state; one
/// context can serve concurrent binding calls without synchronization.
pub struct BindContext<'a> {
    pub providers: &'a ValueProviderRegistry,
    pub routes: &'a dyn RouteResolver,
    /// Routing context of the active request, or `None` outside request
    /// processing (design time, background work). Without it no data URL
    /// is produced.
    pub request: Option<&'a RequestContext>,
}

/// Bind one column element into the metadata object under construction.
///
/// Runs once per annotated property per metadata-materialization pass:
/// copies the element options and literal value, infers numeric
/// validation rules from the model value type, delegates to the variant's
/// `on_bind`, then merges the variant's events and attributes.
pub fn bind(
    element: &dyn ColumnElement,
    meta: &mut ColumnMetadata,
    ctx: &BindContext<'_>,
) -> Result<(), BindError> {
    let descriptor = element.descriptor();

    meta.options = descriptor.options().clone();
    if let Some(value) = descriptor.value() {
        meta.options.value = Some(ElementValue::Literal(value.to_string()));
    }

    meta.edit_rules = inferred_rules(meta.value_type, descriptor.rules());

    element.on_bind(meta, ctx)?;

    meta.events.extend(element.data_events());
    for (key, value) in element.html_attributes() {
        meta.attributes.insert(key, value);
    }

    tracing::debug!(
        "bound column {} ({}), data url: {}",
        meta.field,
        meta.value_type.as_str(),
        meta.data_url.as_deref().unwrap_or("-")
    );

    Ok(())
}

/// Union the type-driven flag into the explicitly configured rules.
///
/// Inference only ever turns a flag on; flags set at declaration time are
/// never cleared, and a type outside both numeric families contributes
/// nothing.
fn inferred_rules(value_type: ModelValueType, explicit: &EditRules) -> EditRules {
    let mut rules = explicit.clone();
    if value_type.is_integer() {
        rules.integer = true;
    } else if value_type.is_number() {
        rules.number = true;
    }
    rules
}
