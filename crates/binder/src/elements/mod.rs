//! Column element variants
//!
//! One [`ColumnElement`] implementation per concrete element kind. The
//! trait is the sole customization seam of the binding pass: `on_bind` is
//! mandatory, the remaining hooks default to "none".

mod date;
mod numeric;
mod select;
mod text;

pub use date::DateElement;
pub use numeric::NumericElement;
pub use select::SelectElement;
pub use text::TextElement;

use contracts::element::DataEvent;
use contracts::metadata::ColumnMetadata;
use indexmap::IndexMap;

use crate::bind::BindContext;
use crate::descriptor::ElementDescriptor;
use crate::error::BindError;

/// A concrete editable/searchable column element kind.
///
/// One element instance serves every binding pass for its column,
/// potentially from several threads at once, so implementations hold
/// configuration only and stay internally immutable.
pub trait ColumnElement: Send + Sync {
    /// The element's declarative configuration.
    fn descriptor(&self) -> &ElementDescriptor;

    /// Variant-specific binding step, invoked once per pass after rule
    /// inference. May resolve the value list and the data URL, and may
    /// extend the metadata object directly.
    fn on_bind(&self, meta: &mut ColumnMetadata, ctx: &BindContext<'_>) -> Result<(), BindError>;

    /// Additional route values for the data-source request.
    fn route_values(&self) -> Option<IndexMap<String, String>> {
        None
    }

    /// Events to bind to the rendered element.
    fn data_events(&self) -> Vec<DataEvent> {
        Vec::new()
    }

    /// Extra attributes for the rendered element.
    fn html_attributes(&self) -> IndexMap<String, serde_json::Value> {
        IndexMap::new()
    }
}
