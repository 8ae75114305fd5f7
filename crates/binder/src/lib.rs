//! Binding engine for grid column elements
//!
//! Turns per-column declarative configuration (an [`ElementDescriptor`]
//! wrapped by a concrete [`elements::ColumnElement`] variant) into the
//! runtime [`contracts::metadata::ColumnMetadata`] consumed by the
//! rendering layer: validation rules inferred from the model value type,
//! a literal or provider-resolved value list, a data-source URL resolved
//! from a symbolic route, and client-side hooks.

pub mod bind;
pub mod descriptor;
pub mod elements;
pub mod error;
pub mod providers;
pub mod route_table;
pub mod routing;

pub use bind::{bind, BindContext};
pub use descriptor::{DescriptorBuilder, ElementDescriptor, ProviderBinding};
pub use error::{BindError, ProviderError};
pub use providers::{ValueProvider, ValueProviderRegistry};
pub use route_table::RouteTable;
pub use routing::{
    merge_route_values, resolve_data_url, RequestContext, RouteBinding, RouteResolver,
};
