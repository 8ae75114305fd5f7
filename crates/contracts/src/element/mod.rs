//! Element-level configuration containers
//!
//! Plain value objects describing one editable/searchable column element:
//! validation rule flags, rendering options, and event bindings.

mod events;
mod options;
mod rules;

pub use events::DataEvent;
pub use options::{ElementOptions, ElementValue};
pub use rules::EditRules;
