//! Shared configuration contracts for grid column elements
//!
//! Value objects exchanged between the binding engine and the rendering
//! layer: validation rules, element options, data events, and the column
//! metadata object composed during a binding pass. Types here carry no
//! behavior beyond storage, classification helpers, and serialization.

pub mod element;
pub mod metadata;
