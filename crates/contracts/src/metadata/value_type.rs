//! Declared value types of model properties

use serde::{Deserialize, Serialize};

/// Declared value type of the model property behind a column.
///
/// The integer and real families drive validation-rule inference; the
/// remaining kinds imply no numeric constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelValueType {
    Int16,
    Int32,
    Int64,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Decimal,
    Bool,
    Text,
    Date,
    DateTime,
    Time,
}

impl ModelValueType {
    /// Check if the type belongs to the integer family.
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
        )
    }

    /// Check if the type belongs to the real-number family.
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64 | Self::Decimal)
    }

    /// Get canonical name for logs and comparisons.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt16 => "uint16",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Decimal => "decimal",
            Self::Bool => "bool",
            Self::Text => "text",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
        }
    }
}
