use polars::prelude::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote field type tag. The destination store only distinguishes integers
/// from everything else; anything ambiguous degrades to `String` rather than
/// failing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    Integer,
    String,
}

impl FieldType {
    /// Infer a remote type tag from a polars dtype. Only 64-bit integers map
    /// to `Integer`; every other dtype falls back to `default`.
    pub fn from_polars(dtype: &DataType, default: FieldType) -> FieldType {
        match dtype {
            DataType::Int64 => FieldType::Integer,
            _ => default,
        }
    }

    pub fn to_polars(&self) -> DataType {
        match self {
            FieldType::Integer => DataType::Int64,
            FieldType::String => DataType::String,
        }
    }

    pub fn from_string(s: &str) -> FieldType {
        match s {
            "INTEGER" => FieldType::Integer,
            _ => FieldType::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Integer => "INTEGER",
            FieldType::String => "STRING",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
