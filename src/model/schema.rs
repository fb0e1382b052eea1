pub mod changes;
pub mod field;
pub mod field_type;

pub use changes::SchemaChange;
pub use field::Field;
pub use field_type::FieldType;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Ordered field list with unique names. Field order is the authoritative
/// column order on the remote side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Schema {
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn from_fields(fields: Vec<Field>) -> Schema {
        Schema { fields }
    }

    pub fn empty() -> Schema {
        Schema { fields: vec![] }
    }

    /// Derive a remote schema from a dataframe, one field per column in
    /// column order. Column names are taken verbatim so every field names a
    /// real dataframe column; dtypes the store does not model degrade to
    /// `default_dtype`.
    pub fn from_df(df: &DataFrame, default_dtype: FieldType) -> Schema {
        let fields: Vec<Field> = df
            .get_columns()
            .iter()
            .map(|col| Field {
                name: col.name().to_string(),
                dtype: FieldType::from_polars(col.dtype(), default_dtype),
            })
            .collect();

        Schema { fields }
    }

    pub fn has_field(&self, field: &Field) -> bool {
        self.fields
            .iter()
            .any(|f| f.name == field.name && f.dtype == field.dtype)
    }

    pub fn has_field_name(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub fn get_field<S: AsRef<str>>(&self, name: S) -> Option<&Field> {
        let name = name.as_ref();
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.to_owned()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
