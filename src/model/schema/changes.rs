use serde::{Deserialize, Serialize};

use crate::model::schema::Field;

/// A single difference between a remote schema and the schema implied by a
/// dataframe. `Update` and `Drop` are detected but never pushed to the remote
/// store; the remote schema only ever grows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SchemaChange {
    Add(Field),
    Update { old: Field, new: Field },
    Drop(Field),
}

impl SchemaChange {
    pub fn is_add(&self) -> bool {
        matches!(self, SchemaChange::Add(_))
    }

    pub fn is_drop(&self) -> bool {
        matches!(self, SchemaChange::Drop(_))
    }
}
