use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::schema::FieldType;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Field {
    pub name: String,
    pub dtype: FieldType,
}

impl PartialEq for Field {
    fn eq(&self, other: &Field) -> bool {
        self.name == other.name && self.dtype == other.dtype
    }
}

impl Field {
    pub fn new(name: impl AsRef<str>, dtype: FieldType) -> Field {
        Field {
            name: name.as_ref().to_string(),
            dtype,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.dtype)
    }
}
