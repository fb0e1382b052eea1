pub mod schema;

pub use crate::model::schema::changes::SchemaChange;
pub use crate::model::schema::field::Field;
pub use crate::model::schema::field_type::FieldType;
pub use crate::model::schema::Schema;
