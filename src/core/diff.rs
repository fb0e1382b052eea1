//! Schema diffing between the remote table and a dataframe-derived schema.
//!

use crate::model::{Schema, SchemaChange};

/// Compare two schemas by field name and return the ordered change set.
///
/// Two passes: the first walks `new` in field order and emits `Add` for names
/// missing from `old` and `Update` for names present in both with a different
/// type; the second walks `old` in field order and emits `Drop` for names
/// missing from `new`. Downstream code depends on this ordering.
pub fn schema_diff(old: &Schema, new: &Schema) -> Vec<SchemaChange> {
    let mut changes: Vec<SchemaChange> = vec![];

    for new_field in new.fields.iter() {
        match old.get_field(&new_field.name) {
            None => changes.push(SchemaChange::Add(new_field.clone())),
            Some(old_field) if old_field != new_field => changes.push(SchemaChange::Update {
                old: old_field.clone(),
                new: new_field.clone(),
            }),
            Some(_) => {}
        }
    }

    for old_field in old.fields.iter() {
        if !new.has_field_name(&old_field.name) {
            changes.push(SchemaChange::Drop(old_field.clone()));
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::schema_diff;
    use crate::model::{Field, FieldType, Schema, SchemaChange};

    fn schema(fields: &[(&str, FieldType)]) -> Schema {
        Schema::from_fields(
            fields
                .iter()
                .map(|(name, dtype)| Field::new(name, *dtype))
                .collect(),
        )
    }

    #[test]
    fn test_identical_schemas_diff_empty() {
        let a = schema(&[
            ("id", FieldType::Integer),
            ("name", FieldType::String),
        ]);
        assert!(schema_diff(&a, &a).is_empty());
    }

    #[test]
    fn test_empty_schemas_diff_empty() {
        assert!(schema_diff(&Schema::empty(), &Schema::empty()).is_empty());
    }

    #[test]
    fn test_added_field() {
        let old = schema(&[("id", FieldType::Integer)]);
        let new = schema(&[("id", FieldType::Integer), ("extra", FieldType::String)]);
        assert_eq!(
            schema_diff(&old, &new),
            vec![SchemaChange::Add(Field::new("extra", FieldType::String))]
        );
    }

    #[test]
    fn test_dropped_field() {
        let old = schema(&[("id", FieldType::Integer), ("age", FieldType::Integer)]);
        let new = schema(&[("id", FieldType::Integer)]);
        assert_eq!(
            schema_diff(&old, &new),
            vec![SchemaChange::Drop(Field::new("age", FieldType::Integer))]
        );
    }

    #[test]
    fn test_type_change_is_update_not_add_or_drop() {
        let old = schema(&[("id", FieldType::Integer)]);
        let new = schema(&[("id", FieldType::String)]);
        assert_eq!(
            schema_diff(&old, &new),
            vec![SchemaChange::Update {
                old: Field::new("id", FieldType::Integer),
                new: Field::new("id", FieldType::String),
            }]
        );
    }

    #[test]
    fn test_change_set_ordering() {
        // Adds and Updates follow the new schema's field order, then Drops
        // follow the old schema's field order.
        let old = schema(&[
            ("id", FieldType::Integer),
            ("age", FieldType::Integer),
            ("city", FieldType::String),
        ]);
        let new = schema(&[
            ("extra_a", FieldType::String),
            ("id", FieldType::String),
            ("extra_b", FieldType::Integer),
        ]);
        assert_eq!(
            schema_diff(&old, &new),
            vec![
                SchemaChange::Add(Field::new("extra_a", FieldType::String)),
                SchemaChange::Update {
                    old: Field::new("id", FieldType::Integer),
                    new: Field::new("id", FieldType::String),
                },
                SchemaChange::Add(Field::new("extra_b", FieldType::Integer)),
                SchemaChange::Drop(Field::new("age", FieldType::Integer)),
                SchemaChange::Drop(Field::new("city", FieldType::String)),
            ]
        );
    }

    #[test]
    fn test_change_names_partition() {
        let old = schema(&[("a", FieldType::Integer), ("b", FieldType::String)]);
        let new = schema(&[("b", FieldType::Integer), ("c", FieldType::String)]);

        for change in schema_diff(&old, &new) {
            match change {
                SchemaChange::Add(field) => {
                    assert!(new.has_field_name(&field.name));
                    assert!(!old.has_field_name(&field.name));
                }
                SchemaChange::Update { old: o, new: n } => {
                    assert_eq!(o.name, n.name);
                    assert_ne!(o.dtype, n.dtype);
                }
                SchemaChange::Drop(field) => {
                    assert!(old.has_field_name(&field.name));
                    assert!(!new.has_field_name(&field.name));
                }
            }
        }
    }
}
