//! Reconcile a dataframe's schema with the destination table before a load.
//!
//! One-directional by design: the remote schema only ever grows (adds are
//! applied, updates and drops are not), while the dataframe is backfilled
//! with placeholder columns and then pruned and reordered to the remote
//! column list.
//!

use polars::prelude::*;

use crate::core::diff::schema_diff;
use crate::error::SyncError;
use crate::model::{Schema, SchemaChange};
use crate::opts::{IfExists, LoadOpts};
use crate::store::TableStore;

/// Reconcile `df` against the destination table's schema.
///
/// Skipped entirely when the destination is being replaced or does not exist
/// yet (the first write defines the schema). Otherwise applies additive
/// schema changes remotely, backfills remote-only fields as null columns, and
/// returns the dataframe with columns matching the remote order exactly.
pub fn reconcile(
    store: &dyn TableStore,
    df: DataFrame,
    table_id: &str,
    opts: &LoadOpts,
) -> Result<DataFrame, SyncError> {
    if opts.if_exists == IfExists::Replace {
        log::debug!("replacing {table_id}, nothing to reconcile");
        return Ok(df);
    }

    if !store.exists(table_id)? {
        log::debug!("table {table_id} does not exist, first write defines the schema");
        return Ok(df);
    }

    let old_schema = store.get_schema(table_id)?;
    let new_schema = Schema::from_df(&df, opts.default_dtype);
    let changes = schema_diff(&old_schema, &new_schema);
    log::debug!("reconciling {table_id}, {} changes", changes.len());

    if changes.is_empty() {
        return Ok(df);
    }

    apply_adds_to_store(store, table_id, &changes, opts)?;
    let df = backfill_missing_columns(df, &changes, opts)?;
    align_to_store_columns(store, df, table_id)
}

/// Append each `Add` field to the remote schema. The current schema is
/// re-fetched immediately before mutation so a field added by a concurrent
/// writer since the diff was computed is not added twice.
fn apply_adds_to_store(
    store: &dyn TableStore,
    table_id: &str,
    changes: &[SchemaChange],
    opts: &LoadOpts,
) -> Result<(), SyncError> {
    if !changes.iter().any(|c| c.is_add()) {
        return Ok(());
    }

    let mut current = store.get_schema(table_id)?;
    for change in changes {
        if let SchemaChange::Add(field) = change {
            if current.has_field_name(&field.name) {
                log::debug!("field {} already present in {table_id}", field.name);
                continue;
            }
            if opts.print_info {
                log::info!("adding {field} to {table_id}");
            }
            current.fields.push(field.clone());
            store.update_schema(table_id, &current)?;
        }
    }

    Ok(())
}

/// Add a full-null placeholder column for each field the remote table expects
/// but the dataframe lacks.
fn backfill_missing_columns(
    mut df: DataFrame,
    changes: &[SchemaChange],
    opts: &LoadOpts,
) -> Result<DataFrame, SyncError> {
    if !changes.iter().any(|c| c.is_drop()) {
        return Ok(df);
    }

    for change in changes {
        if let SchemaChange::Drop(field) = change {
            let already_present = df
                .get_column_names()
                .iter()
                .any(|name| name.as_str() == field.name);
            if already_present {
                continue;
            }
            if opts.print_info {
                log::info!("adding placeholder column {} to dataframe", field.name);
            }
            let column = Series::full_null(
                field.name.as_str().into(),
                df.height(),
                &field.dtype.to_polars(),
            );
            df.with_column(column)?;
        }
    }

    Ok(df)
}

/// Select the dataframe's columns down to the remote schema's field names, in
/// remote order. Columns the remote table does not know are dropped here.
fn align_to_store_columns(
    store: &dyn TableStore,
    df: DataFrame,
    table_id: &str,
) -> Result<DataFrame, SyncError> {
    let schema = store.get_schema(table_id)?;
    let names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
    Ok(df.select(names)?)
}
