//! Caller-facing entrypoint: sanitize, reconcile, and upload a dataframe to
//! the destination table.
//!

use polars::prelude::DataFrame;

use crate::core::df::sanitize;
use crate::core::reconcile;
use crate::error::SyncError;
use crate::opts::{LoadMode, LoadOpts};
use crate::store::TableStore;

/// Load `df` into the table described by `opts`, enforcing schema consistency
/// with the destination when `opts.mode` is [`LoadMode::Reconcile`].
///
/// The upload is retried exactly once on any failure; a second failure
/// propagates. Returns the dataframe as uploaded.
pub fn load_df(
    store: &dyn TableStore,
    df: DataFrame,
    opts: &LoadOpts,
) -> Result<DataFrame, SyncError> {
    let table_id = opts.table_id();

    let mut df = if opts.clean_col_names {
        sanitize::clean_column_names(df, opts.char_default, &opts.bad_chars)?
    } else {
        df
    };

    if opts.mode == LoadMode::Reconcile {
        df = reconcile::reconcile(store, df, &table_id, opts)?;
    }

    if opts.cols_as_str {
        df = sanitize::columns_to_str(df)?;
    }

    if let Err(err) = store.upload(&df, &table_id, opts.if_exists) {
        log::warn!("upload to {table_id} failed, retrying once: {err}");
        store.upload(&df, &table_id, opts.if_exists)?;
    }

    Ok(df)
}
