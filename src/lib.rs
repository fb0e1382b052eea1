//! # tablesync
//!
//! Push evolving dataframes into a managed warehouse table without load
//! failures from missing or newly introduced columns. Before each append the
//! destination table's schema is diffed against the dataframe's, additive
//! changes are applied remotely, and the dataframe is backfilled and
//! reordered to match the remote column order.
//!
//! # Examples
//!
//! Load a dataframe with full schema reconciliation:
//!
//! ```no_run
//! use polars::prelude::*;
//! use tablesync::load;
//! use tablesync::opts::{LoadMode, LoadOpts};
//! use tablesync::store::MemoryTableStore;
//!
//! let store = MemoryTableStore::new();
//! let df = df!("id" => &[1i64, 2], "name" => &["a", "b"]).unwrap();
//!
//! let opts = LoadOpts {
//!     mode: LoadMode::Reconcile,
//!     ..LoadOpts::new("analytics.events")
//! };
//! let df = load::load_df(&store, df, &opts).unwrap();
//! ```

pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod load;
pub mod model;
pub mod opts;
pub mod store;
pub mod util;
