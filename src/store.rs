//! Collaborator interface to the remote columnar table store.
//!
//! The reconciliation core never talks to a warehouse directly; it works
//! against this trait. All calls are blocking, and failures propagate to the
//! caller untouched.
//!

pub mod memory;

pub use crate::store::memory::MemoryTableStore;

use polars::prelude::DataFrame;

use crate::error::SyncError;
use crate::model::Schema;
use crate::opts::IfExists;

pub trait TableStore {
    fn exists(&self, table_id: &str) -> Result<bool, SyncError>;

    fn get_schema(&self, table_id: &str) -> Result<Schema, SyncError>;

    fn update_schema(&self, table_id: &str, schema: &Schema) -> Result<(), SyncError>;

    fn upload(&self, df: &DataFrame, table_id: &str, if_exists: IfExists)
        -> Result<(), SyncError>;
}
