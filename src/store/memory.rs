//! In-memory [`TableStore`] used by unit and integration tests.
//!

use std::collections::HashMap;

use parking_lot::Mutex;
use polars::prelude::DataFrame;

use crate::error::SyncError;
use crate::model::{FieldType, Schema};
use crate::opts::IfExists;
use crate::store::TableStore;

struct StoredTable {
    schema: Schema,
    uploads: Vec<DataFrame>,
}

#[derive(Default)]
pub struct MemoryTableStore {
    tables: Mutex<HashMap<String, StoredTable>>,
    // number of upcoming uploads that should fail
    fail_uploads: Mutex<usize>,
}

impl MemoryTableStore {
    pub fn new() -> MemoryTableStore {
        MemoryTableStore::default()
    }

    pub fn create_table(&self, table_id: impl AsRef<str>, schema: Schema) {
        self.tables.lock().insert(
            table_id.as_ref().to_string(),
            StoredTable {
                schema,
                uploads: vec![],
            },
        );
    }

    pub fn schema(&self, table_id: &str) -> Option<Schema> {
        self.tables.lock().get(table_id).map(|t| t.schema.clone())
    }

    pub fn uploads(&self, table_id: &str) -> Vec<DataFrame> {
        self.tables
            .lock()
            .get(table_id)
            .map(|t| t.uploads.clone())
            .unwrap_or_default()
    }

    pub fn num_uploads(&self, table_id: &str) -> usize {
        self.tables
            .lock()
            .get(table_id)
            .map(|t| t.uploads.len())
            .unwrap_or(0)
    }

    /// Make the next `n` uploads fail with [`SyncError::UploadFailed`].
    pub fn fail_next_uploads(&self, n: usize) {
        *self.fail_uploads.lock() = n;
    }
}

impl TableStore for MemoryTableStore {
    fn exists(&self, table_id: &str) -> Result<bool, SyncError> {
        Ok(self.tables.lock().contains_key(table_id))
    }

    fn get_schema(&self, table_id: &str) -> Result<Schema, SyncError> {
        self.tables
            .lock()
            .get(table_id)
            .map(|t| t.schema.clone())
            .ok_or_else(|| SyncError::table_not_found(table_id))
    }

    fn update_schema(&self, table_id: &str, schema: &Schema) -> Result<(), SyncError> {
        let mut tables = self.tables.lock();
        match tables.get_mut(table_id) {
            Some(table) => {
                table.schema = schema.clone();
                Ok(())
            }
            None => Err(SyncError::table_not_found(table_id)),
        }
    }

    fn upload(
        &self,
        df: &DataFrame,
        table_id: &str,
        if_exists: IfExists,
    ) -> Result<(), SyncError> {
        {
            let mut fail_uploads = self.fail_uploads.lock();
            if *fail_uploads > 0 {
                *fail_uploads -= 1;
                return Err(SyncError::upload_failed(format!(
                    "simulated upload failure for {table_id}"
                )));
            }
        }

        let mut tables = self.tables.lock();
        let table = tables
            .entry(table_id.to_string())
            .or_insert_with(|| StoredTable {
                // first write defines the schema
                schema: Schema::from_df(df, FieldType::String),
                uploads: vec![],
            });

        match if_exists {
            IfExists::Replace => {
                table.schema = Schema::from_df(df, FieldType::String);
                table.uploads.clear();
                table.uploads.push(df.clone());
            }
            IfExists::Append => {
                table.uploads.push(df.clone());
            }
        }

        Ok(())
    }
}
