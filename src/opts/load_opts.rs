use serde_derive::{Deserialize, Serialize};

use crate::config;
use crate::constants::{DEFAULT_BAD_CHARS, DEFAULT_CHAR};
use crate::error::SyncError;
use crate::model::FieldType;

/// What to do with rows already in the destination table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IfExists {
    Append,
    Replace,
}

impl IfExists {
    pub fn from_string(s: &str) -> Result<IfExists, SyncError> {
        match s {
            "append" => Ok(IfExists::Append),
            "replace" => Ok(IfExists::Replace),
            _ => Err(SyncError::invalid_mode(s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IfExists::Append => "append",
            IfExists::Replace => "replace",
        }
    }
}

/// `Plain` skips schema reconciliation and just sanitizes and uploads;
/// `Reconcile` runs the full pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    Plain,
    Reconcile,
}

impl LoadMode {
    pub fn from_string(s: &str) -> Result<LoadMode, SyncError> {
        match s {
            "plain" => Ok(LoadMode::Plain),
            "reconcile" => Ok(LoadMode::Reconcile),
            _ => Err(SyncError::invalid_mode(s)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoadOpts {
    pub destination: String,
    pub project_id: Option<String>,
    pub if_exists: IfExists,
    pub mode: LoadMode,
    pub cols_as_str: bool,
    pub clean_col_names: bool,
    pub char_default: char,
    pub bad_chars: String,
    pub default_dtype: FieldType,
    pub print_info: bool,
}

impl LoadOpts {
    pub fn new(destination: impl AsRef<str>) -> LoadOpts {
        LoadOpts {
            destination: destination.as_ref().to_string(),
            project_id: config::project_id_from_env(),
            ..Default::default()
        }
    }

    /// Fully qualified destination identifier, `{project}.{destination}` when
    /// a project id is set.
    pub fn table_id(&self) -> String {
        match &self.project_id {
            Some(project_id) => format!("{}.{}", project_id, self.destination),
            None => self.destination.to_owned(),
        }
    }
}

impl Default for LoadOpts {
    fn default() -> LoadOpts {
        LoadOpts {
            destination: String::from(""),
            project_id: None,
            if_exists: IfExists::Append,
            mode: LoadMode::Plain,
            cols_as_str: false,
            clean_col_names: true,
            char_default: DEFAULT_CHAR,
            bad_chars: String::from(DEFAULT_BAD_CHARS),
            default_dtype: FieldType::String,
            print_info: true,
        }
    }
}
