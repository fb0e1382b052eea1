//! Environment bootstrap for the destination project/namespace.
//!

use crate::constants::PROJECT_ID_ENV_VAR;

/// Read the default project id from the environment, honoring a local `.env`
/// file if one exists.
pub fn project_id_from_env() -> Option<String> {
    dotenv::dotenv().ok();
    match std::env::var(PROJECT_ID_ENV_VAR) {
        Ok(project_id) if !project_id.is_empty() => Some(project_id),
        _ => None,
    }
}
