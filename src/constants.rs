// Environment
pub const PROJECT_ID_ENV_VAR: &str = "WAREHOUSE_PROJECT_ID";

// Column name sanitization
pub const DEFAULT_CHAR: char = '_';
pub const DEFAULT_BAD_CHARS: &str = "#:!. ";
