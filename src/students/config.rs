use crate::error::{Result, StudentsError};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable consulted by the CLI when `--data` is not given.
pub const DATA_ENV_VAR: &str = "DATA";

/// Marks strictly above this value pass the `filter` command.
pub const DEFAULT_MARK_THRESHOLD: i64 = 4;

/// Resolve the data file path from the values the caller collected.
///
/// The flag wins over the environment value. Empty values count as unset.
/// This function never reads the process environment; the CLI passes in
/// whatever it found under [`DATA_ENV_VAR`].
pub fn resolve_data_path(flag: Option<PathBuf>, env_value: Option<OsString>) -> Result<PathBuf> {
    flag.filter(|p| !p.as_os_str().is_empty())
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
        .ok_or(StudentsError::MissingDataPath)
}
