//! Snapshots of the remote collection written to timestamped CSV files.
//!
//! Files are named `backup_<owner>_<repo>[_<environment>]_<YYYY-MM-DD_HH-MM-SS>.csv`.
//! Two snapshots of the same scope within one second share a name, and the
//! later one overwrites the earlier. Backups are never read back by this tool.

use std::{
  fs::File,
  io::{self, BufWriter, Write},
  path::{Path, PathBuf},
};

use chrono::{Local, NaiveDateTime};

#[cfg(feature = "tracing")]
use tracing::{debug, info};

use crate::{
  remote::{RemoteError, VariableStore},
  table::Table,
  variable::{Scope, Variable},
};

pub const DEFAULT_BACKUP_DIR: &str = "backups";
pub const BACKUP_HEADER: [&str; 3] = ["Key", "Value", "Note"];
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// A written snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Backup {
  pub path: PathBuf,
  pub variables: usize,
}

/// Fetches the full remote collection of `scope` and writes it under `dir`.
pub fn snapshot<S: VariableStore>(
  store: &S,
  scope: &Scope,
  dir: &Path,
) -> Result<Backup, BackupError> {
  snapshot_at(store, scope, dir, Local::now().naive_local())
}

/// Same as [`snapshot`] with an explicit timestamp for the file name.
pub fn snapshot_at<S: VariableStore>(
  store: &S,
  scope: &Scope,
  dir: &Path,
  timestamp: NaiveDateTime,
) -> Result<Backup, BackupError> {
  #[cfg(feature = "tracing")]
  info!("Creating backup of {}", scope);

  let variables = store.fetch_all(scope).map_err(BackupError::Fetch)?;

  std::fs::create_dir_all(dir).map_err(BackupError::CreateDir)?;

  let path = dir.join(backup_file_name(scope, timestamp));
  export_variables(&variables, &path)?;

  #[cfg(feature = "tracing")]
  debug!("Wrote {} variables to {:?}", variables.len(), path);

  Ok(Backup {
    path,
    variables: variables.len(),
  })
}

pub fn backup_file_name(scope: &Scope, timestamp: NaiveDateTime) -> String {
  let timestamp = timestamp.format(TIMESTAMP_FORMAT);
  match &scope.environment {
    Some(env) => format!(
      "backup_{}_{}_{}_{}.csv",
      scope.owner, scope.repo, env, timestamp
    ),
    None => format!("backup_{}_{}_{}.csv", scope.owner, scope.repo, timestamp),
  }
}

/// Writes `variables` as `Key,Value,Note` rows with an empty note column.
pub fn export_variables<P: AsRef<Path>>(variables: &[Variable], path: P) -> Result<(), BackupError> {
  let mut table = Table::new(BACKUP_HEADER);
  for var in variables {
    table.push_row([var.name.as_str(), var.value.as_str(), ""]);
  }

  let file = File::create(path).map_err(BackupError::Write)?;
  let mut writer = BufWriter::new(file);
  write!(writer, "{table}").map_err(BackupError::Write)?;
  writer.flush().map_err(BackupError::Write)
}

/// Errors that can occur while taking a backup.
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
  #[error("Failed to fetch variables: {0}")]
  Fetch(RemoteError),
  #[error("Failed to create backup directory: {0}")]
  CreateDir(io::Error),
  #[error("Failed to write backup file: {0}")]
  Write(io::Error),
}
