//! Variable synchronization functionality.
//!
//! This module reconciles a local variables file with the remote collection
//! of a [`Scope`], writing only what changed.
//!
//! # Sync Logic
//!
//! The sync process:
//! 1. Reads the local file and fetches the remote collection
//! 2. Classifies every variable as new, updated, unchanged or remote-only
//! 3. Stops here in diff mode, or when nothing is new or updated
//! 4. Backs up the remote collection unless disabled; if that fails, the user
//!    must agree to continue without a backup
//! 5. Asks for confirmation before any write
//! 6. For each new or updated variable, updates it if it exists remotely and
//!    creates it otherwise. A failing variable is recorded and the rest continue
//!
//! Remote-only variables are reported and never deleted.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gh_var_sync::{
//!   display::Console,
//!   prompt::LinePrompt,
//!   remote::GitHubClient,
//!   sync::{Mode, SyncOptions, VarSync},
//!   variable::Scope,
//! };
//! use std::path::PathBuf;
//!
//! let client = GitHubClient::new("ghp_token").unwrap();
//! let options = SyncOptions {
//!   scope: Scope::repository("octo", "app"),
//!   masked_token: "ghp_****oken".into(),
//!   local_file: PathBuf::from("variables.csv"),
//!   backup_dir: PathBuf::from("backups"),
//!   mode: Mode::Sync,
//!   backup: true,
//! };
//!
//! let mut sync = VarSync::new(&client, LinePrompt::stdio(), Console::stdout(true));
//! sync.run(&options).unwrap();
//! ```

use std::{
  io::{self, Write},
  path::PathBuf,
};

#[cfg(feature = "tracing")]
use tracing::{debug, info, warn};

use crate::{
  backup::{self, Backup, BackupError},
  diff::{self, DiffResult},
  display::Console,
  prompt::Prompt,
  remote::{RemoteError, VariableStore},
  table::{self, TableError},
  variable::{Scope, Variable},
};

/// What a run does after loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
  /// Diff, then apply changes after confirmation.
  #[default]
  Sync,
  /// Diff and stop without writing.
  DiffOnly,
  /// Back up the remote collection and stop. The local file is not read.
  BackupOnly,
}

/// Configuration options for a sync run.
#[derive(Debug, Clone)]
pub struct SyncOptions {
  pub scope: Scope,
  /// Token as shown in the confirmation block.
  pub masked_token: String,
  pub local_file: PathBuf,
  pub backup_dir: PathBuf,
  pub mode: Mode,
  /// Back up the remote collection before writing.
  pub backup: bool,
}

/// How a run ended without a fatal error.
#[derive(Debug)]
pub enum SyncOutcome {
  BackedUp(Backup),
  DiffOnly(DiffResult),
  /// Nothing new or updated.
  UpToDate(DiffResult),
  Cancelled(CancelReason),
  Completed(SyncReport),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
  /// The pre-sync backup failed and the user declined to continue without it.
  BackupDeclined,
  /// The user did not confirm the sync.
  NotConfirmed,
}

/// Route taken for a single variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
  Created,
  Updated,
}

#[derive(Debug)]
pub struct SyncFailure {
  pub name: String,
  pub error: RemoteError,
}

/// Tallies of the apply loop.
#[derive(Debug, Default)]
pub struct SyncReport {
  pub created: usize,
  pub updated: usize,
  pub failures: Vec<SyncFailure>,
}

impl SyncReport {
  pub fn failed(&self) -> usize {
    self.failures.len()
  }

  /// Variables attempted, successful or not.
  pub fn total(&self) -> usize {
    self.created + self.updated + self.failed()
  }
}

/// Drives a sync run against one store, prompting and reporting through the given collaborators.
pub struct VarSync<S, P, W> {
  store: S,
  prompt: P,
  console: Console<W>,
}

impl<S, P, W> VarSync<S, P, W>
where
  S: VariableStore,
  P: Prompt,
  W: Write,
{
  pub fn new(store: S, prompt: P, console: Console<W>) -> Self {
    Self {
      store,
      prompt,
      console,
    }
  }

  pub fn into_parts(self) -> (S, P, Console<W>) {
    (self.store, self.prompt, self.console)
  }

  pub fn run(&mut self, options: &SyncOptions) -> Result<SyncOutcome, SyncError> {
    #[cfg(feature = "tracing")]
    info!("Starting sync for {}", options.scope);

    self.console.target(&options.scope)?;

    if options.mode == Mode::BackupOnly {
      return self.backup_only(options);
    }

    let local = table::read_variables(&options.local_file).map_err(|source| SyncError::Local {
      path: options.local_file.clone(),
      source,
    })?;
    self.console.loaded(local.len(), &options.local_file)?;

    self.console.fetching()?;
    let remote = self
      .store
      .fetch_all(&options.scope)
      .map_err(SyncError::Fetch)?;
    self.console.fetched(remote.len())?;

    let diff = diff::compare(&local, &remote);
    self.console.diff_summary(&diff)?;
    self.console.detailed_diff(&diff)?;

    if options.mode == Mode::DiffOnly {
      self.console.diff_only()?;
      return Ok(SyncOutcome::DiffOnly(diff));
    }

    let mutations = diff.mutation_set();
    if mutations.is_empty() {
      self.console.up_to_date()?;
      return Ok(SyncOutcome::UpToDate(diff));
    }

    if options.backup && !self.backup_before_sync(options)? {
      return self.cancel(CancelReason::BackupDeclined);
    }

    self
      .console
      .confirmation(&options.scope, &options.masked_token, &diff)?;
    if !self
      .prompt
      .confirm("⚠️  Do you want to proceed with the sync?")
    {
      return self.cancel(CancelReason::NotConfirmed);
    }

    self.console.sync_started()?;
    let report = self.apply(&options.scope, &mutations)?;

    #[cfg(feature = "tracing")]
    info!(
      "Sync completed: {} created, {} updated, {} failed",
      report.created,
      report.updated,
      report.failed()
    );

    if let Err(source) = self.console.sync_report(&report) {
      return Err(SyncError::Unreported { report, source });
    }
    Ok(SyncOutcome::Completed(report))
  }

  /// Writes each variable in order. Failures are recorded per variable and never stop the loop.
  ///
  /// Console errors do not stop it either: the first one is returned as
  /// [`SyncError::Unreported`] once every variable has been attempted.
  pub fn apply(&mut self, scope: &Scope, mutations: &[Variable]) -> Result<SyncReport, SyncError> {
    let mut report = SyncReport::default();
    let mut output: io::Result<()> = Ok(());

    for var in mutations.iter().filter(|var| !var.name.is_empty()) {
      let written = match apply_one(&self.store, scope, var) {
        Ok(applied) => {
          match applied {
            Applied::Created => report.created += 1,
            Applied::Updated => report.updated += 1,
          }
          self.console.applied(&var.name, applied)
        }
        Err(error) => {
          #[cfg(feature = "tracing")]
          warn!("Failed to sync {}: {}", var.name, error);

          let written = self.console.apply_failed(&var.name, &error);
          report.failures.push(SyncFailure {
            name: var.name.clone(),
            error,
          });
          written
        }
      };
      output = output.and(written);
    }

    match output {
      Ok(()) => Ok(report),
      Err(source) => Err(SyncError::Unreported { report, source }),
    }
  }

  fn cancel(&mut self, reason: CancelReason) -> Result<SyncOutcome, SyncError> {
    self.console.cancelled(reason)?;
    Ok(SyncOutcome::Cancelled(reason))
  }

  fn backup_only(&mut self, options: &SyncOptions) -> Result<SyncOutcome, SyncError> {
    self.console.backup_started(false)?;
    let backup = backup::snapshot(&self.store, &options.scope, &options.backup_dir)
      .map_err(SyncError::Backup)?;
    self.console.backup_saved(&backup)?;
    Ok(SyncOutcome::BackedUp(backup))
  }

  /// Returns whether the run may continue.
  fn backup_before_sync(&mut self, options: &SyncOptions) -> Result<bool, SyncError> {
    self.console.backup_started(true)?;

    match backup::snapshot(&self.store, &options.scope, &options.backup_dir) {
      Ok(backup) => {
        self.console.backup_saved(&backup)?;
        Ok(true)
      }
      Err(err) => {
        #[cfg(feature = "tracing")]
        warn!("Pre-sync backup failed: {}", err);

        self.console.backup_failed(&err)?;
        Ok(self.prompt.confirm("Continue without backup?"))
      }
    }
  }
}

/// Updates `var` if it already exists remotely, creates it otherwise.
pub fn apply_one<S: VariableStore>(
  store: &S,
  scope: &Scope,
  var: &Variable,
) -> Result<Applied, RemoteError> {
  if store.exists(scope, &var.name)? {
    #[cfg(feature = "tracing")]
    debug!("Updating {}", var.name);
    store.update(scope, var)?;
    Ok(Applied::Updated)
  } else {
    #[cfg(feature = "tracing")]
    debug!("Creating {}", var.name);
    store.create(scope, var)?;
    Ok(Applied::Created)
  }
}

/// Errors that end a sync run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
  /// Error reading or parsing the local variables file
  #[error("Error reading CSV file {}: {source}", .path.display())]
  Local { path: PathBuf, source: TableError },
  /// Error fetching the remote collection
  #[error("Error fetching GitHub variables: {0}")]
  Fetch(RemoteError),
  /// Error creating a requested backup
  #[error("Error creating backup: {0}")]
  Backup(BackupError),
  /// Error writing console output
  #[error("Failed to write output: {0}")]
  Output(#[from] io::Error),
  /// Error writing console output after variables were written; the tallies are kept
  #[error(
    "Failed to write sync results ({} created, {} updated, {} failed): {source}",
    .report.created,
    .report.updated,
    .report.failures.len()
  )]
  Unreported { report: SyncReport, source: io::Error },
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::{
    cell::RefCell,
    collections::{HashSet, VecDeque},
  };

  /// In-memory store recording every call.
  #[derive(Default)]
  struct FakeStore {
    remote: RefCell<Vec<Variable>>,
    calls: RefCell<Vec<String>>,
    failing_writes: HashSet<String>,
    failing_exists: HashSet<String>,
    fail_fetch: bool,
  }

  impl FakeStore {
    fn with(remote: &[(&str, &str)]) -> Self {
      Self {
        remote: RefCell::new(
          remote
            .iter()
            .map(|(name, value)| Variable::new(*name, *value))
            .collect(),
        ),
        ..Default::default()
      }
    }

    fn mutations(&self) -> Vec<String> {
      self
        .calls
        .borrow()
        .iter()
        .filter(|call| !call.starts_with("fetch") && !call.starts_with("exists"))
        .cloned()
        .collect()
    }
  }

  impl VariableStore for FakeStore {
    fn fetch_all(&self, _scope: &Scope) -> Result<Vec<Variable>, RemoteError> {
      self.calls.borrow_mut().push("fetch".into());
      if self.fail_fetch {
        return Err(RemoteError::Status {
          status: 401,
          body: "Bad credentials".into(),
        });
      }
      Ok(self.remote.borrow().clone())
    }

    fn exists(&self, _scope: &Scope, name: &str) -> Result<bool, RemoteError> {
      self.calls.borrow_mut().push(format!("exists {name}"));
      if self.failing_exists.contains(name) {
        return Err(RemoteError::Status {
          status: 503,
          body: "Service Unavailable".into(),
        });
      }
      Ok(self.remote.borrow().iter().any(|var| var.name == name))
    }

    fn create(&self, _scope: &Scope, variable: &Variable) -> Result<(), RemoteError> {
      self.calls.borrow_mut().push(format!("create {}", variable.name));
      if self.failing_writes.contains(&variable.name) {
        return Err(RemoteError::Status {
          status: 422,
          body: "Validation Failed".into(),
        });
      }
      self.remote.borrow_mut().push(variable.clone());
      Ok(())
    }

    fn update(&self, _scope: &Scope, variable: &Variable) -> Result<(), RemoteError> {
      self.calls.borrow_mut().push(format!("update {}", variable.name));
      if self.failing_writes.contains(&variable.name) {
        return Err(RemoteError::Status {
          status: 500,
          body: String::new(),
        });
      }
      for var in self.remote.borrow_mut().iter_mut() {
        if var.name == variable.name {
          var.value = variable.value.clone();
        }
      }
      Ok(())
    }
  }

  /// Writer whose every write fails, as stdout does after the reader goes away.
  struct BrokenPipe;

  impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  /// Answers questions from a script; an exhausted script answers "no".
  #[derive(Default)]
  struct ScriptedPrompt {
    answers: VecDeque<bool>,
    asked: Vec<String>,
  }

  impl ScriptedPrompt {
    fn answering(answers: &[bool]) -> Self {
      Self {
        answers: answers.iter().copied().collect(),
        asked: Vec::new(),
      }
    }
  }

  impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> bool {
      self.asked.push(question.to_string());
      self.answers.pop_front().unwrap_or(false)
    }
  }

  struct Fixture {
    _dir: tempfile::TempDir,
    options: SyncOptions,
  }

  fn fixture(csv: &str, mode: Mode, backup: bool) -> Fixture {
    let dir = tempfile::TempDir::new().unwrap();
    let local_file = dir.path().join("variables.csv");
    std::fs::write(&local_file, csv).unwrap();

    let options = SyncOptions {
      scope: Scope::repository("octo", "app"),
      masked_token: "ghp_****abcd".into(),
      local_file,
      backup_dir: dir.path().join("backups"),
      mode,
      backup,
    };

    Fixture { _dir: dir, options }
  }

  fn run(
    store: &FakeStore,
    prompt: ScriptedPrompt,
    options: &SyncOptions,
  ) -> (Result<SyncOutcome, SyncError>, ScriptedPrompt, String) {
    let mut sync = VarSync::new(store, prompt, Console::new(Vec::new(), false));
    let result = sync.run(options);
    let (_, prompt, console) = sync.into_parts();
    let output = String::from_utf8(console.into_inner()).unwrap();
    (result, prompt, output)
  }

  const SCENARIO_CSV: &str = "Key,Value,Note\nA,1,\nB,2,\n";

  #[test]
  fn test_sync_creates_and_updates() {
    let store = FakeStore::with(&[("B", "3"), ("C", "4")]);
    let fx = fixture(SCENARIO_CSV, Mode::Sync, false);

    let (result, prompt, output) = run(&store, ScriptedPrompt::answering(&[true]), &fx.options);

    let SyncOutcome::Completed(report) = result.unwrap() else {
      panic!("Expected Completed");
    };
    assert_eq!((report.created, report.updated, report.failed()), (1, 1, 0));
    assert_eq!(report.total(), 2);
    assert_eq!(
      *store.calls.borrow(),
      vec!["fetch", "exists A", "create A", "exists B", "update B"]
    );
    assert_eq!(prompt.asked.len(), 1);
    assert!(output.contains("✅ Created variable: A"));
    assert!(output.contains("✅ Updated variable: B"));
    assert!(output.contains("Created 1, Updated 1, Total 2 variables"));

    // Remote-only C is untouched.
    assert!(store.remote.borrow().contains(&Variable::new("C", "4")));
  }

  #[test]
  fn test_failed_variable_does_not_stop_batch() {
    let mut store = FakeStore::default();
    store.failing_writes.insert("B".into());
    let fx = fixture("Key,Value\nA,1\nB,2\nC,3\n", Mode::Sync, false);

    let (result, _, output) = run(&store, ScriptedPrompt::answering(&[true]), &fx.options);

    let SyncOutcome::Completed(report) = result.unwrap() else {
      panic!("Expected Completed");
    };
    assert_eq!(report.created, 2);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.total(), 3);
    assert_eq!(report.failures[0].name, "B");
    assert_eq!(store.mutations(), vec!["create A", "create B", "create C"]);
    assert!(output.contains("❌ Error syncing variable 'B'"));
    assert!(output.contains("Created 2, Updated 0, Failed 1, Total 3 variables"));
  }

  #[test]
  fn test_diff_only_makes_no_changes() {
    let store = FakeStore::with(&[("B", "3")]);
    let fx = fixture(SCENARIO_CSV, Mode::DiffOnly, true);

    let (result, prompt, output) = run(&store, ScriptedPrompt::default(), &fx.options);

    let SyncOutcome::DiffOnly(diff) = result.unwrap() else {
      panic!("Expected DiffOnly");
    };
    assert_eq!(diff.new.len(), 1);
    assert_eq!(*store.calls.borrow(), vec!["fetch"]);
    assert!(prompt.asked.is_empty());
    assert!(!fx.options.backup_dir.exists());
    assert!(output.contains("Diff mode: No changes were made"));
  }

  #[test]
  fn test_up_to_date_skips_backup_and_prompt() {
    let store = FakeStore::with(&[("A", "1"), ("B", "2")]);
    let fx = fixture(SCENARIO_CSV, Mode::Sync, true);

    let (result, prompt, output) = run(&store, ScriptedPrompt::default(), &fx.options);

    assert!(matches!(result.unwrap(), SyncOutcome::UpToDate(_)));
    assert!(prompt.asked.is_empty());
    assert!(!fx.options.backup_dir.exists());
    assert!(output.contains("All variables are up to date"));
  }

  #[test]
  fn test_declined_confirmation_makes_no_changes() {
    let store = FakeStore::with(&[("B", "3")]);
    let fx = fixture(SCENARIO_CSV, Mode::Sync, false);

    let (result, _, output) = run(&store, ScriptedPrompt::answering(&[false]), &fx.options);

    assert!(matches!(
      result.unwrap(),
      SyncOutcome::Cancelled(CancelReason::NotConfirmed)
    ));
    assert!(store.mutations().is_empty());
    assert!(output.contains("Token:       ghp_****abcd"));
    assert!(output.contains("Sync cancelled by user"));
  }

  #[test]
  fn test_backup_written_before_confirmation() {
    let store = FakeStore::with(&[("B", "3"), ("C", "4")]);
    let fx = fixture(SCENARIO_CSV, Mode::Sync, true);

    let (result, prompt, output) = run(&store, ScriptedPrompt::answering(&[true]), &fx.options);

    assert!(matches!(result.unwrap(), SyncOutcome::Completed(_)));
    assert_eq!(prompt.asked.len(), 1);

    let backups: Vec<_> = std::fs::read_dir(&fx.options.backup_dir)
      .unwrap()
      .map(|entry| entry.unwrap().path())
      .collect();
    assert_eq!(backups.len(), 1);
    assert_eq!(
      std::fs::read_to_string(&backups[0]).unwrap(),
      "Key,Value,Note\nB,3,\nC,4,\n"
    );

    let saved = output.find("Backup saved").unwrap();
    let confirm = output.find("SYNC CONFIGURATION").unwrap();
    assert!(saved < confirm);
  }

  #[test]
  fn test_backup_failure_declined_aborts() {
    let store = FakeStore::with(&[("B", "3")]);
    let mut fx = fixture(SCENARIO_CSV, Mode::Sync, true);
    fx.options.backup_dir = fx.options.local_file.clone();

    let (result, prompt, output) = run(&store, ScriptedPrompt::default(), &fx.options);

    assert!(matches!(
      result.unwrap(),
      SyncOutcome::Cancelled(CancelReason::BackupDeclined)
    ));
    assert_eq!(prompt.asked, vec!["Continue without backup?"]);
    assert!(store.mutations().is_empty());
    assert!(output.contains("Failed to create backup"));
  }

  #[test]
  fn test_backup_failure_overridden_continues() {
    let store = FakeStore::with(&[("B", "3")]);
    let mut fx = fixture(SCENARIO_CSV, Mode::Sync, true);
    fx.options.backup_dir = fx.options.local_file.clone();

    let (result, prompt, _) = run(&store, ScriptedPrompt::answering(&[true, true]), &fx.options);

    assert!(matches!(result.unwrap(), SyncOutcome::Completed(_)));
    assert_eq!(prompt.asked.len(), 2);
    assert_eq!(store.mutations(), vec!["create A", "update B"]);
  }

  #[test]
  fn test_fetch_failure_is_fatal() {
    let store = FakeStore {
      fail_fetch: true,
      ..Default::default()
    };
    let fx = fixture(SCENARIO_CSV, Mode::Sync, true);

    let (result, prompt, _) = run(&store, ScriptedPrompt::default(), &fx.options);

    match result.unwrap_err() {
      SyncError::Fetch(RemoteError::Status { status, .. }) => assert_eq!(status, 401),
      other => panic!("Expected Fetch error, got {other:?}"),
    }
    assert!(prompt.asked.is_empty());
  }

  #[test]
  fn test_missing_local_file_is_fatal() {
    let store = FakeStore::default();
    let mut fx = fixture(SCENARIO_CSV, Mode::Sync, false);
    fx.options.local_file = fx.options.local_file.with_file_name("missing.csv");

    let (result, _, _) = run(&store, ScriptedPrompt::default(), &fx.options);

    assert!(matches!(
      result.unwrap_err(),
      SyncError::Local {
        source: TableError::Io(_),
        ..
      }
    ));
    assert!(store.calls.borrow().is_empty());
  }

  #[test]
  fn test_backup_only_ignores_local_file() {
    let store = FakeStore::with(&[("A", "1")]);
    let mut fx = fixture(SCENARIO_CSV, Mode::BackupOnly, false);
    fx.options.local_file = PathBuf::from("does/not/exist.csv");

    let (result, prompt, output) = run(&store, ScriptedPrompt::default(), &fx.options);

    let SyncOutcome::BackedUp(backup) = result.unwrap() else {
      panic!("Expected BackedUp");
    };
    assert_eq!(backup.variables, 1);
    assert!(backup.path.starts_with(&fx.options.backup_dir));
    assert!(prompt.asked.is_empty());
    assert!(output.contains("Backup saved"));
  }

  #[test]
  fn test_apply_skips_empty_names() {
    let store = FakeStore::default();
    let mut sync = VarSync::new(
      &store,
      ScriptedPrompt::default(),
      Console::new(io::sink(), false),
    );

    let report = sync
      .apply(
        &Scope::repository("o", "r"),
        &[Variable::new("", "x"), Variable::new("A", "1")],
      )
      .unwrap();

    assert_eq!(report.total(), 1);
    assert_eq!(*store.calls.borrow(), vec!["exists A", "create A"]);
  }

  #[test]
  fn test_failed_lookup_does_not_stop_batch() {
    let mut store = FakeStore::with(&[("B", "3")]);
    store.failing_exists.insert("B".into());
    let fx = fixture("Key,Value\nA,1\nB,2\nC,3\n", Mode::Sync, false);

    let (result, _, output) = run(&store, ScriptedPrompt::answering(&[true]), &fx.options);

    let SyncOutcome::Completed(report) = result.unwrap() else {
      panic!("Expected Completed");
    };
    assert_eq!((report.created, report.updated, report.failed()), (2, 0, 1));
    assert_eq!(report.failures[0].name, "B");
    assert!(matches!(
      report.failures[0].error,
      RemoteError::Status { status: 503, .. }
    ));
    assert_eq!(store.mutations(), vec!["create A", "create C"]);
    assert!(output.contains("❌ Error syncing variable 'B'"));
    assert!(output.contains("Created 2, Updated 0, Failed 1, Total 3 variables"));
  }

  #[test]
  fn test_console_failure_does_not_stop_batch() {
    let store = FakeStore::with(&[("B", "0")]);
    let mut sync = VarSync::new(
      &store,
      ScriptedPrompt::default(),
      Console::new(BrokenPipe, false),
    );

    let result = sync.apply(
      &Scope::repository("o", "r"),
      &[
        Variable::new("A", "1"),
        Variable::new("B", "2"),
        Variable::new("C", "3"),
      ],
    );

    let err = result.unwrap_err();
    assert_eq!(
      err.to_string(),
      "Failed to write sync results (2 created, 1 updated, 0 failed): closed"
    );
    let SyncError::Unreported { report, source } = err else {
      panic!("Expected Unreported");
    };
    assert_eq!(report.total(), 3);
    assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
    assert_eq!(store.mutations(), vec!["create A", "update B", "create C"]);
  }
}
