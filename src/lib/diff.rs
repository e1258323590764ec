//! Three-way comparison between local and remote variable sets.
//!
//! Every local variable with a non-empty name lands in exactly one of
//! [`DiffResult::new`], [`DiffResult::updated`] or [`DiffResult::unchanged`].
//! Remote variables whose name does not appear locally land in
//! [`DiffResult::remote_only`]. Names are compared exactly and case-sensitively.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::variable::Variable;

/// A variable present on both sides with differing values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableChange {
  pub name: String,
  /// Value currently stored remotely.
  pub old_value: String,
  /// Value from the local file.
  pub new_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult {
  /// Present locally, absent remotely. Will be created.
  pub new: Vec<Variable>,
  /// Present on both sides with different values. Will be updated.
  pub updated: Vec<VariableChange>,
  /// Present on both sides with equal values.
  pub unchanged: Vec<Variable>,
  /// Present remotely, absent locally. Reported, never deleted.
  pub remote_only: Vec<Variable>,
}

impl DiffResult {
  /// Variables that must be written remotely: new ones, then the new values of updated ones.
  pub fn mutation_set(&self) -> Vec<Variable> {
    self
      .new
      .iter()
      .cloned()
      .chain(
        self
          .updated
          .iter()
          .map(|change| Variable::new(&change.name, &change.new_value)),
      )
      .collect()
  }
}

/// Classifies `local` against `remote`.
///
/// Duplicate names in `remote` resolve to the last occurrence for lookups.
pub fn compare(local: &[Variable], remote: &[Variable]) -> DiffResult {
  #[cfg(feature = "tracing")]
  debug!(
    "Comparing {} local against {} remote variables",
    local.len(),
    remote.len()
  );

  let remote_values: HashMap<&str, &str> = remote
    .iter()
    .map(|var| (var.name.as_str(), var.value.as_str()))
    .collect();

  let mut result = DiffResult::default();

  for var in local.iter().filter(|var| !var.name.is_empty()) {
    match remote_values.get(var.name.as_str()) {
      None => {
        #[cfg(feature = "tracing")]
        trace!("New variable: {}", var.name);
        result.new.push(var.clone());
      }
      Some(&old_value) if old_value != var.value => {
        #[cfg(feature = "tracing")]
        trace!("Updated variable: {}", var.name);
        result.updated.push(VariableChange {
          name: var.name.clone(),
          old_value: old_value.to_string(),
          new_value: var.value.clone(),
        });
      }
      Some(_) => result.unchanged.push(var.clone()),
    }
  }

  let local_names: HashSet<&str> = local
    .iter()
    .filter(|var| !var.name.is_empty())
    .map(|var| var.name.as_str())
    .collect();

  result.remote_only = remote
    .iter()
    .filter(|var| !local_names.contains(var.name.as_str()))
    .cloned()
    .collect();

  result
}
