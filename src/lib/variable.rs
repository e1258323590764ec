//! Core data types shared by every stage of a sync run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single name/value pair, as stored locally and remotely.
///
/// Values are opaque strings; no type coercion or normalization happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
  pub name: String,
  pub value: String,
}

impl Variable {
  pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      value: value.into(),
    }
  }
}

/// Addressing tuple selecting which remote collection is read and written.
///
/// `environment: None` targets repository-level variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
  pub owner: String,
  pub repo: String,
  pub environment: Option<String>,
}

impl Scope {
  pub fn repository(owner: impl Into<String>, repo: impl Into<String>) -> Self {
    Self {
      owner: owner.into(),
      repo: repo.into(),
      environment: None,
    }
  }

  pub fn environment(
    owner: impl Into<String>,
    repo: impl Into<String>,
    environment: impl Into<String>,
  ) -> Self {
    Self {
      owner: owner.into(),
      repo: repo.into(),
      environment: Some(environment.into()),
    }
  }

  /// Path segments of the variables collection, relative to the API root.
  pub fn collection_segments(&self) -> Vec<&str> {
    let (owner, repo) = (self.owner.as_str(), self.repo.as_str());
    match self.environment.as_deref() {
      Some(env) => vec!["repos", owner, repo, "environments", env, "variables"],
      None => vec!["repos", owner, repo, "actions", "variables"],
    }
  }
}

impl fmt::Display for Scope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.environment {
      Some(env) => write!(f, "{}/{} ({})", self.owner, self.repo, env),
      None => write!(f, "{}/{}", self.owner, self.repo),
    }
  }
}
