//! Run configuration taken from the process environment.

use std::fmt;

use crate::{remote::DEFAULT_API_URL, variable::Scope};

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const OWNER_VAR: &str = "GITHUB_OWNER";
pub const REPO_VAR: &str = "GITHUB_REPO";
pub const ENVIRONMENT_VAR: &str = "GITHUB_ENVIRONMENT";
pub const API_URL_VAR: &str = "GITHUB_API_URL";

/// Required variables with the description shown when they are missing.
const REQUIRED: [(&str, &str); 3] = [
  (TOKEN_VAR, "GitHub Personal Access Token"),
  (OWNER_VAR, "Owner/organization name"),
  (REPO_VAR, "Repository name"),
];

/// Credential, target scope and API location for a run.
#[derive(Clone, PartialEq)]
pub struct Config {
  pub token: String,
  pub scope: Scope,
  pub api_url: String,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds the configuration from any key lookup. Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let (token, owner, repo) = match (get(TOKEN_VAR), get(OWNER_VAR), get(REPO_VAR)) {
      (Some(token), Some(owner), Some(repo)) => (token, owner, repo),
      (token, owner, repo) => {
        let missing = [
          (TOKEN_VAR, token.is_none()),
          (OWNER_VAR, owner.is_none()),
          (REPO_VAR, repo.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, is_missing)| is_missing.then_some(key))
        .collect();
        return Err(ConfigError::Missing(missing));
      }
    };

    let scope = match get(ENVIRONMENT_VAR) {
      Some(environment) => Scope::environment(owner, repo, environment),
      None => Scope::repository(owner, repo),
    };

    Ok(Self {
      token,
      scope,
      api_url: get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
    })
  }

  pub fn masked_token(&self) -> String {
    mask_token(&self.token)
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("token", &self.masked_token())
      .field("scope", &self.scope)
      .field("api_url", &self.api_url)
      .finish()
  }
}

/// Shows the first and last four characters of a token, or `****` for short tokens.
pub fn mask_token(token: &str) -> String {
  let chars: Vec<char> = token.chars().collect();
  if chars.len() <= 8 {
    return "****".to_string();
  }

  let head: String = chars[..4].iter().collect();
  let tail: String = chars[chars.len() - 4..].iter().collect();
  format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Missing required environment variables: {}\n{}", .0.join(", "), usage())]
  Missing(Vec<&'static str>),
}

fn usage() -> String {
  let mut text = String::from("Please set the following environment variables:");
  for (key, description) in REQUIRED {
    text.push_str(&format!("\n  {key:<20}- {description}"));
  }
  text.push_str(&format!(
    "\n  {ENVIRONMENT_VAR:<20}- (Optional) Environment name (e.g., production, staging)"
  ));
  text.push_str(&format!(
    "\n  {API_URL_VAR:<20}- (Optional) API root, defaults to {DEFAULT_API_URL}"
  ));
  text
}
