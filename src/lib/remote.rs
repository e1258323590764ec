//! Access to the remote variables collection of a [`Scope`].
//!
//! [`VariableStore`] is the seam the sync driver talks to; [`GitHubClient`]
//! implements it against the GitHub REST API with a blocking HTTP client.
//! Every call is a single request with a fixed timeout and no retries.

use std::time::Duration;

use reqwest::{
  StatusCode, Url,
  blocking::{Client, Response},
  header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::Deserialize;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::variable::{Scope, Variable};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const API_VERSION: &str = "2022-11-28";
pub const MEDIA_TYPE: &str = "application/vnd.github+json";
/// Largest `per_page` the list endpoint accepts.
pub const MAX_PAGE_SIZE: usize = 100;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const API_VERSION_HEADER: &str = "x-github-api-version";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Operations against one remote variables collection.
///
/// `create` and `update` do not decide between each other; callers check
/// [`VariableStore::exists`] first.
pub trait VariableStore {
  /// Fetches every variable in the collection, in server order across pages.
  fn fetch_all(&self, scope: &Scope) -> Result<Vec<Variable>, RemoteError>;

  /// Returns true iff a lookup by name succeeds. Any error status, including not-found, is false.
  fn exists(&self, scope: &Scope, name: &str) -> Result<bool, RemoteError>;

  fn create(&self, scope: &Scope, variable: &Variable) -> Result<(), RemoteError>;

  fn update(&self, scope: &Scope, variable: &Variable) -> Result<(), RemoteError>;
}

impl<T: VariableStore + ?Sized> VariableStore for &T {
  fn fetch_all(&self, scope: &Scope) -> Result<Vec<Variable>, RemoteError> {
    (**self).fetch_all(scope)
  }

  fn exists(&self, scope: &Scope, name: &str) -> Result<bool, RemoteError> {
    (**self).exists(scope, name)
  }

  fn create(&self, scope: &Scope, variable: &Variable) -> Result<(), RemoteError> {
    (**self).create(scope, variable)
  }

  fn update(&self, scope: &Scope, variable: &Variable) -> Result<(), RemoteError> {
    (**self).update(scope, variable)
  }
}

/// Body of the list endpoint.
#[derive(Debug, Deserialize)]
struct VariablePage {
  #[serde(default)]
  total_count: usize,
  #[serde(default)]
  variables: Vec<Variable>,
}

/// GitHub Actions variables client.
pub struct GitHubClient {
  http: Client,
  base_url: Url,
  token: String,
  page_size: usize,
}

impl GitHubClient {
  pub fn builder(token: impl Into<String>) -> GitHubClientBuilder {
    GitHubClientBuilder::new(token)
  }

  /// Client against the public API with default settings.
  pub fn new(token: impl Into<String>) -> Result<Self, RemoteError> {
    Self::builder(token).build()
  }

  /// Collection URL of `scope`, or the URL of `name` within it.
  fn url(&self, scope: &Scope, name: Option<&str>) -> Result<Url, RemoteError> {
    let mut url = self.base_url.clone();
    {
      let mut segments = url
        .path_segments_mut()
        .map_err(|()| RemoteError::InvalidUrl(self.base_url.to_string()))?;
      segments.pop_if_empty().extend(scope.collection_segments());
      if let Some(name) = name {
        segments.push(name);
      }
    }
    Ok(url)
  }
}

impl VariableStore for GitHubClient {
  fn fetch_all(&self, scope: &Scope) -> Result<Vec<Variable>, RemoteError> {
    let url = self.url(scope, None)?;
    let mut variables = Vec::new();
    let mut page = 1;

    loop {
      #[cfg(feature = "tracing")]
      debug!("GET {} page {}", url, page);

      let response = self
        .http
        .get(url.clone())
        .bearer_auth(&self.token)
        .query(&[("per_page", self.page_size), ("page", page)])
        .send()
        .map_err(RemoteError::Transport)?;

      let body: VariablePage = expect_success(response)?
        .json()
        .map_err(RemoteError::Decode)?;

      let received = body.variables.len();
      variables.extend(body.variables);

      #[cfg(feature = "tracing")]
      trace!(
        "Page {} returned {} variables ({} of {})",
        page,
        received,
        variables.len(),
        body.total_count
      );

      if received == 0 || variables.len() >= body.total_count {
        break;
      }
      page += 1;
    }

    Ok(variables)
  }

  fn exists(&self, scope: &Scope, name: &str) -> Result<bool, RemoteError> {
    let url = self.url(scope, Some(name))?;

    #[cfg(feature = "tracing")]
    debug!("GET {}", url);

    let response = self
      .http
      .get(url)
      .bearer_auth(&self.token)
      .send()
      .map_err(RemoteError::Transport)?;

    Ok(response.status().is_success())
  }

  fn create(&self, scope: &Scope, variable: &Variable) -> Result<(), RemoteError> {
    let url = self.url(scope, None)?;

    #[cfg(feature = "tracing")]
    debug!("POST {} ({})", url, variable.name);

    let response = self
      .http
      .post(url)
      .bearer_auth(&self.token)
      .json(variable)
      .send()
      .map_err(RemoteError::Transport)?;

    expect_status(response, StatusCode::CREATED).map(drop)
  }

  fn update(&self, scope: &Scope, variable: &Variable) -> Result<(), RemoteError> {
    let url = self.url(scope, Some(&variable.name))?;

    #[cfg(feature = "tracing")]
    debug!("PATCH {}", url);

    let response = self
      .http
      .patch(url)
      .bearer_auth(&self.token)
      .json(variable)
      .send()
      .map_err(RemoteError::Transport)?;

    expect_status(response, StatusCode::NO_CONTENT).map(drop)
  }
}

fn expect_success(response: Response) -> Result<Response, RemoteError> {
  if response.status().is_success() {
    Ok(response)
  } else {
    Err(status_error(response))
  }
}

fn expect_status(response: Response, expected: StatusCode) -> Result<Response, RemoteError> {
  if response.status() == expected {
    Ok(response)
  } else {
    Err(status_error(response))
  }
}

fn status_error(response: Response) -> RemoteError {
  let status = response.status().as_u16();
  let body = response.text().unwrap_or_default();
  RemoteError::Status { status, body }
}

/// Builder for [`GitHubClient`].
pub struct GitHubClientBuilder {
  token: String,
  base_url: String,
  timeout: Duration,
  page_size: usize,
}

impl GitHubClientBuilder {
  fn new(token: impl Into<String>) -> Self {
    Self {
      token: token.into(),
      base_url: DEFAULT_API_URL.to_string(),
      timeout: REQUEST_TIMEOUT,
      page_size: MAX_PAGE_SIZE,
    }
  }

  /// API root, e.g. `https://ghe.example.com/api/v3` for GitHub Enterprise Server.
  pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Clamped to `1..=MAX_PAGE_SIZE`.
  pub fn page_size(mut self, page_size: usize) -> Self {
    self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    self
  }

  pub fn build(self) -> Result<GitHubClient, RemoteError> {
    let base_url =
      Url::parse(&self.base_url).map_err(|_| RemoteError::InvalidUrl(self.base_url.clone()))?;
    if base_url.cannot_be_a_base() {
      return Err(RemoteError::InvalidUrl(self.base_url));
    }

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
    headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

    let http = Client::builder()
      .timeout(self.timeout)
      .user_agent(USER_AGENT)
      .default_headers(headers)
      .build()
      .map_err(RemoteError::Client)?;

    Ok(GitHubClient {
      http,
      base_url,
      token: self.token,
      page_size: self.page_size,
    })
  }
}

/// Errors talking to the remote API.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
  /// The HTTP client could not be constructed
  #[error("Failed to build HTTP client: {0}")]
  Client(reqwest::Error),
  #[error("Invalid API URL: {0}")]
  InvalidUrl(String),
  /// Network or connection failure, including timeouts
  #[error("Request failed: {0}")]
  Transport(reqwest::Error),
  /// The server answered with an unexpected status
  #[error("GitHub API returned status {status}: {body}")]
  Status { status: u16, body: String },
  /// The response body was not the expected JSON
  #[error("Failed to decode response: {0}")]
  Decode(reqwest::Error),
}
