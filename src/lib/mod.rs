//! GitHub Actions variables synchronization library.
//!
//! This library reconciles a local CSV file of variables with the variables
//! stored in a GitHub repository, or in one of its deployment environments.
//! It reports what differs, can back up the remote state, and writes only the
//! variables that are new or changed.
//!
//! # Features
//!
//! - **Three-way diff**: new, updated, unchanged and remote-only variables
//! - **Minimal writes**: unchanged variables are never sent, remote-only ones never deleted
//! - **Backups**: timestamped CSV snapshots of the remote collection
//! - **Optional tracing**: Detailed logging when the `tracing` feature is enabled
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_var_sync::{diff::compare, variable::Variable};
//!
//! let local = vec![Variable::new("A", "1"), Variable::new("B", "2")];
//! let remote = vec![Variable::new("B", "3"), Variable::new("C", "4")];
//!
//! let diff = compare(&local, &remote);
//! assert_eq!(diff.new, vec![Variable::new("A", "1")]);
//! assert_eq!(diff.remote_only, vec![Variable::new("C", "4")]);
//! ```

pub mod backup;
pub mod config;
pub mod diff;
pub mod display;
pub mod prompt;
pub mod remote;
pub mod sync;
pub mod table;
pub mod variable;
