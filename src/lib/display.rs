//! Console rendering of targets, diffs, confirmations and results.

use std::{
  borrow::Cow,
  fmt::Display,
  io::{self, Write},
  path::Path,
};

use owo_colors::{OwoColorize, Style};

use crate::{
  backup::{Backup, BackupError},
  diff::DiffResult,
  remote::RemoteError,
  sync::{Applied, CancelReason, SyncReport},
  variable::Scope,
};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const NEW_VALUE_WIDTH: usize = 80;
const CHANGED_VALUE_WIDTH: usize = 60;

/// Writes human-readable output, colored when enabled.
pub struct Console<W> {
  out: W,
  color: bool,
}

impl Console<io::Stdout> {
  pub fn stdout(color: bool) -> Self {
    Self::new(io::stdout(), color)
  }
}

impl<W: Write> Console<W> {
  pub fn new(out: W, color: bool) -> Self {
    Self { out, color }
  }

  pub fn into_inner(self) -> W {
    self.out
  }

  fn paint<T: Display>(&self, text: T, style: Style) -> String {
    if self.color {
      text.style(style).to_string()
    } else {
      text.to_string()
    }
  }

  pub fn target(&mut self, scope: &Scope) -> io::Result<()> {
    match &scope.environment {
      Some(env) => writeln!(
        self.out,
        "🎯 Target: Environment '{}' in {}/{}",
        env, scope.owner, scope.repo
      ),
      None => writeln!(
        self.out,
        "🎯 Target: Repository {}/{}",
        scope.owner, scope.repo
      ),
    }
  }

  pub fn loaded(&mut self, count: usize, path: &Path) -> io::Result<()> {
    writeln!(self.out, "📝 Read {count} variables from {}", path.display())
  }

  pub fn fetching(&mut self) -> io::Result<()> {
    writeln!(self.out, "🔍 Fetching current variables from GitHub...")
  }

  pub fn fetched(&mut self, count: usize) -> io::Result<()> {
    writeln!(self.out, "✅ Fetched {count} variables from GitHub")
  }

  pub fn diff_summary(&mut self, diff: &DiffResult) -> io::Result<()> {
    writeln!(self.out, "\n{RULE}\n📊 DIFF SUMMARY\n{RULE}")?;

    let new = self.paint("✨ New:", Style::new().green());
    let updated = self.paint("🔄 Updated:", Style::new().yellow());
    let unchanged = self.paint("✅ Unchanged:", Style::new().bright_black());
    writeln!(self.out, "{new}       {} variable(s)", diff.new.len())?;
    writeln!(self.out, "{updated}   {} variable(s)", diff.updated.len())?;
    writeln!(self.out, "{unchanged} {} variable(s)", diff.unchanged.len())?;

    if !diff.remote_only.is_empty() {
      let remote_only = self.paint("⚠️  Remote only:", Style::new().red());
      writeln!(
        self.out,
        "{remote_only} {} variable(s) (in GitHub, not in CSV)",
        diff.remote_only.len()
      )?;
    }

    writeln!(self.out, "{RULE}")
  }

  pub fn detailed_diff(&mut self, diff: &DiffResult) -> io::Result<()> {
    writeln!(self.out, "\n📝 DETAILED CHANGES:\n")?;

    if !diff.new.is_empty() {
      let heading = self.paint("[NEW VARIABLES]", Style::new().green().bold());
      writeln!(self.out, "{heading}")?;
      for var in &diff.new {
        let line = format!("+ {} = {}", var.name, truncate(&var.value, NEW_VALUE_WIDTH));
        let line = self.paint(line, Style::new().green());
        writeln!(self.out, "{line}")?;
      }
      writeln!(self.out)?;
    }

    if !diff.updated.is_empty() {
      let heading = self.paint("[UPDATED VARIABLES]", Style::new().yellow().bold());
      writeln!(self.out, "{heading}")?;
      for change in &diff.updated {
        let name = self.paint(format!("~ {}:", change.name), Style::new().yellow());
        let old = self.paint(
          format!("- {}", truncate(&change.old_value, CHANGED_VALUE_WIDTH)),
          Style::new().red(),
        );
        let new = self.paint(
          format!("+ {}", truncate(&change.new_value, CHANGED_VALUE_WIDTH)),
          Style::new().green(),
        );
        writeln!(self.out, "{name}\n  {old}\n  {new}")?;
      }
      writeln!(self.out)?;
    }

    if !diff.unchanged.is_empty() {
      let heading = self.paint("[UNCHANGED]", Style::new().bright_black());
      let count = self.paint(
        format!("{} variable(s) with no changes", diff.unchanged.len()),
        Style::new().bright_black(),
      );
      writeln!(self.out, "{heading}\n{count}\n")?;
    }

    if !diff.remote_only.is_empty() {
      let heading = self.paint(
        "[REMOTE ONLY - in GitHub but not in CSV]",
        Style::new().red().bold(),
      );
      let note = self.paint(
        "Note: These will NOT be deleted from GitHub",
        Style::new().bright_black(),
      );
      writeln!(self.out, "{heading}\n{note}")?;
      for var in &diff.remote_only {
        let line = format!("- {} = {}", var.name, truncate(&var.value, NEW_VALUE_WIDTH));
        let line = self.paint(line, Style::new().red());
        writeln!(self.out, "{line}")?;
      }
      writeln!(self.out)?;
    }

    Ok(())
  }

  /// Shows what is about to be written and where, ahead of the confirmation prompt.
  pub fn confirmation(
    &mut self,
    scope: &Scope,
    masked_token: &str,
    diff: &DiffResult,
  ) -> io::Result<()> {
    writeln!(self.out, "\n{RULE}\n📋 SYNC CONFIGURATION\n{RULE}")?;
    writeln!(self.out, "Repository:  {}/{}", scope.owner, scope.repo)?;
    match &scope.environment {
      Some(env) => {
        writeln!(self.out, "Environment: {env}")?;
        writeln!(self.out, "Target:      Environment-specific variables")?;
      }
      None => {
        writeln!(self.out, "Environment: (none)")?;
        writeln!(self.out, "Target:      Repository-level variables")?;
      }
    }
    writeln!(self.out, "Token:       {masked_token}")?;
    writeln!(self.out, "{RULE}")?;

    writeln!(
      self.out,
      "\n📦 Will sync {} variable(s) ({} new, {} updated)\n",
      diff.new.len() + diff.updated.len(),
      diff.new.len(),
      diff.updated.len()
    )
  }

  pub fn diff_only(&mut self) -> io::Result<()> {
    writeln!(self.out, "ℹ️  Diff mode: No changes were made")
  }

  pub fn up_to_date(&mut self) -> io::Result<()> {
    writeln!(self.out, "\n✅ No changes to sync. All variables are up to date!")
  }

  pub fn cancelled(&mut self, reason: CancelReason) -> io::Result<()> {
    match reason {
      CancelReason::BackupDeclined => writeln!(self.out, "❌ Sync cancelled"),
      CancelReason::NotConfirmed => writeln!(self.out, "\n❌ Sync cancelled by user"),
    }
  }

  pub fn backup_started(&mut self, before_sync: bool) -> io::Result<()> {
    if before_sync {
      writeln!(self.out, "\n💾 Creating backup before sync...")
    } else {
      writeln!(self.out, "💾 Backup Mode: Creating backup of GitHub variables...")
    }
  }

  pub fn backup_saved(&mut self, backup: &Backup) -> io::Result<()> {
    writeln!(
      self.out,
      "✅ Backup saved: {} ({} variables)",
      backup.path.display(),
      backup.variables
    )
  }

  pub fn backup_failed(&mut self, err: &BackupError) -> io::Result<()> {
    let warning = self.paint(
      format!("⚠️  Warning: Failed to create backup: {err}"),
      Style::new().yellow(),
    );
    writeln!(self.out, "{warning}")
  }

  pub fn sync_started(&mut self) -> io::Result<()> {
    writeln!(self.out, "\n🚀 Starting sync...\n")
  }

  pub fn applied(&mut self, name: &str, applied: Applied) -> io::Result<()> {
    match applied {
      Applied::Created => writeln!(self.out, "✅ Created variable: {name}"),
      Applied::Updated => writeln!(self.out, "✅ Updated variable: {name}"),
    }
  }

  pub fn apply_failed(&mut self, name: &str, error: &RemoteError) -> io::Result<()> {
    let line = self.paint(
      format!("❌ Error syncing variable '{name}': {error}"),
      Style::new().red(),
    );
    writeln!(self.out, "{line}")
  }

  pub fn sync_report(&mut self, report: &SyncReport) -> io::Result<()> {
    if report.failed() > 0 {
      writeln!(
        self.out,
        "\n🎉 Completed! Created {}, Updated {}, Failed {}, Total {} variables",
        report.created,
        report.updated,
        report.failed(),
        report.total()
      )
    } else {
      writeln!(
        self.out,
        "\n🎉 Completed! Created {}, Updated {}, Total {} variables",
        report.created,
        report.updated,
        report.total()
      )
    }
  }
}

/// Shortens `value` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate(value: &str, max_chars: usize) -> Cow<'_, str> {
  if value.chars().count() <= max_chars {
    return Cow::Borrowed(value);
  }

  let kept: String = value.chars().take(max_chars.saturating_sub(3)).collect();
  Cow::Owned(format!("{kept}..."))
}
