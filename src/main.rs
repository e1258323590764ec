use clap::Parser;
use gh_var_sync::{
  backup::DEFAULT_BACKUP_DIR,
  config::Config,
  display::Console,
  prompt::LinePrompt,
  remote::GitHubClient,
  sync::{Mode, SyncOptions, VarSync},
};
use std::{io::IsTerminal, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(
  name = "gh-var-sync",
  about = "Sync GitHub Actions variables from a local CSV file",
  long_about = "Sync GitHub Actions variables from a local CSV file.\n\n\
    Reads GITHUB_TOKEN, GITHUB_OWNER and GITHUB_REPO from the environment, \
    plus the optional GITHUB_ENVIRONMENT and GITHUB_API_URL.",
  version,
  author
)]
struct Cli {
  /// Show the diff and exit without syncing
  #[arg(long, conflicts_with = "backup")]
  diff: bool,

  /// Create a backup of the remote variables and exit without syncing
  #[arg(long)]
  backup: bool,

  /// Skip the automatic backup before syncing
  #[arg(long)]
  no_backup: bool,

  /// Path to the CSV file (header row, then name,value[,note] rows)
  #[arg(short, long, default_value = "variables.csv")]
  file: PathBuf,

  /// Directory backups are written to
  #[arg(long, default_value = DEFAULT_BACKUP_DIR)]
  backup_dir: PathBuf,

  /// Verbose output (-v for verbose, -vv for very verbose)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

impl Cli {
  fn mode(&self) -> Mode {
    if self.diff {
      Mode::DiffOnly
    } else if self.backup {
      Mode::BackupOnly
    } else {
      Mode::Sync
    }
  }
}

fn setup_tracing(verbose: u8) {
  use tracing_subscriber::fmt;
  use tracing_subscriber::prelude::*;

  let log_level = match verbose {
    1 => "debug",
    2.. => "trace",
    _ => "info",
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(tracing_subscriber::EnvFilter::new(
      std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
    ))
    .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
  let config = Config::from_env()?;

  let client = GitHubClient::builder(&config.token)
    .base_url(&config.api_url)
    .build()?;

  let options = SyncOptions {
    masked_token: config.masked_token(),
    scope: config.scope,
    local_file: cli.file.clone(),
    backup_dir: cli.backup_dir.clone(),
    mode: cli.mode(),
    backup: !cli.no_backup,
  };

  let console = Console::stdout(std::io::stdout().is_terminal());
  let mut sync = VarSync::new(client, LinePrompt::stdio(), console);
  sync.run(&options)?;

  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  setup_tracing(cli.verbose);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("❌ {err}");
      ExitCode::FAILURE
    }
  }
}
