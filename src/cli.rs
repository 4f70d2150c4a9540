//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use recovery_triage::config::TriageConfig;
use recovery_triage::VERSION;
use recovery_triage::output::OutputMode;

/// recovery-triage - Package ownership triage for account recovery
#[derive(Parser, Debug)]
#[command(
    name = "recovery-triage",
    version,
    about = "Package ownership triage for PyPI account recovery requests",
    long_about = "Check whether the GitHub account behind a PyPI account-recovery request \
                  controls the source repositories of the packages it claims.\n\n\
                  Requests where every package is owned or administered by the reporter \
                  are recommended for fast-tracking. Final approval is always manual."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/recovery-triage/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// GitHub token for membership lookups and posting
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Fast-track policy override: owner-or-admin, owner-only
    #[arg(long, global = true)]
    pub policy: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Triage an account-recovery issue and comment the result
    Triage {
        /// Owner of the issue repository
        #[arg(long, env = "GITHUB_ISSUE_OWNER", default_value = "pypi")]
        owner: String,

        /// Issue repository
        #[arg(long, env = "GITHUB_ISSUE_REPO", default_value = "support")]
        repo: String,

        /// Issue number
        #[arg(long, env = "ISSUE_NUMBER")]
        issue: u64,

        /// Print the report instead of posting it
        #[arg(long)]
        dry_run: bool,
    },

    /// Classify every package of an index account without an issue
    CheckUser {
        /// PyPI username
        index_user: String,

        /// GitHub login to check ownership against (defaults to the PyPI username)
        #[arg(long)]
        github_user: Option<String>,
    },

    /// List the packages an index account maintains
    Packages {
        /// PyPI username
        user: String,
    },

    /// Classify a source URL against a GitHub login (no network access)
    ClassifyUrl {
        /// Source repository or homepage URL
        url: String,

        /// GitHub login
        identity: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = TriageConfig::load(cli.config.as_deref())?;
    if let Some(policy) = &cli.policy {
        config.triage.policy = policy.parse().map_err(anyhow::Error::msg)?;
    }
    let token = cli.github_token.as_deref();

    match cli.command {
        Some(Command::Triage {
            owner,
            repo,
            issue,
            dry_run,
        }) => block_on(commands::triage(
            &config,
            token,
            &commands::IssueArgs {
                owner,
                repo,
                number: issue,
                dry_run,
            },
            output_mode,
        )),
        Some(Command::CheckUser {
            index_user,
            github_user,
        }) => block_on(commands::check_user(
            &config,
            token,
            &index_user,
            github_user.as_deref(),
            output_mode,
        )),
        Some(Command::Packages { user }) => {
            block_on(commands::packages(&config, &user, output_mode))
        },
        Some(Command::ClassifyUrl { url, identity }) => {
            commands::classify_url(&config, &url, &identity, output_mode);
            Ok(())
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION
                    })
                );
            } else {
                println!("recovery-triage v{VERSION}");
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("recovery-triage v{VERSION}");
                println!("\nRun 'recovery-triage --help' for usage");
                println!("Run 'recovery-triage triage --issue <N> --dry-run' to try it");
            }
            Ok(())
        },
    }
}

/// Drive an async command on a single-threaded runtime
fn block_on<F>(future: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = anyhow::Result<()>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(future)
}
