// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Read action inputs (INPUT_*) and runner context (GITHUB_*) and normalize them into EffectiveConfig
// role: config/cli
// inputs: CLI flags, each backed by the env var the Actions runner exports
// outputs: EffectiveConfig with a parsed NotificationType and split owner/repo
// invariants:
// - Empty strings count as absent (the runner exports unset inputs as "")
// - An unknown notification type is rejected here, before any network call
// - The webhook URI is only optional in dry-run mode
// errors: NotifyError variants naming the offending input or variable
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;

use crate::card::NotificationType;
use crate::error::NotifyError;
use crate::github_api::DEFAULT_API_URL;
use crate::util;

pub const DEFAULT_SERVER_URL: &str = "https://github.com";

#[derive(Parser, Debug)]
#[command(
    name = "teams-ci-notifier",
    version,
    about = "Post a Microsoft Teams card about the current GitHub Actions run",
    long_about = None
)]
pub struct Cli {
  /// GitHub token used for the commit/actor lookups
  #[arg(long, env = "INPUT_GH-TOKEN", hide_env_values = true)]
  pub gh_token: Option<String>,

  /// Headline shown at the top of the card
  #[arg(long, env = "INPUT_NOTIFICATION-SUMMARY")]
  pub notification_summary: Option<String>,

  /// Teams incoming webhook URI
  #[arg(long, env = "INPUT_MSTEAMS-WEBHOOK-URI", hide_env_values = true)]
  pub webhook_uri: Option<String>,

  /// Container style for the deployment card header (good, attention, warning, accent, ...)
  #[arg(long, env = "INPUT_NOTIFICATION-COLOUR")]
  pub notification_colour: Option<String>,

  /// Card layout: deployment or information
  #[arg(long, env = "INPUT_NOTIFICATION-TYPE")]
  pub notification_type: Option<String>,

  /// Print the card to stdout instead of posting it
  #[arg(long, env = "INPUT_DRY-RUN", value_parser = clap::builder::FalseyValueParser::new())]
  pub dry_run: bool,

  /// owner/repo of the workflow run
  #[arg(long, env = "GITHUB_REPOSITORY")]
  pub repository: Option<String>,

  /// Commit that triggered the run
  #[arg(long, env = "GITHUB_SHA")]
  pub sha: Option<String>,

  /// User or app that triggered the run
  #[arg(long, env = "GITHUB_ACTOR")]
  pub actor: Option<String>,

  /// Ref shown as "Branch:" on the card
  #[arg(long = "git-ref", env = "GITHUB_REF")]
  pub git_ref: Option<String>,

  #[arg(long, env = "GITHUB_RUN_NUMBER")]
  pub run_number: Option<String>,

  #[arg(long, env = "GITHUB_RUN_ID")]
  pub run_id: Option<String>,

  /// Web base URL for links on the card
  #[arg(long, env = "GITHUB_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
  pub server_url: String,

  /// REST API base URL
  #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
  pub api_url: String,

  /// Override the "now" instant shown on the card (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EffectiveConfig {
  pub token: Option<String>,
  pub summary: String,
  pub webhook_uri: Option<String>,
  pub colour: Option<String>,
  pub notification_type: NotificationType,
  pub dry_run: bool,
  pub owner: String,
  pub repo: String,
  pub sha: String,
  pub actor: String,
  pub git_ref: String,
  pub run_number: u64,
  pub run_id: u64,
  pub server_url: String,
  pub api_url: String,
  pub now_override: Option<DateTime<Utc>>,
}

/// Trim and drop empty values.
fn clean(v: Option<String>) -> Option<String> {
  v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn required(v: Option<String>, var: &'static str) -> Result<String, NotifyError> {
  clean(v).ok_or_else(|| NotifyError::Config(format!("{} is not set", var)))
}

fn parse_count(v: Option<String>, var: &'static str) -> Result<u64, NotifyError> {
  let raw = required(v, var)?;
  raw
    .parse::<u64>()
    .map_err(|_| NotifyError::Config(format!("{} must be a non-negative integer, got '{}'", var, raw)))
}

pub fn split_repository(full: &str) -> Result<(String, String), NotifyError> {
  match full.split_once('/') {
    Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
      Ok((owner.to_string(), repo.to_string()))
    }
    _ => Err(NotifyError::Config(format!(
      "GITHUB_REPOSITORY must look like owner/repo, got '{}'",
      full
    ))),
  }
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  // Validate the card type first so a bad value never costs an API call
  let type_raw = clean(cli.notification_type).unwrap_or_default();
  let notification_type: NotificationType = type_raw.parse()?;

  let webhook_uri = clean(cli.webhook_uri);

  if webhook_uri.is_none() && !cli.dry_run {
    return Err(NotifyError::MissingInput("msTeams-webhook-uri").into());
  }

  let (owner, repo) = split_repository(&required(cli.repository, "GITHUB_REPOSITORY")?)?;

  Ok(EffectiveConfig {
    token: clean(cli.gh_token),
    summary: clean(cli.notification_summary).unwrap_or_default(),
    webhook_uri,
    colour: clean(cli.notification_colour),
    notification_type,
    dry_run: cli.dry_run,
    owner,
    repo,
    sha: required(cli.sha, "GITHUB_SHA")?,
    actor: required(cli.actor, "GITHUB_ACTOR")?,
    git_ref: required(cli.git_ref, "GITHUB_REF")?,
    run_number: parse_count(cli.run_number, "GITHUB_RUN_NUMBER")?,
    run_id: parse_count(cli.run_id, "GITHUB_RUN_ID")?,
    server_url: cli.server_url.trim_end_matches('/').to_string(),
    api_url: cli.api_url,
    now_override: util::parse_now(cli.now_override.as_deref())?,
  })
}
