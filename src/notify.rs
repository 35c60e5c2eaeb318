// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Orchestrate one notification: resolve commit, resolve actor, build card, deliver
// role: processing/orchestrator
// inputs: EffectiveConfig, GithubApi backend, Webhook backend, "now"
// outputs: Delivery (HTTP status or dry run)
// side_effects: Whatever the injected backends do (HTTP calls in production)
// invariants:
// - Steps run strictly in order; each completes before the next starts
// - Exactly one delivery attempt; no retries, no partial delivery
// errors: First failing step aborts the run and its error is returned unchanged
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::actor::resolve_actor;
use crate::card::{build_message, CardInputs};
use crate::cli::EffectiveConfig;
use crate::commit::resolve_commit;
use crate::dispatch::{Delivery, DryRunWebhook, HttpWebhook, Webhook};
use crate::github_api::{GithubApi, GithubHttpApi};
use crate::util;

pub fn run_with(
  cfg: &EffectiveConfig,
  api: &dyn GithubApi,
  webhook: &dyn Webhook,
  now: DateTime<Utc>,
) -> Result<Delivery> {
  // Phase 1: commit
  let commit = resolve_commit(api, &cfg.owner, &cfg.repo, &cfg.sha)?;

  // Phase 2: actor
  let actor = resolve_actor(api, &cfg.actor)?;

  // Phase 3: card
  let timestamp = util::iso_timestamp(now);
  let input = CardInputs {
    summary: &cfg.summary,
    colour: cfg.colour.as_deref(),
    server_url: &cfg.server_url,
    owner: &cfg.owner,
    repo: &cfg.repo,
    git_ref: &cfg.git_ref,
    run_number: cfg.run_number,
    run_id: cfg.run_id,
    commit: &commit,
    actor: &actor,
    timestamp: &timestamp,
  };
  let message = build_message(cfg.notification_type, &input);

  // Phase 4: delivery
  let delivery = webhook.deliver(&message)?;

  if let Delivery::Sent { status } = delivery {
    tracing::info!("Notification sent successfully. HTTP Status: {}", status);
  }

  Ok(delivery)
}

/// Production wiring: HTTP GitHub client plus HTTP (or dry-run) webhook.
pub fn run(cfg: &EffectiveConfig) -> Result<Delivery> {
  let api = GithubHttpApi::new(&cfg.api_url, cfg.token.clone());
  let now = util::effective_now(cfg.now_override);

  tracing::info!(
    repository = %format!("{}/{}", cfg.owner, cfg.repo),
    sha = %cfg.sha,
    actor = %cfg.actor,
    kind = %cfg.notification_type,
    "preparing notification"
  );

  match (&cfg.webhook_uri, cfg.dry_run) {
    (Some(uri), false) => run_with(cfg, &api, &HttpWebhook::new(uri), now),
    _ => run_with(cfg, &api, &DryRunWebhook, now),
  }
}
