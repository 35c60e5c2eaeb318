// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Deliver the built Teams message to the incoming webhook (or log it in dry-run mode)
// role: delivery/webhook
// inputs: Message from crate::card; webhook URI
// outputs: Delivery describing what happened
// side_effects: One HTTP POST per deliver() call (HttpWebhook); log output only (DryRunWebhook)
// invariants:
// - Requests carry Content-Type and Accept of application/json
// - Any 2xx (including 204) is success; everything else is an error with status, reason and body
// errors: NotifyError::Webhook for non-2xx; NotifyError::Transport for connection failures
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::card::Message;
use crate::error::{NotifyError, Result};
use crate::http;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
  Sent { status: u16 },
  DryRun,
}

// --- Trait seam for delivery ---
pub trait Webhook {
  fn deliver(&self, message: &Message) -> Result<Delivery>;
}

pub struct HttpWebhook {
  agent: ureq::Agent,
  uri: String,
}

impl HttpWebhook {
  pub fn new(uri: &str) -> Self {
    Self { agent: http::agent(), uri: uri.to_string() }
  }
}

impl Webhook for HttpWebhook {
  fn deliver(&self, message: &Message) -> Result<Delivery> {
    let body = serde_json::to_vec(message)?;

    let mut resp = self
      .agent
      .post(&self.uri)
      .header("Content-Type", "application/json")
      .header("Accept", "application/json")
      .header("User-Agent", http::USER_AGENT)
      .send(&body[..])
      .map_err(|source| NotifyError::Transport { target: "webhook".to_string(), source })?;

    let status = resp.status();

    if status.is_success() {
      return Ok(Delivery::Sent { status: status.as_u16() });
    }

    let text = resp.body_mut().read_to_string().unwrap_or_default();
    tracing::warn!(status = status.as_u16(), body = %text, "webhook rejected notification");

    Err(NotifyError::Webhook {
      status: status.as_u16(),
      reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
      body: text,
    })
  }
}

/// Prints the payload to stdout instead of posting it.
pub struct DryRunWebhook;

impl Webhook for DryRunWebhook {
  fn deliver(&self, message: &Message) -> Result<Delivery> {
    let pretty = serde_json::to_string_pretty(message)?;
    tracing::info!("dry run: notification written to stdout, webhook not called");
    println!("{}", pretty);
    Ok(Delivery::DryRun)
  }
}
