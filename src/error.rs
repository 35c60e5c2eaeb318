// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Typed failures of the notifier (upstream API, configuration, webhook delivery, transport, decoding)
// role: errors/taxonomy
// outputs: NotifyError with human-readable Display text used verbatim in the failure report
// invariants:
// - Webhook errors always carry the numeric status and its reason phrase
// - InvalidNotificationType names the rejected value
// - Wrapped causes stay in the source chain only, never repeated in Display
// errors: n/a (this is the error type)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
  #[error("Invalid notification type '{0}'. Expected 'deployment' or 'information'.")]
  InvalidNotificationType(String),

  #[error("Input required and not supplied: {0}")]
  MissingInput(&'static str),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("GitHub API {path} returned {status}: {message}")]
  GithubApi { status: u16, path: String, message: String },

  #[error("Failed to send notification. HTTP Status: {status} - {reason}{}", body_suffix(.body))]
  Webhook { status: u16, reason: String, body: String },

  #[error("Request to {target} failed")]
  Transport {
    target: String,
    #[source]
    source: ureq::Error,
  },

  #[error("Failed to decode GitHub API response from {path}")]
  Decode {
    path: String,
    #[source]
    source: ureq::Error,
  },

  #[error("Failed to encode notification payload: {0}")]
  Encode(#[from] serde_json::Error),
}

fn body_suffix(body: &str) -> String {
  let body = body.trim();

  if body.is_empty() {
    String::new()
  } else {
    format!(" ({})", body)
  }
}

pub type Result<T> = std::result::Result<T, NotifyError>;
