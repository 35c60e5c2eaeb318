// Shared ureq agent settings for GitHub and webhook calls.

pub const USER_AGENT: &str = concat!("teams-ci-notifier/", env!("CARGO_PKG_VERSION"));

/// Blocking agent that hands non-2xx responses back to the caller so the
/// response body can be read for diagnostics.
pub fn agent() -> ureq::Agent {
  ureq::Agent::config_builder()
    .http_status_as_error(false)
    .build()
    .into()
}
