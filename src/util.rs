// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Small helpers for SHAs, card timestamps, and the deterministic "now" override
// role: utilities/helpers
// inputs: Primitives; DateTime<Utc>; optional RFC 3339 override string
// outputs: Short SHAs, ISO-8601 millisecond timestamps, parsed instants
// invariants:
// - short_sha never splits a UTF-8 character and is at most 7 chars
// - iso_timestamp is always UTC with millisecond precision and a trailing Z
// errors: parse_now surfaces the offending input with context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

pub const SHORT_SHA_LEN: usize = 7;

/// Generates a short 7-character SHA from a full one.
pub fn short_sha(full: &str) -> String {
  full.chars().take(SHORT_SHA_LEN).collect()
}

/// Formats an instant like `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
  at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns the effective "now" given an optional override.
///
/// Centralizes our handling of test determinism without sprinkling
/// `Utc::now()` throughout the code.
pub fn effective_now(override_now: Option<DateTime<Utc>>) -> DateTime<Utc> {
  override_now.unwrap_or_else(Utc::now)
}

/// Parse the hidden `--now-override` value (RFC 3339).
pub fn parse_now(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
  let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
    return Ok(None);
  };

  let dt = DateTime::parse_from_rfc3339(raw).with_context(|| format!("invalid --now-override value '{}'", raw))?;

  Ok(Some(dt.with_timezone(&Utc)))
}
