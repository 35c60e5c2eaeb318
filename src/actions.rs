// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Runner integration: failure reporting via workflow commands and log setup
// role: runner/actions
// outputs: "::error::" lines on stdout; tracing subscriber writing to stderr
// side_effects: Writes to stdout; installs the global tracing subscriber once
// invariants:
// - Workflow command data escapes %, CR and LF
// - failure_message never returns an empty string
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;

use tracing_subscriber::EnvFilter;

pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Escape data for a workflow command, as the Actions toolkit does.
pub fn escape_data(s: &str) -> String {
  s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

/// Human-readable message for the failure report, including any causes.
pub fn failure_message(err: &anyhow::Error) -> String {
  let msg = format!("{:#}", err);

  if msg.trim().is_empty() {
    UNKNOWN_ERROR.to_string()
  } else {
    msg
  }
}

pub fn error_command(message: &str) -> String {
  format!("::error::{}", escape_data(message))
}

/// Mark the run failed. The caller is responsible for the non-zero exit.
pub fn set_failed<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
  writeln!(out, "{}", error_command(message))
}

/// Report `err` as the run's failure. A write error on `out` is logged, since the
/// `::error::` line is then lost.
pub fn report_failure<W: Write>(out: &mut W, err: &anyhow::Error) -> String {
  let message = failure_message(err);
  tracing::debug!(error = ?err, "notification failed");

  if let Err(io_err) = set_failed(out, &message) {
    tracing::error!(error = %io_err, %message, "could not write failure command");
  }

  message
}

/// Log to stderr, honoring `RUST_LOG` (default `info`), keeping stdout free for workflow commands.
pub fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .try_init();
}
