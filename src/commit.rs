// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve the triggering commit into the name credited on the card and its canonical URL
// role: resolver/commit
// inputs: GithubApi backend, owner/repo, full commit SHA
// outputs: CommitInfo (sha, 7-char short sha, Attribution, html_url)
// invariants:
// - Author email equal to INVALID_EMAIL_SENTINEL selects Attribution::Committer, anything else Attribution::Author
// - short_sha is the first 7 characters of the SHA (or the whole SHA when shorter)
// errors: API errors propagate unchanged; no retry, no partial result
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::error::Result;
use crate::github_api::GithubApi;
use crate::model::{Attribution, CommitInfo, GitCommit};
use crate::util;

/// Placeholder GitHub records as the author email when the real one is unknown.
pub const INVALID_EMAIL_SENTINEL: &str = "invalid-email-address";

pub fn attribution_for(commit: &GitCommit) -> Attribution {
  if commit.author.email == INVALID_EMAIL_SENTINEL {
    Attribution::Committer(commit.committer.name.clone())
  } else {
    Attribution::Author(commit.author.name.clone())
  }
}

pub fn resolve_commit(api: &dyn GithubApi, owner: &str, repo: &str, sha: &str) -> Result<CommitInfo> {
  let commit = api.get_commit(owner, repo, sha)?;
  let attribution = attribution_for(&commit);

  tracing::debug!(sha, committed_by = attribution.name(), "resolved commit");

  Ok(CommitInfo {
    sha: sha.to_string(),
    short_sha: util::short_sha(sha),
    attribution,
    html_url: commit.html_url,
  })
}
