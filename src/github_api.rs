// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: GitHub REST lookups needed for the card (git commit, app by slug, user by login)
// role: upstream/github-api
// inputs: API base URL (GITHUB_API_URL), optional token (gh-token input)
// outputs: Typed model structs from crate::model
// side_effects: Network calls to the configured GitHub API
// invariants:
// - Every request carries Accept, X-GitHub-Api-Version and User-Agent headers
// - Path segments are percent-encoded; no retries; one request per lookup
// errors: Non-2xx responses become NotifyError::GithubApi with GitHub's message; transport failures become NotifyError::Transport; unreadable 2xx bodies become NotifyError::Decode
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use crate::error::{NotifyError, Result};
use crate::http;
use crate::model::{GitCommit, GithubApp, GithubUser};

pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const DEFAULT_API_URL: &str = "https://api.github.com";

// Everything outside RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
  .add(b' ')
  .add(b'"')
  .add(b'#')
  .add(b'%')
  .add(b'/')
  .add(b'<')
  .add(b'>')
  .add(b'?')
  .add(b'[')
  .add(b']')
  .add(b'\\')
  .add(b'^')
  .add(b'`')
  .add(b'{')
  .add(b'|')
  .add(b'}');

fn segment(s: &str) -> String {
  utf8_percent_encode(s, PATH_SEGMENT).to_string()
}

// --- Trait seam for GitHub API ---
pub trait GithubApi {
  fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<GitCommit>;
  fn get_app(&self, slug: &str) -> Result<GithubApp>;
  fn get_user(&self, username: &str) -> Result<GithubUser>;
}

pub struct GithubHttpApi {
  agent: ureq::Agent,
  base_url: String,
  token: Option<String>,
}

impl GithubHttpApi {
  pub fn new(base_url: &str, token: Option<String>) -> Self {
    Self {
      agent: http::agent(),
      base_url: base_url.trim_end_matches('/').to_string(),
      token,
    }
  }

  fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let url = format!("{}{}", self.base_url, path);
    tracing::debug!(%url, "GitHub API request");

    let mut req = self
      .agent
      .get(&url)
      .header("Accept", "application/vnd.github+json")
      .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
      .header("User-Agent", http::USER_AGENT);

    if let Some(token) = &self.token {
      req = req.header("Authorization", &format!("Bearer {}", token));
    }

    let mut resp = req.call().map_err(|source| NotifyError::Transport {
      target: url,
      source,
    })?;

    let status = resp.status();

    if !status.is_success() {
      let body = resp.body_mut().read_to_string().unwrap_or_default();
      return Err(NotifyError::GithubApi {
        status: status.as_u16(),
        path: path.to_string(),
        message: error_message(&body, status.canonical_reason()),
      });
    }

    resp
      .body_mut()
      .read_json::<T>()
      .map_err(|source| NotifyError::Decode { path: path.to_string(), source })
  }
}

/// GitHub error bodies look like `{"message": "Not Found", "documentation_url": ...}`.
fn error_message(body: &str, reason: Option<&str>) -> String {
  let from_json = serde_json::from_str::<serde_json::Value>(body)
    .ok()
    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));

  match from_json {
    Some(m) if !m.is_empty() => m,
    _ if !body.trim().is_empty() => body.trim().to_string(),
    _ => reason.unwrap_or("Unknown error").to_string(),
  }
}

impl GithubApi for GithubHttpApi {
  fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<GitCommit> {
    let path = format!(
      "/repos/{}/{}/git/commits/{}",
      segment(owner),
      segment(repo),
      segment(sha)
    );
    self.get_json(&path)
  }

  fn get_app(&self, slug: &str) -> Result<GithubApp> {
    self.get_json(&format!("/apps/{}", segment(slug)))
  }

  fn get_user(&self, username: &str) -> Result<GithubUser> {
    self.get_json(&format!("/users/{}", segment(username)))
  }
}
