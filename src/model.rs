// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define GitHub REST response shapes and the resolved commit/actor records used to build cards
// role: model/types
// outputs: Deserializable API structs with nullable fields; CommitInfo and ActorInfo tagged choices
// invariants:
// - Optional upstream fields are Option<_>; fallbacks are applied by the resolvers, never here
// - Attribution and ActorInfo always hold exactly one variant
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::Deserialize;

/// Name/email pair from the git data API.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GitIdentity {
  pub name: String,
  pub email: String,
}

/// `GET /repos/{owner}/{repo}/git/commits/{sha}`
#[derive(Debug, Deserialize, Clone)]
pub struct GitCommit {
  pub sha: String,
  pub html_url: String,
  pub author: GitIdentity,
  pub committer: GitIdentity,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppOwner {
  pub login: Option<String>,
  pub avatar_url: Option<String>,
}

/// `GET /apps/{slug}`
#[derive(Debug, Deserialize, Clone)]
pub struct GithubApp {
  pub slug: Option<String>,
  pub name: Option<String>,
  pub html_url: String,
  pub owner: Option<AppOwner>,
}

/// `GET /users/{username}`
#[derive(Debug, Deserialize, Clone)]
pub struct GithubUser {
  pub login: String,
  pub name: Option<String>,
  pub avatar_url: Option<String>,
  pub html_url: String,
}

/// Who the card credits for the commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribution {
  Author(String),
  /// Used when the author email is GitHub's `invalid-email-address` placeholder.
  Committer(String),
}

impl Attribution {
  pub fn name(&self) -> &str {
    match self {
      Attribution::Author(name) | Attribution::Committer(name) => name,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
  pub sha: String,
  pub short_sha: String,
  pub attribution: Attribution,
  pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorProfile {
  /// May be empty when GitHub reports no avatar.
  pub avatar_url: String,
  pub profile_url: String,
  pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActorInfo {
  Bot(ActorProfile),
  User(ActorProfile),
}

impl ActorInfo {
  pub fn profile(&self) -> &ActorProfile {
    match self {
      ActorInfo::Bot(p) | ActorInfo::User(p) => p,
    }
  }

  pub fn is_bot(&self) -> bool {
    matches!(self, ActorInfo::Bot(_))
  }

  /// Markdown link used for "Deployed by" and the avatar alt text.
  pub fn markdown_link(&self) -> String {
    let p = self.profile();
    format!("[{}]({})", p.display_name, p.profile_url)
  }
}
