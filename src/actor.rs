// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Resolve the triggering actor into avatar, profile link and display name
// role: resolver/actor
// inputs: GithubApi backend, GITHUB_ACTOR value
// outputs: ActorInfo::Bot or ActorInfo::User carrying an ActorProfile
// invariants:
// - Any actor containing "github-actions" takes the bot path (app slug lookup), even when not an exact match
// - Bot: missing owner avatar -> "", missing app name -> "GitHub Actions"
// - User: missing avatar -> "", missing display name -> the raw actor identifier
// errors: API errors propagate unchanged
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::error::Result;
use crate::github_api::GithubApi;
use crate::model::{ActorInfo, ActorProfile, GithubApp, GithubUser};

pub const BOT_APP_SLUG: &str = "github-actions";
pub const BOT_FALLBACK_NAME: &str = "GitHub Actions";

pub fn is_bot_actor(actor: &str) -> bool {
  actor.contains(BOT_APP_SLUG)
}

pub fn bot_profile(app: GithubApp) -> ActorProfile {
  ActorProfile {
    avatar_url: app.owner.and_then(|o| o.avatar_url).unwrap_or_default(),
    profile_url: app.html_url,
    display_name: non_empty(app.name).unwrap_or_else(|| BOT_FALLBACK_NAME.to_string()),
  }
}

pub fn user_profile(user: GithubUser, actor: &str) -> ActorProfile {
  ActorProfile {
    avatar_url: user.avatar_url.unwrap_or_default(),
    profile_url: user.html_url,
    display_name: non_empty(user.name).unwrap_or_else(|| actor.to_string()),
  }
}

fn non_empty(s: Option<String>) -> Option<String> {
  s.filter(|s| !s.is_empty())
}

pub fn resolve_actor(api: &dyn GithubApi, actor: &str) -> Result<ActorInfo> {
  let info = if is_bot_actor(actor) {
    ActorInfo::Bot(bot_profile(api.get_app(BOT_APP_SLUG)?))
  } else {
    ActorInfo::User(user_profile(api.get_user(actor)?, actor))
  };

  tracing::debug!(
    actor,
    bot = info.is_bot(),
    display_name = %info.profile().display_name,
    "resolved actor"
  );

  Ok(info)
}
