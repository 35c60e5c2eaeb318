// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build the Teams message (Adaptive Card attachment) for a deployment or information notification
// role: payload/builder
// inputs: NotificationType, CardInputs (summary, colour, run context, resolved commit and actor, timestamp)
// outputs: Message, a serde-serializable Adaptive Card envelope
// invariants:
// - deployment: facts are exactly "Deployed by:", "Deployed on:", "Branch:" in that order; exactly two OpenUrl actions
// - information: one Container with the summary; no actions, no FactSet, no msteams block
// - Timestamp text is embedded verbatim; no timezone conversion happens here
// errors: None; unknown notification types are rejected when parsing NotificationType
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::NotifyError;
use crate::model::{ActorInfo, CommitInfo};

pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
pub const ADAPTIVE_CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
pub const ADAPTIVE_CARD_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
  Deployment,
  Information,
}

impl FromStr for NotificationType {
  type Err = NotifyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "deployment" => Ok(NotificationType::Deployment),
      "information" => Ok(NotificationType::Information),
      other => Err(NotifyError::InvalidNotificationType(other.to_string())),
    }
  }
}

impl fmt::Display for NotificationType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NotificationType::Deployment => f.write_str("deployment"),
      NotificationType::Information => f.write_str("information"),
    }
  }
}

// --- Adaptive Card wire model ---

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename = "message")]
pub struct Message {
  pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
  pub content_type: &'static str,
  pub content: AdaptiveCard,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename = "AdaptiveCard")]
pub struct AdaptiveCard {
  #[serde(rename = "$schema")]
  pub schema: &'static str,
  pub version: &'static str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub msteams: Option<MsTeams>,
  pub body: Vec<Element>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MsTeams {
  pub width: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Element {
  Container(Container),
  TextBlock(TextBlock),
  ColumnSet(ColumnSet),
  Image(Image),
  FactSet(FactSet),
}

#[derive(Debug, Clone, Serialize)]
pub struct Container {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub style: Option<String>,
  pub items: Vec<Element>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub weight: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub size: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub spacing: Option<&'static str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub is_subtle: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub wrap: Option<bool>,
}

impl TextBlock {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into(), ..Default::default() }
  }

  pub fn bolder(mut self) -> Self {
    self.weight = Some("bolder");
    self
  }

  pub fn large(mut self) -> Self {
    self.size = Some("Large");
    self
  }

  pub fn wrap(mut self) -> Self {
    self.wrap = Some(true);
    self
  }

  pub fn subtle(mut self) -> Self {
    self.is_subtle = Some(true);
    self
  }

  pub fn no_spacing(mut self) -> Self {
    self.spacing = Some("none");
    self
  }
}

impl From<TextBlock> for Element {
  fn from(t: TextBlock) -> Self {
    Element::TextBlock(t)
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSet {
  pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename = "Column")]
pub struct Column {
  pub width: &'static str,
  pub items: Vec<Element>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
  pub url: String,
  pub alt_text: String,
  pub size: &'static str,
  pub style: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactSet {
  pub facts: Vec<Fact>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Fact {
  pub title: &'static str,
  pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Action {
  #[serde(rename = "Action.OpenUrl")]
  OpenUrl { title: &'static str, url: String },
}

// --- Builder ---

/// Everything the card needs besides the notification type.
#[derive(Debug, Clone)]
pub struct CardInputs<'a> {
  pub summary: &'a str,
  /// Container style for the header block (e.g. `good`, `attention`).
  pub colour: Option<&'a str>,
  pub server_url: &'a str,
  pub owner: &'a str,
  pub repo: &'a str,
  pub git_ref: &'a str,
  pub run_number: u64,
  pub run_id: u64,
  pub commit: &'a CommitInfo,
  pub actor: &'a ActorInfo,
  pub timestamp: &'a str,
}

impl CardInputs<'_> {
  fn repo_url(&self) -> String {
    format!("{}/{}/{}", self.server_url.trim_end_matches('/'), self.owner, self.repo)
  }

  pub fn activity_title(&self) -> String {
    format!(
      "CI #{} (commit {}) on [{}/{}]({})",
      self.run_number,
      self.commit.short_sha,
      self.owner,
      self.repo,
      self.repo_url()
    )
  }

  pub fn activity_subtitle(&self) -> String {
    format!("Committed by {}", self.commit.attribution.name())
  }

  pub fn workflow_run_url(&self) -> String {
    format!("{}/actions/runs/{}", self.repo_url(), self.run_id)
  }
}

pub fn build_message(kind: NotificationType, input: &CardInputs<'_>) -> Message {
  let content = match kind {
    NotificationType::Deployment => deployment_card(input),
    NotificationType::Information => information_card(input.summary),
  };

  Message {
    attachments: vec![Attachment { content_type: ADAPTIVE_CARD_CONTENT_TYPE, content }],
  }
}

fn summary_block(summary: &str) -> Element {
  TextBlock::new(summary).bolder().large().into()
}

fn information_card(summary: &str) -> AdaptiveCard {
  AdaptiveCard {
    schema: ADAPTIVE_CARD_SCHEMA,
    version: ADAPTIVE_CARD_VERSION,
    msteams: None,
    body: vec![Element::Container(Container { style: None, items: vec![summary_block(summary)] })],
    actions: Vec::new(),
  }
}

fn deployment_card(input: &CardInputs<'_>) -> AdaptiveCard {
  let deployed_by = input.actor.markdown_link();
  let profile = input.actor.profile();

  let actor_row = Element::ColumnSet(ColumnSet {
    columns: vec![
      Column {
        width: "auto",
        items: vec![Element::Image(Image {
          url: profile.avatar_url.clone(),
          alt_text: deployed_by.clone(),
          size: "small",
          style: "person",
        })],
      },
      Column {
        width: "stretch",
        items: vec![
          TextBlock::new(deployed_by.clone()).bolder().wrap().into(),
          TextBlock::new(format!("Created {}", input.timestamp)).no_spacing().subtle().wrap().into(),
        ],
      },
    ],
  });

  let header = Element::Container(Container {
    style: input.colour.map(str::to_string),
    items: vec![summary_block(input.summary), actor_row],
  });

  let details = Element::Container(Container {
    style: Some("emphasis".into()),
    items: vec![
      TextBlock::new(input.activity_title()).bolder().wrap().into(),
      TextBlock::new(input.activity_subtitle()).wrap().into(),
      Element::FactSet(FactSet {
        facts: vec![
          Fact { title: "Deployed by:", value: deployed_by },
          Fact { title: "Deployed on:", value: input.timestamp.to_string() },
          Fact { title: "Branch:", value: input.git_ref.to_string() },
        ],
      }),
    ],
  });

  AdaptiveCard {
    schema: ADAPTIVE_CARD_SCHEMA,
    version: ADAPTIVE_CARD_VERSION,
    msteams: Some(MsTeams { width: "Full" }),
    body: vec![header, details],
    actions: vec![
      Action::OpenUrl { title: "View Workflow Run", url: input.workflow_run_url() },
      Action::OpenUrl { title: "View Commit Changes", url: input.commit.html_url.clone() },
    ],
  }
}
