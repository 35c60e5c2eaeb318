use predicates::prelude::*;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test(flavor = "multi_thread")]
async fn deployment_card_is_posted_once_and_204_is_success() {
  let server = MockServer::start().await;
  common::mount_github(&server, "github/git_commit.json").await;

  let hook = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/webhookb2/incoming"))
    .and(header("Content-Type", "application/json"))
    .and(header("Accept", "application/json"))
    .and(body_partial_json(serde_json::json!({
      "type": "message",
      "attachments": [{ "contentType": "application/vnd.microsoft.card.adaptive" }]
    })))
    .respond_with(ResponseTemplate::new(204))
    .expect(1)
    .mount(&hook)
    .await;

  let mut cmd = common::notifier(&server.uri());
  cmd.env("INPUT_MSTEAMS-WEBHOOK-URI", format!("{}/webhookb2/incoming", hook.uri()));
  let out = test_support::run_blocking(move || cmd.output().unwrap()).await;

  assert!(out.status.success(), "run failed: {}", String::from_utf8_lossy(&out.stdout));
  let stderr = String::from_utf8_lossy(&out.stderr).to_string();
  assert!(predicate::str::contains("Notification sent successfully. HTTP Status: 204").eval(&stderr));
  assert!(!String::from_utf8_lossy(&out.stdout).contains("::error::"));

  let posted = hook.received_requests().await.unwrap();
  let v: serde_json::Value = serde_json::from_slice(&posted[0].body).unwrap();
  let facts = v["attachments"][0]["content"]["body"][1]["items"][2]["facts"].as_array().unwrap();
  assert_eq!(facts[1]["value"], common::NOW_ISO);
}
