use jsonschema::validator_for;
use wiremock::MockServer;

use crate::common;

fn compile_schema(name: &str) -> jsonschema::Validator {
  let path = test_support::schemas_dir().join(name);
  let data = std::fs::read(&path).expect("schema file");
  let schema: serde_json::Value = serde_json::from_slice(&data).expect("valid schema JSON");
  validator_for(&schema).expect("compile schema")
}

async fn dry_run_output(kind: &'static str) -> serde_json::Value {
  let server = MockServer::start().await;
  common::mount_github(&server, "github/git_commit.json").await;

  let mut cmd = common::notifier(&server.uri());
  cmd.env("INPUT_NOTIFICATION-TYPE", kind).arg("--dry-run");
  let out = test_support::run_blocking(move || cmd.output().unwrap()).await;
  assert!(out.status.success(), "run failed: {}", String::from_utf8_lossy(&out.stderr));

  serde_json::from_slice(&out.stdout).unwrap()
}

fn assert_valid(validator: &jsonschema::Validator, v: &serde_json::Value) {
  let errors: Vec<String> = validator.iter_errors(v).map(|e| e.to_string()).collect();
  assert!(errors.is_empty(), "schema errors: {:?}", errors);
}

#[tokio::test(flavor = "multi_thread")]
async fn deployment_card_conforms_to_schema() {
  let validator = compile_schema("teams-message.schema.json");
  let v = dry_run_output("deployment").await;
  assert_valid(&validator, &v);
}

#[tokio::test(flavor = "multi_thread")]
async fn information_card_conforms_to_schema() {
  let validator = compile_schema("teams-message.schema.json");
  let v = dry_run_output("information").await;
  assert_valid(&validator, &v);
}

#[test]
fn schema_rejects_unknown_action_type() {
  let validator = compile_schema("teams-message.schema.json");
  let bad = serde_json::json!({
    "type": "message",
    "attachments": [{
      "contentType": "application/vnd.microsoft.card.adaptive",
      "content": {
        "type": "AdaptiveCard",
        "$schema": "http://adaptivecards.io/schemas/adaptive-card.json",
        "version": "1.0",
        "body": [{ "type": "TextBlock", "text": "x" }],
        "actions": [{ "type": "Action.Submit", "title": "Go", "url": "https://example.com" }]
      }
    }]
  });
  assert!(!validator.is_valid(&bad));
}
