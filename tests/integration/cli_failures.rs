use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test(flavor = "multi_thread")]
async fn bogus_type_fails_before_any_request() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&server)
    .await;
  let hook = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&hook)
    .await;

  let mut cmd = common::notifier(&server.uri());
  cmd
    .env("INPUT_NOTIFICATION-TYPE", "bogus")
    .env("INPUT_MSTEAMS-WEBHOOK-URI", format!("{}/hook", hook.uri()));
  let out = test_support::run_blocking(move || cmd.output().unwrap()).await;

  assert!(!out.status.success());
  assert_eq!(
    common::error_line(&out.stdout).as_deref(),
    Some("Invalid notification type 'bogus'. Expected 'deployment' or 'information'.")
  );
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_webhook_is_reported() {
  let server = MockServer::start().await;

  let mut cmd = common::notifier(&server.uri());
  let out = test_support::run_blocking(move || cmd.output().unwrap()).await;

  assert_eq!(out.status.code(), Some(1));
  assert_eq!(
    common::error_line(&out.stdout).as_deref(),
    Some("Input required and not supplied: msTeams-webhook-uri")
  );
}

#[tokio::test(flavor = "multi_thread")]
async fn upstream_not_found_is_surfaced_and_nothing_is_posted() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(format!("/repos/octo/app/git/commits/{}", common::SHA)))
    .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
      "message": "Not Found",
      "documentation_url": "https://docs.github.com/rest/git/commits#get-a-commit-object"
    })))
    .mount(&server)
    .await;
  let hook = MockServer::start().await;
  Mock::given(method("POST"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&hook)
    .await;

  let mut cmd = common::notifier(&server.uri());
  cmd.env("INPUT_MSTEAMS-WEBHOOK-URI", format!("{}/hook", hook.uri()));
  let out = test_support::run_blocking(move || cmd.output().unwrap()).await;

  assert_eq!(out.status.code(), Some(1));
  assert_eq!(
    common::error_line(&out.stdout),
    Some(format!("GitHub API /repos/octo/app/git/commits/{} returned 404: Not Found", common::SHA))
  );
}

#[tokio::test(flavor = "multi_thread")]
async fn webhook_500_marks_the_run_failed() {
  let server = MockServer::start().await;
  common::mount_github(&server, "github/git_commit.json").await;
  let hook = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/hook"))
    .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
    .expect(1)
    .mount(&hook)
    .await;

  let mut cmd = common::notifier(&server.uri());
  cmd.env("INPUT_MSTEAMS-WEBHOOK-URI", format!("{}/hook", hook.uri()));
  let out = test_support::run_blocking(move || cmd.output().unwrap()).await;

  assert_eq!(out.status.code(), Some(1));
  let msg = common::error_line(&out.stdout).unwrap();
  assert_eq!(
    msg,
    "Failed to send notification. HTTP Status: 500 - Internal Server Error (server error)"
  );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_dry_run_input_reaches_the_failure_report() {
  let server = MockServer::start().await;

  let mut cmd = common::notifier(&server.uri());
  cmd.env("INPUT_DRY-RUN", "").env("INPUT_MSTEAMS-WEBHOOK-URI", "");
  let out = test_support::run_blocking(move || cmd.output().unwrap()).await;

  assert_eq!(out.status.code(), Some(1), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  assert_eq!(
    common::error_line(&out.stdout).as_deref(),
    Some("Input required and not supplied: msTeams-webhook-uri")
  );
}

#[tokio::test(flavor = "multi_thread")]
async fn refused_connection_names_the_cause_once() {
  let mut cmd = common::notifier("http://127.0.0.1:1");
  cmd.arg("--dry-run");
  let out = test_support::run_blocking(move || cmd.output().unwrap()).await;

  assert_eq!(out.status.code(), Some(1));
  let msg = common::error_line(&out.stdout).unwrap();
  assert!(
    msg.starts_with(&format!("Request to http://127.0.0.1:1/repos/octo/app/git/commits/{} failed: ", common::SHA)),
    "{}",
    msg
  );
  assert_eq!(msg.matches("refused").count(), 1, "{}", msg);
}

#[tokio::test(flavor = "multi_thread")]
async fn unreadable_commit_body_is_a_decode_failure() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path(format!("/repos/octo/app/git/commits/{}", common::SHA)))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  let mut cmd = common::notifier(&server.uri());
  cmd.arg("--dry-run");
  let out = test_support::run_blocking(move || cmd.output().unwrap()).await;

  assert_eq!(out.status.code(), Some(1));
  let msg = common::error_line(&out.stdout).unwrap();
  assert!(
    msg.starts_with(&format!(
      "Failed to decode GitHub API response from /repos/octo/app/git/commits/{}",
      common::SHA
    )),
    "{}",
    msg
  );
  assert!(!msg.starts_with("Request to"), "{}", msg);
}
