//! Post a Microsoft Teams Adaptive Card describing the current GitHub Actions run.
//!
//! The pipeline lives in [`notify::run`]; nothing executes on load. The binary in
//! `main.rs` parses inputs, calls the pipeline once and turns any error into an
//! `::error::` workflow command.

pub mod actions;
pub mod actor;
pub mod card;
pub mod cli;
pub mod commit;
pub mod dispatch;
pub mod error;
pub mod github_api;
pub mod http;
pub mod model;
pub mod notify;
pub mod util;

pub use card::{build_message, CardInputs, Message, NotificationType};
pub use dispatch::{Delivery, Webhook};
pub use error::NotifyError;
pub use github_api::GithubApi;
