use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use teams_ci_notifier::actions;
use teams_ci_notifier::cli::{normalize, Cli};
use teams_ci_notifier::dispatch::Delivery;
use teams_ci_notifier::notify;

fn run() -> Result<Delivery> {
  // Phase 1: normalize inputs
  let cfg = normalize(Cli::parse())?;

  // Phase 2: resolve, build, deliver
  notify::run(&cfg)
}

fn main() -> ExitCode {
  actions::init_logging();

  match run() {
    Ok(_) => ExitCode::SUCCESS,
    Err(err) => {
      actions::report_failure(&mut std::io::stdout(), &err);
      ExitCode::FAILURE
    }
  }
}
