use std::process::ExitCode;
use std::sync::Arc;

use adaudit::{audit::Auditor, config::Config, fetcher::HttpFetcher, telemetry};
use anyhow::{Context, Result};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    telemetry::init_tracing();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: audit <url>");
        return Ok(ExitCode::from(2));
    };

    let config = Config::from_env()?;
    let fetcher = HttpFetcher::new(config.fetch())?;
    let auditor = Auditor::new(Arc::new(fetcher));

    let report = auditor.audit(&url).await;
    let json = serde_json::to_string_pretty(&report).context("serializing report")?;
    println!("{json}");

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
