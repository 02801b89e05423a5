//! Gist Operator Main Entry Point
//!
//! Applies, deletes or inspects a single index or index template described by
//! a JSON resource file, and prints the result.

use std::env;
use std::fs;

use dotenv::dotenv;
use gist_operator::cli::{self, Command};
use gist_operator::{Dependencies, OperatorError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
///
/// Logs go to stderr so stdout only carries the command's JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gist_operator=info,gist_operator_repository=info"));

    let json_logs = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .pretty(),
            )
            .init();
    }

    info!(
        service_name = "gist-operator",
        service_version = env!("CARGO_PKG_VERSION"),
        "Tracing initialized"
    );
}

#[tokio::main]
async fn main() -> Result<(), OperatorError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    let command = Command::parse(env::args().skip(1))?;

    let contents = fs::read_to_string(&command.path).map_err(|e| {
        OperatorError::file(format!("{}: {}", command.path.display(), e))
    })?;
    let resource = cli::parse_resource(&contents)?;
    let name = resource.name().to_string();

    let deps = Dependencies::new()?;

    let report = cli::execute(&deps, command.action, resource).await?;
    let output = serde_json::to_string_pretty(&report.output)
        .map_err(|e| OperatorError::parse(e.to_string()))?;
    println!("{}", output);

    if report.success {
        info!(resource = %name, "Command completed successfully");
        Ok(())
    } else {
        error!(resource = %name, "Command failed");
        Err(OperatorError::reconcile(name))
    }
}
