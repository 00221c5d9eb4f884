//! Sends the demo credentials to the login endpoint of a running server.

use std::io::Write;

use nursery_devtools::fixtures::login_request;
use nursery_devtools::services::api_checks::{try_login, write_transport_failure};
use nursery_shared::clients::api::NurseryApiClient;
use nursery_shared::config::{load_dotenv, ApiConfig};
use nursery_shared::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv()?;
    init_tracing("try-login");

    let client = NurseryApiClient::new(ApiConfig::load()?);
    let mut out = std::io::stdout().lock();
    writeln!(out, "Testing login...")?;
    writeln!(out)?;

    match try_login(&client, &login_request()).await {
        Ok(report) => report.write_to(&mut out)?,
        Err(e) => {
            tracing::error!(code = %e.code(), error = %e, base_url = %client.base_url(), "login request failed");
            write_transport_failure(&mut out, client.base_url(), &e)?;
        }
    }
    Ok(())
}
