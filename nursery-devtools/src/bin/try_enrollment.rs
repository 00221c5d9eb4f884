//! Submits one fixed enrollment to a running server and prints the outcome.

use nursery_devtools::fixtures::enrollment_request;
use nursery_devtools::services::api_checks::{
    try_enrollment, write_enrollment_request, write_transport_failure,
};
use nursery_shared::clients::api::NurseryApiClient;
use nursery_shared::config::{load_dotenv, ApiConfig};
use nursery_shared::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv()?;
    init_tracing("try-enrollment");

    let client = NurseryApiClient::new(ApiConfig::load()?);
    let request = enrollment_request();
    let mut out = std::io::stdout().lock();
    write_enrollment_request(&mut out, &request)?;

    match try_enrollment(&client, &request).await {
        Ok(report) => report.write_to(&mut out)?,
        Err(e) => {
            tracing::error!(code = %e.code(), error = %e, base_url = %client.base_url(), "enrollment request failed");
            write_transport_failure(&mut out, client.base_url(), &e)?;
        }
    }
    Ok(())
}
