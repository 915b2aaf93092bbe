use std::io;

use smsaero::{Credential, SmsAeroClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let email = std::env::var("SMSAERO_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAERO_EMAIL environment variable is required",
        )
    })?;
    let api_key = std::env::var("SMSAERO_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAERO_API_KEY environment variable is required",
        )
    })?;

    let client = SmsAeroClient::new(Credential::new(email, api_key)?)?;
    let envelope = client.is_authorized().await?;

    println!(
        "success: {:?}, message: {:?}",
        envelope.success(),
        envelope.message()
    );

    Ok(())
}
