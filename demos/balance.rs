use std::io;

use smsaero::{Credential, SmsAeroClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
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
    let envelope = client.balance().await?;

    match envelope.data().and_then(|data| data.get("balance")) {
        Some(balance) => println!("balance: {balance}"),
        None => println!("no balance in response: {:?}", envelope.as_object()),
    }

    Ok(())
}
