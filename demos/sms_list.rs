use std::io;

use smsaero::{ApiCall, CallOverrides, Credential, PageToken, SmsAeroClient};

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
    let page = std::env::var("SMSAERO_PAGE").unwrap_or_else(|_| "1".to_owned());

    let client = SmsAeroClient::new(Credential::new(email, api_key)?)?;
    let overrides = CallOverrides::new().page(PageToken::new(page)?);
    let envelope = client.execute_with(ApiCall::sms_list(), overrides).await?;

    println!("{:#?}", envelope.data());

    Ok(())
}
