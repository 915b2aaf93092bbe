use std::io;

use smsaero::{Credential, MessageText, PhoneNumber, RawPhoneNumber, SenderSign, SmsAeroClient};

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
    let phone_raw = std::env::var("SMSAERO_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAERO_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SMSAERO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smsaero example.".to_owned());
    let sign = match std::env::var("SMSAERO_SIGN") {
        Ok(sign) => SenderSign::new(sign)?,
        Err(_) => SenderSign::default(),
    };

    let client = SmsAeroClient::new(Credential::new(email, api_key)?)?;
    // Nothing is delivered unless SMSAERO_LIVE is set.
    if std::env::var_os("SMSAERO_LIVE").is_none() {
        client.enable_test_mode();
    }

    let number = RawPhoneNumber::from(PhoneNumber::parse(phone_raw)?);
    let text = MessageText::new(message)?;
    let envelope = client.send_sms(&number, &text, &sign).await?;

    println!(
        "test mode: {}, data: {:?}",
        client.is_test_mode_active(),
        envelope.data()
    );

    Ok(())
}
