use std::io;

use smsaero::{
    ApiCall, CallOverrides, Credential, FieldName, PhoneNumber, RawPhoneNumber, SmsAeroClient,
};

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
    let phone_raw = std::env::var("SMSAERO_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSAERO_PHONE environment variable is required",
        )
    })?;

    let client = SmsAeroClient::new(Credential::new(email, api_key)?)?;
    let number = RawPhoneNumber::from(PhoneNumber::parse(phone_raw)?);

    let mut overrides = CallOverrides::new();
    if let Ok(first_name) = std::env::var("SMSAERO_FNAME") {
        overrides = overrides.extra_field(FieldName::new("fname")?, first_name);
    }
    if let Ok(last_name) = std::env::var("SMSAERO_LNAME") {
        overrides = overrides.extra_field(FieldName::new("lname")?, last_name);
    }

    let envelope = client
        .execute_with(ApiCall::contact_add(&number), overrides)
        .await?;
    println!("contact: {:?}", envelope.data());

    Ok(())
}
