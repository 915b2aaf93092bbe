//! Typed Rust client for the SMS Aero HTTP API.
//!
//! Every call is sent to a list of redundant gateways in priority order and
//! the first one that answers wins. The crate is split into a domain layer of
//! strong types, a transport layer for the wire format, and a client layer
//! that runs the failover loop and validates the response envelope.
//!
//! ```rust,no_run
//! use smsaero::{Credential, MessageText, RawPhoneNumber, SenderSign, SmsAeroClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsaero::SmsAeroError> {
//!     let client = SmsAeroClient::new(Credential::new("user@example.com", "...")?)?;
//!     client.enable_test_mode();
//!
//!     let number = RawPhoneNumber::new("79031234567")?;
//!     let text = MessageText::new("hello")?;
//!     let envelope = client
//!         .send_sms(&number, &text, &SenderSign::default())
//!         .await?;
//!     println!("{:?}", envelope.data());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credential, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, DEFAULT_USER_AGENT, SmsAeroClient,
    SmsAeroClientBuilder, SmsAeroError,
};
pub use domain::{
    AccountEmail, ApiCall, ApiKey, CallOverrides, DEFAULT_GATEWAYS, FieldName, Gateways,
    GroupName, MessageText, MethodName, MethodPath, OperatingMode, PageToken, ParamValue, Params,
    PhoneNumber, RawPhoneNumber, ResponseEnvelope, Scheme, SendSmsOptions, SenderSign,
    UnixTimestamp, ValidationError, ViberChannel,
};
