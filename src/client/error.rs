use std::error::Error as StdError;
use std::time::Duration;

use crate::domain::ValidationError;

pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsAeroClient`](crate::SmsAeroClient).
///
/// Only network-level failures are retried, and only across gateways within a
/// single call. Everything else surfaces immediately:
/// - validation failures before any request is sent,
/// - API rejections (`success: false`), whatever the HTTP status,
/// - undecodable response bodies.
pub enum SmsAeroError {
    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Every gateway failed with a network error; `source` is the last one.
    #[error("all gateways failed after {attempts} attempts: {source}")]
    Network {
        attempts: usize,
        #[source]
        source: BoxError,
    },

    /// Non-retryable transport failure (invalid request, redirect loop, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The overall call deadline elapsed before any gateway answered.
    #[error("call did not complete within {limit:?}")]
    Timeout { limit: Duration },

    /// SMS Aero answered with `success: false`.
    #[error("API error: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded as a JSON object.
    #[error("cannot parse response (HTTP {status}): {source}")]
    Parse {
        status: u16,
        #[source]
        source: BoxError,
    },
}

impl SmsAeroError {
    /// Server-provided message for [`SmsAeroError::Api`].
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of the answer behind an API or parse error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Parse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` when the call failed because no gateway could be reached in time.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}
