use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::{AccountEmail, ApiKey, ValidationError};

#[derive(Clone)]
/// Account credentials for SMS Aero API calls.
///
/// The HTTP basic-auth header is derived once at construction and reused for
/// every request made with this credential.
pub struct Credential {
    email: AccountEmail,
    api_key: ApiKey,
    authorization: String,
}

impl Credential {
    /// Validate both parts (non-empty after trimming) and derive the auth header.
    pub fn new(
        email: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = AccountEmail::new(email)?;
        let api_key = ApiKey::new(api_key)?;
        let token = STANDARD.encode(format!("{}:{}", email.as_str(), api_key.as_str()));
        Ok(Self {
            email,
            api_key,
            authorization: format!("Basic {token}"),
        })
    }

    pub fn email(&self) -> &AccountEmail {
        &self.email
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub(crate) fn authorization(&self) -> &str {
        &self.authorization
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorization_is_basic_base64_of_email_and_key() {
        let credential = Credential::new("user@example.com", "KEY").unwrap();
        assert_eq!(
            credential.authorization(),
            "Basic dXNlckBleGFtcGxlLmNvbTpLRVk="
        );
    }

    #[test]
    fn constructor_validates_inputs() {
        assert_eq!(
            Credential::new("   ", "key").unwrap_err(),
            ValidationError::Empty {
                field: AccountEmail::FIELD
            }
        );
        assert_eq!(
            Credential::new("user@example.com", "").unwrap_err(),
            ValidationError::Empty {
                field: ApiKey::FIELD
            }
        );
    }

    #[test]
    fn debug_output_hides_secrets() {
        let credential = Credential::new("user@example.com", "TOPSECRET").unwrap();
        let rendered = format!("{credential:?}");
        assert!(rendered.contains("user@example.com"));
        assert!(!rendered.contains("TOPSECRET"));
        assert!(!rendered.contains("Basic"));
    }
}
