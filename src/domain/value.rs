use std::fmt;

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Email address of the SMS Aero account.
///
/// Invariant: non-empty after trimming.
pub struct AccountEmail(String);

impl AccountEmail {
    /// Name reported in validation errors (`email`).
    pub const FIELD: &'static str = "email";

    /// Create a validated [`AccountEmail`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated email.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// API key issued in the SMS Aero cabinet.
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Name reported in validation errors (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// API method path relative to a gateway, e.g. `sms/send`.
///
/// Invariant: one or more `/`-separated segments of ASCII letters, digits, `-`
/// and `_`. Surrounding whitespace and slashes are trimmed.
pub struct MethodName(String);

impl MethodName {
    /// Name reported in validation errors (`method`).
    pub const FIELD: &'static str = "method";

    /// Create a validated [`MethodName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let normalized = value.trim().trim_matches('/');
        if normalized.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        for segment in normalized.split('/') {
            if segment.is_empty() {
                return Err(ValidationError::InvalidMethodName {
                    input: normalized.to_owned(),
                    reason: "empty path segment",
                });
            }
            if !segment
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
            {
                return Err(ValidationError::InvalidMethodName {
                    input: normalized.to_owned(),
                    reason: "only ASCII letters, digits, '-' and '_' are allowed",
                });
            }
        }
        Ok(Self(normalized.to_owned()))
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the normalized method path.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Pagination cursor sent as the `page` query parameter.
///
/// Invariant: non-empty after trimming.
pub struct PageToken(String);

impl PageToken {
    /// Query parameter name used by SMS Aero (`page`).
    pub const FIELD: &'static str = "page";

    /// Create a validated [`PageToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for PageToken {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Name of a request body field supplied through call overrides.
///
/// Invariant: non-empty after trimming.
pub struct FieldName(String);

impl FieldName {
    /// Name reported in validation errors (`field`).
    pub const FIELD: &'static str = "field";

    /// Create a validated [`FieldName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated field name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to SMS Aero (`number`), e.g. `79031234567`.
///
/// Invariant: non-empty after trimming. This type does not normalize; parse into
/// [`PhoneNumber`] and convert it for normalization.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Body field name used by SMS Aero (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SMS Aero.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// SMS Aero expects international digits without the leading `+`.
    fn from(value: PhoneNumber) -> Self {
        Self(value.digits().to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number normalized to international digits, e.g. `79031234567`.
///
/// Input without a country prefix is read in [`PhoneNumber::DEFAULT_REGION`],
/// so `+7 903 123-45-67` and `79031234567` normalize to the same value.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Body field name used by SMS Aero (`number`).
    pub const FIELD: &'static str = "number";

    /// Region assumed for numbers written without a country prefix.
    pub const DEFAULT_REGION: country::Id = country::Id::RU;

    /// Parse in [`PhoneNumber::DEFAULT_REGION`].
    pub fn parse(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::parse_in(Self::DEFAULT_REGION, input)
    }

    /// Parse, reading national numbers in `region`. Numbers the phonenumber
    /// metadata does not consider valid are rejected.
    pub fn parse_in(region: country::Id, input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let invalid = || ValidationError::InvalidPhoneNumber {
            input: trimmed.to_owned(),
        };

        let parsed = phonenumber::parse(Some(region), trimmed).map_err(|_| invalid())?;
        if !phonenumber::is_valid(&parsed) {
            return Err(invalid());
        }
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self(e164.trim_start_matches('+').to_owned()))
    }

    /// Country code and national number without `+`, the form SMS Aero accepts.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender signature (`sign`). Must be approved in the SMS Aero cabinet.
///
/// Invariant: non-empty after trimming.
pub struct SenderSign(String);

impl SenderSign {
    /// Body field name used by SMS Aero (`sign`).
    pub const FIELD: &'static str = "sign";

    /// Shared signature available to every account.
    pub const DEFAULT: &'static str = "SMS Aero";

    /// Create a validated [`SenderSign`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sign.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SenderSign {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`text`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Body field name used by SMS Aero (`text`).
    pub const FIELD: &'static str = "text";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Contact group name (`name`).
///
/// Invariant: non-empty after trimming.
pub struct GroupName(String);

impl GroupName {
    /// Body field name used by SMS Aero (`name`).
    pub const FIELD: &'static str = "name";

    /// Create a validated [`GroupName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated group name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Viber delivery channel (`channel`), e.g. `INFO` or `OFFICIAL`.
///
/// Invariant: non-empty after trimming.
pub struct ViberChannel(String);

impl ViberChannel {
    /// Body field name used by SMS Aero (`channel`).
    pub const FIELD: &'static str = "channel";

    /// Create a validated [`ViberChannel`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated channel.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds (`dateSend`) for scheduled sends.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Body field name used by SMS Aero (`dateSend`).
    pub const FIELD: &'static str = "dateSend";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}
