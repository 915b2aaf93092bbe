use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidMethodName { input: String, reason: &'static str },
    InvalidGatewayUrl { input: String, reason: String },
    UnsupportedGatewayScheme { input: String, scheme: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidMethodName { input, reason } => {
                write!(f, "invalid method name {input}: {reason}")
            }
            Self::InvalidGatewayUrl { input, reason } => {
                write!(f, "invalid gateway url {input}: {reason}")
            }
            Self::UnsupportedGatewayScheme { input, scheme } => {
                write!(
                    f,
                    "unsupported gateway scheme {scheme} in {input} (expected http or https)"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
