use url::Url;

use crate::domain::validation::ValidationError;

/// Production gateways in failover priority order.
pub const DEFAULT_GATEWAYS: [&str; 3] = [
    "https://gate.smsaero.ru/v2/",
    "https://gate.smsaero.org/v2/",
    "https://gate.smsaero.net/v2/",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Scheme used for one attempt against a gateway.
pub enum Scheme {
    /// Whatever the gateway was configured with.
    Configured,
    /// Plain `http`, used to retry an `https` gateway after a TLS failure.
    PlainHttp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered, non-empty set of interchangeable API base URLs.
///
/// The first gateway is tried first. Every base ends with `/`, so joining a
/// method path keeps the version prefix (`.../v2/` + `sms/send`).
pub struct Gateways(Vec<Url>);

impl Gateways {
    /// Name reported in validation errors (`gateways`).
    pub const FIELD: &'static str = "gateways";

    /// Parse and validate gateway base URLs.
    pub fn new<I, S>(urls: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let gateways = urls
            .into_iter()
            .map(|url| parse_gateway(url.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if gateways.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(gateways))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Url> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: construction rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Gateways {
    fn default() -> Self {
        Self(
            DEFAULT_GATEWAYS
                .iter()
                .filter_map(|url| Url::parse(url).ok())
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Gateways {
    type Item = &'a Url;
    type IntoIter = std::slice::Iter<'a, Url>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn parse_gateway(input: &str) -> Result<Url, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: Gateways::FIELD });
    }

    let mut url = Url::parse(trimmed).map_err(|err| ValidationError::InvalidGatewayUrl {
        input: trimmed.to_owned(),
        reason: err.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::UnsupportedGatewayScheme {
            input: trimmed.to_owned(),
            scheme: url.scheme().to_owned(),
        });
    }
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(ValidationError::InvalidGatewayUrl {
            input: trimmed.to_owned(),
            reason: "url has no host".to_owned(),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ValidationError::InvalidGatewayUrl {
            input: trimmed.to_owned(),
            reason: "gateway base must not carry a query or fragment".to_owned(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
