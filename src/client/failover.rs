//! Gateway failover: try every gateway in priority order, strictly one at a time.

use tracing::{debug, warn};
use url::Url;

use crate::domain::{Gateways, MethodName, PageToken, ResponseEnvelope, Scheme, ValidationError};
use crate::transport::encode_endpoint_url;

use super::envelope::validate_response;
use super::error::SmsAeroError;
use super::http::{AttemptError, FailureKind, HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FailoverPolicy {
    /// Retry a gateway over plain HTTP after a TLS negotiation failure.
    ///
    /// This trades transport confidentiality for availability.
    pub insecure_fallback: bool,
}

impl Default for FailoverPolicy {
    fn default() -> Self {
        Self {
            insecure_fallback: true,
        }
    }
}

/// Everything one call sends, identical for every attempt.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GatewayCall<'a> {
    pub method: &'a MethodName,
    pub page: Option<&'a PageToken>,
    pub body: &'a [u8],
    pub authorization: &'a str,
}

pub(crate) async fn send_with_failover(
    http: &dyn HttpTransport,
    gateways: &Gateways,
    policy: FailoverPolicy,
    call: GatewayCall<'_>,
) -> Result<ResponseEnvelope, SmsAeroError> {
    let mut attempts = 0_usize;
    let mut last_failure: Option<AttemptError> = None;

    for gateway in gateways {
        let failure = match attempt(http, gateway, Scheme::Configured, call, &mut attempts).await {
            Ok(response) => return validate_response(response),
            Err(failure) => failure,
        };

        let downgrade = failure.kind == FailureKind::SecureNegotiation
            && policy.insecure_fallback
            && gateway.scheme() == "https";
        let failure = if downgrade {
            warn!(
                gateway = %gateway,
                method = %call.method,
                error = %failure,
                "TLS negotiation failed, retrying gateway over plain HTTP"
            );
            match attempt(http, gateway, Scheme::PlainHttp, call, &mut attempts).await {
                Ok(response) => return validate_response(response),
                Err(failure) => failure,
            }
        } else {
            failure
        };

        if !failure.is_retryable() {
            return Err(SmsAeroError::Transport(Box::new(failure)));
        }

        warn!(
            gateway = %gateway,
            method = %call.method,
            attempts,
            error = %failure,
            "gateway unreachable, trying next one"
        );
        last_failure = Some(failure);
    }

    match last_failure {
        Some(failure) => {
            warn!(method = %call.method, attempts, "all gateways failed");
            Err(SmsAeroError::Network {
                attempts,
                source: Box::new(failure),
            })
        }
        None => Err(ValidationError::Empty {
            field: Gateways::FIELD,
        }
        .into()),
    }
}

async fn attempt(
    http: &dyn HttpTransport,
    gateway: &Url,
    scheme: Scheme,
    call: GatewayCall<'_>,
    attempts: &mut usize,
) -> Result<HttpResponse, AttemptError> {
    let url = encode_endpoint_url(gateway, call.method, call.page, scheme)
        .map_err(|err| AttemptError::new(FailureKind::Fatal, err))?;

    *attempts += 1;
    debug!(url = %url, attempt = *attempts, "sending request");

    let response = http
        .post_json(HttpRequest {
            url: &url,
            authorization: call.authorization,
            body: call.body,
        })
        .await?;

    debug!(url = %url, status = response.status, "gateway answered");
    Ok(response)
}
