//! Client layer: orchestrates gateway failover, transport calls and envelope validation.

mod auth;
mod envelope;
mod error;
mod failover;
#[cfg(test)]
mod fake;
mod http;
mod operations;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::warn;

use crate::domain::{
    ApiCall, CallOverrides, Gateways, MethodName, OperatingMode, Params, ResponseEnvelope,
};
use crate::transport::encode_json_body;

pub use auth::Credential;
pub use error::SmsAeroError;

use failover::{FailoverPolicy, GatewayCall, send_with_failover};
use http::{HttpTransport, ReqwestTransport};

/// Client identifier sent as `User-Agent`.
pub const DEFAULT_USER_AGENT: &str = concat!("SARustClient/", env!("CARGO_PKG_VERSION"));
/// Bound on establishing one connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Bound on waiting for response data within one attempt.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
/// Builder for [`SmsAeroClient`].
///
/// Use this when you need to customize gateways, timeouts, the user-agent or
/// the plain-HTTP fallback.
pub struct SmsAeroClientBuilder {
    credential: Credential,
    gateways: Gateways,
    connect_timeout: Duration,
    read_timeout: Duration,
    call_timeout: Option<Duration>,
    user_agent: String,
    insecure_fallback: bool,
    mode: OperatingMode,
}

impl SmsAeroClientBuilder {
    /// Create a builder with the production gateways and default timeouts.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            gateways: Gateways::default(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            call_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            insecure_fallback: true,
            mode: OperatingMode::Live,
        }
    }

    /// Replace the gateway list (tried in the given order).
    pub fn gateways(mut self, gateways: Gateways) -> Self {
        self.gateways = gateways;
        self
    }

    /// Bound on establishing a connection to one gateway.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Bound on each read from one gateway.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Bound on a whole call, across every gateway attempt. Unset by default.
    ///
    /// [`CallOverrides::timeout`] takes precedence for a single call.
    pub fn call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Allow or forbid retrying a gateway over plain HTTP after a TLS failure.
    ///
    /// Enabled by default. The fallback sends credentials and message content
    /// unencrypted; disable it wherever confidentiality matters more than
    /// reaching the API.
    pub fn insecure_fallback(mut self, enabled: bool) -> Self {
        self.insecure_fallback = enabled;
        self
    }

    /// Start the client in the given mode.
    pub fn mode(mut self, mode: OperatingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Build a [`SmsAeroClient`].
    pub fn build(self) -> Result<SmsAeroClient, SmsAeroError> {
        let http = ReqwestTransport::new(self.connect_timeout, self.read_timeout, &self.user_agent)
            .map_err(|err| SmsAeroError::Transport(Box::new(err)))?;

        Ok(SmsAeroClient {
            credential: self.credential,
            gateways: self.gateways,
            policy: FailoverPolicy {
                insecure_fallback: self.insecure_fallback,
            },
            call_timeout: self.call_timeout,
            test_mode: Arc::new(AtomicBool::new(self.mode.is_test())),
            http: Arc::new(http),
        })
    }
}

#[derive(Clone)]
/// High-level SMS Aero client.
///
/// Each call is delivered to the first gateway that answers, in priority order:
/// - `https://gate.smsaero.ru/v2/`
/// - `https://gate.smsaero.org/v2/`
/// - `https://gate.smsaero.net/v2/`
///
/// Gateways are tried one at a time and only network failures move on to the
/// next one. An answer from the API, including a rejection, ends the call.
///
/// Clones share the operating mode: toggling test mode on one clone is seen by
/// all of them, and by calls that start afterwards (last writer wins). Per-call
/// state such as pagination lives in [`CallOverrides`] and is never shared.
pub struct SmsAeroClient {
    credential: Credential,
    gateways: Gateways,
    policy: FailoverPolicy,
    call_timeout: Option<Duration>,
    test_mode: Arc<AtomicBool>,
    http: Arc<dyn HttpTransport>,
}

impl SmsAeroClient {
    /// Create a client with default settings.
    ///
    /// For more customization, use [`SmsAeroClient::builder`].
    pub fn new(credential: Credential) -> Result<Self, SmsAeroError> {
        Self::builder(credential).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credential: Credential) -> SmsAeroClientBuilder {
        SmsAeroClientBuilder::new(credential)
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn gateways(&self) -> &Gateways {
        &self.gateways
    }

    /// Route `send`, `status` and `list` SMS calls to their test endpoints.
    pub fn enable_test_mode(&self) {
        self.set_mode(OperatingMode::Test);
    }

    pub fn disable_test_mode(&self) {
        self.set_mode(OperatingMode::Live);
    }

    pub fn is_test_mode_active(&self) -> bool {
        self.test_mode.load(Ordering::Acquire)
    }

    pub fn set_mode(&self, mode: OperatingMode) {
        self.test_mode.store(mode.is_test(), Ordering::Release);
    }

    pub fn mode(&self) -> OperatingMode {
        if self.is_test_mode_active() {
            OperatingMode::Test
        } else {
            OperatingMode::Live
        }
    }

    /// Call `method` with `params` as the JSON body.
    pub async fn dispatch(
        &self,
        method: MethodName,
        params: Params,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        self.dispatch_with(method, params, CallOverrides::default())
            .await
    }

    /// Call `method` with `params`, applying `overrides` to this call only.
    ///
    /// Extra fields from `overrides` replace params with the same name. The
    /// merged body and page are built once and reused for every gateway attempt.
    ///
    /// Errors:
    /// - [`SmsAeroError::Network`] when every gateway failed at network level,
    /// - [`SmsAeroError::Timeout`] when the call deadline elapsed,
    /// - [`SmsAeroError::Api`] when SMS Aero returned `success: false`,
    /// - [`SmsAeroError::Parse`] when the answer is not a JSON object.
    pub async fn dispatch_with(
        &self,
        method: MethodName,
        params: Params,
        overrides: CallOverrides,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        let (page, extra, timeout) = overrides.into_parts();
        let body = encode_json_body(&params.merge_extra(extra))
            .map_err(|err| SmsAeroError::Transport(Box::new(err)))?;

        let call = GatewayCall {
            method: &method,
            page: page.as_ref(),
            body: &body,
            authorization: self.credential.authorization(),
        };
        let dispatch = send_with_failover(self.http.as_ref(), &self.gateways, self.policy, call);

        match timeout.or(self.call_timeout) {
            Some(limit) => tokio::time::timeout(limit, dispatch).await.map_err(|_| {
                warn!(method = %method, ?limit, "call deadline elapsed");
                SmsAeroError::Timeout { limit }
            })?,
            None => dispatch.await,
        }
    }

    /// Execute a typed API call, picking its path for the current mode.
    pub async fn execute(&self, call: ApiCall) -> Result<ResponseEnvelope, SmsAeroError> {
        self.execute_with(call, CallOverrides::default()).await
    }

    /// Execute a typed API call with per-call overrides.
    pub async fn execute_with(
        &self,
        call: ApiCall,
        overrides: CallOverrides,
    ) -> Result<ResponseEnvelope, SmsAeroError> {
        let (path, params) = call.into_parts();
        let method = path.resolve(self.mode());
        self.dispatch_with(method, params, overrides).await
    }
}
