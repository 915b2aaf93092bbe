use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use super::error::BoxError;

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy)]
pub(crate) struct HttpRequest<'a> {
    pub url: &'a Url,
    pub authorization: &'a str,
    pub body: &'a [u8],
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureKind {
    /// TLS handshake or certificate failure.
    SecureNegotiation,
    /// The request never reached the host or its answer never came back.
    Transient,
    Fatal,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SecureNegotiation => "secure negotiation",
            Self::Transient => "network",
            Self::Fatal => "transport",
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{kind} failure: {source}")]
pub(crate) struct AttemptError {
    pub kind: FailureKind,
    #[source]
    pub source: BoxError,
}

impl AttemptError {
    pub fn new(kind: FailureKind, source: impl Into<BoxError>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    /// Whether the failover loop may move on to the next gateway.
    pub fn is_retryable(&self) -> bool {
        self.kind != FailureKind::Fatal
    }
}

pub(crate) trait HttpTransport: Send + Sync {
    /// One POST attempt. Any received response, whatever its status, is `Ok`.
    fn post_json<'a>(
        &'a self,
        request: HttpRequest<'a>,
    ) -> BoxFuture<'a, Result<HttpResponse, AttemptError>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(
        connect_timeout: Duration,
        read_timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        request: HttpRequest<'a>,
    ) -> BoxFuture<'a, Result<HttpResponse, AttemptError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(request.url.clone())
                .header(AUTHORIZATION, request.authorization)
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .header(ACCEPT, JSON_CONTENT_TYPE)
                .body(request.body.to_vec())
                .send()
                .await
                .map_err(classify_reqwest_error)?;
            let status = response.status().as_u16();
            // Error statuses carry JSON envelopes too, so the body is always read.
            let body = response.text().await.map_err(classify_reqwest_error)?;
            Ok(HttpResponse { status, body })
        })
    }
}

fn classify_reqwest_error(err: reqwest::Error) -> AttemptError {
    let kind = failure_kind(&err);
    AttemptError::new(kind, err)
}

fn failure_kind(err: &reqwest::Error) -> FailureKind {
    if err.is_timeout() {
        return FailureKind::Transient;
    }
    if err.is_connect() {
        return classify_connect_chain(err);
    }
    if (err.is_request() || err.is_body()) && has_transient_io_error(err) {
        return FailureKind::Transient;
    }
    FailureKind::Fatal
}

fn error_chain<'a>(err: &'a (dyn StdError + 'static)) -> Vec<&'a (dyn StdError + 'static)> {
    let mut chain = vec![err];
    let mut current = err.source();
    while let Some(source) = current {
        chain.push(source);
        current = source.source();
    }
    chain
}

/// Connect errors are transient unless the chain carries a rustls error or
/// mentions TLS. The outermost message is skipped for the text match since it
/// embeds the request url.
fn classify_connect_chain(err: &(dyn StdError + 'static)) -> FailureKind {
    let chain = error_chain(err);
    let tls = chain.iter().any(|source| is_rustls_error(*source))
        || chain.iter().skip(1).any(|source| {
            let lower = source.to_string().to_ascii_lowercase();
            lower.contains("certificate") || lower.contains("tls") || lower.contains("handshake")
        });
    if tls {
        FailureKind::SecureNegotiation
    } else {
        FailureKind::Transient
    }
}

/// rustls failures usually travel wrapped in an `io::Error`, whose `source()`
/// skips the wrapped value, so both layers are checked.
fn is_rustls_error(err: &(dyn StdError + 'static)) -> bool {
    if err.is::<rustls::Error>() {
        return true;
    }
    err.downcast_ref::<io::Error>()
        .and_then(|io_err| io_err.get_ref())
        .is_some_and(|inner| inner.is::<rustls::Error>())
}

fn has_transient_io_error(err: &(dyn StdError + 'static)) -> bool {
    error_chain(err).into_iter().any(|source| {
        source.downcast_ref::<io::Error>().is_some_and(|io_err| {
            matches!(
                io_err.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::UnexpectedEof
                    | io::ErrorKind::TimedOut
            )
        })
    })
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;
    use std::thread;

    use super::*;
    use crate::client::DEFAULT_USER_AGENT;
    use crate::client::fake::{read_http_request, write_http_response};

    const AUTH: &str = "Basic dGVzdA==";
    const BODY: &[u8] = br#"{"number":"70000000000"}"#;

    fn transport(read_timeout: Duration) -> ReqwestTransport {
        ReqwestTransport::new(Duration::from_secs(2), read_timeout, DEFAULT_USER_AGENT).unwrap()
    }

    async fn post(transport: &ReqwestTransport, url: &str) -> Result<HttpResponse, AttemptError> {
        let url = Url::parse(url).unwrap();
        transport
            .post_json(HttpRequest {
                url: &url,
                authorization: AUTH,
                body: BODY,
            })
            .await
    }

    #[tokio::test]
    async fn sends_json_headers_and_reads_error_status_body() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_http_request(&mut stream);
            write_http_response(
                &mut stream,
                "401 Unauthorized",
                r#"{"success":false,"message":"Unauthorized"}"#,
            );
            request
        });

        let response = post(&transport(Duration::from_secs(5)), &format!("http://{addr}/v2/auth"))
            .await
            .unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(
            response.body,
            r#"{"success":false,"message":"Unauthorized"}"#
        );

        let request = server.join().unwrap();
        let lower = request.to_ascii_lowercase();
        assert!(lower.starts_with("post /v2/auth http/1.1\r\n"), "{request}");
        assert!(lower.contains("\r\ncontent-type: application/json\r\n"));
        assert!(lower.contains("\r\naccept: application/json\r\n"));
        assert!(request.contains("Basic dGVzdA=="));
        assert!(lower.contains(&format!(
            "\r\nuser-agent: {}\r\n",
            DEFAULT_USER_AGENT.to_ascii_lowercase()
        )));
        assert!(request.ends_with(r#"{"number":"70000000000"}"#));
    }

    #[tokio::test]
    async fn refused_connection_is_transient() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = post(
            &transport(Duration::from_secs(5)),
            &format!("http://127.0.0.1:{port}/v2/balance"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, FailureKind::Transient, "{err}");
    }

    #[tokio::test]
    async fn silent_gateway_read_timeout_is_transient() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let _request = read_http_request(&mut stream);
            thread::sleep(Duration::from_secs(3));
        });

        let err = post(
            &transport(Duration::from_millis(200)),
            &format!("http://{addr}/v2/balance"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, FailureKind::Transient, "{err}");
    }

    #[tokio::test]
    async fn https_to_plain_http_listener_is_secure_negotiation() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut hello = [0_u8; 512];
            let _ = std::io::Read::read(&mut stream, &mut hello);
            write_http_response(&mut stream, "400 Bad Request", "");
        });

        let err = post(
            &transport(Duration::from_secs(5)),
            &format!("https://{addr}/v2/balance"),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, FailureKind::SecureNegotiation, "{err}");
    }

    #[test]
    fn wrapped_rustls_errors_are_secure_negotiation() {
        let rustls_err = rustls::Error::InvalidMessage(rustls::InvalidMessage::InvalidContentType);
        let err = Wrapper(Box::new(io::Error::new(io::ErrorKind::InvalidData, rustls_err)));
        assert_eq!(
            classify_connect_chain(&err),
            FailureKind::SecureNegotiation
        );
    }

    #[derive(Debug, thiserror::Error)]
    #[error("client error (Connect)")]
    struct Wrapper(#[source] BoxError);

    #[test]
    fn certificate_failures_are_secure_negotiation() {
        let inner = io::Error::new(
            io::ErrorKind::InvalidData,
            "invalid peer certificate: UnknownIssuer",
        );
        let err = Wrapper(Box::new(inner));
        assert_eq!(
            classify_connect_chain(&err),
            FailureKind::SecureNegotiation
        );
    }

    #[test]
    fn handshake_alerts_are_secure_negotiation() {
        let err = Wrapper("received fatal alert: HandshakeFailure".into());
        assert_eq!(
            classify_connect_chain(&err),
            FailureKind::SecureNegotiation
        );
    }

    #[test]
    fn refused_and_dns_failures_are_transient() {
        let refused = Wrapper(Box::new(io::Error::from(io::ErrorKind::ConnectionRefused)));
        assert_eq!(classify_connect_chain(&refused), FailureKind::Transient);

        let dns = Wrapper("dns error: failed to lookup address information".into());
        assert_eq!(classify_connect_chain(&dns), FailureKind::Transient);
    }

    #[test]
    fn reset_connections_count_as_transient_io() {
        let reset = Wrapper(Box::new(io::Error::from(io::ErrorKind::ConnectionReset)));
        assert!(has_transient_io_error(&reset));

        let denied = Wrapper(Box::new(io::Error::from(io::ErrorKind::PermissionDenied)));
        assert!(!has_transient_io_error(&denied));
    }

    #[test]
    fn only_fatal_failures_stop_failover() {
        assert!(AttemptError::new(FailureKind::Transient, "timeout").is_retryable());
        assert!(AttemptError::new(FailureKind::SecureNegotiation, "tls").is_retryable());
        assert!(!AttemptError::new(FailureKind::Fatal, "redirect loop").is_retryable());
    }

    #[test]
    fn attempt_error_display_names_the_failure_class() {
        let err = AttemptError::new(FailureKind::Transient, "connection refused");
        assert_eq!(err.to_string(), "network failure: connection refused");
    }
}
