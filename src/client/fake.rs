//! Scripted in-memory transport and loopback HTTP helpers for client tests.

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::sync::{Arc, Mutex};

use super::http::{
    AttemptError, BoxFuture, FailureKind, HttpRequest, HttpResponse, HttpTransport,
};

#[derive(Debug, Clone)]
pub(crate) enum Scripted {
    Respond(u16, String),
    Fail(FailureKind, String),
    /// Never completes; used to exercise call deadlines.
    Hang,
}

impl Scripted {
    pub fn ok(body: &str) -> Self {
        Self::Respond(200, body.to_owned())
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::Respond(status, body.to_owned())
    }

    pub fn transient(message: &str) -> Self {
        Self::Fail(FailureKind::Transient, message.to_owned())
    }

    pub fn tls(message: &str) -> Self {
        Self::Fail(FailureKind::SecureNegotiation, message.to_owned())
    }

    pub fn fatal(message: &str) -> Self {
        Self::Fail(FailureKind::Fatal, message.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedRequest {
    pub url: String,
    pub authorization: String,
    pub body: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug, Default)]
struct FakeTransportState {
    script: VecDeque<Scripted>,
    requests: Vec<RecordedRequest>,
}

impl FakeTransport {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                script: script.into_iter().collect(),
                requests: Vec::new(),
            })),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests().into_iter().map(|it| it.url).collect()
    }
}

impl HttpTransport for FakeTransport {
    fn post_json<'a>(
        &'a self,
        request: HttpRequest<'a>,
    ) -> BoxFuture<'a, Result<HttpResponse, AttemptError>> {
        Box::pin(async move {
            let next = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(RecordedRequest {
                    url: request.url.to_string(),
                    authorization: request.authorization.to_owned(),
                    body: serde_json::from_slice(request.body).unwrap(),
                });
                state.script.pop_front()
            };

            match next {
                Some(Scripted::Respond(status, body)) => Ok(HttpResponse { status, body }),
                Some(Scripted::Fail(kind, message)) => Err(AttemptError::new(kind, message)),
                Some(Scripted::Hang) => std::future::pending().await,
                None => panic!("unexpected request to {}", request.url),
            }
        })
    }
}

/// Read one HTTP/1.1 request (head and `Content-Length` body) from `stream`.
pub(crate) fn read_http_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let read = stream.read(&mut chunk).unwrap();
        if read == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..read]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8(buf).unwrap()
}

/// Write a complete JSON response and let the connection close.
pub(crate) fn write_http_response(stream: &mut TcpStream, status_line: &str, body: &str) {
    let response = format!(
        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}
