//! Transport layer: wire-format details (URLs, JSON bodies, response envelopes).

mod envelope;
mod request;

pub use envelope::{DecodedEnvelope, decode_response_envelope};
pub use request::{encode_endpoint_url, encode_json_body};
