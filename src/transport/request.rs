use url::Url;

use crate::domain::{MethodName, PageToken, Params, Scheme};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("cannot encode JSON request body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot build url for {method} on {gateway}: {reason}")]
    Url {
        gateway: String,
        method: String,
        reason: String,
    },
}

/// Build `{gateway}{method}[?page=token]`.
///
/// The method is appended as path segments, so the result always stays on the
/// gateway host and under its version prefix. [`Scheme::PlainHttp`] rewrites
/// the scheme to `http`; [`Scheme::Configured`] leaves it alone.
pub fn encode_endpoint_url(
    gateway: &Url,
    method: &MethodName,
    page: Option<&PageToken>,
    scheme: Scheme,
) -> Result<Url, TransportError> {
    let url_error = |reason: &str| TransportError::Url {
        gateway: gateway.to_string(),
        method: method.to_string(),
        reason: reason.to_owned(),
    };

    let mut url = gateway.clone();
    url.path_segments_mut()
        .map_err(|()| url_error("gateway cannot be a base url"))?
        .pop_if_empty()
        .extend(method.as_str().split('/'));

    if scheme == Scheme::PlainHttp && url.scheme() != "http" {
        url.set_scheme("http")
            .map_err(|()| url_error("cannot switch scheme to http"))?;
    }

    if let Some(page) = page {
        url.query_pairs_mut()
            .append_pair(PageToken::FIELD, page.as_str());
    }
    Ok(url)
}

pub fn encode_json_body(params: &Params) -> Result<Vec<u8>, TransportError> {
    Ok(serde_json::to_vec(params)?)
}
