use crate::domain::ResponseEnvelope;
use crate::transport::{DecodedEnvelope, decode_response_envelope};

use super::error::SmsAeroError;
use super::http::HttpResponse;

/// Turn one gateway answer into the call result.
///
/// The body decides, not the HTTP status: SMS Aero sends its envelope on error
/// statuses too. `success: false` is an API error, anything else decoded is
/// returned, and a body that is not a JSON object is a parse error.
pub(crate) fn validate_response(response: HttpResponse) -> Result<ResponseEnvelope, SmsAeroError> {
    let HttpResponse { status, body } = response;

    match decode_response_envelope(&body) {
        Ok(DecodedEnvelope::Accepted(object)) => Ok(ResponseEnvelope::new(object)),
        Ok(DecodedEnvelope::Rejected { message }) => Err(SmsAeroError::Api { status, message }),
        Err(err) => Err(SmsAeroError::Parse {
            status,
            source: Box::new(err),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_owned(),
        }
    }

    #[test]
    fn accepted_envelope_is_returned() {
        let envelope =
            validate_response(response(200, r#"{"success":true,"data":{"id":1}}"#)).unwrap();
        assert_eq!(envelope.success(), Some(true));
        assert_eq!(envelope.data(), Some(&json!({"id": 1})));
    }

    #[test]
    fn accepted_envelope_wins_over_error_status() {
        let envelope =
            validate_response(response(500, r#"{"success":true,"data":{"id":1}}"#)).unwrap();
        assert_eq!(envelope.data(), Some(&json!({"id": 1})));
    }

    #[test]
    fn missing_success_flag_is_accepted_on_any_status() {
        let envelope = validate_response(response(404, r#"{"data":[]}"#)).unwrap();
        assert_eq!(envelope.success(), None);
        assert_eq!(envelope.data(), Some(&json!([])));
    }

    #[test]
    fn rejected_envelope_is_an_api_error_even_on_error_status() {
        let err = validate_response(response(401, r#"{"success":false,"message":"auth"}"#))
            .unwrap_err();
        match err {
            SmsAeroError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "auth");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_success_body_is_a_parse_error() {
        let err = validate_response(response(200, "{ not json }")).unwrap_err();
        assert!(matches!(err, SmsAeroError::Parse { status: 200, .. }));
    }

    #[test]
    fn non_json_error_page_is_a_parse_error_with_status() {
        let err = validate_response(response(502, "<html>Bad Gateway</html>")).unwrap_err();
        assert!(matches!(err, SmsAeroError::Parse { status: 502, .. }));
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn blank_body_is_a_parse_error() {
        let err = validate_response(response(503, "   ")).unwrap_err();
        assert!(matches!(err, SmsAeroError::Parse { status: 503, .. }));
    }
}
