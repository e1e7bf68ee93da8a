use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BravoApiError {
    /// Transport-level failure before any HTTP status was produced.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered the prompt submission with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    error: Option<ErrorBodyFields>,
}

#[derive(Debug, Deserialize)]
struct ErrorBodyFields {
    message: Option<String>,
}

/// Best-effort extraction of a human-readable message from an error body.
///
/// The backend reports failures as `{"detail": "..."}` (FastAPI convention)
/// or `{"error": {"message": "..."}}`; anything else falls back to the raw
/// body or the status' canonical reason.
pub(crate) fn parse_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.detail.filter(|value| !value.trim().is_empty()) {
            return detail;
        }
        if let Some(message) = parsed
            .error
            .and_then(|error| error.message)
            .filter(|value| !value.trim().is_empty())
        {
            return message;
        }
    }

    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::parse_error_message;

    #[test]
    fn parses_fastapi_detail_field() {
        let message =
            parse_error_message(StatusCode::UNPROCESSABLE_ENTITY, r#"{"detail":"bad prompt"}"#);
        assert_eq!(message, "bad prompt");
    }

    #[test]
    fn parses_nested_error_message() {
        let message = parse_error_message(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":{"message":"agent crashed"}}"#,
        );
        assert_eq!(message, "agent crashed");
    }

    #[test]
    fn falls_back_to_raw_body() {
        let message = parse_error_message(StatusCode::BAD_GATEWAY, "upstream unavailable");
        assert_eq!(message, "upstream unavailable");
    }

    #[test]
    fn falls_back_to_canonical_reason_on_empty_body() {
        let message = parse_error_message(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(message, "Service Unavailable");
    }
}
