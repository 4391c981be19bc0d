//! Response helpers shared by the REST and auth clients.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::RemoteError;

/// Error body shapes returned by the hosted services. The tables API uses
/// `{code, message, details, hint}`; the auth API uses either
/// `{code, msg}` or `{error, error_description}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Ensure the response has a success status code, converting failures into
/// [`RemoteError::Api`] with the most specific message the body offers.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    let (code, message) = parse_error_body(&body);

    Err(RemoteError::Api {
        status: status.as_u16(),
        code,
        message,
    })
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RemoteError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

fn parse_error_body(body: &str) -> (Option<String>, String) {
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return (None, body.to_string());
    };

    let code = parsed.code.map(|c| match c {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    });
    let message = parsed
        .message
        .or(parsed.msg)
        .or(parsed.error_description)
        .or(parsed.error)
        .unwrap_or_else(|| body.to_string());

    (code, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_error_body() {
        let (code, message) = parse_error_body(
            r#"{"code":"23502","message":"null value in column \"title\"","details":null,"hint":null}"#,
        );
        assert_eq!(code.as_deref(), Some("23502"));
        assert_eq!(message, "null value in column \"title\"");
    }

    #[test]
    fn auth_error_body() {
        let (code, message) = parse_error_body(
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(code, None);
        assert_eq!(message, "Invalid login credentials");
    }

    #[test]
    fn numeric_code_is_stringified() {
        let (code, message) = parse_error_body(r#"{"code":422,"msg":"Signup disabled"}"#);
        assert_eq!(code.as_deref(), Some("422"));
        assert_eq!(message, "Signup disabled");
    }

    #[test]
    fn plain_text_body_is_kept() {
        let (code, message) = parse_error_body("upstream timeout");
        assert_eq!(code, None);
        assert_eq!(message, "upstream timeout");
    }
}
