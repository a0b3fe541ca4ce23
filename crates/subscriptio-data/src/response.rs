//! Buffered HTTP responses.

use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::FetchError;

/// An HTTP response read fully into memory.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Drain a `reqwest` response.
    pub async fn read(response: reqwest::Response) -> Result<Self, FetchError> {
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, body))
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Decode(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The error message is the response body, or the status's canonical
    /// reason when the body is empty.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }

        let body = self.text().unwrap_or_default();
        let message = if body.trim().is_empty() {
            StatusCode::from_u16(self.status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            body
        };
        Err(FetchError::Http {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, body.to_vec())
    }

    // === Status Check Tests ===

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(304, b"").is_success());
    }

    // === Body Tests ===

    #[test]
    fn test_response_json() {
        let resp = make_response(200, br#"[{"id":"a"}]"#);
        let data: Vec<serde_json::Value> = resp.json().unwrap();
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_response_json_invalid_is_decode_error() {
        let resp = make_response(200, b"<html>");
        let result: Result<Vec<u8>, _> = resp.json();
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        assert!(make_response(200, &[0xff, 0xfe]).text().is_err());
    }

    // === error_for_status Tests ===

    #[test]
    fn test_error_for_status_uses_body() {
        let err = make_response(500, b"database down").error_for_status().unwrap_err();
        assert_eq!(
            err,
            FetchError::Http {
                status: 500,
                message: "database down".to_string()
            }
        );
    }

    #[test]
    fn test_error_for_status_empty_body_uses_reason() {
        let err = make_response(404, b"").error_for_status().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }
}
