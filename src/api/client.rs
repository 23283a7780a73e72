//! Stateless request target and response parsing for the floof API.
//!
//! # Design
//! `FloofClient` never touches the network. It knows the endpoint URL and
//! turns an already-executed [`HttpResponse`] into a [`FloofPayload`]; the
//! `net` module performs the actual round-trip in between. Keeping the
//! parse half free of I/O makes the status and body handling fully
//! deterministic and testable.

use crate::api::error::FetchError;
use crate::api::models::FloofPayload;

/// An HTTP response described as plain data, as handed back by `net::get`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Stateless client for the floof endpoint.
#[derive(Debug, Clone)]
pub struct FloofClient {
    endpoint: String,
}

impl FloofClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    /// Target URL of the fetch operation. Always a plain GET, no headers.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Interpret a response: any non-2xx status is `BadStatus`, a 2xx body
    /// that does not deserialize is `Parse`.
    pub fn parse_floof(&self, response: HttpResponse) -> Result<FloofPayload, FetchError> {
        if !response.is_success() {
            return Err(FetchError::BadStatus {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|error| FetchError::Parse(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FloofClient {
        FloofClient::new("https://randomfox.ca/floof/")
    }

    #[test]
    fn parse_floof_extracts_image_url() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"image":"https://randomfox.ca/images/7.jpg","link":"https://randomfox.ca/?i=7"}"#
                .to_string(),
        };

        let payload = client().parse_floof(response).expect("payload should parse");
        assert_eq!(payload.image, "https://randomfox.ca/images/7.jpg");
    }

    #[test]
    fn parse_floof_rejects_server_error_status() {
        let response = HttpResponse {
            status: 500,
            body: "internal error".to_string(),
        };

        let error = client().parse_floof(response).expect_err("500 should fail");
        assert!(matches!(error, FetchError::BadStatus { status: 500, .. }));
    }

    #[test]
    fn parse_floof_rejects_not_found_status() {
        let response = HttpResponse {
            status: 404,
            body: String::new(),
        };

        let error = client().parse_floof(response).expect_err("404 should fail");
        assert!(matches!(error, FetchError::BadStatus { status: 404, .. }));
    }

    #[test]
    fn parse_floof_rejects_malformed_body() {
        let response = HttpResponse {
            status: 200,
            body: "<html>not json</html>".to_string(),
        };

        let error = client().parse_floof(response).expect_err("html should not parse");
        assert!(matches!(error, FetchError::Parse(_)));
    }

    #[test]
    fn parse_floof_rejects_body_without_image_field() {
        let response = HttpResponse {
            status: 200,
            body: r#"{"link":"https://randomfox.ca/?i=7"}"#.to_string(),
        };

        let error = client()
            .parse_floof(response)
            .expect_err("missing field should not parse");
        assert!(matches!(error, FetchError::Parse(_)));
    }
}
