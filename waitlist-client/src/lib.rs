//! HTTP transport for the waitlist signup.
//!
//! [`HttpSubmitter`] delivers a [`Payload`] as a JSON `POST` to
//! `{base_url}/waitlist` and maps the response onto the three
//! [`Outcome`] variants. The status/body mapping lives in [`outcome_of`]
//! so it can be tested without a server.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;
use waitlist_types::{Outcome, Payload, SubmitWaitlist};

/// Path suffix appended to the configured base URL.
const WAITLIST_PATH: &str = "/waitlist";

/// Blocking HTTP submitter.
///
/// One request per [`SubmitWaitlist::submit`] call; no retries and no
/// explicit timeout beyond the transport defaults.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    base_url: String,
    client: Client,
}

impl HttpSubmitter {
    /// Create a submitter for the given base URL (no trailing path).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{WAITLIST_PATH}", self.base_url.trim_end_matches('/'))
    }
}

impl SubmitWaitlist for HttpSubmitter {
    fn submit(&self, payload: &Payload) -> Outcome {
        let endpoint = self.endpoint();
        log::debug!("submitting waitlist signup to {endpoint}");

        let response = match self.client.post(&endpoint).json(payload).send() {
            Ok(response) => response,
            Err(err) => {
                return Outcome::Unreachable {
                    reason: err.to_string(),
                };
            }
        };

        let status = response.status();
        match response.bytes() {
            Ok(body) => outcome_of(status, &body),
            Err(err) => Outcome::Unreachable {
                reason: err.to_string(),
            },
        }
    }
}

/// Map a response status and body onto an [`Outcome`].
///
/// Both paths expect a JSON body: a success status with an unparseable body
/// counts as a transport failure, not an acceptance, and so does an
/// unparseable error body. A rejection's `detail` is taken from the body
/// when it is an object with a string `detail` member.
pub fn outcome_of(status: StatusCode, body: &[u8]) -> Outcome {
    match serde_json::from_slice::<Value>(body) {
        Ok(_) if status.is_success() => Outcome::Accepted,
        Ok(value) => Outcome::Rejected {
            detail: value
                .get("detail")
                .and_then(Value::as_str)
                .map(str::to_string),
        },
        Err(err) => Outcome::Unreachable {
            reason: format!("invalid response body ({status}): {err}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_status_with_json_body_is_accepted() {
        let outcome = outcome_of(StatusCode::OK, br#"{"id": 42}"#);
        assert_eq!(outcome, Outcome::Accepted);

        let outcome = outcome_of(StatusCode::CREATED, b"null");
        assert_eq!(outcome, Outcome::Accepted);
    }

    #[test]
    fn error_status_extracts_detail() {
        let outcome = outcome_of(
            StatusCode::CONFLICT,
            br#"{"detail": "Email already registered"}"#,
        );
        assert_eq!(
            outcome,
            Outcome::Rejected {
                detail: Some("Email already registered".to_string())
            }
        );
    }

    #[test]
    fn error_status_without_detail_has_none() {
        let outcome = outcome_of(StatusCode::INTERNAL_SERVER_ERROR, br#"{"error": "boom"}"#);
        assert_eq!(outcome, Outcome::Rejected { detail: None });

        // A non-string detail is ignored as well.
        let outcome = outcome_of(StatusCode::BAD_REQUEST, br#"{"detail": 17}"#);
        assert_eq!(outcome, Outcome::Rejected { detail: None });
    }

    #[test]
    fn unparseable_body_is_a_transport_failure() {
        let outcome = outcome_of(StatusCode::OK, b"<html>proxy error</html>");
        assert!(matches!(outcome, Outcome::Unreachable { .. }));

        let outcome = outcome_of(StatusCode::BAD_GATEWAY, b"");
        assert!(matches!(outcome, Outcome::Unreachable { .. }));
    }

    #[test]
    fn endpoint_joins_base_url_and_path() {
        let submitter = HttpSubmitter::new("https://api.example.com");
        assert_eq!(submitter.endpoint(), "https://api.example.com/waitlist");

        let submitter = HttpSubmitter::new("https://api.example.com/");
        assert_eq!(submitter.endpoint(), "https://api.example.com/waitlist");
    }
}
