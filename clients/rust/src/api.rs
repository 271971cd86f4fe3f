use http::header::ETAG;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::log::warn;
use url::Url;

use crate::constants::{CORRELATION_ID_HEADER, REQUEST_ID_HEADER};

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorItem>,
    message: Option<String>,
    trace: Option<String>,
}

/// A single entry of the `errors` array the service returns on failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorItem {
    pub code: Option<String>,
    pub message: Option<String>,
    pub more_info: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    status_code: StatusCode,
    errors: Vec<ApiErrorItem>,
    trace: Option<String>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn errors(&self) -> &[ApiErrorItem] {
        &self.errors
    }

    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    /// The first error message reported by the service, if any.
    pub fn message(&self) -> Option<&str> {
        self.errors.iter().find_map(|e| e.message.as_deref())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.status_code)?;
        match self.errors.as_slice() {
            | [] => {}
            | [only] => {
                write!(f, " {}", only.message.as_deref().unwrap_or_default())?
            }
            | many => {
                for error in many {
                    writeln!(f)?;
                    write!(
                        f,
                        "  - [{}] {}",
                        error.code.as_deref().unwrap_or("unknown"),
                        error.message.as_deref().unwrap_or_default()
                    )?;
                }
            }
        }
        if let Some(ref trace) = self.trace {
            writeln!(f)?;
            write!(f, "  trace: {}", trace)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone)]
pub struct Response<T> {
    inner: Result<T, ApiError>,
    url: Url,
    request_id: Option<String>,
    correlation_id: Option<String>,
    status_code: StatusCode,
    headers: http::HeaderMap,
}

impl<T> Response<T> {
    pub fn into_inner(self) -> Result<T, ApiError> {
        self.inner
    }

    pub fn inner(&self) -> &Result<T, ApiError> {
        &self.inner
    }

    pub fn request_id(&self) -> &Option<String> {
        &self.request_id
    }

    pub fn correlation_id(&self) -> &Option<String> {
        &self.correlation_id
    }

    /// The entity tag of the returned resource. Pass it back when replacing
    /// a rule.
    pub fn etag(&self) -> Option<&str> {
        self.headers.get(ETAG).and_then(|v| v.to_str().ok())
    }

    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    pub fn status_code(&self) -> http::StatusCode {
        self.status_code
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    pub fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }
}

#[cfg(test)]
impl<T> Response<T> {
    pub(crate) fn scripted(inner: T) -> Self {
        Self {
            inner: Ok(inner),
            url: Url::parse("http://localhost/").expect("static url"),
            request_id: None,
            correlation_id: None,
            status_code: StatusCode::OK,
            headers: http::HeaderMap::new(),
        }
    }
}

fn header_string(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToOwned::to_owned)
}

impl<T> Response<T>
where
    T: DeserializeOwned,
{
    pub(crate) async fn from_raw_response(
        raw: reqwest::Response,
    ) -> Result<Self, crate::Error> {
        let url = raw.url().clone();
        let status_code = raw.status();
        let headers = raw.headers().clone();
        let request_id = header_string(&headers, REQUEST_ID_HEADER);
        let correlation_id = header_string(&headers, CORRELATION_ID_HEADER);

        let body = raw.text().await?;

        let inner = if status_code.is_success() {
            // Deletes and some actions answer with an empty body.
            let body = if body.trim().is_empty() { "null" } else { &body };
            Ok(serde_json::from_str(body)?)
        } else {
            Err(parse_error_body(status_code, body))
        };

        Ok(Self {
            inner,
            url,
            request_id,
            correlation_id,
            status_code,
            headers,
        })
    }
}

fn parse_error_body(status_code: StatusCode, body: String) -> ApiError {
    // Attempt to parse the error as json
    match serde_json::from_str::<ApiErrorBody>(&body) {
        | Ok(mut error_body) => {
            if error_body.errors.is_empty() {
                if let Some(message) = error_body.message.take() {
                    error_body.errors.push(ApiErrorItem {
                        code: None,
                        message: Some(message),
                        more_info: None,
                    });
                }
            }
            ApiError {
                status_code,
                errors: error_body.errors,
                trace: error_body.trace,
            }
        }
        | Err(e) => {
            warn!(
                "Response error body is not json. Error: {}. Body: {}",
                e, body
            );
            let message = if body.is_empty() {
                status_code.canonical_reason().map(ToOwned::to_owned)
            } else {
                Some(body)
            };
            ApiError {
                status_code,
                errors: vec![ApiErrorItem {
                    code: None,
                    message,
                    more_info: None,
                }],
                trace: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scc_error_envelope() {
        let body = r#"{
            "errors": [{
                "code": "not_found",
                "message": "Control library not found",
                "more_info": "https://cloud.ibm.com/docs"
            }],
            "status_code": 404,
            "trace": "9daee671-916a-4678-850b-10b9110236d3"
        }"#;

        let err = parse_error_body(StatusCode::NOT_FOUND, body.to_owned());

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), Some("Control library not found"));
        assert_eq!(err.errors()[0].code.as_deref(), Some("not_found"));
        assert_eq!(err.trace(), Some("9daee671-916a-4678-850b-10b9110236d3"));
        assert_eq!(
            err.to_string(),
            "(404 Not Found) Control library not found\n  trace: \
             9daee671-916a-4678-850b-10b9110236d3"
        );
    }

    #[test]
    fn falls_back_to_top_level_message() {
        let body = r#"{"message": "Unauthorized"}"#;
        let err = parse_error_body(StatusCode::UNAUTHORIZED, body.to_owned());
        assert_eq!(err.message(), Some("Unauthorized"));
        assert!(err.trace().is_none());
    }

    #[test]
    fn non_json_error_body_becomes_message() {
        let err = parse_error_body(
            StatusCode::BAD_GATEWAY,
            "upstream connect error".to_owned(),
        );
        assert_eq!(err.message(), Some("upstream connect error"));

        let err = parse_error_body(StatusCode::BAD_GATEWAY, String::new());
        assert_eq!(err.message(), Some("Bad Gateway"));
    }

    #[test]
    fn lists_every_error_when_many() {
        let body = r#"{"errors": [
            {"code": "bad_field", "message": "name is required"},
            {"code": "bad_field", "message": "scope is required"}
        ]}"#;
        let err = parse_error_body(StatusCode::BAD_REQUEST, body.to_owned());
        assert_eq!(
            err.to_string(),
            "(400 Bad Request)\n  - [bad_field] name is required\n  - \
             [bad_field] scope is required"
        );
    }
}
