use http::StatusCode;
use thiserror::Error;

use crate::api::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unexpected error from the http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Cannot instantiate the client without a bearer token!")]
    BearerTokenRequired,
    #[error("Cannot instantiate the client without a service instance id!")]
    InstanceIdRequired,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("No more results available")]
    NoMoreResults,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    UrlParserError(#[from] url::ParseError),
    #[error("Returned JSON does not conform to protocol: {0}")]
    ProtocolError(#[from] serde_json::Error),
}

impl Error {
    /// The HTTP status of the failed request, if the server answered.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            | Error::Api(e) => Some(e.status_code()),
            | Error::HttpClient(e) => e.status(),
            | _ => None,
        }
    }
}
