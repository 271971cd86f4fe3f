use std::fmt::Display;
use std::time::Duration;

use async_trait::async_trait;
use http::header::ACCEPT;
use http::Method;
use reqwest::{IntoUrl, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::log::info;
use url::Url;

use crate::constants::{
    BASE_URL_ENV,
    CORRELATION_ID_HEADER,
    DEFAULT_BASE_URL,
    USER_AGENT,
};
use crate::{Error, Response, Result};

/// An asynchronous client for a Security and Compliance Center instance.
///
/// The client has various configuration options, but has reasonable defaults
/// that should suit most use-cases. To configure a client, use
/// [`Client::builder()`] or [`ClientBuilder::new()`]
///
/// a `Client` manages an internal connection pool, it's designed to be created
/// once and reused (via `Client::clone()`). You do **not** need to wrap
/// `Client` in [`Rc`] or [`Arc`] to reuse it.
///
/// [`Rc`]: std::rc::Rc
/// [`Arc`]: std::sync::Arc
#[derive(Clone)]
pub struct Client {
    http_client: reqwest::Client,
    config: ClientConfig,
}

/// A `ClientBuilder` is what should be used to construct a `Client` with custom
/// configuration.
///
/// We default to the `us-south` region `https://us-south.compliance.cloud.ibm.com`
/// unless `SCC_BASE_URL` environment variable is defined. Alternatively, the
/// `base_url` can be used to override the server url for this particular
/// client instance.
#[must_use]
#[derive(Default, Clone)]
pub struct ClientBuilder {
    config: Config,
}

impl ClientBuilder {
    /// Construct a new client builder with reasonable defaults. Use
    /// [`ClientBuilder::build`] to construct a client.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn base_url<T: IntoUrl>(mut self, base_url: T) -> Result<Self> {
        let mut base_url = base_url.into_url()?;
        // We want to make sure that the query string is empty.
        base_url.set_query(None);
        self.config.base_url = Some(base_url);
        Ok(self)
    }

    /// IAM access token sent as `Authorization: Bearer <token>`.
    pub fn bearer_token(mut self, bearer_token: String) -> Self {
        self.config.bearer_token = Some(bearer_token);
        self
    }

    /// The Security and Compliance Center service instance all requests are
    /// scoped to.
    pub fn instance_id(mut self, instance_id: String) -> Self {
        self.config.instance_id = Some(instance_id);
        self
    }

    /// Sent as `X-Correlation-Id` on every request.
    pub fn correlation_id(mut self, correlation_id: String) -> Self {
        self.config.correlation_id = Some(correlation_id);
        self
    }

    /// Request timeout. Ignored when a pre-configured reqwest client is
    /// supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Construct the client.
    pub fn build(self) -> Result<Client> {
        let bearer_token = self
            .config
            .bearer_token
            .filter(|t| !t.is_empty())
            .ok_or(Error::BearerTokenRequired)?;
        let instance_id = self
            .config
            .instance_id
            .filter(|i| !i.is_empty())
            .ok_or(Error::InstanceIdRequired)?;

        let http_client = match self.config.reqwest_client {
            | Some(c) => c,
            | None => {
                let mut builder = reqwest::ClientBuilder::new()
                    .user_agent(USER_AGENT)
                    .redirect(reqwest::redirect::Policy::none());
                if let Some(timeout) = self.config.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        let base_url = match self.config.base_url {
            | Some(c) => c,
            | None => {
                // Attempt to read from environment variable before fallback
                // to default.
                match std::env::var(BASE_URL_ENV) {
                    | Ok(base_url) => Url::parse(&base_url)?,
                    | Err(_) => DEFAULT_BASE_URL.clone(),
                }
            }
        };

        Ok(Client {
            http_client,
            config: ClientConfig {
                base_url,
                bearer_token,
                instance_id,
                correlation_id: self.config.correlation_id,
            },
        })
    }

    /// Use a pre-configured [`reqwest::Client`] instance instead of creating
    /// our own. This allows customising TLS, timeout, and other low-level http
    /// client configuration options.
    pub fn reqwest_client(mut self, c: reqwest::Client) -> Self {
        self.config.reqwest_client = Some(c);
        self
    }
}

impl Client {
    /// Creates a `ClientBuilder` to configure a `Client`.
    ///
    /// This is the same as `ClientBuilder::new()`.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }
}

/// The transport seam every resource module goes through.
///
/// [`Client`] is the production implementation. Anything that can build urls
/// and turn a prepared request into a [`Response`] can stand in for it.
#[async_trait]
pub trait RequestRunner: Sync + Send {
    fn make_url(&self, path: &str) -> Result<Url>;

    fn instance_id(&self) -> &str;

    fn prepare_request(
        &self,
        method: Method,
        url: Url,
    ) -> Result<RequestBuilder>;

    async fn process_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send;

    /// Builds `<base>/instances/<instance_id>/v3/<segments...>`. Every
    /// segment is percent-encoded.
    fn make_instance_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.make_url("")?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidArgument(format!(
                "base url '{}' cannot carry a path",
                url
            )));
        }
        url.path_segments_mut()
            .map_err(|_| {
                Error::InvalidArgument("base url cannot carry a path".into())
            })?
            .pop_if_empty()
            .extend(["instances", self.instance_id(), "v3"])
            .extend(segments);
        Ok(url)
    }

    async fn execute<T>(&self, request: RequestBuilder) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        let response = request.send().await?;
        self.process_response(response).await
    }

    async fn run<T>(&self, method: Method, url: Url) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        info!("Sending a request '{} {}'", method, url);
        let request = self.prepare_request(method, url)?;
        self.execute(request).await
    }

    async fn run_with_body<T, B>(
        &self,
        method: Method,
        url: Url,
        body: B,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + std::fmt::Debug + Send + Sync,
    {
        info!("Sending a request '{} {}': {:?}", method, url, body);
        let request = self.prepare_request(method, url)?.json(&body);
        self.execute(request).await
    }
}

#[async_trait]
impl RequestRunner for Client {
    fn make_url(&self, path: &str) -> Result<Url> {
        Ok(self.config.base_url.join(path)?)
    }

    fn instance_id(&self) -> &str {
        &self.config.instance_id
    }

    fn prepare_request(
        &self,
        method: Method,
        url: Url,
    ) -> Result<RequestBuilder> {
        let mut request = self
            .http_client
            .request(method, url)
            .bearer_auth(&self.config.bearer_token)
            .header(ACCEPT, "application/json");
        if let Some(ref correlation_id) = self.config.correlation_id {
            request = request.header(CORRELATION_ID_HEADER, correlation_id);
        }
        Ok(request)
    }

    async fn process_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        Response::from_raw_response(response).await
    }
}

/// Rejects empty path identifiers before they turn into a malformed url.
pub(crate) fn required<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "`{}` must not be empty",
            name
        )));
    }
    Ok(value)
}

/// Appends `key=value` to the query string when the value is present.
pub(crate) fn append_query<V: Display>(
    url: &mut Url,
    key: &str,
    value: Option<V>,
) {
    if let Some(value) = value {
        url.query_pairs_mut().append_pair(key, &value.to_string());
    }
}

#[derive(Default, Clone)]
struct Config {
    base_url: Option<Url>,
    bearer_token: Option<String>,
    instance_id: Option<String>,
    correlation_id: Option<String>,
    timeout: Option<Duration>,
    reqwest_client: Option<reqwest::Client>,
}

#[derive(Clone)]
struct ClientConfig {
    base_url: Url,
    bearer_token: String,
    instance_id: String,
    correlation_id: Option<String>,
}

// Ensure that Client is Send + Sync. Compiler will fail if it's not.
const _: () = {
    fn assert_send<T: Send + Sync>() {}
    let _ = assert_send::<Client>;
};
