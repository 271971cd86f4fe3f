use async_trait::async_trait;
use reqwest::RequestBuilder;
use scc_client::client::RequestRunner;
use scc_client::{Client, Response, Result};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

/// The library client with CLI specific request decoration and diagnostics.
pub struct WrappedClient {
    pub inner: Client,
}

#[async_trait]
impl RequestRunner for WrappedClient {
    fn make_url(&self, path: &str) -> Result<Url> {
        self.inner.make_url(path)
    }

    fn instance_id(&self) -> &str {
        self.inner.instance_id()
    }

    fn prepare_request(
        &self,
        method: http::Method,
        url: Url,
    ) -> Result<RequestBuilder> {
        let request = self.inner.prepare_request(method, url);
        // Identify the CLI, its version and platform to the service.
        let custom_user_agent = format!(
            "scc-cli-{}-{}-{}",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH,
        );
        let request = request
            .map(|r| r.header(reqwest::header::USER_AGENT, custom_user_agent));
        debug!(?request);
        request
    }

    async fn process_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
    {
        debug!(?response);
        let response = self.inner.process_response(response).await?;
        match response.status_code() {
            | http::StatusCode::UNAUTHORIZED => {
                eprintln!();
                eprintln!(
                    "The bearer token appears to be rejected by the server. \
                     IAM access tokens expire after an hour, try fetching a \
                     fresh one."
                );
            }
            | http::StatusCode::FORBIDDEN => {
                eprintln!();
                eprintln!(
                    "Access denied. Check that the token has access to \
                     instance '{}'.",
                    self.inner.instance_id()
                );
            }
            | _ => {}
        }
        Ok(response)
    }
}
