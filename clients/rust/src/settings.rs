use http::Method;
use scc_api_model::{Settings, TestEvent};

use crate::client::RequestRunner;
use crate::{Response, Result};

/// Retrieve the instance settings.
pub async fn get(client: &impl RequestRunner) -> Result<Response<Settings>> {
    let path = client.make_instance_url(&["settings"])?;
    client.run(Method::GET, path).await
}

/// Update the event notification and object storage settings. Only the
/// fields that are set are changed.
pub async fn update(
    client: &impl RequestRunner,
    settings: &Settings,
) -> Result<Response<Settings>> {
    let path = client.make_instance_url(&["settings"])?;
    client.run_with_body(Method::PATCH, path, settings).await
}

/// Send a test event to the configured Event Notifications instance.
pub async fn post_test_event(
    client: &impl RequestRunner,
) -> Result<Response<TestEvent>> {
    let path = client.make_instance_url(&["test_event"])?;
    client.run(Method::POST, path).await
}
