use http::Method;
use scc_api_model::{Scan, ScanPrototype};

use crate::client::{required, RequestRunner};
use crate::{Response, Result};

/// Start an on-demand scan of an attachment.
pub async fn create<T>(
    client: &impl RequestRunner,
    attachment_id: T,
) -> Result<Response<Scan>>
where
    T: AsRef<str>,
{
    let attachment_id = required("attachment_id", attachment_id.as_ref())?;
    let path = client.make_instance_url(&["scans"])?;

    let body = ScanPrototype {
        attachment_id: attachment_id.to_owned(),
    };

    client.run_with_body(Method::POST, path, body).await
}
