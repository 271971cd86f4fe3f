use http::Method;
use scc_api_model::{
    ControlLibrary,
    ControlLibraryCollection,
    ControlLibraryDelete,
    ControlLibraryPrototype,
    ListControlLibrariesOptions,
};

use crate::client::{append_query, required, RequestRunner};
use crate::pager::{list_request, Pager};
use crate::{Response, Result};

pub type ControlLibrariesPager<'a, R> =
    Pager<'a, R, ListControlLibrariesOptions>;

/// Retrieve one page of control libraries.
pub async fn list(
    client: &impl RequestRunner,
    options: &ListControlLibrariesOptions,
) -> Result<Response<ControlLibraryCollection>> {
    let mut path = client.make_instance_url(&["control_libraries"])?;
    append_query(&mut path, "limit", options.limit);
    append_query(&mut path, "start", options.start.as_deref());
    append_query(
        &mut path,
        "control_library_type",
        options.control_library_type,
    );

    client.run(Method::GET, path).await
}

list_request!(ListControlLibrariesOptions, ControlLibraryCollection, list);

/// Page through every control library matching `options`.
pub fn pager<R: RequestRunner>(
    client: &R,
    options: ListControlLibrariesOptions,
) -> Result<ControlLibrariesPager<'_, R>> {
    Pager::new(client, options)
}

/// Create a custom control library.
pub async fn create(
    client: &impl RequestRunner,
    library: &ControlLibraryPrototype,
) -> Result<Response<ControlLibrary>> {
    let path = client.make_instance_url(&["control_libraries"])?;
    client.run_with_body(Method::POST, path, library).await
}

/// Retrieve a control library by id.
pub async fn get<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<ControlLibrary>>
where
    T: AsRef<str>,
{
    let id = required("control_library_id", id.as_ref())?;
    let path = client.make_instance_url(&["control_libraries", id])?;
    client.run(Method::GET, path).await
}

/// Replace a custom control library.
pub async fn replace<T>(
    client: &impl RequestRunner,
    id: T,
    library: &ControlLibraryPrototype,
) -> Result<Response<ControlLibrary>>
where
    T: AsRef<str>,
{
    let id = required("control_library_id", id.as_ref())?;
    let path = client.make_instance_url(&["control_libraries", id])?;
    client.run_with_body(Method::PUT, path, library).await
}

/// Delete a custom control library. Predefined libraries cannot be deleted.
pub async fn delete<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<ControlLibraryDelete>>
where
    T: AsRef<str>,
{
    let id = required("control_library_id", id.as_ref())?;
    let path = client.make_instance_url(&["control_libraries", id])?;
    client.run(Method::DELETE, path).await
}
