use http::Method;
use scc_api_model::{
    ProviderType,
    ProviderTypeCollection,
    ProviderTypeInstance,
    ProviderTypeInstanceCollection,
    ProviderTypeInstancePatch,
    ProviderTypeInstancePrototype,
};

use crate::client::{required, RequestRunner};
use crate::{Response, Result};

/// Retrieve every provider type. This collection is not paginated.
pub async fn list(
    client: &impl RequestRunner,
) -> Result<Response<ProviderTypeCollection>> {
    let path = client.make_instance_url(&["provider_types"])?;
    client.run(Method::GET, path).await
}

pub async fn get<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<ProviderType>>
where
    T: AsRef<str>,
{
    let id = required("provider_type_id", id.as_ref())?;
    let path = client.make_instance_url(&["provider_types", id])?;
    client.run(Method::GET, path).await
}

pub async fn list_instances<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<ProviderTypeInstanceCollection>>
where
    T: AsRef<str>,
{
    let id = required("provider_type_id", id.as_ref())?;
    let path = client.make_instance_url(&[
        "provider_types",
        id,
        "provider_type_instances",
    ])?;
    client.run(Method::GET, path).await
}

pub async fn create_instance<T>(
    client: &impl RequestRunner,
    id: T,
    instance: &ProviderTypeInstancePrototype,
) -> Result<Response<ProviderTypeInstance>>
where
    T: AsRef<str>,
{
    let id = required("provider_type_id", id.as_ref())?;
    let path = client.make_instance_url(&[
        "provider_types",
        id,
        "provider_type_instances",
    ])?;
    client.run_with_body(Method::POST, path, instance).await
}

pub async fn get_instance<T, U>(
    client: &impl RequestRunner,
    id: T,
    instance_id: U,
) -> Result<Response<ProviderTypeInstance>>
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let id = required("provider_type_id", id.as_ref())?;
    let instance_id =
        required("provider_type_instance_id", instance_id.as_ref())?;
    let path = client.make_instance_url(&[
        "provider_types",
        id,
        "provider_type_instances",
        instance_id,
    ])?;
    client.run(Method::GET, path).await
}

pub async fn update_instance<T, U>(
    client: &impl RequestRunner,
    id: T,
    instance_id: U,
    patch: &ProviderTypeInstancePatch,
) -> Result<Response<ProviderTypeInstance>>
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let id = required("provider_type_id", id.as_ref())?;
    let instance_id =
        required("provider_type_instance_id", instance_id.as_ref())?;
    let path = client.make_instance_url(&[
        "provider_types",
        id,
        "provider_type_instances",
        instance_id,
    ])?;
    client.run_with_body(Method::PATCH, path, patch).await
}

pub async fn delete_instance<T, U>(
    client: &impl RequestRunner,
    id: T,
    instance_id: U,
) -> Result<Response<()>>
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let id = required("provider_type_id", id.as_ref())?;
    let instance_id =
        required("provider_type_instance_id", instance_id.as_ref())?;
    let path = client.make_instance_url(&[
        "provider_types",
        id,
        "provider_type_instances",
        instance_id,
    ])?;
    client.run(Method::DELETE, path).await
}
