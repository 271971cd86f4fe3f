use http::Method;
use scc_api_model::{
    ListProfilesOptions,
    Profile,
    ProfileCollection,
    ProfilePrototype,
};

use crate::client::{append_query, required, RequestRunner};
use crate::pager::{list_request, Pager};
use crate::{Response, Result};

pub type ProfilesPager<'a, R> = Pager<'a, R, ListProfilesOptions>;

/// Retrieve one page of profiles.
pub async fn list(
    client: &impl RequestRunner,
    options: &ListProfilesOptions,
) -> Result<Response<ProfileCollection>> {
    let mut path = client.make_instance_url(&["profiles"])?;
    append_query(&mut path, "limit", options.limit);
    append_query(&mut path, "start", options.start.as_deref());
    append_query(&mut path, "profile_type", options.profile_type);

    client.run(Method::GET, path).await
}

list_request!(ListProfilesOptions, ProfileCollection, list);

/// Page through every profile matching `options`.
pub fn pager<R: RequestRunner>(
    client: &R,
    options: ListProfilesOptions,
) -> Result<ProfilesPager<'_, R>> {
    Pager::new(client, options)
}

/// Create a custom profile.
pub async fn create(
    client: &impl RequestRunner,
    profile: &ProfilePrototype,
) -> Result<Response<Profile>> {
    let path = client.make_instance_url(&["profiles"])?;
    client.run_with_body(Method::POST, path, profile).await
}

/// Retrieve a profile by id.
pub async fn get<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<Profile>>
where
    T: AsRef<str>,
{
    let id = required("profile_id", id.as_ref())?;
    let path = client.make_instance_url(&["profiles", id])?;
    client.run(Method::GET, path).await
}

/// Replace a custom profile.
pub async fn replace<T>(
    client: &impl RequestRunner,
    id: T,
    profile: &ProfilePrototype,
) -> Result<Response<Profile>>
where
    T: AsRef<str>,
{
    let id = required("profile_id", id.as_ref())?;
    let path = client.make_instance_url(&["profiles", id])?;
    client.run_with_body(Method::PUT, path, profile).await
}

/// Delete a custom profile.
pub async fn delete<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<Profile>>
where
    T: AsRef<str>,
{
    let id = required("profile_id", id.as_ref())?;
    let path = client.make_instance_url(&["profiles", id])?;
    client.run(Method::DELETE, path).await
}
