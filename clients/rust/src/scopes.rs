use http::Method;
use scc_api_model::{
    ListScopesOptions,
    ListSubScopesOptions,
    Scope,
    ScopeCollection,
    ScopePatch,
    ScopePrototype,
    SubScopeCollection,
};

use crate::client::{append_query, required, RequestRunner};
use crate::pager::{list_request, Pager};
use crate::{Response, Result};

pub type ScopesPager<'a, R> = Pager<'a, R, ListScopesOptions>;
pub type SubScopesPager<'a, R> = Pager<'a, R, ListSubScopesOptions>;

/// Retrieve one page of scopes.
pub async fn list(
    client: &impl RequestRunner,
    options: &ListScopesOptions,
) -> Result<Response<ScopeCollection>> {
    let mut path = client.make_instance_url(&["scopes"])?;
    append_query(&mut path, "limit", options.limit);
    append_query(&mut path, "start", options.start.as_deref());
    append_query(&mut path, "name", options.name.as_deref());
    append_query(&mut path, "description", options.description.as_deref());
    append_query(&mut path, "environment", options.environment.as_deref());

    client.run(Method::GET, path).await
}

list_request!(ListScopesOptions, ScopeCollection, list);

/// Page through every scope matching `options`.
pub fn pager<R: RequestRunner>(
    client: &R,
    options: ListScopesOptions,
) -> Result<ScopesPager<'_, R>> {
    Pager::new(client, options)
}

pub async fn create(
    client: &impl RequestRunner,
    scope: &ScopePrototype,
) -> Result<Response<Scope>> {
    let path = client.make_instance_url(&["scopes"])?;
    client.run_with_body(Method::POST, path, scope).await
}

pub async fn get<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<Scope>>
where
    T: AsRef<str>,
{
    let id = required("scope_id", id.as_ref())?;
    let path = client.make_instance_url(&["scopes", id])?;
    client.run(Method::GET, path).await
}

/// Change the name or description of a scope.
pub async fn update<T>(
    client: &impl RequestRunner,
    id: T,
    patch: &ScopePatch,
) -> Result<Response<Scope>>
where
    T: AsRef<str>,
{
    let id = required("scope_id", id.as_ref())?;
    let path = client.make_instance_url(&["scopes", id])?;
    client.run_with_body(Method::PATCH, path, patch).await
}

pub async fn delete<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<()>>
where
    T: AsRef<str>,
{
    let id = required("scope_id", id.as_ref())?;
    let path = client.make_instance_url(&["scopes", id])?;
    client.run(Method::DELETE, path).await
}

/// Retrieve one page of the sub-scopes of a scope.
pub async fn list_subscopes(
    client: &impl RequestRunner,
    options: &ListSubScopesOptions,
) -> Result<Response<SubScopeCollection>> {
    let scope_id = required("scope_id", &options.scope_id)?;
    let mut path =
        client.make_instance_url(&["scopes", scope_id, "subscopes"])?;
    append_query(&mut path, "limit", options.limit);
    append_query(&mut path, "start", options.start.as_deref());

    client.run(Method::GET, path).await
}

list_request!(ListSubScopesOptions, SubScopeCollection, list_subscopes);

/// Page through every sub-scope of a scope.
pub fn subscopes_pager<R: RequestRunner>(
    client: &R,
    options: ListSubScopesOptions,
) -> Result<SubScopesPager<'_, R>> {
    Pager::new(client, options)
}
