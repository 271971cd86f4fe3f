use http::header::IF_MATCH;
use http::Method;
use scc_api_model::{ListRulesOptions, Rule, RuleCollection, RulePrototype};
use tracing::log::info;

use crate::client::{append_query, required, RequestRunner};
use crate::pager::{list_request, Pager};
use crate::{Response, Result};

pub type RulesPager<'a, R> = Pager<'a, R, ListRulesOptions>;

/// Retrieve one page of rules.
pub async fn list(
    client: &impl RequestRunner,
    options: &ListRulesOptions,
) -> Result<Response<RuleCollection>> {
    let mut path = client.make_instance_url(&["rules"])?;
    append_query(&mut path, "limit", options.limit);
    append_query(&mut path, "start", options.start.as_deref());
    append_query(&mut path, "type", options.rule_type);
    append_query(&mut path, "search", options.search.as_deref());
    append_query(&mut path, "service_name", options.service_name.as_deref());
    append_query(&mut path, "sort", options.sort.as_deref());

    client.run(Method::GET, path).await
}

list_request!(ListRulesOptions, RuleCollection, list);

/// Page through every rule matching `options`.
pub fn pager<R: RequestRunner>(
    client: &R,
    options: ListRulesOptions,
) -> Result<RulesPager<'_, R>> {
    Pager::new(client, options)
}

/// Create a user-defined rule.
pub async fn create(
    client: &impl RequestRunner,
    rule: &RulePrototype,
) -> Result<Response<Rule>> {
    let path = client.make_instance_url(&["rules"])?;
    client.run_with_body(Method::POST, path, rule).await
}

/// Retrieve a rule by id. The response carries the `ETag` that
/// [`replace`] expects.
pub async fn get<T>(client: &impl RequestRunner, id: T) -> Result<Response<Rule>>
where
    T: AsRef<str>,
{
    let id = required("rule_id", id.as_ref())?;
    let path = client.make_instance_url(&["rules", id])?;
    client.run(Method::GET, path).await
}

/// Replace a user-defined rule. `etag` must be the value returned by the
/// last read of the rule.
pub async fn replace<T, E>(
    client: &impl RequestRunner,
    id: T,
    etag: E,
    rule: &RulePrototype,
) -> Result<Response<Rule>>
where
    T: AsRef<str>,
    E: AsRef<str>,
{
    let id = required("rule_id", id.as_ref())?;
    let etag = required("etag", etag.as_ref())?;
    let path = client.make_instance_url(&["rules", id])?;

    info!("Sending a request 'PUT {}': {:?}", path, rule);
    let request = client
        .prepare_request(Method::PUT, path)?
        .header(IF_MATCH, etag)
        .json(rule);
    client.execute(request).await
}

/// Delete a user-defined rule.
pub async fn delete<T>(
    client: &impl RequestRunner,
    id: T,
) -> Result<Response<()>>
where
    T: AsRef<str>,
{
    let id = required("rule_id", id.as_ref())?;
    let path = client.make_instance_url(&["rules", id])?;
    client.run(Method::DELETE, path).await
}
