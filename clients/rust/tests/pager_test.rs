use anyhow::Result;
use scc_client::{
    control_libraries,
    reports,
    rules,
    scopes,
    Client,
    Condition,
    Error,
    ListControlLibrariesOptions,
    ListReportEvaluationsOptions,
    ListRulesOptions,
    ListScopesOptions,
    Operator,
    RuleType,
    ScopeProperty,
};
use serde_json::json;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RULES_PATH: &str = "/instances/inst-1/v3/rules";

fn client(server: &MockServer) -> Result<Client> {
    Ok(Client::builder()
        .base_url(server.uri())?
        .bearer_token("token".to_owned())
        .instance_id("inst-1".to_owned())
        .build()?)
}

fn rule(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "description": format!("rule {}", id),
        "type": "user_defined",
        "version": "1.0.0"
    })
}

async fn mount_two_rule_pages(server: &MockServer) {
    // Requests carrying the cursor are routed first.
    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .and(query_param("start", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "total_count": 3,
            "first": { "href": "http://x/v3/rules?limit=2" },
            "rules": [rule("r-3")]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .and(query_param_is_missing("start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 2,
            "total_count": 3,
            "first": { "href": "http://x/v3/rules?limit=2" },
            "next": {
                "href": "http://x/v3/rules?limit=2&start=tok-2",
                "start": "tok-2"
            },
            "rules": [rule("r-1"), rule("r-2")]
        })))
        .mount(server)
        .await;
}

fn ids(rules: &[scc_client::Rule]) -> Vec<&str> {
    rules.iter().filter_map(|r| r.id.as_deref()).collect()
}

#[traced_test]
#[tokio::test]
async fn all_concatenates_pages_in_order() -> Result<()> {
    let server = MockServer::start().await;
    mount_two_rule_pages(&server).await;
    let client = client(&server)?;

    let options = ListRulesOptions {
        limit: Some(2),
        ..Default::default()
    };
    let mut pager = rules::pager(&client, options)?;
    assert!(pager.has_next());

    let all = pager.all().await?;
    assert_eq!(ids(&all), vec!["r-1", "r-2", "r-3"]);
    assert!(!pager.has_next());
    assert!(logs_contain("Fetched 3 items in 2 pages"));
    Ok(())
}

#[tokio::test]
async fn next_page_matches_all() -> Result<()> {
    let server = MockServer::start().await;
    mount_two_rule_pages(&server).await;
    let client = client(&server)?;

    let mut pager = rules::pager(&client, ListRulesOptions::default())?;
    let mut stepped = Vec::new();
    while pager.has_next() {
        stepped.extend(pager.next_page().await?);
    }

    let mut pager = rules::pager(&client, ListRulesOptions::default())?;
    let all = pager.all().await?;

    assert_eq!(stepped, all);
    Ok(())
}

#[tokio::test]
async fn exhausted_pager_issues_no_request() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 50,
            "total_count": 1,
            "rules": [rule("r-1")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let mut pager = rules::pager(&client, ListRulesOptions::default())?;
    assert_eq!(pager.next_page().await?.len(), 1);
    assert!(!pager.has_next());

    let err = pager.next_page().await.unwrap_err();
    assert!(matches!(err, Error::NoMoreResults));
    Ok(())
}

#[tokio::test]
async fn empty_first_page() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "limit": 50,
            "total_count": 0,
            "first": { "href": "http://x/v3/rules" },
            "rules": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let mut pager = rules::pager(&client, ListRulesOptions::default())?;
    assert!(pager.all().await?.is_empty());
    assert!(!pager.has_next());
    Ok(())
}

#[tokio::test]
async fn empty_next_start_means_last_page() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": { "href": "http://x/v3/rules", "start": "" },
            "rules": [rule("r-1")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let mut pager = rules::pager(&client, ListRulesOptions::default())?;
    assert_eq!(pager.all().await?.len(), 1);
    assert!(!pager.has_next());
    Ok(())
}

#[traced_test]
#[tokio::test]
async fn failed_page_is_retried_with_same_cursor() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .and(query_param("start", "tok-2"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "errors": [{
                "code": "service_unavailable",
                "message": "try again later"
            }],
            "status_code": 503,
            "trace": "trace-1"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_two_rule_pages(&server).await;
    let client = client(&server)?;

    let mut pager = rules::pager(&client, ListRulesOptions::default())?;
    assert_eq!(pager.next_page().await?.len(), 2);

    let api_error = match pager.next_page().await.unwrap_err() {
        | Error::Api(e) => e,
        | other => panic!("expected an api error, got {:?}", other),
    };
    assert_eq!(api_error.status_code().as_u16(), 503);
    assert_eq!(api_error.message(), Some("try again later"));
    assert!(pager.has_next());
    assert_eq!(pager.cursor(), Some("tok-2"));

    assert_eq!(ids(&pager.next_page().await?), vec!["r-3"]);
    assert!(!pager.has_next());

    let starts: Vec<Option<String>> = server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| {
            req.url
                .query_pairs()
                .find(|(k, _)| k == "start")
                .map(|(_, v)| v.into_owned())
        })
        .collect();
    assert_eq!(
        starts,
        vec![None, Some("tok-2".to_owned()), Some("tok-2".to_owned())]
    );
    Ok(())
}

#[tokio::test]
async fn all_returns_only_the_error_on_failure() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .and(query_param("start", "tok-2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_two_rule_pages(&server).await;
    let client = client(&server)?;

    let mut pager = rules::pager(&client, ListRulesOptions::default())?;
    let err = pager.all().await.unwrap_err();
    assert_eq!(err.status_code().map(|s| s.as_u16()), Some(500));
    assert!(pager.has_next());
    Ok(())
}

#[tokio::test]
async fn seeded_cursor_is_rejected_before_any_request() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let options = ListRulesOptions {
        start: Some("tok-9".to_owned()),
        ..Default::default()
    };
    let err = rules::pager(&client, options).err();
    assert!(matches!(err, Some(Error::InvalidArgument(_))));
    Ok(())
}

#[tokio::test]
async fn filters_are_sent_on_every_page() -> Result<()> {
    let server = MockServer::start().await;
    let path_str = "/instances/inst-1/v3/control_libraries";
    Mock::given(method("GET"))
        .and(path(path_str))
        .and(query_param("start", "c-2"))
        .and(query_param("limit", "1"))
        .and(query_param("control_library_type", "custom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "control_libraries": [{ "id": "lib-2" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(path_str))
        .and(query_param("limit", "1"))
        .and(query_param("control_library_type", "custom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": { "start": "c-2" },
            "control_libraries": [{ "id": "lib-1" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let options = ListControlLibrariesOptions {
        limit: Some(1),
        control_library_type: Some(
            scc_client::ControlLibraryType::Custom,
        ),
        ..Default::default()
    };
    let mut pager = control_libraries::pager(&client, options)?;
    let libraries = pager.all().await?;
    let ids: Vec<_> =
        libraries.iter().filter_map(|l| l.id.as_deref()).collect();
    assert_eq!(ids, vec!["lib-1", "lib-2"]);
    Ok(())
}

#[tokio::test]
async fn nested_collection_pager_keeps_parent_id() -> Result<()> {
    let server = MockServer::start().await;
    let path_str = "/instances/inst-1/v3/reports/rep-1/evaluations";
    Mock::given(method("GET"))
        .and(path(path_str))
        .and(query_param("start", "e-2"))
        .and(query_param("status", "failure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "report_id": "rep-1",
            "evaluations": [{ "assessment": { "assessment_id": "a-2" } }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(path_str))
        .and(query_param("status", "failure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "report_id": "rep-1",
            "next": { "start": "e-2" },
            "evaluations": [{ "assessment": { "assessment_id": "a-1" } }]
        })))
        .mount(&server)
        .await;
    let client = client(&server)?;

    let options = ListReportEvaluationsOptions {
        report_id: "rep-1".to_owned(),
        status: Some(scc_client::EvaluationStatus::Failure),
        ..Default::default()
    };
    let mut pager = reports::evaluations_pager(&client, options)?;
    assert_eq!(pager.all().await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn rule_type_filter_uses_wire_name() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .and(query_param("type", "user_defined"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rules": []
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let options = ListRulesOptions {
        rule_type: Some(RuleType::UserDefined),
        ..Default::default()
    };
    assert!(rules::pager(&client, options)?.all().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unparseable_page_keeps_position() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .and(query_param("start", "tok-2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"rules": [{"id": 42}]}"#),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_two_rule_pages(&server).await;
    let client = client(&server)?;

    let mut pager = rules::pager(&client, ListRulesOptions::default())?;
    assert_eq!(pager.next_page().await?.len(), 2);
    assert_eq!(pager.total_count(), Some(3));

    let err = pager.next_page().await.unwrap_err();
    assert!(
        matches!(err, Error::ProtocolError(_)),
        "expected a protocol error, got {:?}",
        err
    );
    assert!(pager.has_next());
    assert_eq!(pager.cursor(), Some("tok-2"));

    assert_eq!(ids(&pager.all().await?), vec!["r-3"]);
    assert!(!pager.has_next());
    Ok(())
}

#[tokio::test]
async fn unrecognized_values_do_not_fail_the_page() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(RULES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "rules": [
                rule("r-1"),
                {
                    "id": "r-2",
                    "type": "service_defined",
                    "required_config": {
                        "property": "port",
                        "operator": "num_in_range",
                        "value": [1, 1024]
                    }
                }
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/instances/inst-1/v3/scopes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "scopes": [{
                "id": "s-1",
                "properties": [
                    { "name": "scope_id", "value": "acc-1" },
                    { "name": "parent_scope_id", "value": "ent-1" }
                ]
            }]
        })))
        .mount(&server)
        .await;
    let client = client(&server)?;

    let rules = rules::pager(&client, ListRulesOptions::default())?
        .all()
        .await?;
    assert_eq!(ids(&rules), vec!["r-1", "r-2"]);
    assert_eq!(rules[1].rule_type, Some(RuleType::Unknown));
    match rules[1].required_config {
        | Some(Condition::Base(ref base)) => {
            assert_eq!(base.operator, Operator::Unknown);
        }
        | ref other => panic!("unexpected condition {:?}", other),
    }

    let scopes = scopes::pager(&client, ListScopesOptions::default())?
        .all()
        .await?;
    let properties = scopes[0].properties.clone().unwrap_or_default();
    assert_eq!(properties[0], ScopeProperty::ScopeId("acc-1".to_owned()));
    assert_eq!(
        properties[1],
        ScopeProperty::Other {
            name: "parent_scope_id".to_owned(),
            value: json!("ent-1"),
        }
    );
    Ok(())
}
