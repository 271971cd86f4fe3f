use anyhow::Result;
use scc_client::{
    attachments,
    control_libraries,
    provider_types,
    reports,
    rules,
    scans,
    scopes,
    settings,
    Client,
    Condition,
    ConditionBase,
    Error,
    ObjectStorage,
    Operator,
    RulePrototype,
    ScopePatch,
    Settings,
    Target,
};
use serde_json::json;
use tracing_test::traced_test;
use wiremock::matchers::{
    body_json,
    header,
    header_exists,
    method,
    path,
    query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "/instances/inst-1/v3";

fn client(server: &MockServer) -> Result<Client> {
    Ok(Client::builder()
        .base_url(server.uri())?
        .bearer_token("token".to_owned())
        .instance_id("inst-1".to_owned())
        .correlation_id("corr-1".to_owned())
        .build()?)
}

#[traced_test]
#[tokio::test]
async fn every_request_carries_auth_and_tracing_headers() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/control_libraries/lib-1", BASE)))
        .and(header("authorization", "Bearer token"))
        .and(header("accept", "application/json"))
        .and(header("x-correlation-id", "corr-1"))
        .and(header_exists("user-agent"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "req-1")
                .set_body_json(json!({
                    "id": "lib-1",
                    "control_library_name": "IBM Cloud Framework",
                    "control_library_type": "predefined"
                })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let resp = control_libraries::get(&client, "lib-1").await?;
    assert_eq!(resp.request_id().as_deref(), Some("req-1"));
    let library = resp.into_inner()?;
    assert_eq!(
        library.control_library_name.as_deref(),
        Some("IBM Cloud Framework")
    );
    Ok(())
}

#[tokio::test]
async fn not_found_surfaces_api_error() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/profiles/missing", BASE)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "code": "not_found", "message": "Profile not found" }],
            "status_code": 404,
            "trace": "t-404"
        })))
        .mount(&server)
        .await;
    let client = client(&server)?;

    let resp = scc_client::profiles::get(&client, "missing").await?;
    assert!(resp.is_err());
    let err = resp.into_inner().unwrap_err();
    assert_eq!(err.status_code().as_u16(), 404);
    assert_eq!(err.message(), Some("Profile not found"));
    assert_eq!(err.trace(), Some("t-404"));
    Ok(())
}

#[tokio::test]
async fn empty_identifiers_fail_without_io() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let err = rules::get(&client, "").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let err = attachments::get(&client, "prof-1", "").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let err = reports::rule(&client, "", "rule-1").await.unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    Ok(())
}

#[tokio::test]
async fn replace_rule_sends_if_match() -> Result<()> {
    let server = MockServer::start().await;
    let rule_path = format!("{}/rules/rule-1", BASE);
    Mock::given(method("GET"))
        .and(path(rule_path.clone()))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("etag", "W/\"abc\"")
                .set_body_json(json!({ "id": "rule-1", "version": "1.0.0" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(rule_path))
        .and(header("if-match", "W/\"abc\""))
        .and(body_json(json!({
            "description": "Buckets must be encrypted",
            "version": "1.0.1",
            "target": { "service_name": "cloud-object-storage" },
            "required_config": {
                "property": "encryption.enabled",
                "operator": "is_true"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rule-1",
            "version": "1.0.1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let current = rules::get(&client, "rule-1").await?;
    let etag = current.etag().unwrap_or_default().to_owned();
    assert_eq!(etag, "W/\"abc\"");

    let prototype = RulePrototype {
        description: "Buckets must be encrypted".to_owned(),
        version: Some("1.0.1".to_owned()),
        import: None,
        target: Target {
            service_name: Some("cloud-object-storage".to_owned()),
            ..Default::default()
        },
        required_config: Condition::Base(ConditionBase {
            description: None,
            property: "encryption.enabled".to_owned(),
            operator: Operator::IsTrue,
            value: None,
        }),
        labels: None,
    };
    let updated =
        rules::replace(&client, "rule-1", &etag, &prototype).await?;
    assert_eq!(updated.into_inner()?.version.as_deref(), Some("1.0.1"));
    Ok(())
}

#[tokio::test]
async fn delete_accepts_empty_body() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/scopes/scope-1", BASE)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let resp = scopes::delete(&client, "scope-1").await?;
    assert_eq!(resp.status_code().as_u16(), 204);
    resp.into_inner()?;
    Ok(())
}

#[tokio::test]
async fn update_settings_patches_only_set_fields() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{}/settings", BASE)))
        .and(body_json(json!({
            "object_storage": { "bucket": "scc-results" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object_storage": {
                "bucket": "scc-results",
                "bucket_location": "us-south"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let patch = Settings {
        object_storage: Some(ObjectStorage {
            bucket: Some("scc-results".to_owned()),
            ..Default::default()
        }),
        ..Default::default()
    };
    let settings = settings::update(&client, &patch).await?.into_inner()?;
    let location = settings
        .object_storage
        .and_then(|o| o.bucket_location)
        .unwrap_or_default();
    assert_eq!(location, "us-south");
    Ok(())
}

#[tokio::test]
async fn create_scan_posts_attachment_id() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/scans", BASE)))
        .and(body_json(json!({ "attachment_id": "att-1" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "scan-1",
            "attachment_id": "att-1",
            "status": "in_progress"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let scan = scans::create(&client, "att-1").await?.into_inner()?;
    assert_eq!(scan.id.as_deref(), Some("scan-1"));
    Ok(())
}

#[tokio::test]
async fn update_scope_uses_patch() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("{}/scopes/scope-1", BASE)))
        .and(body_json(json!({ "name": "production" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "scope-1",
            "name": "production"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let patch = ScopePatch {
        name: Some("production".to_owned()),
        description: None,
    };
    let scope = scopes::update(&client, "scope-1", &patch)
        .await?
        .into_inner()?;
    assert_eq!(scope.name.as_deref(), Some("production"));
    Ok(())
}

#[tokio::test]
async fn violations_drift_passes_duration() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/reports/rep-1/violations_drift", BASE)))
        .and(query_param("scan_time_duration", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "report_id": "rep-1",
            "data_points": [
                { "report_id": "rep-0", "controls": { "not_compliant_count": 3 } },
                { "report_id": "rep-1", "controls": { "not_compliant_count": 1 } }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let drift = reports::violations_drift(&client, "rep-1", Some(30))
        .await?
        .into_inner()?;
    assert_eq!(drift.data_points.len(), 2);
    Ok(())
}

#[tokio::test]
async fn provider_type_instances_are_nested() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "{}/provider_types/pt-1/provider_type_instances",
            BASE
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "provider_type_instances": [
                { "id": "pti-1", "type": "workload-protection", "name": "wp" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!(
            "{}/provider_types/pt-1/provider_type_instances/pti-1",
            BASE
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = client(&server)?;

    let instances = provider_types::list_instances(&client, "pt-1")
        .await?
        .into_inner()?;
    assert_eq!(
        instances.provider_type_instances[0].instance_type.as_deref(),
        Some("workload-protection")
    );
    provider_types::delete_instance(&client, "pt-1", "pti-1")
        .await?
        .into_inner()?;
    Ok(())
}
