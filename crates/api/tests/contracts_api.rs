//! HTTP-level tests for the request contracts: record actions, bulk
//! identifier lists, relationship changes, pagination and plain objects.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, send_team};
use serde_json::json;

const PAGES: &str = "/v1/team/assets/pages";

// ---------------------------------------------------------------------------
// Record actions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn page_action_routes_to_single_record_handler() {
    let uri = format!("{PAGES}/records/PG1/action");
    let body = json!({ "action": "archive" });

    let response = send_team(common::build_test_app(), Method::PATCH, &uri, "USR1", Some(body)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["route"], "v1.team.assets.pages.records.action");
    assert_eq!(json["data"]["params"]["page"], "PG1");
    assert_eq!(json["data"]["input"]["action"], "archive");
}

#[tokio::test]
async fn unknown_action_is_rejected() {
    let uri = format!("{PAGES}/records/PG1/action");
    let body = json!({ "action": "delete" });

    let response = send_team(common::build_test_app(), Method::PATCH, &uri, "USR1", Some(body)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Bulk operations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bulk_archive_is_distinct_from_single_action() {
    let uri = format!("{PAGES}/manage/archive");
    let body = json!({ "ids": [" PG1", "PG2", "PG1"] });

    let response = send_team(common::build_test_app(), Method::POST, &uri, "USR1", Some(body)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["route"], "v1.team.assets.pages.manage.archive");
    assert_eq!(json["data"]["input"]["ids"], json!(["PG1", "PG2"]));
}

#[tokio::test]
async fn bulk_with_empty_ids_is_422() {
    let uri = format!("{PAGES}/manage/destroy");

    let response = send_team(
        common::build_test_app(),
        Method::DELETE,
        &uri,
        "USR1",
        Some(json!({ "ids": [] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn bulk_with_too_many_ids_is_422() {
    let ids: Vec<String> = (0..501).map(|i| format!("PG{i}")).collect();

    let response = send_team(
        common::build_test_app(),
        Method::POST,
        "/v1/team/assets/products/manage/restore",
        "USR1",
        Some(json!({ "ids": ids })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn bulk_with_blank_id_is_422() {
    let response = send_team(
        common::build_test_app(),
        Method::POST,
        "/v1/team/assets/agent-groups/records/AGG1/agents/manage/attach",
        "USR1",
        Some(json!({ "ids": ["AGT1", "  "] })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "ids[1] must not be blank");
}

#[tokio::test]
async fn bulk_without_body_is_400() {
    let response = send_team(
        common::build_test_app(),
        Method::DELETE,
        "/v1/team/members/manage/detach",
        "USR1",
        None,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Relationship changes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn product_change_requires_a_product() {
    let uri = format!("{PAGES}/records/PG1/product/change");

    let response = send_team(
        common::build_test_app(),
        Method::PATCH,
        &uri,
        "USR1",
        Some(json!({ "product_id": null })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "product_id must not be null");
}

#[tokio::test]
async fn product_change_accepts_an_identifier() {
    let uri = format!("{PAGES}/records/PG1/product/change");

    let response = send_team(
        common::build_test_app(),
        Method::PATCH,
        &uri,
        "USR1",
        Some(json!({ "product_id": "TPD123qweasd" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["route"], "v1.team.assets.pages.records.product.change");
    assert_eq!(json["data"]["input"]["product_id"], "TPD123qweasd");
}

#[tokio::test]
async fn agent_group_change_accepts_null_to_detach() {
    let uri = format!("{PAGES}/records/PG1/agent-group/change");

    let response = send_team(
        common::build_test_app(),
        Method::PATCH,
        &uri,
        "USR1",
        Some(json!({ "agent_group_id": null })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["route"],
        "v1.team.assets.pages.records.agentGroup.change"
    );
    let input = json["data"]["input"].as_object().unwrap();
    assert!(input.contains_key("agent_group_id"));
    assert!(input["agent_group_id"].is_null());
}

#[tokio::test]
async fn change_without_field_is_422() {
    let uri = format!("{PAGES}/records/PG1/agent-group/change");

    let response = send_team(
        common::build_test_app(),
        Method::PATCH,
        &uri,
        "USR1",
        Some(json!({})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_defaults_pagination() {
    let uri = format!("{PAGES}/records");

    let response = send_team(common::build_test_app(), Method::GET, &uri, "USR1", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["route"], "v1.team.assets.pages.records.list");
    assert_eq!(json["data"]["pagination"], json!({ "page": 1, "per_page": 15 }));
}

#[tokio::test]
async fn list_clamps_pagination() {
    let uri = format!("{PAGES}/records?page=0&per_page=1000");

    let response = send_team(common::build_test_app(), Method::GET, &uri, "USR1", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["pagination"], json!({ "page": 1, "per_page": 100 }));
}

#[tokio::test]
async fn list_with_malformed_pagination_is_400() {
    let uri = format!("{PAGES}/records?per_page=lots");

    let response = send_team(common::build_test_app(), Method::GET, &uri, "USR1", None).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn simple_index_has_no_pagination() {
    let response = send_team(common::build_test_app(), Method::GET, PAGES, "USR1", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["route"], "v1.team.assets.pages.index");
    assert!(json["data"].get("pagination").is_none());
}

// ---------------------------------------------------------------------------
// Plain objects and verbs
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_echoes_object_body() {
    let uri = format!("{PAGES}/records");
    let body = json!({ "name": "Spring sale" });

    let response = send_team(common::build_test_app(), Method::POST, &uri, "USR1", Some(body)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["route"], "v1.team.assets.pages.records.create");
    assert_eq!(json["data"]["input"]["name"], "Spring sale");
}

#[tokio::test]
async fn non_object_body_is_400() {
    let uri = format!("{PAGES}/records");

    let response = send_team(
        common::build_test_app(),
        Method::POST,
        &uri,
        "USR1",
        Some(json!(["not", "an", "object"])),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_verb_is_405() {
    let uri = format!("{PAGES}/manage/archive");

    let response = send_team(common::build_test_app(), Method::GET, &uri, "USR1", None).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn warehouse_attach_shares_path_with_list() {
    let uri = "/v1/team/assets/warehouses/records/WH1/products/records";

    let list = send_team(common::build_test_app(), Method::GET, uri, "USR1", None).await;
    assert_eq!(list.status(), StatusCode::OK);
    let json = body_json(list).await;
    assert_eq!(
        json["data"]["route"],
        "v1.team.assets.warehouses.records.products.records.list"
    );

    let attach = send_team(
        common::build_test_app(),
        Method::POST,
        uri,
        "USR1",
        Some(json!({ "ids": ["TPD1"] })),
    )
    .await;
    assert_eq!(attach.status(), StatusCode::OK);
    let json = body_json(attach).await;
    assert_eq!(
        json["data"]["route"],
        "v1.team.assets.warehouses.records.products.records.attach"
    );
    assert_eq!(json["data"]["params"]["warehouse"], "WH1");
}
