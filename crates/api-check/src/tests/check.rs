#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;

use crate::error::ErrorResponse;
use crate::models::ExecuteCheckResponse;
use crate::test_server::run_test_server;
use crate::tests::common::{DialectFactory, FailingFactory, doris_instance};
use core_instance::store::{InstanceStore, MemoryInstanceStore};

#[tokio::test]
async fn execute_check_reviews_statements() {
    let store = Arc::new(MemoryInstanceStore::new());
    let instance = store
        .create_instance(doris_instance("fe-1"))
        .await
        .unwrap();
    let addr = run_test_server(store, Arc::new(DialectFactory)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/v1/execute-check"))
        .json(&json!({
            "instance_id": instance.id,
            "db_name": "orders",
            "full_sql": "insert into t1 (a) values (1); select a from t1",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<ExecuteCheckResponse>().await.unwrap();
    assert!(body.checked);
    assert!(!body.is_execute);
    assert_eq!(body.error_count, 0);
    assert_eq!(body.rows.len(), 2);
    assert_eq!(body.status, "audit_success");
    assert!(body.column_list.contains(&"errlevel".to_string()));
}

#[tokio::test]
async fn execute_check_reports_syntax_errors_in_rows() {
    let store = Arc::new(MemoryInstanceStore::new());
    let instance = store
        .create_instance(doris_instance("fe-1"))
        .await
        .unwrap();
    let addr = run_test_server(store, Arc::new(DialectFactory)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/v1/execute-check"))
        .json(&json!({
            "instance_id": instance.id,
            "db_name": "orders",
            "full_sql": "selekt * frm t1",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<ExecuteCheckResponse>().await.unwrap();
    assert_eq!(body.error_count, 1);
    assert_eq!(body.rows.len(), 1);
    assert_eq!(body.rows[0].errlevel, 2);
    assert_eq!(body.status, "audit_failure");
}

#[tokio::test]
async fn execute_check_rejects_unknown_instances() {
    let store = Arc::new(MemoryInstanceStore::new());
    let addr = run_test_server(store, Arc::new(DialectFactory)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/v1/execute-check"))
        .json(&json!({
            "instance_id": 42,
            "db_name": "orders",
            "full_sql": "select 1",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let error = res.json::<ErrorResponse>().await.unwrap();
    assert!(error.message.contains("42"));
    assert_eq!(error.status_code, StatusCode::NOT_FOUND.as_u16());
}

#[tokio::test]
async fn execute_check_rejects_empty_sql() {
    let store = Arc::new(MemoryInstanceStore::new());
    let instance = store
        .create_instance(doris_instance("fe-1"))
        .await
        .unwrap();
    let addr = run_test_server(store, Arc::new(DialectFactory)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/v1/execute-check"))
        .json(&json!({
            "instance_id": instance.id,
            "db_name": "orders",
            "full_sql": "",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn engine_failures_surface_as_error_messages() {
    let store = Arc::new(MemoryInstanceStore::new());
    let instance = store
        .create_instance(doris_instance("fe-1"))
        .await
        .unwrap();
    let addr = run_test_server(store, Arc::new(FailingFactory)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/v1/execute-check"))
        .json(&json!({
            "instance_id": instance.id,
            "db_name": "orders",
            "full_sql": "select 1",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = res.json::<ErrorResponse>().await.unwrap();
    assert!(error.message.contains("connection refused"));
}
