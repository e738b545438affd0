//! `GET /health` and `GET /hosts`.

mod common;

use axum::http::StatusCode;
use common::{app, get};
use pilot_test_utils::TestRoot;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_health_without_config() {
    let root = TestRoot::new();

    let resp = get(app(&root), "/health").await;
    assert_eq!(resp.status, StatusCode::OK);

    let data = resp.json();
    assert_eq!(data["status"], "ok");
    assert_eq!(data["default_exists"], false);
    assert_eq!(data["host_count"], 0);
    assert_eq!(
        data["config_dir"].as_str(),
        Some(root.config_dir().display().to_string().as_str())
    );
    assert_eq!(
        data["assets_dir"].as_str(),
        Some(root.assets_dir().display().to_string().as_str())
    );
}

#[tokio::test]
async fn test_health_with_config() {
    let root = TestRoot::new();
    root.write_defaults("");
    root.write_host("aa-bb-cc-dd-ee-ff", "");
    root.write_host("11-22-33-44-55-66", "");

    let data = get(app(&root), "/health").await.json();
    assert_eq!(data["default_exists"], true);
    assert_eq!(data["host_count"], 2);
}

#[tokio::test]
async fn test_health_counts_canonical_hosts_only() {
    let root = TestRoot::new();
    root.write_host("aa-bb-cc-dd-ee-ff", "");
    root.write_host("AA-BB-CC-DD-EE-01", "");
    root.write_hosts_file("notes.txt", "");

    let data = get(app(&root), "/health").await.json();
    assert_eq!(data["host_count"], 1);
}

#[tokio::test]
async fn test_health_when_config_dir_missing() {
    let root = TestRoot::new();
    std::fs::remove_dir_all(root.config_dir()).unwrap();

    let resp = get(app(&root), "/health").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["host_count"], 0);
}

#[tokio::test]
async fn test_hosts_empty() {
    let root = TestRoot::new();

    let data = get(app(&root), "/hosts").await.json();
    assert_eq!(data, json!({ "hosts": [], "host_count": 0, "default_exists": false }));
}

#[tokio::test]
async fn test_hosts_sorted() {
    let root = TestRoot::new();
    root.write_defaults("");
    for mac in ["cc-cc-cc-cc-cc-cc", "aa-aa-aa-aa-aa-aa", "bb-bb-bb-bb-bb-bb"] {
        root.write_host(mac, "");
    }

    let data = get(app(&root), "/hosts").await.json();
    assert_eq!(
        data,
        json!({
            "hosts": ["aa-aa-aa-aa-aa-aa", "bb-bb-bb-bb-bb-bb", "cc-cc-cc-cc-cc-cc"],
            "host_count": 3,
            "default_exists": true,
        })
    );
}

#[tokio::test]
async fn test_hosts_ignores_non_toml_files() {
    let root = TestRoot::new();
    root.write_host("aa-bb-cc-dd-ee-ff", "");
    root.write_hosts_file("README.md", "docs");
    root.write_hosts_file("11-22-33-44-55-66.toml.bak", "");
    root.write_hosts_file("not-a-mac.toml", "");

    let data = get(app(&root), "/hosts").await.json();
    assert_eq!(data["hosts"], json!(["aa-bb-cc-dd-ee-ff"]));
    assert_eq!(data["host_count"], 1);
}
