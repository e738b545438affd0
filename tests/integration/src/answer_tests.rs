//! `POST /answer` and `GET /hosts/{mac}` over fixture config trees.

mod common;

use axum::http::StatusCode;
use common::{app, config, get, post_answer, post_raw};
use pilot_core::answer::CONTENT_TYPE;
use pilot_server::router;
use pilot_test_utils::{COMPLETE_DEFAULTS, TestRoot};
use pretty_assertions::assert_eq;

const SOURCE: &str = "x-pxe-pilot-source";

fn with_defaults() -> TestRoot {
    let root = TestRoot::new();
    root.write_defaults(&format!("hostname = \"default\"\n{COMPLETE_DEFAULTS}"));
    root
}

fn host(name: &str) -> String {
    format!("hostname = \"{name}\"\n")
}

// ============================================================================
// Lookup
// ============================================================================

#[tokio::test]
async fn test_host_specific_match() {
    let root = with_defaults();
    root.write_host("aa-bb-cc-dd-ee-ff", &host("node1"));

    let resp = post_answer(app(&root), &["aa:bb:cc:dd:ee:ff"]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("content-type"), Some(CONTENT_TYPE));
    assert_eq!(resp.header(SOURCE), Some("hosts/aa-bb-cc-dd-ee-ff.toml"));
    assert_eq!(resp.toml()["global"]["hostname"].as_str(), Some("node1"));
}

#[tokio::test]
async fn test_falls_back_to_default() {
    let root = with_defaults();

    let resp = post_answer(app(&root), &["ff:ff:ff:ff:ff:ff"]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header(SOURCE), Some("defaults.toml"));
    assert_eq!(resp.toml()["global"]["hostname"].as_str(), Some("default"));
}

#[tokio::test]
async fn test_no_match_no_default_returns_404() {
    let root = TestRoot::new();
    root.write_host("aa-bb-cc-dd-ee-ff", &host("node1"));

    let resp = post_answer(app(&root), &["ff:ff:ff:ff:ff:ff"]).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert!(resp.json()["error"].as_str().unwrap().contains("ff-ff-ff-ff-ff-ff"));
}

#[tokio::test]
async fn test_first_matching_mac_wins() {
    let root = with_defaults();
    root.write_host("11-22-33-44-55-66", &host("second-nic"));
    root.write_host("77-88-99-aa-bb-cc", &host("third-nic"));

    let resp = post_answer(
        app(&root),
        &["aa:bb:cc:dd:ee:ff", "11:22:33:44:55:66", "77:88:99:aa:bb:cc"],
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header(SOURCE), Some("hosts/11-22-33-44-55-66.toml"));
    assert_eq!(resp.toml()["global"]["hostname"].as_str(), Some("second-nic"));
}

#[tokio::test]
async fn test_override_merges_over_defaults() {
    let root = with_defaults();
    root.write_host(
        "aa-bb-cc-dd-ee-ff",
        "hostname = \"node1\"\n[network]\naddress = \"10.0.0.21/24\"\n",
    );

    let resp = post_answer(app(&root), &["aa:bb:cc:dd:ee:ff"]).await;
    let answer = resp.toml();
    assert_eq!(answer["network"]["address"].as_str(), Some("10.0.0.21/24"));
    assert_eq!(answer["network"]["gateway"].as_str(), Some("10.0.0.1"));
    assert_eq!(answer["global"]["keyboard"].as_str(), Some("en-us"));
}

#[tokio::test]
async fn test_answer_contains_only_known_sections() {
    let root = with_defaults();
    root.write_host(
        "aa-bb-cc-dd-ee-ff",
        "hostname = \"node1\"\n[custom]\nflag = true\n[post_installation]\nurl = \"http://hook\"\n",
    );

    let resp = post_answer(app(&root), &["aa:bb:cc:dd:ee:ff"]).await;
    let mut sections: Vec<_> = resp.toml().keys().cloned().collect();
    sections.sort();
    assert_eq!(sections, vec!["disk", "global", "network", "post_installation"]);
}

#[tokio::test]
async fn test_legacy_interfaces_shape() {
    let root = with_defaults();
    root.write_host("aa-bb-cc-dd-ee-ff", &host("legacy"));

    let body = r#"{"interfaces": [{"mac": "AA-BB-CC-DD-EE-FF"}]}"#;
    let resp = post_raw(app(&root), body).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.toml()["global"]["hostname"].as_str(), Some("legacy"));
}

#[tokio::test]
async fn test_top_level_mac_shape() {
    let root = with_defaults();
    root.write_host("aa-bb-cc-dd-ee-ff", &host("single"));

    let resp = post_raw(app(&root), r#"{"mac": "aabb.ccdd.eeff"}"#).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.toml()["global"]["hostname"].as_str(), Some("single"));
}

// ============================================================================
// Normalization
// ============================================================================

#[tokio::test]
async fn test_address_notations_match_same_host() {
    let root = with_defaults();
    root.write_host("aa-bb-cc-dd-ee-ff", &host("node1"));

    for mac in ["aa:bb:cc:dd:ee:ff", "AA:BB:CC:DD:EE:FF", "aabbccddeeff", "aa-bb-cc-dd-ee-ff"] {
        let resp = post_answer(app(&root), &[mac]).await;
        assert_eq!(resp.status, StatusCode::OK, "notation {mac}");
        assert_eq!(
            resp.header(SOURCE),
            Some("hosts/aa-bb-cc-dd-ee-ff.toml"),
            "notation {mac}"
        );
    }
}

// ============================================================================
// Bad requests
// ============================================================================

#[tokio::test]
async fn test_empty_interface_list() {
    let root = with_defaults();
    let resp = post_raw(app(&root), r#"{"network_interfaces": []}"#).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_body_without_addresses() {
    let root = with_defaults();
    let resp = post_raw(app(&root), r#"{"something": "else"}"#).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_json() {
    let root = with_defaults();
    let resp = post_raw(app(&root), "not json").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.json()["error"].is_string());
}

#[tokio::test]
async fn test_empty_body() {
    let root = with_defaults();
    let resp = post_raw(app(&root), "").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_malformed_addresses() {
    let root = with_defaults();
    let resp = post_answer(app(&root), &["zz:zz:zz:zz:zz:zz", "aa:bb"]).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.json()["error"].as_str().unwrap().contains("zz:zz:zz:zz:zz:zz"));
}

#[tokio::test]
async fn test_malformed_address_skipped() {
    let root = with_defaults();
    root.write_host("aa-bb-cc-dd-ee-ff", &host("node1"));

    let resp = post_answer(app(&root), &["garbage", "aa:bb:cc:dd:ee:ff"]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.toml()["global"]["hostname"].as_str(), Some("node1"));
}

// ============================================================================
// Strictness
// ============================================================================

#[tokio::test]
async fn test_incomplete_answer_is_422() {
    let root = TestRoot::new();
    root.write_defaults("[global]\nkeyboard = \"en-us\"\n");

    let resp = post_answer(app(&root), &["aa:bb:cc:dd:ee:ff"]).await;
    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);

    let body = resp.json();
    let missing: Vec<_> = body["missing"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert!(missing.contains(&"network.gateway".to_string()));
    assert_eq!(missing.last().map(String::as_str), Some("hostname"));
}

#[tokio::test]
async fn test_lenient_server_serves_incomplete_answer() {
    let root = TestRoot::new();
    root.write_defaults("[global]\nkeyboard = \"en-us\"\n");

    let resp = post_answer(
        router(config(&root).with_strict(false)),
        &["aa:bb:cc:dd:ee:ff"],
    )
    .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.toml()["global"]["keyboard"].as_str(), Some("en-us"));
}

#[tokio::test]
async fn test_malformed_document_is_500() {
    let root = TestRoot::new();
    root.write_defaults("this is = = not toml");

    let resp = post_answer(app(&root), &["aa:bb:cc:dd:ee:ff"]).await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Preview
// ============================================================================

#[tokio::test]
async fn test_preview_override() {
    let root = with_defaults();
    root.write_host("aa-bb-cc-dd-ee-ff", &host("node1"));

    let resp = get(app(&root), "/hosts/AA:BB:CC:DD:EE:FF").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("content-type"), Some(CONTENT_TYPE));
    assert_eq!(resp.header(SOURCE), Some("hosts/aa-bb-cc-dd-ee-ff.toml"));
    assert_eq!(resp.toml()["global"]["hostname"].as_str(), Some("node1"));
}

#[tokio::test]
async fn test_preview_falls_back_to_defaults() {
    let root = with_defaults();

    let resp = get(app(&root), "/hosts/11-22-33-44-55-66").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header(SOURCE), Some("defaults.toml"));
}

#[tokio::test]
async fn test_preview_is_never_strict() {
    let root = TestRoot::new();
    root.write_defaults("[global]\ncountry = \"de\"\n");

    let resp = get(app(&root), "/hosts/112233445566").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.toml()["global"]["country"].as_str(), Some("de"));
}

#[tokio::test]
async fn test_preview_without_any_config_is_404() {
    let root = TestRoot::new();
    let resp = get(app(&root), "/hosts/aa-bb-cc-dd-ee-ff").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_preview_invalid_address_is_400() {
    let root = with_defaults();
    let resp = get(app(&root), "/hosts/not-a-mac").await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
}
