//! `GET /boot.ipxe` and `GET /menu.ipxe` over fixture asset trees.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{app, config, get, send};
use pilot_boot::DEFAULT_KERNEL_PARAMS;
use pilot_server::router;
use pilot_test_utils::TestRoot;

#[tokio::test]
async fn test_boot_script_chains_menu() {
    let root = TestRoot::new();

    let resp = get(app(&root), "/boot.ipxe").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.header("content-type").unwrap().starts_with("text/plain"));
    assert!(resp.body.starts_with("#!ipxe"));
    assert!(resp.body.contains("chain /menu.ipxe"));
}

#[tokio::test]
async fn test_menu_without_assets() {
    let root = TestRoot::new();

    let resp = get(app(&root), "/menu.ipxe").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.starts_with("#!ipxe"));
    assert!(resp.body.contains("No boot assets found"));
}

#[tokio::test]
async fn test_menu_uses_host_header() {
    let root = TestRoot::new();
    root.add_bootable("proxmox-ve", "9.1-1");

    let request = Request::builder()
        .uri("/menu.ipxe")
        .header(header::HOST, "10.0.0.1:8080")
        .body(Body::empty())
        .unwrap();
    let resp = send(app(&root), request).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.header("content-type").unwrap().starts_with("text/plain"));
    assert!(resp.body.contains(&format!(
        "kernel http://10.0.0.1:8080/assets/proxmox-ve/9.1-1/vmlinuz {DEFAULT_KERNEL_PARAMS}"
    )));
    assert!(resp.body.contains("initrd http://10.0.0.1:8080/assets/proxmox-ve/9.1-1/initrd"));
}

#[tokio::test]
async fn test_asset_url_overrides_host_header() {
    let root = TestRoot::new();
    root.add_bootable("proxmox-ve", "9.1-1");

    let request = Request::builder()
        .uri("/menu.ipxe")
        .header(header::HOST, "10.0.0.1:8080")
        .body(Body::empty())
        .unwrap();
    let app = router(config(&root).with_asset_url("http://custom.host:9090/"));
    let resp = send(app, request).await;

    assert!(resp.body.contains("http://custom.host:9090/assets/proxmox-ve/9.1-1/vmlinuz"));
    assert!(!resp.body.contains("10.0.0.1"));
}

#[tokio::test]
async fn test_menu_orders_versions_and_products() {
    let root = TestRoot::new();
    for version in ["8.4-1", "9.1-1", "9.0-2"] {
        root.add_bootable("proxmox-ve", version);
    }
    root.add_bootable("proxmox-bs", "3.3-1");
    root.add_version("proxmox-bs", "4.0-1", &["vmlinuz"]);

    let body = get(app(&root), "/menu.ipxe").await.body;

    let pos = |needle: &str| body.find(needle).unwrap();
    assert!(pos("item proxmox-ve-9.1-1") < pos("item proxmox-ve-9.0-2"));
    assert!(pos("item proxmox-ve-9.0-2") < pos("item proxmox-ve-8.4-1"));
    assert!(pos("Proxmox BS") < pos("Proxmox VE"));
    assert!(body.contains("choose --default proxmox-bs-3.3-1 target"));
    assert!(!body.contains("proxmox-bs-4.0-1"));
}

#[tokio::test]
async fn test_menu_duplicate_targets_is_500() {
    let root = TestRoot::new();
    root.add_bootable("a", "b-1");
    root.add_bootable("a-b", "1");

    let resp = get(app(&root), "/menu.ipxe").await;
    assert_eq!(resp.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(resp.json()["error"].as_str().unwrap().contains("a-b-1"));
}
