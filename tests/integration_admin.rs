use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use std::fs;
use std::sync::Arc;
use tempmail_cleaner::config::Config;
use tempmail_cleaner::db::DbClient;
use tempmail_cleaner::init::{build_admin_host, init_store};
use tempmail_cleaner::plugin::{SUBMIT_LABEL, SUCCESS_MESSAGE};
use tower::ServiceExt;

const PAGE_URI: &str = "/admin/users.php?page=wp-temp-mail-cleaner";

fn app() -> (Router, Arc<DbClient>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let domains_path = dir.path().join("temp_mail_domains.txt");
    fs::write(&domains_path, "tempmail.com\n  guerrillamail.com  \n\n").unwrap();

    let mut config = Config::default();
    config.storage.sqlite_path = dir.path().join("cleaner.db").display().to_string();
    config.domains.file_path = domains_path.display().to_string();

    let db = init_store(&config).unwrap();
    db.insert_user("alice", "alice@tempmail.com").unwrap();
    db.insert_user("bob", "bob@realmail.com").unwrap();
    db.insert_user("carol", "carol@sub.tempmail.com").unwrap();

    let host = build_admin_host(&config, db.clone()).unwrap();
    (host.router().unwrap(), db, dir)
}

async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_activation_primes_domain_cache() {
    let (_router, db, _dir) = app();
    assert_eq!(
        db.get_option("temp_mail_domains_cache").unwrap().as_deref(),
        Some(r#"["tempmail.com","guerrillamail.com"]"#)
    );
}

#[tokio::test]
async fn test_get_page_renders_form_only() {
    let (router, db, _dir) = app();
    let (status, html) = send(router, Method::GET, PAGE_URI).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("WP TempMail Cleaner"));
    assert!(html.contains(SUBMIT_LABEL));
    assert!(html.contains(r#"<form method="post">"#));
    assert!(!html.contains(SUCCESS_MESSAGE));
    assert_eq!(db.list_users().unwrap().len(), 3);
}

#[tokio::test]
async fn test_post_page_sweeps_and_confirms() {
    let (router, db, _dir) = app();
    let (status, html) = send(router, Method::POST, PAGE_URI).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(SUCCESS_MESSAGE));

    let logins: Vec<String> = db
        .list_users()
        .unwrap()
        .into_iter()
        .map(|user| user.login)
        .collect();
    assert_eq!(logins, ["bob", "carol"]);
}

#[tokio::test]
async fn test_post_with_nothing_to_delete_still_confirms() {
    let (router, db, _dir) = app();
    let (_, _) = send(router.clone(), Method::POST, PAGE_URI).await;
    let (status, html) = send(router, Method::POST, PAGE_URI).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(SUCCESS_MESSAGE));
    assert_eq!(db.list_users().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_pages_are_not_found() {
    let (router, _db, _dir) = app();

    let (status, _) = send(router.clone(), Method::GET, "/admin/users.php?page=other").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        router.clone(),
        Method::GET,
        "/admin/tools.php?page=wp-temp-mail-cleaner",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(router, Method::GET, "/admin/users.php").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_lists_menu_entry_and_links() {
    let (router, _db, _dir) = app();
    let (status, html) = send(router, Method::GET, "/admin").await;

    assert_eq!(status, StatusCode::OK);
    // Tera escapes `/` inside attribute values
    assert!(html.contains(r#"href="&#x2F;admin&#x2F;users.php?page=wp-temp-mail-cleaner""#));
    assert!(html.contains(r#"target="_blank">GitHub</a>"#));
    assert!(html.find(">Settings</a>").unwrap() < html.find(">GitHub</a>").unwrap());
}

#[tokio::test]
async fn test_plugin_listing_json() {
    let (router, _db, _dir) = app();
    let (status, body) = send(router, Method::GET, "/api/plugins").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let row = &json["plugins"][0];
    assert_eq!(row["name"], "WP TempMail Cleaner");

    let links = row["action_links"].as_array().unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0]["label"], "Settings");
    assert_eq!(links[0]["href"], PAGE_URI);
    assert_eq!(links[1]["label"], "GitHub");
    assert_eq!(links[1]["new_tab"], true);
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let (router, _db, _dir) = app();
    let (status, css) = send(router.clone(), Method::GET, "/admin.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(css.contains(".wrap"));

    let (status, _) = send(router.clone(), Method::GET, "/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(router, Method::GET, "/admin.html").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
