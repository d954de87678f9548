//! Router tests for the HTML interface over a directory-backed store.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;

use templar_registry::TemplateRepository;
use templar_store_fs::FsTemplateRepository;
use templar_types::TemplateDraft;
use templar_web::{router, WebState};

struct Fixture {
    _tmp: TempDir,
    repo: Arc<FsTemplateRepository>,
    app: Router,
}

async fn fixture() -> Fixture {
    let tmp = tempfile::tempdir().expect("tmp");
    let repo = Arc::new(FsTemplateRepository::new(tmp.path()));
    repo.create(&TemplateDraft::new(
        "Invoice Printer",
        "Prints invoices",
        vec!["finance".into()],
        "<code/>",
    ))
    .await
    .expect("seed invoice");
    repo.create(&TemplateDraft::new("Payroll", "Salaries", vec![], "pay()"))
        .await
        .expect("seed payroll");
    let state = WebState::new(repo.clone()).expect("state");
    Fixture {
        _tmp: tmp,
        repo,
        app: router(state),
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("req")
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("req")
}

async fn body_text(resp: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), 1 << 20)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8")
}

fn assert_redirect_home(resp: &axum::response::Response) {
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn index_lists_everything() {
    let f = fixture().await;
    let resp = f.app.oneshot(get("/")).await.expect("resp");
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Invoice Printer"));
    assert!(html.contains("Payroll"));
}

#[tokio::test]
async fn index_filters_by_query() {
    let f = fixture().await;
    let resp = f.app.oneshot(get("/?q=FINANCE")).await.expect("resp");
    let html = body_text(resp).await;
    assert!(html.contains("Invoice Printer"));
    assert!(!html.contains("Payroll"));
}

#[tokio::test]
async fn new_form_renders() {
    let f = fixture().await;
    let resp = f.app.oneshot(get("/new")).await.expect("resp");
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("action=\"/new\""));
}

#[tokio::test]
async fn create_persists_and_redirects() {
    let f = fixture().await;
    let resp = f
        .app
        .oneshot(post_form(
            "/new",
            "name=Report+Card&description=+Grades+&tags=school%2C+%2Cgrades&code=print()",
        ))
        .await
        .expect("resp");
    assert_redirect_home(&resp);
    let stored = f.repo.get("report_card").await.expect("get").expect("exists");
    assert_eq!(stored.description, "Grades");
    assert_eq!(stored.tags, vec!["school", "grades"]);
    assert_eq!(stored.code, "print()");
}

#[tokio::test]
async fn create_with_blank_name_is_422_and_keeps_input() {
    let f = fixture().await;
    let resp = f
        .app
        .oneshot(post_form("/new", "name=+++&description=kept&tags=a&code=body"))
        .await
        .expect("resp");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains("Name cannot be empty"));
    assert!(html.contains("value=\"kept\""));
    assert!(html.contains(">body</textarea>"));
    assert_eq!(f.repo.list().await.expect("list").len(), 2);
}

#[tokio::test]
async fn edit_form_prefills_record() {
    let f = fixture().await;
    let resp = f
        .app
        .oneshot(get("/invoice_printer/edit"))
        .await
        .expect("resp");
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("value=\"Invoice Printer\""));
    assert!(html.contains("&lt;code"));
    assert!(html.contains("action=\"/invoice_printer/edit\""));
}

#[tokio::test]
async fn edit_form_for_unknown_id_redirects() {
    let f = fixture().await;
    let resp = f.app.oneshot(get("/ghost/edit")).await.expect("resp");
    assert_redirect_home(&resp);
}

#[tokio::test]
async fn update_keeps_id() {
    let f = fixture().await;
    let resp = f
        .app
        .oneshot(post_form(
            "/invoice_printer/edit",
            "name=Renamed&description=new&tags=&code=x",
        ))
        .await
        .expect("resp");
    assert_redirect_home(&resp);
    let stored = f
        .repo
        .get("invoice_printer")
        .await
        .expect("get")
        .expect("exists");
    assert_eq!(stored.name, "Renamed");
    assert!(stored.tags.is_empty());
    assert!(f.repo.get("renamed").await.expect("get").is_none());
}

#[tokio::test]
async fn update_with_blank_name_shows_stored_record() {
    let f = fixture().await;
    let resp = f
        .app
        .oneshot(post_form(
            "/invoice_printer/edit",
            "name=&description=typed+but+lost&tags=&code=",
        ))
        .await
        .expect("resp");
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = body_text(resp).await;
    assert!(html.contains("Name cannot be empty"));
    assert!(html.contains("value=\"Prints invoices\""));
    assert!(!html.contains("typed but lost"));
}

#[tokio::test]
async fn update_of_unknown_id_creates_nothing() {
    let f = fixture().await;
    let resp = f
        .app
        .oneshot(post_form("/ghost/edit", "name=Ghost"))
        .await
        .expect("resp");
    assert_redirect_home(&resp);
    assert!(f.repo.get("ghost").await.expect("get").is_none());
}

#[tokio::test]
async fn delete_redirects_even_when_missing() {
    let f = fixture().await;
    let resp = f
        .app
        .clone()
        .oneshot(post_form("/payroll/delete", ""))
        .await
        .expect("resp");
    assert_redirect_home(&resp);
    assert!(f.repo.get("payroll").await.expect("get").is_none());

    let resp = f
        .app
        .oneshot(post_form("/payroll/delete", ""))
        .await
        .expect("resp");
    assert_redirect_home(&resp);
}
