//! Handler tests running the full route table over in-memory state.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use folio_infra::mail::RecordingNotifier;
use folio_infra::memory::{InMemoryBlogRepository, InMemoryContactRepository};

use crate::handlers;
use crate::state::AppState;

const ADMIN_KEY: &str = "test-admin-key";

fn state() -> AppState {
    AppState::with_parts(
        Arc::new(InMemoryBlogRepository::new()),
        Arc::new(InMemoryContactRepository::new()),
        Arc::new(RecordingNotifier::new()),
        Some(ADMIN_KEY.to_string()),
        false,
    )
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(crate::json_config())
                .app_data(crate::query_config())
                .configure(handlers::configure_routes)
                .default_service(web::route().to(crate::not_found)),
        )
        .await
    };
}

fn post_body(title: &str) -> Value {
    json!({
        "title": title,
        "content": "a few words of body text",
        "tags": ["rust"]
    })
}

fn contact_body() -> Value {
    json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "subject": "About your posts",
        "message": "I would like to hear more about the async series."
    })
}

#[actix_web::test]
async fn health_reports_status() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/health").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "disconnected");
}

#[actix_web::test]
async fn admin_routes_refuse_without_credential_and_mutate_nothing() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/blog")
            .set_json(post_body("Sneaky Post"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Admin authentication required");

    // nothing was stored
    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/blog").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn wrong_admin_key_is_unauthorized() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/blog/clear/all")
            .insert_header(("x-admin-key", "wrong"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn create_then_fetch_by_slug() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(("x-admin-key", ADMIN_KEY))
            .set_json(post_body("Hello World!"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["slug"], "hello-world");
    assert_eq!(created["author"], "Site Owner");
    assert!(created["readTime"].is_u64());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/blog/hello-world")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let post: Value = test::read_body_json(resp).await;
    assert_eq!(post["content"], "a few words of body text");
}

#[actix_web::test]
async fn listing_excludes_content() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(("x-admin-key", ADMIN_KEY))
            .set_json(post_body("Visible Post"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/blog").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert!(posts[0].get("content").is_none());
    assert_eq!(posts[0]["excerpt"], "a few words of body text...");
}

#[actix_web::test]
async fn duplicate_slug_is_a_conflict() {
    let app = test_app!(state());

    for (title, expected) in [
        ("Hello World", StatusCode::CREATED),
        ("Hello, World!", StatusCode::CONFLICT),
    ] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/blog")
                .insert_header(("x-admin-key", ADMIN_KEY))
                .set_json(post_body(title))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_web::test]
async fn pagination_window_over_eight_posts() {
    let app = test_app!(state());

    let titles = [
        "Post One",
        "Post Two",
        "Post Three",
        "Post Four",
        "Post Five",
        "Post Six",
        "Post Seven",
        "Post Eight",
    ];
    for title in titles {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/blog")
                .insert_header(("x-admin-key", ADMIN_KEY))
                .set_json(post_body(title))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/blog?page=2&limit=6")
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["pagination"],
        json!({ "current": 2, "total": 2, "hasNext": false, "hasPrev": true })
    );
}

#[actix_web::test]
async fn zero_page_is_rejected() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/blog?page=0&limit=10")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "page");
}

#[actix_web::test]
async fn malformed_query_string_is_a_bad_request() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/blog?page=abc")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid query string"));
}

#[actix_web::test]
async fn tag_routes_filter_and_enumerate() {
    let app = test_app!(state());

    for (title, tags) in [
        ("Rust Intro", json!(["rust"])),
        ("Web Notes", json!(["web"])),
        ("Rust Async", json!(["Rust", "async"])),
    ] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/blog")
                .insert_header(("x-admin-key", ADMIN_KEY))
                .set_json(json!({
                    "title": title,
                    "content": "a few words of body text",
                    "tags": tags
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/blog/tags/all").to_request(),
    )
    .await;
    let tags: Value = test::read_body_json(resp).await;
    assert_eq!(tags, json!(["async", "rust", "web"]));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/blog/tag/rust").to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["tag"], "rust");
    assert_eq!(body["posts"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn unknown_slug_is_not_found() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/blog/nope").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Blog post not found");
}

#[actix_web::test]
async fn delete_unknown_id_is_not_found() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/blog/{}", uuid::Uuid::new_v4()))
            .insert_header(("x-admin-key", ADMIN_KEY))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_and_clear_confirmations() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/blog")
            .insert_header(("x-admin-key", ADMIN_KEY))
            .set_json(post_body("Doomed Post"))
            .to_request(),
    )
    .await;
    let created: Value = test::read_body_json(resp).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/blog/{}", created["id"].as_str().unwrap()))
            .insert_header(("x-admin-key", ADMIN_KEY))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Doomed Post");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri("/api/blog/clear/all")
            .insert_header(("x-admin-key", ADMIN_KEY))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["deletedCount"], 0);
}

#[actix_web::test]
async fn contact_submission_round_trip() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/contact")
            .set_json(contact_body())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);

    // admin listing sees exactly one record
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/contact")
            .insert_header(("x-admin-key", ADMIN_KEY))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let contacts = body["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["email"], "ada@example.com");
    assert_eq!(contacts[0]["isRead"], false);
}

#[actix_web::test]
async fn short_contact_message_fails_validation() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "About your posts",
                "message": "hello"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"][0]["field"], "message");

    // no record was stored
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/contact")
            .insert_header(("x-admin-key", ADMIN_KEY))
            .to_request(),
    )
    .await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["contacts"].as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn contact_listing_requires_admin() {
    let app = test_app!(state());

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/contact").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn unknown_route_answers_the_standard_body() {
    let app = test_app!(state());

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/nothing/here").to_request())
            .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "API endpoint not found");
}

#[actix_web::test]
async fn malformed_json_body_is_a_bad_request() {
    let app = test_app!(state());

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/contact")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
}
