use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::{TestRequest, TestServer};
use job_market_server::create_in_memory_app;
use serde_json::{json, Value};

async fn setup_test_server() -> TestServer {
    let app = create_in_memory_app().await.expect("app should build");
    TestServer::new(app.router()).expect("server should start")
}

fn as_user(request: TestRequest, id: &str, role: &str) -> TestRequest {
    request
        .add_header(
            HeaderName::from_static("x-user-id"),
            HeaderValue::from_str(id).expect("header value"),
        )
        .add_header(
            HeaderName::from_static("x-user-role"),
            HeaderValue::from_str(role).expect("header value"),
        )
}

async fn register(server: &TestServer, name: &str, role: &str) -> String {
    let response = server
        .post("/users")
        .json(&json!({
            "fullName": name,
            "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            "role": role,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["id"]
        .as_str()
        .expect("registered user id")
        .to_string()
}

#[tokio::test]
async fn test_health_returns_success_envelope() {
    let server = setup_test_server().await;

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["outcome"], "success");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_unknown_route_returns_error_envelope() {
    let server = setup_test_server().await;

    let response = server.get("/no/such/route").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["outcome"], "error");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_registration_assigns_distinct_generated_ids() {
    let server = setup_test_server().await;

    let ada = register(&server, "Ada Lovelace", "member").await;
    let grace = register(&server, "Grace Hopper", "member").await;

    assert_eq!(ada.len(), 36);
    assert_eq!(grace.len(), 36);
    assert_ne!(ada, grace);
}

#[tokio::test]
async fn test_registration_rejects_unknown_role() {
    let server = setup_test_server().await;

    let response = server
        .post("/users")
        .json(&json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "role": "wizard",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["outcome"], "error");
}

#[tokio::test]
async fn test_malformed_json_body_is_rejected() {
    let server = setup_test_server().await;

    let response = server.post("/users").text("not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["outcome"], "error");
}

#[tokio::test]
async fn test_missing_identity_headers_are_unauthenticated() {
    let server = setup_test_server().await;

    let response = server.get("/users/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json();
    assert_eq!(body["outcome"], "error");
    assert!(body["data"].is_null());
}

#[tokio::test]
async fn test_unknown_role_header_is_unauthenticated() {
    let server = setup_test_server().await;

    let response = as_user(server.get("/users/me"), "some-user", "wizard").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_roundtrip() {
    let server = setup_test_server().await;
    let ada = register(&server, "Ada Lovelace", "member").await;

    let response = as_user(server.get("/users/me"), &ada, "member").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["outcome"], "success");
    assert_eq!(body["data"]["fullName"], "Ada Lovelace");
    assert_eq!(body["data"]["role"], "member");
    assert!(body["data"].get("resume").is_none());
}

#[tokio::test]
async fn test_profile_of_unknown_principal_is_not_found() {
    let server = setup_test_server().await;

    let response = as_user(server.get("/users/me"), "never-registered", "member").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_search_matches_case_insensitively() {
    let server = setup_test_server().await;
    let viewer = register(&server, "Viewer", "member").await;
    register(&server, "Ada Lovelace", "member").await;
    register(&server, "Grace Hopper", "member").await;
    register(&server, "Ada Yonath", "member").await;

    let response = as_user(
        server.get("/users").add_query_param("fullName", "ADA"),
        &viewer,
        "member",
    )
    .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["count"], 2);
    assert_eq!(body["pagination"]["totalItems"], 2);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_user_search_beyond_last_page_is_empty() {
    let server = setup_test_server().await;
    let viewer = register(&server, "Viewer", "member").await;

    let response = as_user(
        server.get("/users").add_query_param("page", "99"),
        &viewer,
        "member",
    )
    .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["page"], 99);
}

#[tokio::test]
async fn test_garbage_pagination_is_rejected() {
    let server = setup_test_server().await;

    let response = server.get("/jobs").add_query_param("page", "abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["outcome"], "error");
    assert!(body["message"].as_str().unwrap_or("").contains("page"));
}

#[tokio::test]
async fn test_members_cannot_post_jobs() {
    let server = setup_test_server().await;
    let member = register(&server, "Ada Lovelace", "member").await;

    let response = as_user(
        server.post("/jobs").json(&json!({
            "title": "Engineer",
            "company": "Acme",
            "location": "Oslo",
            "description": "Ship things",
        })),
        &member,
        "member",
    )
    .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_job_crud_flow() {
    let server = setup_test_server().await;
    let employer = register(&server, "Grace Hopper", "employer").await;

    let created = as_user(
        server.post("/jobs").json(&json!({
            "title": "Compiler Engineer",
            "company": "Acme",
            "location": "Oslo",
            "description": "Ship things",
            "salaryRange": "500k-700k",
            "tags": ["rust", "compilers"],
        })),
        &employer,
        "employer",
    )
    .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);

    let body: Value = created.json();
    let job_id = body["data"]["id"].as_str().expect("job id").to_string();
    assert_eq!(body["data"]["ownerId"], employer.as_str());

    // Public read without identity headers
    let fetched = server.get(&format!("/jobs/{}", job_id)).await;
    assert_eq!(fetched.status_code(), StatusCode::OK);

    // Shallow merge: absent fields keep their values
    let updated = as_user(
        server
            .patch(&format!("/jobs/{}", job_id))
            .json(&json!({ "location": "Bergen" })),
        &employer,
        "employer",
    )
    .await;
    assert_eq!(updated.status_code(), StatusCode::OK);

    let body: Value = updated.json();
    assert_eq!(body["data"]["location"], "Bergen");
    assert_eq!(body["data"]["title"], "Compiler Engineer");
    assert_eq!(body["data"]["salaryRange"], "500k-700k");

    let deleted = as_user(
        server.delete(&format!("/jobs/{}", job_id)),
        &employer,
        "employer",
    )
    .await;
    assert_eq!(deleted.status_code(), StatusCode::OK);

    let gone = server.get(&format!("/jobs/{}", job_id)).await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);

    let again = as_user(
        server.delete(&format!("/jobs/{}", job_id)),
        &employer,
        "employer",
    )
    .await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_job_updates_are_owner_or_admin_only() {
    let server = setup_test_server().await;
    let owner = register(&server, "Grace Hopper", "employer").await;
    let stranger = register(&server, "Mallory", "employer").await;

    let created = as_user(
        server.post("/jobs").json(&json!({
            "title": "Engineer",
            "company": "Acme",
            "location": "Oslo",
            "description": "Ship things",
        })),
        &owner,
        "employer",
    )
    .await;
    let job_id = created.json::<Value>()["data"]["id"]
        .as_str()
        .expect("job id")
        .to_string();

    let denied = as_user(
        server
            .patch(&format!("/jobs/{}", job_id))
            .json(&json!({ "title": "Hijacked" })),
        &stranger,
        "employer",
    )
    .await;
    assert_eq!(denied.status_code(), StatusCode::FORBIDDEN);

    let by_admin = as_user(
        server
            .patch(&format!("/jobs/{}", job_id))
            .json(&json!({ "title": "Senior Engineer" })),
        "admin-1",
        "admin",
    )
    .await;
    assert_eq!(by_admin.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_job_listing_filters_by_query_and_tag() {
    let server = setup_test_server().await;
    let employer = register(&server, "Grace Hopper", "employer").await;

    for (title, tag) in [
        ("Rust Engineer", "rust"),
        ("Rust Lead", "rust"),
        ("Gardener", "outdoors"),
    ] {
        let response = as_user(
            server.post("/jobs").json(&json!({
                "title": title,
                "company": "Acme",
                "location": "Oslo",
                "description": "Ship things",
                "tags": [tag],
            })),
            &employer,
            "employer",
        )
        .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let by_query = server.get("/jobs").add_query_param("query", "rust").await;
    let body: Value = by_query.json();
    assert_eq!(body["count"], 2);

    let by_tag = server.get("/jobs").add_query_param("tag", "outdoors").await;
    let body: Value = by_tag.json();
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["title"], "Gardener");

    let all = server.get("/jobs").await;
    let body: Value = all.json();
    assert_eq!(body["count"], 3);
    assert_eq!(body["pagination"]["totalItems"], 3);
}

#[tokio::test]
async fn test_job_share_renders_channel_message() {
    let server = setup_test_server().await;
    let employer = register(&server, "Grace Hopper", "employer").await;

    let created = as_user(
        server.post("/jobs").json(&json!({
            "title": "Engineer",
            "company": "Acme",
            "location": "Oslo",
            "description": "Ship things",
            "tags": ["rust"],
        })),
        &employer,
        "employer",
    )
    .await;
    let job_id = created.json::<Value>()["data"]["id"]
        .as_str()
        .expect("job id")
        .to_string();

    let telegram = server
        .get(&format!("/jobs/{}/share", job_id))
        .add_query_param("channel", "telegram")
        .await;
    assert_eq!(telegram.status_code(), StatusCode::OK);

    let body: Value = telegram.json();
    let message = body["data"].as_str().expect("share message");
    assert!(message.starts_with("Engineer at Acme (Oslo)"));
    assert!(message.contains("#rust"));

    let email = server
        .get(&format!("/jobs/{}/share", job_id))
        .add_query_param("channel", "email")
        .await;
    let body: Value = email.json();
    assert!(body["data"]
        .as_str()
        .expect("share message")
        .starts_with("Subject:"));

    let unknown = server
        .get(&format!("/jobs/{}/share", job_id))
        .add_query_param("channel", "carrier-pigeon")
        .await;
    assert_eq!(unknown.status_code(), StatusCode::BAD_REQUEST);

    let missing = server.get(&format!("/jobs/{}/share", job_id)).await;
    assert_eq!(missing.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_friend_requests_and_listing() {
    let server = setup_test_server().await;
    let ada = register(&server, "Ada Lovelace", "member").await;
    let grace = register(&server, "Grace Hopper", "member").await;

    let sent = as_user(
        server.post(&format!("/users/{}/friend", grace)),
        &ada,
        "member",
    )
    .await;
    assert_eq!(sent.status_code(), StatusCode::CREATED);

    let listed = as_user(server.get("/users/friends"), &grace, "member").await;
    assert_eq!(listed.status_code(), StatusCode::OK);
    let body: Value = listed.json();
    assert_eq!(body["count"], 1);

    let to_self = as_user(
        server.post(&format!("/users/{}/friend", ada)),
        &ada,
        "member",
    )
    .await;
    assert_eq!(to_self.status_code(), StatusCode::BAD_REQUEST);

    let to_ghost = as_user(
        server.post("/users/missing-user/friend"),
        &ada,
        "member",
    )
    .await;
    assert_eq!(to_ghost.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reporting_users() {
    let server = setup_test_server().await;
    let ada = register(&server, "Ada Lovelace", "member").await;
    let grace = register(&server, "Grace Hopper", "member").await;

    let reported = as_user(
        server
            .post(&format!("/users/{}/report", grace))
            .json(&json!({ "reason": "spam" })),
        &ada,
        "member",
    )
    .await;
    assert_eq!(reported.status_code(), StatusCode::CREATED);

    let body: Value = reported.json();
    assert_eq!(body["data"]["reportedId"], grace.as_str());

    let self_report = as_user(
        server
            .post(&format!("/users/{}/report", ada))
            .json(&json!({ "reason": "spam" })),
        &ada,
        "member",
    )
    .await;
    assert_eq!(self_report.status_code(), StatusCode::BAD_REQUEST);
}
