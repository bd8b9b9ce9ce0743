use crate::helpers::{spawn_app, spawn_app_without_credentials, TEST_API_KEY, TEST_DATABASE_ID};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn join_returns_a_400_when_the_email_is_missing_or_invalid() {
    let app = spawn_app().await;

    // nothing may reach the record store for any of these
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.record_store_server)
        .await;

    let test_cases = vec![
        (r#"{}"#, "missing the email"),
        (r#"{"name": "le guin"}"#, "another field but no email"),
        (r#"{"email": null}"#, "a null email"),
        (r#"{"email": 42}"#, "a numeric email"),
        (r#"{"email": ["a@b.com"]}"#, "an array email"),
        (r#"{"email": ""}"#, "an empty email"),
        ("email=a%40b.com", "a form encoded body"),
        ("", "an empty body"),
    ];

    for (invalid_body, description) in test_cases {
        let response = app.post_waitlist(invalid_body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Email is required" }));
    }
}

#[tokio::test]
async fn join_returns_a_200_when_the_record_store_accepts_the_email() {
    let app = spawn_app().await;

    Mock::given(path("/v1/pages"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.record_store_server)
        .await;

    let response = app
        .post_waitlist_json(&serde_json::json!({ "email": "ursula_le_guin@gmail.com" }))
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "success": true }));
}

#[tokio::test]
async fn join_relays_the_email_into_both_record_fields() {
    let app = spawn_app().await;

    Mock::given(path("/v1/pages"))
        .and(method("POST"))
        .and(header("Authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
        .and(header("Notion-Version", "2022-06-28"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.record_store_server)
        .await;

    app.post_waitlist_json(&serde_json::json!({ "email": "a@b.com" }))
        .await;

    // exactly one record creation call, carrying the email twice
    let requests = app.record_store_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let record: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        record,
        serde_json::json!({
            "parent": { "database_id": TEST_DATABASE_ID },
            "properties": {
                "Title": { "title": [{ "text": { "content": "a@b.com" } }] },
                "Email": { "email": "a@b.com" }
            }
        })
    );
}

#[tokio::test]
async fn join_does_not_validate_the_email_format() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.record_store_server)
        .await;

    let response = app
        .post_waitlist_json(&serde_json::json!({ "email": "definitely-not-an-email" }))
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn join_ignores_extra_fields() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.record_store_server)
        .await;

    let response = app
        .post_waitlist_json(&serde_json::json!({ "email": "a@b.com", "name": "le guin" }))
        .await;

    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn join_returns_a_500_when_the_server_is_misconfigured() {
    let app = spawn_app_without_credentials().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.record_store_server)
        .await;

    for email in ["a@b.com", "ursula_le_guin@gmail.com", "not-an-email"] {
        let response = app
            .post_waitlist_json(&serde_json::json!({ "email": email }))
            .await;

        assert_eq!(500, response.status().as_u16());
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Server misconfigured" }));
    }
}

#[tokio::test]
async fn input_is_validated_before_the_configuration() {
    let app = spawn_app_without_credentials().await;

    let response = app.post_waitlist_json(&serde_json::json!({})).await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn join_returns_a_500_without_upstream_detail_when_the_record_store_fails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "object": "error",
            "status": 400,
            "code": "validation_error",
            "message": "Could not find database with ID: test-database-id."
        })))
        .expect(1)
        .mount(&app.record_store_server)
        .await;

    let response = app
        .post_waitlist_json(&serde_json::json!({ "email": "a@b.com" }))
        .await;

    assert_eq!(500, response.status().as_u16());
    let raw_body = response.text().await.unwrap();
    assert!(!raw_body.contains("validation_error"));
    assert!(!raw_body.contains("Could not find database"));
    let body: serde_json::Value = serde_json::from_str(&raw_body).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Failed to save email" }));
}

#[tokio::test]
async fn any_non_success_status_from_the_record_store_is_a_500() {
    let app = spawn_app().await;

    for status in [401_u16, 404, 409, 429, 500, 503] {
        let _guard = Mock::given(any())
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream says no"))
            .expect(1)
            .mount_as_scoped(&app.record_store_server)
            .await;

        let response = app
            .post_waitlist_json(&serde_json::json!({ "email": "a@b.com" }))
            .await;

        assert_eq!(
            500,
            response.status().as_u16(),
            "The API did not fail with 500 when the record store answered {}.",
            status
        );
        assert!(!response.text().await.unwrap().contains("upstream says no"));
    }
}

#[tokio::test]
async fn join_returns_a_500_when_the_record_store_times_out() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(180)))
        .expect(1)
        .mount(&app.record_store_server)
        .await;

    let response = app
        .post_waitlist_json(&serde_json::json!({ "email": "a@b.com" }))
        .await;

    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn the_same_email_twice_creates_two_records() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.record_store_server)
        .await;

    for _ in 0..2 {
        let response = app
            .post_waitlist_json(&serde_json::json!({ "email": "a@b.com" }))
            .await;
        assert_eq!(200, response.status().as_u16());
    }
}
