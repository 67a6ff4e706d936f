mod common;

use actix_web::{http::header, http::StatusCode, test};
use serde_json::{json, Value};
use xerxes_api::create_app;
use xerxes_shared::Environment;

use common::{stored_code, test_context, PHONE};

/// Run the send-code and verify flow and evaluate to the bearer token
macro_rules! login {
    ($app:expr, $ctx:expr, $phone:expr) => {{
        let req = test::TestRequest::post()
            .uri("/auth/send-code")
            .set_json(json!({ "phone_number": $phone }))
            .to_request();
        assert_eq!(test::call_service(&$app, req).await.status(), StatusCode::OK);

        let code = stored_code(&$ctx.store, $phone).await.expect("code stored");
        let req = test::TestRequest::post()
            .uri("/auth/verify")
            .set_json(json!({ "phone_number": $phone, "code": code }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;

        body["token"]["access_token"]
            .as_str()
            .expect("access token")
            .to_string()
    }};
}

fn receipt_body(store_id: &str) -> Value {
    json!({
        "store_id": store_id,
        "items": [
            { "name": "Coffee", "quantity": 2, "price": 3.5 },
            { "name": "Bagel", "quantity": 1, "price": 2.25 }
        ],
        "subtotal": 9.25,
        "tax": 0.75,
        "total": 10.0
    })
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_create_and_list_receipts() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;
    let token = login!(app, ctx, PHONE);

    let req = test::TestRequest::post()
        .uri("/receipts")
        .insert_header(bearer(&token))
        .set_json(receipt_body("store-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: Value = test::read_body_json(resp).await;
    assert!(!created["id"].as_str().unwrap_or_default().is_empty());
    assert_eq!(created["store_id"], "store-1");
    assert_eq!(created["items"][0]["total"], 7.0);
    assert_eq!(created["items"][1]["total"], 2.25);
    assert_eq!(created["total"], 10.0);

    let claims = ctx.state.token_service.validate(&token).unwrap();
    assert_eq!(created["user_id"].as_str(), Some(claims.user_id.as_str()));

    let req = test::TestRequest::get()
        .uri("/receipts")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let listed: Value = test::read_body_json(resp).await;
    let listed = listed.as_array().expect("array of receipts");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
}

#[actix_web::test]
async fn test_receipts_are_scoped_to_the_caller() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;
    let first = login!(app, ctx, PHONE);
    let second = login!(app, ctx, "5559876543");

    let req = test::TestRequest::post()
        .uri("/receipts")
        .insert_header(bearer(&first))
        .set_json(receipt_body("store-1"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/receipts")
        .insert_header(bearer(&second))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn test_receipts_require_a_token() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

    let req = test::TestRequest::post()
        .uri("/receipts")
        .set_json(receipt_body("store-1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MISSING_TOKEN");

    let req = test::TestRequest::get()
        .uri("/receipts")
        .insert_header(bearer("not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_TOKEN");
}

#[actix_web::test]
async fn test_invalid_receipt_is_rejected() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;
    let token = login!(app, ctx, PHONE);

    let invalid = [
        json!({ "store_id": "", "items": [{ "name": "Tea", "quantity": 1, "price": 1.0 }] }),
        json!({ "store_id": "store-1", "items": [] }),
        json!({ "store_id": "store-1", "items": [{ "name": "Tea", "quantity": 0, "price": 1.0 }] }),
    ];

    for payload in invalid {
        let req = test::TestRequest::post()
            .uri("/receipts")
            .insert_header(bearer(&token))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    let req = test::TestRequest::get()
        .uri("/receipts")
        .insert_header(bearer(&token))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, json!([]));
}
