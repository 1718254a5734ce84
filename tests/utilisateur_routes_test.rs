// ABOUTME: Route-level tests for the /utilisateurs endpoints
// ABOUTME: Verifies redaction of sensitive fields and the credential check
//
// SPDX-License-Identifier: MIT OR Apache-2.0

mod common;

use axum::body::Body;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use marche_server::routes;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn listing_and_detail_withhold_password_and_mail() {
    let resources = common::create_test_resources();
    let app = routes::router(resources.clone());

    common::seed_utilisateur(&resources.utilisateurs, "u1", "Marie", "mdp", "marie@ferme.fr")
        .await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/utilisateurs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["id"], "u1");
    assert_eq!(body[0]["nom"], "Marie");
    assert!(body[0].get("mail").is_none());
    assert!(body[0].get("mdp").is_none());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/utilisateurs/u1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["nom"], "Marie");
    assert!(body.get("mail").is_none());
    assert!(body.get("mdp").is_none());
}

#[tokio::test]
async fn missing_user_yields_404() {
    let app = routes::router(common::create_test_resources());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/utilisateurs/absent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn creation_returns_201_without_the_password_hash() {
    let app = routes::router(common::create_test_resources());

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/utilisateurs",
            &json!({
                "id": "u1",
                "nom": "Marie",
                "mdp": "tracteur-vert",
                "mail": "marie@ferme.fr"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["id"], "u1");
    assert_eq!(body["mail"], "marie@ferme.fr");
    assert!(body.get("mdp").is_none());

    // Duplicate mail on a second creation is a caller error.
    let response = app
        .oneshot(json_request(
            "POST",
            "/utilisateurs",
            &json!({
                "id": "u2",
                "nom": "Paul",
                "mdp": "autre-mdp",
                "mail": "marie@ferme.fr"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_maps_credential_check_to_200_or_401() {
    let resources = common::create_test_resources();
    let app = routes::router(resources.clone());

    common::seed_utilisateur(
        &resources.utilisateurs,
        "u1",
        "Marie",
        "tracteur-vert",
        "marie@ferme.fr",
    )
    .await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/utilisateurs/login",
            &json!({ "mail": "marie@ferme.fr", "mdp": "tracteur-vert" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["authenticated"], true);

    let response = app
        .oneshot(json_request(
            "POST",
            "/utilisateurs/login",
            &json!({ "mail": "marie@ferme.fr", "mdp": "mauvais" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn password_endpoint_validates_then_updates() {
    let resources = common::create_test_resources();
    let app = routes::router(resources.clone());

    common::seed_utilisateur(&resources.utilisateurs, "u1", "Marie", "ancien", "marie@ferme.fr")
        .await;

    // Blank body is rejected before touching the store.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/utilisateurs/u1/mdp")
                .body(Body::from("  "))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/utilisateurs/u1/mdp")
                .body(Body::from("nouveau"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(json_request(
            "POST",
            "/utilisateurs/login",
            &json!({ "mail": "marie@ferme.fr", "mdp": "nouveau" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_then_listing_is_empty() {
    let resources = common::create_test_resources();
    let app = routes::router(resources.clone());

    common::seed_utilisateur(&resources.utilisateurs, "u1", "Marie", "mdp", "marie@ferme.fr")
        .await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/utilisateurs/u1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/utilisateurs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}
