// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing, signup and unregister API tests.

use axum::http::{Method, StatusCode};

mod common;

#[tokio::test]
async fn test_get_activities() {
    let (app, _state) = common::create_test_app();

    let response = common::send(app, Method::GET, "/activities").await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = common::json_body(response).await;
    let activities = data.as_object().expect("activities should be a JSON object");
    assert!(activities.contains_key("Chess Club"));

    let chess = &data["Chess Club"];
    assert_eq!(chess["max_participants"], 12);
    assert_eq!(chess["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess["participants"][0], "michael@mergington.edu");
}

#[tokio::test]
async fn test_get_activities_keeps_catalog_order() {
    let (app, _state) = common::create_test_app();

    let response = common::send(app, Method::GET, "/activities").await;
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();

    let chess = text.find("\"Chess Club\"").unwrap();
    let programming = text.find("\"Programming Class\"").unwrap();
    let debate = text.find("\"Debate Team\"").unwrap();
    assert!(chess < programming && programming < debate);
}

#[tokio::test]
async fn test_signup_success() {
    let (app, state) = common::create_test_app();
    let email = "newstudent@mergington.edu";

    let response = common::send(
        app,
        Method::POST,
        &common::roster_uri("Chess Club", "signup", email),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = common::json_body(response).await;
    assert_eq!(
        data["message"],
        "Signed up newstudent@mergington.edu for Chess Club"
    );

    let chess = state.activities.get("Chess Club").await.unwrap();
    assert!(chess.has_participant(email));
    assert_eq!(chess.participants.last().map(String::as_str), Some(email));
}

#[tokio::test]
async fn test_signup_already_signed() {
    let (app, state) = common::create_test_app();
    let email = state.activities.get("Chess Club").await.unwrap().participants[0].clone();

    let response = common::send(
        app,
        Method::POST,
        &common::roster_uri("Chess Club", "signup", &email),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let data = common::json_body(response).await;
    assert_eq!(data["error"], "already_signed_up");
    assert_eq!(data["detail"], "Student already signed up");

    let chess = state.activities.get("Chess Club").await.unwrap();
    assert_eq!(chess.participants.iter().filter(|p| **p == email).count(), 1);
}

#[tokio::test]
async fn test_signup_activity_not_found() {
    let (app, _state) = common::create_test_app();

    let response = common::send(
        app,
        Method::POST,
        &common::roster_uri("NonExistent", "signup", "x@x.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let data = common::json_body(response).await;
    assert_eq!(data["error"], "not_found");
    assert_eq!(data["detail"], "Activity not found");
}

#[tokio::test]
async fn test_signup_missing_email() {
    let (app, state) = common::create_test_app();
    let before = state.activities.get("Chess Club").await.unwrap();

    let response = common::send(app, Method::POST, "/activities/Chess%20Club/signup").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let data = common::json_body(response).await;
    assert_eq!(data["error"], "bad_request");
    assert_eq!(state.activities.get("Chess Club").await.unwrap(), before);
}

#[tokio::test]
async fn test_unregister_success() {
    let (app, state) = common::create_test_app();
    let email = state
        .activities
        .get("Programming Class")
        .await
        .unwrap()
        .participants[0]
        .clone();

    let response = common::send(
        app,
        Method::DELETE,
        &common::roster_uri("Programming Class", "participants", &email),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = common::json_body(response).await;
    assert_eq!(
        data["message"],
        format!("Unregistered {email} from Programming Class")
    );

    let programming = state.activities.get("Programming Class").await.unwrap();
    assert!(!programming.has_participant(&email));
}

#[tokio::test]
async fn test_unregister_not_found_activity() {
    let (app, _state) = common::create_test_app();

    let response = common::send(
        app,
        Method::DELETE,
        &common::roster_uri("Nope", "participants", "x@x.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let data = common::json_body(response).await;
    assert_eq!(data["detail"], "Activity not found");
}

#[tokio::test]
async fn test_unregister_participant_not_in_activity() {
    let (app, _state) = common::create_test_app();

    let response = common::send(
        app,
        Method::DELETE,
        &common::roster_uri("Chess Club", "participants", "not@there.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let data = common::json_body(response).await;
    assert_eq!(data["detail"], "Participant not found in this activity");
}

#[tokio::test]
async fn test_signup_then_unregister_round_trip() {
    let (app, state) = common::create_test_app();
    let email = "roundtrip@mergington.edu";
    let before = state.activities.get("Art Club").await.unwrap();

    let response = common::send(
        app.clone(),
        Method::POST,
        &common::roster_uri("Art Club", "signup", email),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::send(
        app.clone(),
        Method::DELETE,
        &common::roster_uri("Art Club", "participants", email),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // A second removal finds nothing to remove.
    let response = common::send(
        app,
        Method::DELETE,
        &common::roster_uri("Art Club", "participants", email),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert_eq!(state.activities.get("Art Club").await.unwrap(), before);
}

#[tokio::test]
async fn test_states_are_independent() {
    let (app, state) = common::create_test_app();
    let response = common::send(
        app,
        Method::POST,
        &common::roster_uri("Gym Class", "signup", "isolated@mergington.edu"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(state
        .activities
        .get("Gym Class")
        .await
        .unwrap()
        .has_participant("isolated@mergington.edu"));

    let (_app, fresh) = common::create_test_app();
    assert!(!fresh
        .activities
        .get("Gym Class")
        .await
        .unwrap()
        .has_participant("isolated@mergington.edu"));
}
