use axum::http::StatusCode;
use serde_json::json;

use super::TestApp;

#[tokio::test]
async fn test_create_workout_with_inline_exercises() {
    let app = TestApp::new().await;
    let token = app.register("alice").await;

    let (status, workout) = app
        .post(
            "/workouts",
            &token,
            json!({
                "name": "Leg Day",
                "date": "2024-03-01",
                "duration": 60,
                "exercises": [
                    { "name": "Squat", "sets": 5, "reps": 5, "weight": 100.0 },
                    { "name": "Lunge", "sets": 3, "reps": 12 }
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED, "{workout}");
    assert_eq!(workout["name"], "Leg Day");
    assert_eq!(workout["date"], "2024-03-01");
    let exercises = workout["exercises"].as_array().unwrap();
    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0]["name"], "Squat");
    assert_eq!(exercises[0]["category"], "Strength");
    assert_eq!(exercises[0]["order"], 0);
    assert_eq!(exercises[1]["order"], 1);

    let (status, library) = app.get("/exercises", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(library.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_inline_exercise_errors_carry_item_path() {
    let app = TestApp::new().await;
    let token = app.register("alice").await;

    let (status, body) = app
        .post(
            "/workouts",
            &token,
            json!({
                "name": "Leg Day",
                "exercises": [
                    { "name": "Squat", "sets": 5 },
                    { "name": "Lunge", "reps": -1 }
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"],
        json!(["exercises[1].reps: Reps cannot be negative"])
    );

    let (_, workouts) = app.get("/workouts", &token).await;
    assert_eq!(workouts, json!([]));
}

#[tokio::test]
async fn test_workouts_are_private_to_their_owner() {
    let app = TestApp::new().await;
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let (_, workout) = app
        .post("/workouts", &alice, json!({ "name": "Morning Run" }))
        .await;
    let uri = format!("/workouts/{}", workout["id"]);

    let (status, listed) = app.get("/workouts", &bob).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let (status, _) = app.get(&uri, &bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.put(&uri, &bob, json!({ "name": "Stolen Run" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&uri, &bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, unchanged) = app.get(&uri, &alice).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unchanged["name"], "Morning Run");
}

#[tokio::test]
async fn test_update_and_delete_workout() {
    let app = TestApp::new().await;
    let token = app.register("alice").await;

    let (_, workout) = app
        .post(
            "/workouts",
            &token,
            json!({ "name": "Leg Day", "exercises": [{ "name": "Squat" }] }),
        )
        .await;
    let uri = format!("/workouts/{}", workout["id"]);

    let (status, updated) = app
        .put(
            &uri,
            &token,
            json!({ "duration": 45, "exercises": [{ "name": "Deadlift", "sets": 3 }] }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Leg Day");
    assert_eq!(updated["duration"], 45);
    assert_eq!(updated["exercises"][0]["name"], "Deadlift");
    assert_eq!(updated["exercises"].as_array().unwrap().len(), 1);

    let (status, body) = app.put(&uri, &token, json!({ "user_id": 2 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");

    let (status, _) = app.delete(&uri, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&uri, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_path_and_query_render_json_errors() {
    let app = TestApp::new().await;
    let token = app.register("alice").await;

    let (status, body) = app.get("/workouts/abc", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("abc"), "{body}");

    let (status, body) = app.delete("/progress_logs/1.5", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");

    let (status, body) = app.get("/workout_exercises?workout_id=abc", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string(), "{body}");
}
