mod common;

use common::{payload, register, test_db};
use storage::dto::exercise::ExerciseFilter;
use storage::dto::progress_log::CreateProgressLogRequest;
use storage::dto::workout::CreateWorkoutRequest;
use storage::dto::workout_exercise::WorkoutExerciseFilter;
use storage::error::StorageError;
use storage::repository::exercise::ExerciseRepository;
use storage::repository::progress_log::ProgressLogRepository;
use storage::repository::user::UserRepository;
use storage::repository::workout::WorkoutRepository;
use storage::repository::workout_exercise::WorkoutExerciseRepository;

#[tokio::test]
async fn test_deleting_user_removes_owned_records_but_keeps_library() {
    let db = test_db().await;
    let alice = register(&db, "alice").await;
    let bob = register(&db, "bob").await;

    let workout: CreateWorkoutRequest = payload(serde_json::json!({
        "name": "Leg Day",
        "exercises": [{ "name": "Squat", "sets": 5 }]
    }));
    let log: CreateProgressLogRequest = payload(serde_json::json!({ "log_date": "2024-03-01" }));

    let workouts = WorkoutRepository::new(db.pool());
    let logs = ProgressLogRepository::new(db.pool());
    for user in [&alice, &bob] {
        workouts.create(user.id, &workout).await.unwrap();
        logs.create(user.id, &log).await.unwrap();
    }

    let users = UserRepository::new(db.pool(), db.password_cost());
    users.delete(alice.id).await.unwrap();

    assert!(matches!(
        users.find_by_id(alice.id).await,
        Err(StorageError::NotFound)
    ));
    assert!(workouts.list_for_user(alice.id).await.unwrap().is_empty());
    assert!(logs.list_for_user(alice.id).await.unwrap().is_empty());
    assert!(
        WorkoutExerciseRepository::new(db.pool())
            .list_for_user(alice.id, &WorkoutExerciseFilter::default())
            .await
            .unwrap()
            .is_empty()
    );

    assert_eq!(workouts.list_detailed(bob.id).await.unwrap().len(), 1);
    assert_eq!(logs.list_for_user(bob.id).await.unwrap().len(), 1);

    let library = ExerciseRepository::new(db.pool())
        .list(&ExerciseFilter::default())
        .await
        .unwrap();
    assert_eq!(library.len(), 1);
    assert_eq!(library[0].name, "Squat");
}

#[tokio::test]
async fn test_deleting_exercise_removes_its_workout_entries() {
    let db = test_db().await;
    let alice = register(&db, "alice").await;

    let req: CreateWorkoutRequest = payload(serde_json::json!({
        "name": "Leg Day",
        "exercises": [{ "name": "Squat" }, { "name": "Lunge" }]
    }));
    let workouts = WorkoutRepository::new(db.pool());
    let created = workouts.create(alice.id, &req).await.unwrap();

    let exercises = ExerciseRepository::new(db.pool());
    let squat = exercises.find_by_name("Squat").await.unwrap().unwrap();
    exercises.delete(squat.id).await.unwrap();

    let detailed = workouts.find_detailed(created.id, alice.id).await.unwrap();
    assert_eq!(detailed.exercises.len(), 1);
    assert_eq!(detailed.exercises[0].name, "Lunge");
}

#[tokio::test]
async fn test_deleting_missing_user_is_not_found() {
    let db = test_db().await;

    let err = UserRepository::new(db.pool(), db.password_cost())
        .delete(42)
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound));
}
