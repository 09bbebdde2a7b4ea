mod common;

use common::{payload, register, test_db};
use storage::dto::exercise::CreateExerciseRequest;
use storage::dto::workout::CreateWorkoutRequest;
use storage::dto::workout_exercise::{
    CreateWorkoutExerciseRequest, UpdateWorkoutExerciseRequest, WorkoutExerciseFilter,
};
use storage::error::StorageError;
use storage::models::{Exercise, User, Workout};
use storage::repository::exercise::ExerciseRepository;
use storage::repository::workout::WorkoutRepository;
use storage::repository::workout_exercise::WorkoutExerciseRepository;
use storage::Database;

async fn workout_for(db: &Database, user: &User, name: &str) -> Workout {
    let req: CreateWorkoutRequest = payload(serde_json::json!({ "name": name }));
    let created = WorkoutRepository::new(db.pool())
        .create(user.id, &req)
        .await
        .unwrap();

    WorkoutRepository::new(db.pool())
        .find_for_user(created.id, user.id)
        .await
        .unwrap()
}

async fn squat(db: &Database) -> Exercise {
    let req: CreateExerciseRequest =
        payload(serde_json::json!({ "name": "Squat", "category": "Strength" }));
    ExerciseRepository::new(db.pool()).create(&req).await.unwrap()
}

fn link(workout: &Workout, exercise: &Exercise) -> CreateWorkoutExerciseRequest {
    payload(serde_json::json!({
        "workout_id": workout.id,
        "exercise_id": exercise.id,
        "sets": 5,
        "reps": 5,
        "weight": 100.0,
        "order": 2
    }))
}

#[tokio::test]
async fn test_link_exercise_to_own_workout() {
    let db = test_db().await;
    let alice = register(&db, "alice").await;
    let workout = workout_for(&db, &alice, "Leg Day").await;
    let exercise = squat(&db).await;

    let entry = WorkoutExerciseRepository::new(db.pool())
        .create(alice.id, &link(&workout, &exercise))
        .await
        .unwrap();

    assert_eq!(entry.user_id, alice.id);
    assert_eq!(entry.workout_id, workout.id);
    assert_eq!(entry.order_index, Some(2));

    let detailed = WorkoutRepository::new(db.pool())
        .find_detailed(workout.id, alice.id)
        .await
        .unwrap();
    assert_eq!(detailed.exercises.len(), 1);
    assert_eq!(detailed.exercises[0].name, "Squat");
}

#[tokio::test]
async fn test_cannot_link_to_someone_elses_workout() {
    let db = test_db().await;
    let alice = register(&db, "alice").await;
    let bob = register(&db, "bob").await;
    let workout = workout_for(&db, &alice, "Leg Day").await;
    let exercise = squat(&db).await;

    let err = WorkoutExerciseRepository::new(db.pool())
        .create(bob.id, &link(&workout, &exercise))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_unknown_exercise_is_not_found() {
    let db = test_db().await;
    let alice = register(&db, "alice").await;
    let workout = workout_for(&db, &alice, "Leg Day").await;

    let req: CreateWorkoutExerciseRequest = payload(serde_json::json!({
        "workout_id": workout.id,
        "exercise_id": 9999
    }));
    let err = WorkoutExerciseRepository::new(db.pool())
        .create(alice.id, &req)
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_list_filters_by_workout() {
    let db = test_db().await;
    let alice = register(&db, "alice").await;
    let legs = workout_for(&db, &alice, "Leg Day").await;
    let more_legs = workout_for(&db, &alice, "Leg Day II").await;
    let exercise = squat(&db).await;
    let repo = WorkoutExerciseRepository::new(db.pool());

    repo.create(alice.id, &link(&legs, &exercise)).await.unwrap();
    repo.create(alice.id, &link(&more_legs, &exercise))
        .await
        .unwrap();

    let all = repo
        .list_for_user(alice.id, &WorkoutExerciseFilter::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let filtered = repo
        .list_for_user(
            alice.id,
            &WorkoutExerciseFilter {
                workout_id: Some(legs.id),
            },
        )
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].workout_id, legs.id);
}

#[tokio::test]
async fn test_update_metrics_and_delete() {
    let db = test_db().await;
    let alice = register(&db, "alice").await;
    let bob = register(&db, "bob").await;
    let workout = workout_for(&db, &alice, "Leg Day").await;
    let exercise = squat(&db).await;
    let repo = WorkoutExerciseRepository::new(db.pool());

    let entry = repo
        .create(alice.id, &link(&workout, &exercise))
        .await
        .unwrap();

    let req = UpdateWorkoutExerciseRequest {
        reps: Some(3),
        weight: Some(110.0),
        ..Default::default()
    };
    let updated = repo.update(entry.id, alice.id, &req).await.unwrap();
    assert_eq!(updated.sets, Some(5));
    assert_eq!(updated.reps, Some(3));
    assert_eq!(updated.weight, Some(110.0));

    assert!(matches!(
        repo.update(entry.id, bob.id, &req).await,
        Err(StorageError::NotFound)
    ));
    assert!(matches!(
        repo.delete(entry.id, bob.id).await,
        Err(StorageError::NotFound)
    ));

    repo.delete(entry.id, alice.id).await.unwrap();
    assert!(matches!(
        repo.find_for_user(entry.id, alice.id).await,
        Err(StorageError::NotFound)
    ));
}
