mod common;

use common::{payload, test_db};
use storage::dto::exercise::{CreateExerciseRequest, ExerciseFilter, UpdateExerciseRequest};
use storage::error::StorageError;
use storage::repository::exercise::ExerciseRepository;

fn exercise(name: &str, category: &str) -> CreateExerciseRequest {
    payload(serde_json::json!({
        "name": name,
        "category": category,
        "muscle_group": "Legs",
    }))
}

#[tokio::test]
async fn test_create_applies_default_difficulty() {
    let db = test_db().await;

    let created = ExerciseRepository::new(db.pool())
        .create(&exercise("Squat", "Strength"))
        .await
        .unwrap();

    assert_eq!(created.name, "Squat");
    assert_eq!(created.difficulty, "Intermediate");
}

#[tokio::test]
async fn test_duplicate_name_is_a_conflict() {
    let db = test_db().await;
    let repo = ExerciseRepository::new(db.pool());

    repo.create(&exercise("Squat", "Strength")).await.unwrap();
    let err = repo.create(&exercise("Squat", "Cardio")).await.unwrap_err();

    assert!(matches!(err, StorageError::ConstraintViolation(_)));
}

#[tokio::test]
async fn test_unknown_category_is_rejected() {
    let db = test_db().await;

    let err = ExerciseRepository::new(db.pool())
        .create(&exercise("Squat", "Power"))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Validation(_)));
}

#[tokio::test]
async fn test_list_filters_by_category() {
    let db = test_db().await;
    let repo = ExerciseRepository::new(db.pool());

    repo.create(&exercise("Squat", "Strength")).await.unwrap();
    repo.create(&exercise("Running", "Cardio")).await.unwrap();
    repo.create(&exercise("Bench Press", "Strength")).await.unwrap();

    let strength = repo
        .list(&ExerciseFilter {
            category: Some("Strength".to_string()),
        })
        .await
        .unwrap();
    let names: Vec<_> = strength.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Bench Press", "Squat"]);

    let all = repo.list(&ExerciseFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_update_and_delete() {
    let db = test_db().await;
    let repo = ExerciseRepository::new(db.pool());

    let created = repo.create(&exercise("Squat", "Strength")).await.unwrap();
    let req = UpdateExerciseRequest {
        equipment: Some("Barbell".to_string()),
        ..Default::default()
    };
    let updated = repo.update(&created, &req).await.unwrap();

    assert_eq!(updated.name, "Squat");
    assert_eq!(updated.equipment.as_deref(), Some("Barbell"));

    repo.delete(created.id).await.unwrap();
    assert!(matches!(
        repo.find_by_id(created.id).await,
        Err(StorageError::NotFound)
    ));
    assert!(matches!(
        repo.delete(created.id).await,
        Err(StorageError::NotFound)
    ));
}
