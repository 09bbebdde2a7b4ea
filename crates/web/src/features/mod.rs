pub mod auth;
pub mod exercises;
pub mod progress;
pub mod users;
pub mod workout_exercises;
pub mod workouts;
