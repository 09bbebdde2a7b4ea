pub mod exercise;
pub mod progress_log;
pub mod user;
pub mod workout;
pub mod workout_exercise;
