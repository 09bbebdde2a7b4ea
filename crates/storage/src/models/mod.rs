mod exercise;
mod progress_log;
mod user;
mod workout;
mod workout_exercise;

pub use exercise::{Exercise, ExerciseCategory};
pub use progress_log::ProgressLog;
pub use user::User;
pub use workout::Workout;
pub use workout_exercise::WorkoutExercise;
