use anyhow::Context;
use storage::Database;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod auth;
mod config;
mod error;
mod extract;
mod features;
mod middleware;
mod routes;
mod state;

#[cfg(test)]
mod tests;

use auth::TokenService;
use config::Config;
use features::{auth as auth_api, exercises, progress, users, workout_exercises, workouts};
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth_api::handlers::register,
        auth_api::handlers::login,
        auth_api::handlers::me,
        auth_api::handlers::logout,
        users::handlers::get_profile,
        users::handlers::update_profile,
        users::handlers::delete_profile,
        workouts::handlers::list_workouts,
        workouts::handlers::get_workout,
        workouts::handlers::create_workout,
        workouts::handlers::update_workout,
        workouts::handlers::delete_workout,
        exercises::handlers::list_exercises,
        exercises::handlers::get_exercise,
        exercises::handlers::create_exercise,
        exercises::handlers::update_exercise,
        exercises::handlers::delete_exercise,
        workout_exercises::handlers::list_entries,
        workout_exercises::handlers::get_entry,
        workout_exercises::handlers::create_entry,
        workout_exercises::handlers::update_entry,
        workout_exercises::handlers::delete_entry,
        progress::handlers::list_logs,
        progress::handlers::get_log,
        progress::handlers::create_log,
        progress::handlers::update_log,
        progress::handlers::delete_log,
    ),
    components(
        schemas(
            auth_api::handlers::AuthResponse,
            storage::dto::user::RegisterRequest,
            storage::dto::user::LoginRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::user::UserResponse,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::UpdateWorkoutRequest,
            storage::dto::workout::InlineExerciseRequest,
            storage::dto::workout::WorkoutExerciseDetail,
            storage::dto::workout::WorkoutResponse,
            storage::dto::exercise::CreateExerciseRequest,
            storage::dto::exercise::UpdateExerciseRequest,
            storage::dto::exercise::ExerciseResponse,
            storage::dto::workout_exercise::CreateWorkoutExerciseRequest,
            storage::dto::workout_exercise::UpdateWorkoutExerciseRequest,
            storage::dto::workout_exercise::WorkoutExerciseResponse,
            storage::dto::progress_log::CreateProgressLogRequest,
            storage::dto::progress_log::UpdateProgressLogRequest,
            storage::dto::progress_log::Measurements,
            storage::dto::progress_log::ProgressLogResponse,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and token endpoints"),
        (name = "users", description = "Profile of the authenticated user"),
        (name = "workouts", description = "The caller's workouts"),
        (name = "exercises", description = "Shared exercise library"),
        (name = "workout_exercises", description = "Exercises performed in the caller's workouts"),
        (name = "progress", description = "The caller's body metrics over time"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting FitFlow API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Opening database at: {}", config.database_url);
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?
        .with_password_cost(config.bcrypt_cost);
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_seconds);
    let state = AppState::new(db, tokens);

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        );

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
