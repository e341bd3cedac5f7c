// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
    routing::post,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{analytics, auth, challenge, leaderboard, question, submission},
    state::AppState,
    utils::jwt::{auth_middleware, teacher_middleware},
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, challenges, submissions, leaderboard, analytics, questions).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Store, Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://127.0.0.1:3000"),
        HeaderValue::from_static("http://localhost:8080"),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let require_auth = middleware::from_fn_with_state(state.clone(), auth_middleware);

    // Auth first, then the teacher check. Layers run outside in.
    let teacher_only = ServiceBuilder::new()
        .layer(require_auth.clone())
        .layer(middleware::from_fn(teacher_middleware));

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .merge(
            Router::new()
                .route("/me", get(auth::me))
                .layer(require_auth.clone()),
        )
        .merge(
            Router::new()
                .route("/teachers", post(auth::create_teacher))
                .layer(teacher_only.clone()),
        );

    let challenge_routes = Router::new()
        .route("/", post(challenge::create_challenge))
        .layer(teacher_only.clone())
        .merge(
            Router::new()
                .route("/", get(challenge::list_challenges))
                .route("/{id}", get(challenge::get_challenge))
                .layer(require_auth.clone()),
        );

    let submission_routes = Router::new()
        .route(
            "/",
            get(submission::list_submissions).post(submission::submit_answer),
        )
        .layer(require_auth.clone());

    let leaderboard_routes = Router::new()
        .route("/", get(leaderboard::get_leaderboard))
        .merge(
            Router::new()
                .route("/me", get(leaderboard::my_standing))
                .layer(require_auth.clone()),
        );

    let analytics_routes = Router::new()
        .route("/", get(analytics::get_analytics))
        .layer(teacher_only.clone());

    let question_routes = Router::new()
        .route("/", post(question::create_question))
        .layer(teacher_only)
        .merge(
            Router::new()
                .route("/", get(question::list_questions))
                .route("/{id}", get(question::get_question))
                .layer(require_auth),
        );

    Router::new()
        .route("/", get(|| async { "Welcome to the backend API!" }))
        .route("/api/challenge", get(challenge::todays_challenge))
        .nest("/api/auth", auth_routes)
        .nest("/api/challenges", challenge_routes)
        .nest("/api/submissions", submission_routes)
        .nest("/api/leaderboard", leaderboard_routes)
        .nest("/api/analytics", analytics_routes)
        .nest("/api/questions", question_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
