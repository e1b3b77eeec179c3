use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;

use crate::middleware::token_auth_middleware;
use crate::store::AppState;

/// Assemble the full application router over `state`. Exposed so the
/// integration tests can serve the real router in-process.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // API surface
        .merge(users_routes())
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(post_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn users_routes() -> Router<AppState> {
    use handlers::users;

    Router::new().route("/api/users", post(users::register))
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    // Login is the one /api/auth operation reachable without a token.
    Router::new()
        .route("/api/auth", post(auth::login))
        .merge(
            Router::new()
                .route("/api/auth", get(auth::current_user))
                .route_layer(from_fn(token_auth_middleware)),
        )
}

fn profile_routes() -> Router<AppState> {
    use handlers::profile;

    let public = Router::new()
        .route("/api/profile", get(profile::list_profiles))
        .route("/api/profile/user/:user_id", get(profile::profile_by_user))
        .route("/api/profile/github/:username", get(profile::github_repos));

    let protected = Router::new()
        .route("/api/profile/me", get(profile::my_profile))
        .route(
            "/api/profile",
            post(profile::upsert_profile).delete(profile::delete_account),
        )
        .route("/api/profile/experience", put(profile::add_experience))
        .route(
            "/api/profile/experience/:exp_id",
            delete(profile::delete_experience),
        )
        .route("/api/profile/education", put(profile::add_education))
        .route(
            "/api/profile/education/:edu_id",
            delete(profile::delete_education),
        )
        .route_layer(from_fn(token_auth_middleware));

    public.merge(protected)
}

fn post_routes() -> Router<AppState> {
    use handlers::posts;

    Router::new()
        .route("/api/post", get(posts::list_posts).post(posts::create_post))
        .route(
            "/api/post/:post_id",
            get(posts::get_post).delete(posts::delete_post),
        )
        .route("/api/post/like/:post_id", put(posts::like_post))
        .route("/api/post/unlike/:post_id", put(posts::unlike_post))
        .route("/api/post/comment/:post_id", post(posts::add_comment))
        .route(
            "/api/post/comment/:post_id/:comment_id",
            delete(posts::delete_comment),
        )
        .route_layer(from_fn(token_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "DevLink API",
        "version": version,
        "description": "REST backend for a developer social-profile app",
        "endpoints": {
            "users": "POST /api/users (public - registration)",
            "auth": "POST /api/auth (public - login), GET /api/auth (protected)",
            "profile": "/api/profile[/...] (profiles, experience, education, github)",
            "post": "/api/post[/...] (protected - posts, likes, comments)",
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
