pub mod health;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::ai;
use crate::auth::require_owner;
use crate::resumes::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.client_url);

    let resume_routes = Router::new()
        .route(
            "/",
            get(handlers::handle_list_resumes).post(handlers::handle_create_resume),
        )
        .route(
            "/:id",
            get(handlers::handle_get_resume)
                .put(handlers::handle_update_resume)
                .delete(handlers::handle_delete_resume),
        )
        .layer(middleware::from_fn(require_owner));

    // Same owner-identity gate as the resume routes; the CORS layer sits
    // outside it so preflight requests are answered before authentication.
    let ai_routes = Router::new()
        .route("/generate", post(ai::handlers::handle_generate_content))
        .layer(middleware::from_fn(require_owner))
        .layer(cors);

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/resumes", resume_routes)
        .nest("/api/ai", ai_routes)
        .with_state(state)
}

/// CORS policy for the browser client: single configured origin, the verbs
/// the client uses, and its request headers.
fn cors_layer(client_url: &str) -> CorsLayer {
    let origin = client_url
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:5173"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}
