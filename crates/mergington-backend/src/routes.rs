use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::Redirect,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::AppState;
use crate::handlers::{activities, health};

/// Where `/` sends browsers.
pub const LANDING_PAGE: &str = "/static/index.html";

fn cors() -> CorsLayer {
    let origins = if cfg!(debug_assertions) {
        let dev_ports = [3000, 8000, 8080, 8081, 5173];
        let mut allowed_origins = Vec::new();
        for port in dev_ports {
            allowed_origins.push(format!("http://localhost:{port}"));
            allowed_origins.push(format!("http://127.0.0.1:{port}"));
        }
        allowed_origins
    } else {
        // Production origins - add your domains here
        vec![]
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        ))
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
}

/// Setup the routes for the server and configure CORS and request tracing.
pub fn setup_routes(state: Arc<AppState>, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/health", get(health::get))
        .route("/activities", get(activities::list))
        .route("/activities/{activity}/signup", post(activities::signup))
        .route(
            "/activities/{activity}/unregister",
            post(activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors()),
        )
        .with_state(state)
}
