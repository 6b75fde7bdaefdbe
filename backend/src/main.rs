use axum::{
    routing::{get, post},
    Router,
};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

mod handlers {
    pub mod application_handlers;
}
mod models {
    pub mod application_models;
}
mod repositories {
    pub mod application_repository;
}
mod schema;

use handlers::application_handlers;
use repositories::application_repository::{ensure_schema, ApplicationRepository};

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    pub application_repository: Arc<ApplicationRepository>,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Set up database connection pool
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "database.db".to_string());
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    ensure_schema(&pool).expect("Failed to set up database schema");

    let state = Arc::new(AppState {
        application_repository: Arc::new(ApplicationRepository::new(pool)),
    });

    // Create router with CORS
    let app = Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/school-applications",
            post(application_handlers::submit_application),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any) // Be cautious with `Any` in production; restrict to your frontend origin
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        )
        .with_state(state);

    use tokio::net::TcpListener;

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    tracing::info!("Lead intake service listening on http://{}", bind_addr);
    let listener = TcpListener::bind(&bind_addr).await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
