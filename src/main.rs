//! Apis admin backend entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Ensure the data directory exists
//! 3. Seed the admin user if the users document is empty
//! 4. Build router with API routes + static site serving
//! 5. Apply the admin-area request interceptor
//! 6. Start Axum server

use apis_admin::{
    auth::middleware::AppState, config::Config, interceptor::admin_gate, routes,
    storage::{self, JsonStore},
};
use std::sync::Arc;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() {
    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load config from environment
    let config = Config::from_env().expect("Failed to load config");
    tracing::info!(
        environment = %config.environment,
        "Starting apis-admin on {}",
        config.bind_addr
    );

    // Data directory must exist before the first document write
    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .expect("Failed to create data directory");

    let store = JsonStore::new(&config.data_dir);

    // Seed an admin user into an empty users document
    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        let created = storage::users::seed_admin(&store, email, password, &config.admin_name)
            .await
            .expect("Failed to seed admin user");
        if created {
            tracing::info!(action = "admin_seeded", email = %email, "Admin user created");
        }
    } else {
        tracing::debug!("ADMIN_EMAIL/ADMIN_PASSWORD not set; skipping admin seed");
    }

    let static_dir = config.static_dir.clone();
    let bind_addr = config.bind_addr;

    // Build shared state
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    // Build router:
    // - API routes (with state)
    // - Static site serving (fallback)
    // - Admin-area interceptor over everything
    let app = routes::api_router()
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(admin_gate))
        .with_state(state);

    // Bind to configured address
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
