mod auth;
mod config;
mod db;
mod room;
mod store;
mod validation;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{AuthService, PgUserStore, TokenService, UserStore};
use config::AppConfig;
use room::RoomRegistry;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::signup_handler,
        auth::handlers::login_handler,
        auth::handlers::logout_handler,
        auth::handlers::me_handler,
        room::handlers::create_room_handler,
        room::handlers::check_room_handler,
    ),
    components(
        schemas(
            auth::models::SignupRequest,
            auth::models::LoginRequest,
            auth::models::AuthResponse,
            auth::models::UserResponse,
            auth::models::UserDetailsResponse,
            auth::models::MessageResponse,
            room::models::RoomAdmin,
            room::models::CreateRoomResponse,
            room::models::CheckRoomResponse,
        )
    ),
    tags(
        (name = "auth", description = "Signup, login and session endpoints"),
        (name = "room", description = "Room creation and validation endpoints")
    ),
    info(
        title = "Room API",
        version = "1.0.0",
        description = "Cookie-session authentication and room management backend"
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub tokens: Arc<TokenService>,
    pub users: Arc<dyn UserStore>,
    pub rooms: RoomRegistry,
    pub cookie_secure: bool,
}

/// Creates and configures the application router
///
/// Auth endpoints are open; the profile and room endpoints sit behind the
/// session middleware.
fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/me", get(auth::me_handler))
        .route("/api/room/create", get(room::create_room_handler))
        .route("/api/room/check/:room_id", get(room::check_room_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::protect_route,
        ));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/signup", post(auth::signup_handler))
        .route("/login", post(auth::login_handler))
        .route("/logout", post(auth::logout_handler))
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Room API - Starting...");

    let app_config = AppConfig::from_env().expect("Invalid configuration");

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&app_config.database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(db_pool));
    let tokens = Arc::new(TokenService::new(app_config.jwt_secret.clone()));
    let state = AppState {
        auth: Arc::new(AuthService::new(users.clone(), tokens.clone())),
        tokens,
        users,
        rooms: RoomRegistry::new(),
        cookie_secure: app_config.cookie_secure(),
    };

    let app = create_router(state);

    // Start the Axum server
    let addr = app_config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Room API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
