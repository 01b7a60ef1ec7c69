// Authentication module
// Cookie-carried JWT sessions with signup, login, logout and a route guard

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, logout_handler, me_handler, signup_handler};
pub use middleware::{protect_route, AuthenticatedUser};
pub use models::{AuthResponse, LoginRequest, MessageResponse, SignupRequest, User, UserResponse};
pub use repository::{PgUserStore, UserStore};
pub use service::AuthService;
pub use token::{TokenService, SESSION_COOKIE};
