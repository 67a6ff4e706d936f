pub mod auth;
pub mod cors;

pub use auth::AuthContext;
pub use cors::create_cors;
