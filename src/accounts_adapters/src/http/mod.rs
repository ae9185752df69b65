pub mod middleware;
pub mod routes;

pub use middleware::require_bearer_token;
