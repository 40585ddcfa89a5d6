pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use config::Config;
pub use error::AppError;
pub use routes::AppState;
pub use server::app;
