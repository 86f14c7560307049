mod analyze;
mod health;
mod upload;

pub use analyze::{analyze_handler, ErrorResponse};
pub use health::health_handler;
pub use upload::upload_handler;
