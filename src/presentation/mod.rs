pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, ScoringProvider, Settings, TopicsProvider, TranscriptionProvider};
pub use router::create_router;
pub use state::AppState;
