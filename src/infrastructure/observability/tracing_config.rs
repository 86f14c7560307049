/// Configuration for tracing initialization, assembled from settings at
/// startup.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Fallback filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            json_format: false,
            level: "info,wawancara=debug,tower_http=debug".to_string(),
        }
    }
}
