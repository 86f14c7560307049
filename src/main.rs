use std::sync::Arc;
use std::time::Duration;

use config::Environment as EnvironmentSource;
use config::{Config, File};
use tokio::net::TcpListener;

use wawancara::application::ports::AudioExtractor;
use wawancara::application::services::AnalysisService;
use wawancara::infrastructure::audio::{FfmpegAudioExtractor, TranscriptionEngineFactory};
use wawancara::infrastructure::llm::AssessorFactory;
use wawancara::infrastructure::observability::{init_tracing, TracingConfig};
use wawancara::presentation::{create_router, AppState, Environment, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    let configuration = Config::builder()
        .add_source(
            File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
        )
        .add_source(EnvironmentSource::with_prefix("APP").separator("_"))
        .build()?;

    let settings: Settings = configuration.try_deserialize()?;

    init_tracing(
        TracingConfig {
            environment: environment.to_string(),
            json_format: settings.logging.enable_json,
            level: settings.logging.level.clone(),
        },
        settings.server.port,
    );

    let api_key = std::env::var("OPENAI_API_KEY").ok();
    let timeout = Duration::from_secs(settings.openai.request_timeout_seconds);

    let assessor = AssessorFactory::create_assessor(
        settings.analysis.scoring,
        settings.openai.scoring_model.clone(),
        api_key.clone(),
        settings.openai.base_url.clone(),
        timeout,
    )?;

    let topic_model = AssessorFactory::create_topic_model(
        settings.analysis.topics,
        settings.openai.topics_model.clone(),
        api_key.clone(),
        settings.openai.base_url.clone(),
        timeout,
    )?;

    let transcription_engine = TranscriptionEngineFactory::create(
        settings.analysis.transcription,
        settings.openai.whisper_model.clone(),
        api_key,
        settings.openai.base_url.clone(),
        timeout,
    )?;

    let audio_extractor: Option<Arc<dyn AudioExtractor>> = match &transcription_engine {
        Some(_) => Some(Arc::new(FfmpegAudioExtractor::new(None, None))),
        None => None,
    };

    let analysis_service = Arc::new(AnalysisService::new(
        assessor,
        topic_model,
        transcription_engine,
        audio_extractor,
    ));

    let state = AppState {
        analysis_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let listener = TcpListener::bind(format!(
        "{}:{}",
        settings.server.host, settings.server.port
    ))
    .await?;

    tracing::info!(
        "API server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, router).await?;

    Ok(())
}
