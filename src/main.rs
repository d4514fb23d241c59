use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use reelbrief::application::services::ProcessingService;
use reelbrief::infrastructure::llm::SummarizerFactory;
use reelbrief::infrastructure::observability::{TracingConfig, init_tracing};
use reelbrief::infrastructure::text_processing::ExtractorFactory;
use reelbrief::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load configuration")?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let file_loader = ExtractorFactory::create(&settings.extraction);
    let summarizer = SummarizerFactory::create(&settings.llm)?;

    let processing_service = Arc::new(ProcessingService::new(
        file_loader,
        summarizer,
        settings.extraction.max_file_size_bytes(),
    ));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server host/port")?;

    let state = AppState {
        processing_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
