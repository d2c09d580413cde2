use std::sync::Arc;

use clap::Parser;
use shorts_datastore::{HistoryBackend, PgHistoryStore};
use shorts_engine::{
    http::{router, AppState},
    tracing::init_tracing_subscriber,
    yt::{oembed::OEmbedClient, transcript::CaptionScraper},
    GatewayClient, ImageChain, ImageProvider, OpenAiClient, ShortsPipelineBuilder, TextRouter,
};

#[derive(Parser)]
#[command(name = "shorts-server", about = "Spirit shorts generation service")]
struct Cli {
    /// Address to bind the HTTP server on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind the HTTP server on
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,

    /// AI gateway base URL
    #[arg(long, env = "AI_GATEWAY_URL", default_value = GatewayClient::DEFAULT_BASE_URL)]
    gateway_url: String,

    /// AI gateway auth token
    #[arg(long, env = "AI_GATEWAY_API_KEY")]
    gateway_token: Option<String>,

    /// Direct OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: Option<String>,

    /// Postgres connection URL for the history store
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Model routed through the gateway for the text facets
    #[arg(long, env = "TEXT_MODEL", default_value = GatewayClient::DEFAULT_TEXT_MODEL)]
    text_model: String,

    /// Gateway routing header value for text requests
    #[arg(long, env = "TEXT_PROVIDER", default_value = GatewayClient::DEFAULT_PROVIDER)]
    text_provider: String,

    /// Image provider chain, tried in order
    #[arg(
        long,
        env = "IMAGE_PROVIDERS",
        value_delimiter = ',',
        default_value = "openai"
    )]
    image_providers: Vec<ImageBackend>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ImageBackend {
    /// Direct DALL-E call
    #[value(name = "openai")]
    OpenAi,
    /// Image model routed through the gateway
    #[value(name = "gateway")]
    Gateway,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    // Alternate variable names kept for compatibility with earlier deploys.
    let gateway_token = cli
        .gateway_token
        .or_else(|| std::env::var("AI_GATEWAY_TOKEN").ok());
    let database_url = cli
        .database_url
        .or_else(|| std::env::var("SUPABASE_DB_URL").ok());

    tracing::info!(
        gateway_url = %cli.gateway_url,
        gateway_token = if gateway_token.is_some() { "present" } else { "missing" },
        openai_key = if cli.openai_key.is_some() { "present" } else { "missing" },
        database = if database_url.is_some() { "present" } else { "missing" },
        "Provider configuration"
    );

    let store = match &database_url {
        Some(url) => match PgHistoryStore::init(url).await {
            Ok(store) => HistoryBackend::Postgres(store),
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    "Failed to initialize history store, continuing without persistence"
                );
                HistoryBackend::Disabled
            }
        },
        None => {
            tracing::warn!("No database URL configured, history persistence disabled");
            HistoryBackend::Disabled
        }
    };

    let gateway = GatewayClient::new(
        gateway_token
            .clone()
            .or_else(|| cli.openai_key.clone())
            .unwrap_or_default(),
    )
    .with_base_url(&cli.gateway_url)
    .with_provider(&cli.text_provider)
    .with_text_model(&cli.text_model);

    let openai = OpenAiClient::new(cli.openai_key.clone().unwrap_or_default());

    let text_router = if gateway_token.is_some() {
        TextRouter::Gateway(gateway.clone())
    } else {
        TextRouter::OpenAi(openai.clone())
    };

    let image_chain = ImageChain::new(
        cli.image_providers
            .iter()
            .map(|backend| match backend {
                ImageBackend::OpenAi => ImageProvider::OpenAi(openai.clone()),
                ImageBackend::Gateway => ImageProvider::Gateway(gateway.clone()),
            })
            .collect(),
    );

    let pipeline = ShortsPipelineBuilder::new()
        .metadata_fetcher(OEmbedClient::default())
        .transcript_fetcher(CaptionScraper::default())
        .text_generator(text_router)
        .image_generator(image_chain)
        .store(store.clone())
        .build();

    let app = router(Arc::new(AppState { pipeline, store }));

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening for requests");
    axum::serve(listener, app).await?;

    Ok(())
}
