use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use ai_stylist::config::{LoggingSettings, Settings};
use ai_stylist::core::Stylist;
use ai_stylist::routes::{self, AppState};
use ai_stylist::services::{
    build_http_client, ChatCompletionsClient, CompletionOptions, OpenWeatherClient, PexelsClient,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_logging(&settings.logging);

    info!("Starting AI stylist service...");

    let http = build_http_client(settings.http.timeout_secs).map_err(|e| {
        error!("Failed to create HTTP client: {}", e);
        std::io::Error::other(e)
    })?;

    for (name, key) in [
        ("weather", &settings.weather.api_key),
        ("llm", &settings.llm.api_key),
        ("photos", &settings.photos.api_key),
    ] {
        if key.is_empty() {
            tracing::warn!("No API key configured for the {} provider", name);
        }
    }

    let weather = Arc::new(OpenWeatherClient::new(
        settings.weather.endpoint.clone(),
        settings.weather.api_key.clone(),
        http.clone(),
    ));

    let reasoning = Arc::new(ChatCompletionsClient::new(
        settings.llm.endpoint.clone(),
        settings.llm.api_key.clone(),
        CompletionOptions {
            model: settings.llm.model.clone(),
            temperature: settings.llm.temperature,
            max_tokens: settings.llm.max_tokens,
        },
        http.clone(),
    ));

    let photos = Arc::new(PexelsClient::new(
        settings.photos.endpoint.clone(),
        settings.photos.api_key.clone(),
        settings.photos.per_page,
        http,
    ));

    let stylist = Stylist::new(weather, reasoning, photos)
        .with_placeholder(settings.photos.placeholder_url.clone());

    info!(
        "Providers initialized (model: {}, timeout: {}s)",
        settings.llm.model, settings.http.timeout_secs
    );

    let app_state = AppState {
        stylist: Arc::new(stylist),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
