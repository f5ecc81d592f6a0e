use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use hood_match::config::Settings;
use hood_match::core::Matcher;
use hood_match::routes::{self, AppState, json_error_handler, query_error_handler};
use hood_match::services::{Catalog, PreferenceSessions};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());
    init_logging(&settings.logging.level, &log_format);

    info!("Starting Hood Match service...");

    let catalog = match Catalog::load(settings.catalog.path.as_deref()) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            error!("Failed to load neighborhood catalog: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()));
        }
    };

    info!(
        "Catalog loaded: {} neighborhoods across {:?}",
        catalog.len(),
        catalog.cities()
    );

    let sessions = PreferenceSessions::new(settings.sessions.capacity, settings.sessions.ttl_secs);

    info!(
        "Preference sessions initialized (capacity: {}, TTL: {}s)",
        settings.sessions.capacity, settings.sessions.ttl_secs
    );

    let matcher = Matcher::new(settings.matching.default_limit, settings.matching.max_limit);

    let app_state = AppState {
        catalog,
        sessions,
        matcher,
        max_compare: settings.matching.max_compare,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
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
