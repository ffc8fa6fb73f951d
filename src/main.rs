use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{middleware, web, App, HttpServer};
use examgen::config::Settings;
use examgen::routes::{self, exam::AppState, handle_json_payload_error};
use examgen::services::GeminiClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting exam generation service...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    // Initialize the Gemini client; a missing key is logged but not fatal so
    // the health endpoint stays up while generation fails uniformly.
    let gemini = match settings.gemini.api_key.clone() {
        Some(api_key) => {
            info!("Gemini client initialized (model: {})", settings.gemini.model);
            Some(Arc::new(GeminiClient::new(
                api_key,
                settings.gemini.model.clone(),
            )))
        }
        None => {
            error!("Gemini API key not configured on server");
            None
        }
    };

    // Build application state
    let app_state = AppState { gemini };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let serve_static = settings.is_production();
    let static_dir = settings.static_files.dir.clone();

    if serve_static {
        info!("Serving UI bundle from {}", static_dir);
    }

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        let app = App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes);

        if serve_static {
            // Single-page-app fallback: unmatched paths get the entry document
            let index = PathBuf::from(&static_dir).join("index.html");
            app.service(
                Files::new("/", &static_dir)
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(&index).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            )
        } else {
            app
        }
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
