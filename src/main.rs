use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::net::TcpListener;
use todo_api::config::CorsConfig;
use todo_api::routes::{configure, route_not_found};
use todo_api::{AppError, AppState, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn cors(config: &CorsConfig) -> Cors {
    if !config.enabled {
        // CORS disabled - use most restrictive settings
        return Cors::default();
    }

    let cors = if config.allow_any_origin {
        Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_header(actix_web::http::header::CONTENT_TYPE)
    };

    cors.max_age(config.max_age as usize)
}

#[actix_web::main]
async fn main() -> todo_api::Result<()> {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = Settings::new()?;
    info!("Configuration loaded for {} environment", config.environment);

    // Schema is initialized before the listener is bound
    let state = web::Data::new(AppState::connect(config.clone()).await?);

    let listener = TcpListener::bind(config.server.address())?;
    info!("Starting server at http://{}", config.server.address());

    let cors_config = config.cors.clone();
    let server_state = state.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&cors_config))
            .app_data(server_state.clone())
            .configure(configure)
            .default_service(web::to(route_not_found))
    })
    .listen(listener)?
    .workers(config.server.workers as usize)
    .run()
    .await
    .map_err(|e| AppError::InternalError(e.to_string()))?;

    info!("Server stopped, closing database connections");
    state.shutdown().await
}
