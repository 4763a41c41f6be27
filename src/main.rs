mod api;
mod config;
mod middleware;
mod models;
mod services;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::services::RandomUserClient;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("❌ {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    run(config).await
}

async fn run(config: Config) -> io::Result<()> {
    log::info!("🚀 Starting Usuarios Service...");

    let client = RandomUserClient::new(&config)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    log::info!("👥 Upstream: {} ({} results per request)", client.api_url(), config.random_user_results);

    let bind_address = config.bind_address();
    let client_data = web::Data::new(client);
    let config_data = web::Data::new(config);

    log::info!("🌐 Server starting on http://{}", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    HttpServer::new(move || {
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(client_data.clone())
            .app_data(config_data.clone())
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .route("/health", web::get().to(api::health::health_check))
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            .route("/usuarios", web::get().to(api::usuarios::get_usuarios))
    })
    .bind(bind_address)?
    .run()
    .await
}
