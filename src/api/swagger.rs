use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Usuarios Service API",
        version = "1.0.0",
        description = "Fetches a batch of random users from randomuser.me and returns them without repeated `uuid`, in upstream order."
    ),
    paths(
        crate::api::usuarios::get_usuarios,
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::Usuario,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Usuarios", description = "Deduplicated random users."),
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
    )
)]
pub struct ApiDoc;
