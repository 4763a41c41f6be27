use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::config::Config;
use crate::services::RandomUserClient;
use crate::utils::AppError;

const GENERIC_ERROR_MESSAGE: &str = "Internal server error";
const ENCODE_ERROR_MESSAGE: &str = "Error encoding response";

/// GET /usuarios
/// Retorna um lote de usuários do randomuser.me sem `uuid` repetido
#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Usuarios",
    responses(
        (status = 200, description = "Unique users in upstream order", body = [crate::models::Usuario]),
        (status = 500, description = "Upstream or encoding failure", body = String, content_type = "text/plain")
    )
)]
pub async fn get_usuarios(
    client: web::Data<RandomUserClient>,
    config: web::Data<Config>,
) -> HttpResponse {
    log::info!("👥 GET /usuarios");

    let usuarios = match client.fetch_usuarios().await {
        Ok(usuarios) => usuarios,
        Err(e) => {
            log::error!("❌ Failed to fetch users: {}", e);
            let message = if config.expose_error_details {
                e.to_string()
            } else {
                GENERIC_ERROR_MESSAGE.to_string()
            };
            return error_response(message);
        }
    };

    // Serializa tudo antes de responder: uma falha aqui ainda vira um 500 limpo.
    match serde_json::to_vec(&usuarios).map_err(|e| AppError::EncodeError(e.to_string())) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(e) => {
            log::error!("❌ Failed to encode users: {}", e);
            error_response(ENCODE_ERROR_MESSAGE.to_string())
        }
    }
}

fn error_response(message: String) -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(ContentType::plaintext())
        .body(message)
}
