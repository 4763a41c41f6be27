use std::collections::HashSet;

use reqwest;

use crate::config::Config;
use crate::models::{RandomUserResponse, RandomUserResult, Usuario};
use crate::utils::AppError;

/// Cliente do randomuser.me. Compartilhado entre workers via `web::Data`;
/// não guarda estado entre requisições além do pool de conexões.
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    client: reqwest::Client,
    api_url: String,
    results: u32,
}

impl RandomUserClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_url: config.random_user_api_url.clone(),
            results: config.random_user_results,
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Busca um lote de usuários no upstream e remove duplicados por `uuid`.
    ///
    /// Uma única chamada de rede, sem retry. Status fora de 2xx conta como
    /// upstream indisponível mesmo que o corpo seja JSON válido.
    pub async fn fetch_usuarios(&self) -> Result<Vec<Usuario>, AppError> {
        log::info!("👥 Fetching {} users from {}", self.results, self.api_url);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("results", self.results)])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Failed to fetch from random user API: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "Random user API error: {}",
                response.status()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::ReadError(format!("Failed to read random user response: {}", e)))?;

        let api_response: RandomUserResponse = serde_json::from_slice(&body)
            .map_err(|e| AppError::DecodeError(format!("Failed to parse random user response: {}", e)))?;

        let received = api_response.results.len();
        let usuarios = dedupe_usuarios(api_response.results);

        log::info!(
            "✅ Received {} users, {} unique after dedupe",
            received,
            usuarios.len()
        );

        Ok(usuarios)
    }
}

/// Mantém apenas a primeira ocorrência de cada `uuid`, preservando a ordem.
pub fn dedupe_usuarios(results: Vec<RandomUserResult>) -> Vec<Usuario> {
    let mut seen: HashSet<String> = HashSet::with_capacity(results.len());
    let mut usuarios = Vec::with_capacity(results.len());

    for result in results {
        if seen.insert(result.login.uuid.clone()) {
            usuarios.push(Usuario::from(result));
        }
    }

    usuarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn entry(uuid: &str, first: &str) -> serde_json::Value {
        json!({
            "login": { "uuid": uuid },
            "name": { "first": first, "last": "Silva" },
            "email": format!("{}@example.com", first.to_lowercase()),
            "location": { "city": "Lisboa", "country": "Portugal" }
        })
    }

    fn results(entries: Vec<serde_json::Value>) -> Vec<RandomUserResult> {
        let response: RandomUserResponse =
            serde_json::from_value(json!({ "results": entries })).unwrap();
        response.results
    }

    fn client_for(api_url: String, results: u32) -> RandomUserClient {
        let config = Config {
            random_user_api_url: api_url,
            random_user_results: results,
            ..Config::default()
        };
        RandomUserClient::new(&config).unwrap()
    }

    #[test]
    fn distinct_ids_are_all_kept_in_order() {
        let usuarios = dedupe_usuarios(results(vec![entry("a1", "Ana"), entry("a2", "Bruno")]));

        let ids: Vec<&str> = usuarios.iter().map(|u| u.uuid.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[test]
    fn duplicate_id_keeps_first_occurrence() {
        let usuarios = dedupe_usuarios(results(vec![entry("dup", "Ana"), entry("dup", "Bruno")]));

        assert_eq!(usuarios.len(), 1);
        assert_eq!(usuarios[0].nombre, "Ana");
        assert_eq!(usuarios[0].email, "ana@example.com");
    }

    #[test]
    fn order_follows_first_occurrence() {
        let usuarios = dedupe_usuarios(results(vec![
            entry("b", "Bia"),
            entry("a", "Ana"),
            entry("b", "Beto"),
            entry("c", "Caio"),
            entry("a", "Alice"),
        ]));

        let names: Vec<&str> = usuarios.iter().map(|u| u.nombre.as_str()).collect();
        assert_eq!(names, vec!["Bia", "Ana", "Caio"]);
    }

    #[test]
    fn empty_results_yield_empty_list() {
        assert!(dedupe_usuarios(Vec::new()).is_empty());
    }

    #[actix_rt::test]
    async fn fetch_requests_configured_count_and_dedupes() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/")
                    .query_param("results", "3");
                then.status(200).json_body(json!({
                    "results": [entry("a1", "Ana"), entry("a2", "Bruno"), entry("a1", "Alice")]
                }));
            })
            .await;

        let usuarios = client_for(server.url("/api/"), 3).fetch_usuarios().await.unwrap();

        mock.assert_async().await;
        assert_eq!(usuarios.len(), 2);
        assert_eq!(usuarios[0].uuid, "a1");
        assert_eq!(usuarios[0].nombre, "Ana");
        assert_eq!(usuarios[1].uuid, "a2");
    }

    #[actix_rt::test]
    async fn non_success_status_is_upstream_unavailable() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/");
                then.status(503).json_body(json!({ "results": [] }));
            })
            .await;

        let err = client_for(server.url("/api/"), 5000).fetch_usuarios().await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable(_)), "got {:?}", err);
    }

    #[actix_rt::test]
    async fn malformed_json_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/");
                then.status(200).body("{\"results\": [");
            })
            .await;

        let err = client_for(server.url("/api/"), 5000).fetch_usuarios().await.unwrap_err();

        assert!(matches!(err, AppError::DecodeError(_)), "got {:?}", err);
    }

    #[actix_rt::test]
    async fn unexpected_shape_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/");
                then.status(200).json_body(json!({ "error": "Uh oh, something has gone wrong." }));
            })
            .await;

        let err = client_for(server.url("/api/"), 5000).fetch_usuarios().await.unwrap_err();

        assert!(matches!(err, AppError::DecodeError(_)), "got {:?}", err);
    }

    #[actix_rt::test]
    async fn connection_refused_is_upstream_unavailable() {
        let err = client_for("http://127.0.0.1:1/api/".to_string(), 5000)
            .fetch_usuarios()
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable(_)), "got {:?}", err);
    }
}
