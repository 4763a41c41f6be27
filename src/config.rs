use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RANDOM_USER_API_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_RANDOM_USER_RESULTS: u32 = 5000;

/// Configuração do serviço, lida das variáveis de ambiente (e do `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub random_user_api_url: String,
    pub random_user_results: u32,
    /// `None` mantém o comportamento padrão do transporte (sem timeout).
    pub upstream_timeout: Option<Duration>,
    /// Quando `false`, o 500 devolve uma mensagem genérica e o detalhe fica só no log.
    pub expose_error_details: bool,
}

#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid value for {}: '{}'", self.key, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            random_user_api_url: DEFAULT_RANDOM_USER_API_URL.to_string(),
            random_user_results: DEFAULT_RANDOM_USER_RESULTS,
            upstream_timeout: None,
            expose_error_details: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse("UPSTREAM_TIMEOUT_SECS", raw)?)),
            None => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .map(|raw| parse("PORT", raw))
                .transpose()?
                .unwrap_or(defaults.port),
            random_user_api_url: lookup("RANDOM_USER_API_URL")
                .unwrap_or(defaults.random_user_api_url),
            random_user_results: lookup("RANDOM_USER_RESULTS")
                .map(|raw| parse("RANDOM_USER_RESULTS", raw))
                .transpose()?
                .unwrap_or(defaults.random_user_results),
            upstream_timeout,
            expose_error_details: lookup("EXPOSE_ERROR_DETAILS")
                .map(|raw| parse("EXPOSE_ERROR_DETAILS", raw))
                .transpose()?
                .unwrap_or(defaults.expose_error_details),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError { key, value: raw })
}
