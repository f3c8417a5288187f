//! Configuração do servidor, com valores padrão sobrescritos por variáveis de ambiente.

use thiserror::Error;
use tokio::net::TcpListener;

pub const HOST_VAR: &str = "MASK_WEB_HOST";
pub const PORT_VAR: &str = "MASK_WEB_PORT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("porta inválida em {var}: {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSettings {
    pub host: String,
    pub port: u16,
}

impl Default for WebSettings {
    fn default() -> Self {
        WebSettings {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl WebSettings {
    /// Lê `MASK_WEB_HOST` e `MASK_WEB_PORT`; o que faltar usa o padrão.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = WebSettings::default();
        if let Some(host) = lookup(HOST_VAR) {
            settings.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            settings.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: port.clone(),
            })?;
        }
        Ok(settings)
    }

    /// Abre o listener. `host` pode ser um IP ou um nome (`localhost`).
    pub async fn bind(&self) -> std::io::Result<TcpListener> {
        TcpListener::bind((self.host.as_str(), self.port)).await
    }
}
