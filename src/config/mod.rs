use crate::error::{ClientError, Result};
use dashmap::DashMap;
use std::env;
use std::sync::Arc;
use url::Url;

pub const BASE_URL_KEY: &str = "TIENDA_API_URL";
pub const TOKEN_KEY: &str = "TIENDA_API_TOKEN";
pub const USER_AGENT_KEY: &str = "TIENDA_API_USER_AGENT";

/// The backend binds port 5000 by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/";

/// Key/value configuration store
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from the process environment.
    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Settings for [`crate::ProductClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub auth_token: Option<String>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            auth_token: None,
            user_agent: default_user_agent(),
        })
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn from_service(config: &ConfigService) -> Result<Self> {
        let base_url = config
            .get(BASE_URL_KEY)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut client_config = Self::new(&base_url)?;
        client_config.auth_token = config.get(TOKEN_KEY).filter(|t| !t.is_empty());
        if let Some(user_agent) = config.get(USER_AGENT_KEY) {
            client_config.user_agent = user_agent;
        }

        tracing::debug!(
            base_url = %client_config.base_url,
            auth = client_config.auth_token.is_some(),
            "Loaded client configuration"
        );
        Ok(client_config)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_service(&ConfigService::from_env())
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Endpoint paths are joined onto the base URL, so it must be an http(s) URL
/// whose path ends with `/`.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::config(format!(
            "unsupported scheme `{}` in base URL",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::new("http://tienda.local:8080/backend").unwrap();
        assert_eq!(config.base_url.as_str(), "http://tienda.local:8080/backend/");

        let config = ClientConfig::new("http://tienda.local").unwrap();
        assert_eq!(config.base_url.as_str(), "http://tienda.local/");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(matches!(
            ClientConfig::new("ftp://tienda.local"),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_from_service() {
        let service = ConfigService::new();
        service.set(BASE_URL_KEY, "https://api.tienda.example");
        service.set(TOKEN_KEY, "secret");
        service.set(USER_AGENT_KEY, "inventario-panel/2.0");

        let config = ClientConfig::from_service(&service).unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.tienda.example/");
        assert_eq!(config.auth_token.as_deref(), Some("secret"));
        assert_eq!(config.user_agent, "inventario-panel/2.0");
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ClientConfig::from_service(&ConfigService::new()).unwrap();
        assert_eq!(config, ClientConfig::new(DEFAULT_BASE_URL).unwrap());
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_token_means_no_auth() {
        let service = ConfigService::new();
        service.set(TOKEN_KEY, "");
        let config = ClientConfig::from_service(&service).unwrap();
        assert!(config.auth_token.is_none());
    }
}
