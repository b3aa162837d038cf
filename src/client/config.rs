use log::info;
use std::env;

/// Client-side configuration, resolved once at startup and passed into the
/// services that need it rather than read from a global.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_url: String,
}

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());

        let config = ClientConfig { backend_url };
        info!("Client configuration loaded:");
        info!("  Backend URL: {}", config.backend_url);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_env_override_and_default() {
        env::set_var("BACKEND_URL", "http://backend.test:9000");
        assert_eq!(
            ClientConfig::from_env().backend_url,
            "http://backend.test:9000"
        );

        env::remove_var("BACKEND_URL");
        assert_eq!(ClientConfig::from_env().backend_url, DEFAULT_BACKEND_URL);
    }
}
