use thiserror::Error;

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_LOG_FILTER: &str = "book_catalog=info,tower_http=info";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}'")]
    Port(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Answer 404 instead of `200 null` when a single-book lookup misses.
    pub strict_lookup: bool,
    pub public_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            strict_lookup: false,
            public_url: format!("http://localhost:{}", DEFAULT_PORT),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Port(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let strict_lookup = lookup("STRICT_LOOKUP")
            .map(|raw| parse_flag(&raw))
            .unwrap_or(false);

        let public_url = lookup("PUBLIC_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| format!("http://localhost:{}", port));

        Ok(Self {
            host,
            port,
            strict_lookup,
            public_url,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
