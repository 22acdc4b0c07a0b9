//! Server configuration.
//!
//! Loaded in two layers: an optional TOML file, then environment variables.
//! Environment lookups go through a caller-supplied function so tests never
//! touch the process environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listener and static files
    pub server: ServerConfig,
    /// Record and image storage
    pub database: DatabaseConfig,
    /// Outbound email
    pub mail: MailConfig,
    /// Reaction analysis model
    pub analysis: AnalysisConfig,
    /// Admin login and sessions
    pub admin: AdminConfig,
}

/// `[server]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Built frontend to serve for non-API paths
    pub static_dir: Option<PathBuf>,
    /// Largest accepted image upload, in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            static_dir: None,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `[database]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sqlx SQLite URL, or `memory` for a throwaway in-process store
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://flownetics.db".to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the in-process store was requested.
    pub fn is_memory(&self) -> bool {
        self.url.eq_ignore_ascii_case("memory")
    }
}

/// `[mail]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// Mailgun API key
    pub api_key: Option<String>,
    /// Mailgun sending domain
    pub domain: Option<String>,
    /// API host override (EU region)
    pub base_url: Option<String>,
    /// `From` header override
    pub sender: Option<String>,
}

/// `[analysis]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Gemini API key; analysis is disabled without one
    pub api_key: Option<String>,
    /// Model override
    pub model: Option<String>,
    /// API host override
    pub base_url: Option<String>,
}

/// `[admin]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Login name
    pub username: String,
    /// bcrypt hash of the password (`flownetics-server hash-password`)
    pub password_hash: Option<String>,
    /// Token signing secret; a random one is generated when absent
    pub jwt_secret: Option<String>,
    /// Session lifetime in seconds
    pub token_ttl_secs: i64,
    /// Require a session token on admin routes
    pub auth_enabled: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password_hash: None,
            jwt_secret: None,
            token_ttl_secs: flownetics_auth::DEFAULT_TOKEN_TTL_SECS,
            auth_enabled: true,
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    Error::config(format!("cannot read {}: {e}", path.display()))
                })?;
                Self::from_toml_str(&text)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load from `path` and then apply the process environment.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from environment variables fetched through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get("HOST") {
            self.server.host = host;
        }
        if let Some(port) = get("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("PORT must be a port number, got '{port}'")))?;
        }
        if let Some(dir) = get("STATIC_DIR") {
            self.server.static_dir = Some(PathBuf::from(dir));
        }
        if let Some(url) = get("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(key) = get("MAILGUN_API_KEY") {
            self.mail.api_key = Some(key);
        }
        if let Some(domain) = get("MAILGUN_DOMAIN") {
            self.mail.domain = Some(domain);
        }
        if let Some(key) = get("GEMINI_API_KEY") {
            self.analysis.api_key = Some(key);
        }
        if let Some(model) = get("GEMINI_MODEL") {
            self.analysis.model = Some(model);
        }
        if let Some(username) = get("ADMIN_USERNAME") {
            self.admin.username = username;
        }
        if let Some(hash) = get("ADMIN_PASSWORD_HASH") {
            self.admin.password_hash = Some(hash);
        }
        if let Some(secret) = get("ADMIN_JWT_SECRET") {
            self.admin.jwt_secret = Some(secret);
        }
        Ok(())
    }

    /// Reject settings the server cannot start with.
    pub fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(Error::config("database.url must not be empty"));
        }
        if self.admin.token_ttl_secs <= 0 {
            return Err(Error::config("admin.token_ttl_secs must be positive"));
        }
        if self.admin.username.trim().is_empty() {
            return Err(Error::config("admin.username must not be empty"));
        }
        Ok(())
    }
}
