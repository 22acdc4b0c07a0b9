//! Shared handler state.

use std::sync::Arc;

use flownetics_analysis::{GeminiClient, ReactionAnalyzer};
use flownetics_auth::{AdminCredentials, AuthConfig, JwtAuthority};
use flownetics_mail::{MailgunMailer, Mailer, UnconfiguredMailer};
use flownetics_storage::{BlobStore, DocumentStore, MemoryBlobStore, MemoryStore, SqliteStore};

use crate::config::{AdminConfig, AnalysisConfig, AppConfig, MailConfig};
use crate::Result;

/// Everything a request handler needs, injected at startup.
///
/// Cloning is cheap: every field is a handle.
#[derive(Clone)]
pub struct AppState {
    /// Record storage
    pub store: Arc<dyn DocumentStore>,
    /// Blog image storage
    pub blobs: Arc<dyn BlobStore>,
    /// Outbound email
    pub mailer: Arc<dyn Mailer>,
    /// Reaction analysis, when a model is configured
    pub analyzer: Option<ReactionAnalyzer>,
    /// Session token issuer/validator
    pub authority: Arc<JwtAuthority>,
    /// Admin middleware settings
    pub auth_config: AuthConfig,
    /// Admin login, when a password hash is configured
    pub credentials: Option<AdminCredentials>,
    /// Largest accepted image upload, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    /// State with the given backends, auth enabled, no analyzer and no admin login.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        blobs: Arc<dyn BlobStore>,
        mailer: Arc<dyn Mailer>,
        authority: Arc<JwtAuthority>,
    ) -> Self {
        Self {
            store,
            blobs,
            mailer,
            analyzer: None,
            authority,
            auth_config: AuthConfig::default(),
            credentials: None,
            max_upload_bytes: crate::config::ServerConfig::default().max_upload_bytes,
        }
    }

    /// Enable reaction analysis.
    pub fn with_analyzer(mut self, analyzer: ReactionAnalyzer) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Enable admin login.
    pub fn with_credentials(mut self, credentials: AdminCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Turn admin token checks on or off.
    pub fn with_auth_enabled(mut self, enabled: bool) -> Self {
        self.auth_config.enabled = enabled;
        self
    }

    /// Build state from configuration, connecting to storage and providers.
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        let (store, blobs) = open_storage(&config.database.url, config.database.is_memory()).await?;
        let mailer = build_mailer(&config.mail)?;
        let authority = Arc::new(build_authority(&config.admin));

        let mut state = Self::new(store, blobs, mailer, authority)
            .with_auth_enabled(config.admin.auth_enabled);
        state.max_upload_bytes = config.server.max_upload_bytes;

        if let Some(analyzer) = build_analyzer(&config.analysis)? {
            state = state.with_analyzer(analyzer);
        }

        match &config.admin.password_hash {
            Some(hash) => {
                state = state.with_credentials(AdminCredentials::new(&config.admin.username, hash));
            }
            None => tracing::warn!("ADMIN_PASSWORD_HASH is not set; admin login is disabled"),
        }
        if !config.admin.auth_enabled {
            tracing::warn!("admin authentication is disabled; admin routes are open");
        }

        Ok(state)
    }
}

async fn open_storage(
    url: &str,
    in_memory: bool,
) -> Result<(Arc<dyn DocumentStore>, Arc<dyn BlobStore>)> {
    if in_memory {
        tracing::warn!("using in-memory storage; data is lost on restart");
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let blobs: Arc<dyn BlobStore> = Arc::new(MemoryBlobStore::new());
        return Ok((store, blobs));
    }
    let sqlite = SqliteStore::connect(url).await?;
    let store: Arc<dyn DocumentStore> = Arc::new(sqlite.clone());
    let blobs: Arc<dyn BlobStore> = Arc::new(sqlite);
    Ok((store, blobs))
}

fn build_mailer(config: &MailConfig) -> Result<Arc<dyn Mailer>> {
    let (Some(api_key), Some(domain)) = (&config.api_key, &config.domain) else {
        let missing = if config.api_key.is_none() {
            "MAILGUN_API_KEY environment variable is required"
        } else {
            "MAILGUN_DOMAIN environment variable is required"
        };
        tracing::error!("{missing}; ROI report emails will fail");
        return Ok(Arc::new(UnconfiguredMailer::new(missing)));
    };

    let mut mailer = MailgunMailer::new(api_key, domain)?;
    if let Some(base_url) = &config.base_url {
        mailer = mailer.with_base_url(base_url);
    }
    if let Some(sender) = &config.sender {
        mailer = mailer.with_sender(sender);
    }
    tracing::info!(domain = %domain, sender = %mailer.sender(), "mailgun configured");
    Ok(Arc::new(mailer))
}

fn build_analyzer(config: &AnalysisConfig) -> Result<Option<ReactionAnalyzer>> {
    let Some(api_key) = &config.api_key else {
        tracing::info!("GEMINI_API_KEY is not set; reaction analysis is disabled");
        return Ok(None);
    };
    let mut client = GeminiClient::new(api_key)?;
    if let Some(model) = &config.model {
        client = client.with_model(model);
    }
    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url);
    }
    tracing::info!(model = %client.model(), "reaction analysis enabled");
    Ok(Some(ReactionAnalyzer::new(Arc::new(client))))
}

fn build_authority(config: &AdminConfig) -> JwtAuthority {
    let secret = match &config.jwt_secret {
        Some(secret) => secret.clone(),
        None => {
            tracing::warn!("ADMIN_JWT_SECRET is not set; sessions will not survive a restart");
            format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple())
        }
    };
    JwtAuthority::new(secret.as_bytes()).with_ttl_secs(config.token_ttl_secs)
}
