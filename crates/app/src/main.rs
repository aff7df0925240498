//! Atelier back-office client binary.
//!
//! Wires the adapters to the session core, resumes or opens a session,
//! and prints a short operational overview. Configuration comes from
//! `ATELIER_*` environment variables.

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use atelier_application::ports::{HttpTransport, TokenStorage};
use atelier_application::{
    ApiClient, AuthService, Authenticator, DashboardService, MemoryTokenStorage, SessionStore,
};
use atelier_domain::LoginRequest;
use atelier_infrastructure::{FileTokenStorage, ReqwestTransport};

/// Settings read from `ATELIER_*` environment variables.
#[derive(Debug, Deserialize)]
struct AppConfig {
    /// API root, e.g. `https://school.example/api/v1`.
    base_url: String,
    /// Login email; only needed when no stored session can be resumed.
    #[serde(default)]
    email: Option<String>,
    /// Login password.
    #[serde(default)]
    password: Option<String>,
    /// Keep the session across restarts.
    #[serde(default)]
    remember: bool,
    /// Deadline for the token refresh call, in seconds.
    #[serde(default = "default_refresh_timeout_secs")]
    refresh_timeout_secs: u64,
}

const fn default_refresh_timeout_secs() -> u64 {
    30
}

impl AppConfig {
    fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("ATELIER"))
            .build()?
            .try_deserialize()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = AppConfig::load()?;
    let base_url = Url::parse(&cfg.base_url)?;

    let durable: Arc<dyn TokenStorage> = Arc::new(FileTokenStorage::in_config_dir()?);
    let ephemeral: Arc<dyn TokenStorage> = Arc::new(MemoryTokenStorage::new());
    let store = Arc::new(SessionStore::new(durable, ephemeral));
    store.hydrate().await;

    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new()?);
    let refresh_url = format!("{}/auth/refresh", base_url.as_str().trim_end_matches('/'));
    let authenticator = Arc::new(
        Authenticator::new(transport, Arc::clone(&store), refresh_url)
            .with_refresh_timeout(Duration::from_secs(cfg.refresh_timeout_secs)),
    );

    let mut events = authenticator.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            tracing::warn!(?event, "session ended");
        }
    });

    let client = Arc::new(ApiClient::new(Arc::clone(&authenticator), base_url));
    let auth = AuthService::new(Arc::clone(&client), Arc::clone(&store));

    let user = if store.is_authenticated().await {
        tracing::info!("resuming stored session");
        auth.load_me().await?
    } else {
        let (Some(email), Some(password)) = (cfg.email.clone(), cfg.password.clone()) else {
            return Err("no stored session; set ATELIER_EMAIL and ATELIER_PASSWORD".into());
        };
        auth.login(&LoginRequest { email, password }, cfg.remember)
            .await?
    };
    tracing::info!(user = %user.name, email = %user.email, "signed in");

    let dashboard = DashboardService::new(Arc::clone(&client));
    let stats = dashboard.stats().await?;
    tracing::info!(
        active_learners = stats.active_learners,
        active_instructors = stats.active_instructors,
        sessions_today = stats.session_today,
        enrollments_this_month = stats.enrollments_this_month,
        "school overview"
    );

    for session in dashboard.sessions_today().await? {
        tracing::info!(
            session = session.id,
            course = %session.course.title,
            instructor = %session.instructor.name,
            starts_at = %session.starts_at,
            status = %session.status,
            "today"
        );
    }

    Ok(())
}
