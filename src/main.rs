pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, contact, donation, newsletter, schema, storage};

use crate::auth::adapter::incoming::web::cookies::SessionCookieSettings;
use crate::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::auth::adapter::outgoing::{MemorySessionStore, RedisSessionStore};
use crate::auth::application::ports::incoming::use_cases::{
    FetchCurrentUserUseCase, LoginUserUseCase, LogoutUserUseCase, RegisterUserUseCase,
};
use crate::auth::application::ports::outgoing::{PasswordHasher, SessionStore};
use crate::auth::application::services::{
    FetchCurrentUserService, LoginUserService, LogoutUserService, RegisterUserService,
};
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::application::services::SubmitContactService;
use crate::donation::application::ports::incoming::use_cases::{
    CreateDonationUseCase, GetUserDonationsUseCase,
};
use crate::donation::application::services::{CreateDonationService, GetUserDonationsService};
use crate::newsletter::application::ports::incoming::use_cases::SubscribeNewsletterUseCase;
use crate::newsletter::application::services::SubscribeNewsletterService;
use crate::shared::config::{AppConfig, SessionBackend, StorageBackend};
use crate::storage::adapter::outgoing::{MemoryStorage, StoragePostgres};
use crate::storage::application::ports::outgoing::Storage;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub sessions: Arc<dyn SessionStore>,
    pub session_cookie: SessionCookieSettings,
    pub register_user_use_case: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn LogoutUserUseCase + Send + Sync>,
    pub fetch_current_user_use_case: Arc<dyn FetchCurrentUserUseCase + Send + Sync>,
    pub create_donation_use_case: Arc<dyn CreateDonationUseCase + Send + Sync>,
    pub get_user_donations_use_case: Arc<dyn GetUserDonationsUseCase + Send + Sync>,
    pub submit_contact_use_case: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub subscribe_newsletter_use_case: Arc<dyn SubscribeNewsletterUseCase + Send + Sync>,
}

impl AppState {
    /// Wires every use case against one storage, one session store and one
    /// password hasher.
    pub fn new(
        storage: Arc<dyn Storage>,
        sessions: Arc<dyn SessionStore>,
        hasher: Arc<dyn PasswordHasher>,
        session_cookie: SessionCookieSettings,
    ) -> Self {
        Self {
            register_user_use_case: Arc::new(RegisterUserService::new(
                Arc::clone(&storage),
                Arc::clone(&sessions),
                Arc::clone(&hasher),
            )),
            login_user_use_case: Arc::new(LoginUserService::new(
                Arc::clone(&storage),
                Arc::clone(&sessions),
                hasher,
            )),
            logout_user_use_case: Arc::new(LogoutUserService::new(Arc::clone(&sessions))),
            fetch_current_user_use_case: Arc::new(FetchCurrentUserService::new(Arc::clone(
                &storage,
            ))),
            create_donation_use_case: Arc::new(CreateDonationService::new(Arc::clone(&storage))),
            get_user_donations_use_case: Arc::new(GetUserDonationsService::new(Arc::clone(
                &storage,
            ))),
            submit_contact_use_case: Arc::new(SubmitContactService::new(Arc::clone(&storage))),
            subscribe_newsletter_use_case: Arc::new(SubscribeNewsletterService::new(Arc::clone(
                &storage,
            ))),
            storage,
            sessions,
            session_cookie,
        }
    }
}

#[cfg(not(tarpaulin_include))]
async fn connect_storage(config: &AppConfig) -> anyhow::Result<Arc<dyn Storage>> {
    let database_url = match (config.storage_backend, &config.database_url) {
        (StorageBackend::Memory, _) => {
            info!("Using in-memory storage; records are lost on restart");
            return Ok(Arc::new(MemoryStorage::new()));
        }
        (StorageBackend::Postgres, Some(url)) => url.clone(),
        (StorageBackend::Postgres, None) => anyhow::bail!("DATABASE_URL must be set"),
    };

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Database migrations applied");
    }

    Ok(Arc::new(StoragePostgres::new(Arc::new(conn))))
}

#[cfg(not(tarpaulin_include))]
fn connect_sessions(config: &AppConfig) -> anyhow::Result<Arc<dyn SessionStore>> {
    match (config.session_backend, &config.redis_url) {
        (SessionBackend::Memory, _) => {
            info!("Using in-memory session store");
            Ok(Arc::new(MemorySessionStore::new(config.session_ttl_secs)))
        }
        (SessionBackend::Redis, Some(url)) => {
            let pool = Config::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?;
            let ttl_secs = u64::try_from(config.session_ttl_secs)
                .context("SESSION_TTL_SECS must be positive")?;
            Ok(Arc::new(RedisSessionStore::new(Arc::new(pool), ttl_secs)))
        }
        (SessionBackend::Redis, None) => anyhow::bail!("REDIS_URL must be set"),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let storage = connect_storage(&config).await?;
    let sessions = connect_sessions(&config)?;
    let hasher = Argon2Hasher::from_settings(&config.argon2)
        .map_err(|e| anyhow::anyhow!("Invalid argon2 settings: {e}"))?;

    let state = AppState::new(
        storage,
        sessions,
        Arc::new(hasher),
        SessionCookieSettings {
            secure: config.session_cookie_secure,
            max_age_secs: config.session_ttl_secs,
        },
    );

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(&server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_user_handler);
    // Donations
    cfg.service(crate::donation::adapter::incoming::web::routes::create_donation_handler);
    cfg.service(crate::donation::adapter::incoming::web::routes::get_donations_handler);
    // Contact & newsletter
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::newsletter::adapter::incoming::web::routes::subscribe_newsletter_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
