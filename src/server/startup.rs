use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tower_sessions::SessionManagerLayer;
use tower_sessions_redis_store::RedisStore;

use crate::server::{
    config::Config,
    error::Error,
    mail::Mailer,
    model::app::AppState,
    service::auth::{password::PasswordHasher, throttle::LoginThrottle},
    storage::Storage,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to Valkey/Redis and configure session management
pub async fn connect_to_session(
    config: &Config,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use time::Duration;
    use tower_sessions::{cookie::SameSite, Expiry};
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(&config.valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    let session_store = RedisStore::new(pool);

    // Secure cookies need https, which local development does not serve
    let secure_cookies = !cfg!(debug_assertions);

    let session = SessionManagerLayer::new(session_store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Public disk for uploads, created on startup if missing
pub async fn build_storage(config: &Config) -> Result<Storage, Error> {
    tokio::fs::create_dir_all(&config.storage_path).await?;

    Ok(Storage::new(&config.storage_path, &config.app_url))
}

pub fn build_mailer(config: &Config) -> Result<Mailer, Error> {
    match &config.smtp_url {
        Some(url) => Mailer::smtp(url, &config.mail_from),
        None => {
            tracing::warn!("SMTP_URL is not set, outgoing mail is only written to the log");

            Mailer::outbox(&config.mail_from)
        }
    }
}

pub fn build_app_state(
    config: &Config,
    db: DatabaseConnection,
    storage: Storage,
    mailer: Mailer,
) -> AppState {
    AppState {
        db,
        storage,
        mailer,
        hasher: PasswordHasher::new(config.password_hash_iterations),
        throttle: LoginThrottle::new(config.login_max_attempts, config.login_decay_seconds),
        app_url: config.app_url.clone(),
    }
}
