use sea_orm::DatabaseConnection;

use crate::server::{
    mail::Mailer,
    service::auth::{password::PasswordHasher, throttle::LoginThrottle},
    storage::Storage,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Public disk for uploaded images
    pub storage: Storage,
    pub mailer: Mailer,
    pub hasher: PasswordHasher,
    /// Shared between both guards, keys are namespaced by guard
    pub throttle: LoginThrottle,
    /// Base URL used for links in outgoing mail
    pub app_url: String,
}
