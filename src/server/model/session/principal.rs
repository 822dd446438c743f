use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::{error::Error, model::auth::Guard};

/// Authenticated principal ID stored under a guard's session key
#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionPrincipalId(pub String);

impl SessionPrincipalId {
    /// Insert principal ID into session under the guard's key
    pub async fn insert(session: &Session, guard: Guard, principal_id: i32) -> Result<(), Error> {
        session
            .insert(
                guard.session_key(),
                SessionPrincipalId(principal_id.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get principal ID for the guard from session
    pub async fn get(session: &Session, guard: Guard) -> Result<Option<i32>, Error> {
        session
            .get::<SessionPrincipalId>(guard.session_key())
            .await?
            .map(|SessionPrincipalId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session {} id: {}", guard, e))
                })
            })
            .transpose()
    }

    /// Remove the guard's principal ID from session, leaving other guards untouched
    pub async fn remove(session: &Session, guard: Guard) -> Result<(), Error> {
        session
            .remove::<SessionPrincipalId>(guard.session_key())
            .await?;

        Ok(())
    }
}
