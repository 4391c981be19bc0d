//! Password sign-in and sign-out against the hosted auth service.
//!
//! [`Authenticator`] keeps the three pieces of identity state in step: the
//! auth session, the REST client's bearer token and the
//! [`SessionContext`] the stores read.

use std::sync::Arc;

use innovalex_db::models::session::{AuthUser, Session};
use innovalex_db::{AuthClient, RemoteError, RestClient};
use tokio::sync::Mutex;

use crate::session::SessionContext;

pub struct Authenticator {
    auth: AuthClient,
    rest: Arc<RestClient>,
    session: SessionContext,
    current: Mutex<Option<Session>>,
}

impl Authenticator {
    pub fn new(auth: AuthClient, rest: Arc<RestClient>, session: SessionContext) -> Self {
        Self {
            auth,
            rest,
            session,
            current: Mutex::new(None),
        }
    }

    /// Sign in and publish the new identity.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, RemoteError> {
        let session = self.auth.sign_in_with_password(email, password).await?;
        let user = session.user.clone();

        self.rest
            .set_access_token(Some(session.access_token.clone()))
            .await;
        *self.current.lock().await = Some(session);
        self.session.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Revoke the session and clear the identity.
    ///
    /// Local state is cleared even when the revoke call fails; the error
    /// is still returned.
    pub async fn sign_out(&self) -> Result<(), RemoteError> {
        let previous = self.current.lock().await.take();
        self.rest.set_access_token(None).await;
        self.session.clear();

        match previous {
            Some(session) => self.auth.sign_out(&session.access_token).await,
            None => Ok(()),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }
}
