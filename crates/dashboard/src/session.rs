//! Signed-in identity shared by every store of a dashboard.
//!
//! A [`SessionContext`] is created once per host and handed to each store
//! at construction. Identity changes are broadcast over a
//! `tokio::sync::watch` channel so hosts can resynchronize stores when the
//! user signs in or out.

use std::sync::Arc;

use innovalex_core::types::RecordId;
use innovalex_db::models::session::AuthUser;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct SessionContext {
    sender: Arc<watch::Sender<Option<AuthUser>>>,
}

impl SessionContext {
    /// A context with nobody signed in.
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// A context already signed in as `user`.
    pub fn signed_in(user: AuthUser) -> Self {
        let session = Self::new();
        session.set_user(Some(user));
        session
    }

    /// Replace the current identity. Subscribers are notified only when
    /// the user actually changes.
    pub fn set_user(&self, user: Option<AuthUser>) {
        self.sender.send_if_modified(|current| {
            if *current == user {
                return false;
            }
            *current = user;
            true
        });
    }

    pub fn clear(&self) {
        self.set_user(None);
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.sender.borrow().clone()
    }

    pub fn user_id(&self) -> Option<RecordId> {
        self.sender.borrow().as_ref().map(|u| u.id)
    }

    pub fn email(&self) -> Option<String> {
        self.sender.borrow().as_ref().and_then(|u| u.email.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// Receiver that wakes on every identity change.
    pub fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.sender.subscribe()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> AuthUser {
        AuthUser {
            id: RecordId::new_v4(),
            email: Some(email.into()),
        }
    }

    #[test]
    fn starts_signed_out() {
        let session = SessionContext::new();
        assert!(!session.is_signed_in());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn clones_share_identity() {
        let session = SessionContext::new();
        let other = session.clone();
        let ada = user("ada@example.com");
        session.set_user(Some(ada.clone()));
        assert_eq!(other.user_id(), Some(ada.id));
        assert_eq!(other.email().as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn subscribers_see_changes_only() {
        let ada = user("ada@example.com");
        let session = SessionContext::signed_in(ada.clone());
        let mut rx = session.subscribe();

        session.set_user(Some(ada));
        assert!(!rx.has_changed().unwrap());

        session.clear();
        assert!(rx.has_changed().unwrap());
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }
}
