//! Admin session service
//!
//! Holds the current dashboard session as an explicit owned value in a
//! watch channel rather than ambient global state. Interested parties
//! subscribe for changes; dropping the receiver tears the subscription
//! down.

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    error::{AppError, AppResult},
    models::Session,
    store::RecordStore,
};

pub struct SessionService {
    store: Arc<dyn RecordStore>,
    current: watch::Sender<Option<Session>>,
}

impl SessionService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let (current, _) = watch::channel(None);
        Self { store, current }
    }

    /// Sign in against the hosted auth service and install the session
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
        let session = self.store.sign_in(email, password).await?;
        tracing::info!(email = %session.email, "admin signed in");
        self.current.send_replace(Some(session.clone()));
        Ok(session)
    }

    /// Revoke the current session upstream and clear it locally.
    /// A no-op when nobody is signed in.
    pub async fn sign_out(&self) -> AppResult<()> {
        if let Some(session) = self.current.send_replace(None) {
            tracing::info!(email = %session.email, "admin signed out");
            self.store.sign_out(&session.access_token).await?;
        }
        Ok(())
    }

    /// Current session, if any
    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    /// Validate a bearer token presented on a dashboard request
    pub fn authenticate(&self, token: &str) -> AppResult<Session> {
        match self.current() {
            Some(session) if session.access_token == token => Ok(session),
            _ => Err(AppError::Authentication(
                "No active session for this token".to_string(),
            )),
        }
    }

    /// Observe session changes. The subscription ends when the
    /// returned receiver is dropped.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockRecordStore;

    fn session() -> Session {
        Session {
            access_token: "tok-1".to_string(),
            token_type: "bearer".to_string(),
            email: "admin@example.org".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_in_installs_the_session() {
        let mut store = MockRecordStore::new();
        store
            .expect_sign_in()
            .returning(|_, _| Ok(session()));
        let service = SessionService::new(Arc::new(store));

        let s = service.sign_in("admin@example.org", "pw").await.unwrap();
        assert_eq!(service.current(), Some(s.clone()));
        assert!(service.authenticate("tok-1").is_ok());
        assert!(service.authenticate("tok-2").is_err());
    }

    #[tokio::test]
    async fn failed_sign_in_leaves_no_session() {
        let mut store = MockRecordStore::new();
        store.expect_sign_in().returning(|_, _| {
            Err(AppError::Authentication("Invalid email or password".into()))
        });
        let service = SessionService::new(Arc::new(store));

        assert!(service.sign_in("admin@example.org", "bad").await.is_err());
        assert!(service.current().is_none());
    }

    #[tokio::test]
    async fn sign_out_revokes_and_notifies_subscribers() {
        let mut store = MockRecordStore::new();
        store.expect_sign_in().returning(|_, _| Ok(session()));
        store
            .expect_sign_out()
            .withf(|token| token == "tok-1")
            .times(1)
            .returning(|_| Ok(()));
        let service = SessionService::new(Arc::new(store));

        let mut rx = service.subscribe();
        service.sign_in("admin@example.org", "pw").await.unwrap();
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        service.sign_out().await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_none());
        assert!(service.current().is_none());
    }

    #[tokio::test]
    async fn sign_out_without_a_session_is_a_no_op() {
        let mut store = MockRecordStore::new();
        store.expect_sign_out().times(0);
        let service = SessionService::new(Arc::new(store));
        service.sign_out().await.unwrap();
    }
}
