//! Process-wide observable session.

use crate::{Session, SessionResult, SessionStore};

use std::sync::Arc;

use guide_core::{Background, Credentials, SignupFields, UserRecord};
use log::debug;
use tokio::sync::watch;

/// Shared handle to the session. Cloning is cheap and every clone
/// publishes to the same subscribers.
#[derive(Clone)]
pub struct SessionContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    store: SessionStore,
    sender: watch::Sender<Session>,
}

impl SessionContext {
    /// Reads the initial snapshot from `store`.
    pub fn new(store: SessionStore) -> Self {
        let (sender, _) = watch::channel(store.snapshot());
        Self {
            inner: Arc::new(ContextInner { store, sender }),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.inner.store
    }

    /// Latest published snapshot.
    pub fn session(&self) -> Session {
        self.inner.sender.borrow().clone()
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.inner.sender.borrow().user.clone()
    }

    pub fn subscribe(&self) -> SessionWatcher {
        SessionWatcher {
            receiver: self.inner.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.sender.receiver_count()
    }

    pub fn signup(&self, fields: SignupFields) -> SessionResult<UserRecord> {
        let user = self.inner.store.signup(fields)?;
        self.publish();
        Ok(user)
    }

    pub fn login(&self, credentials: Credentials) -> SessionResult<UserRecord> {
        let user = self.inner.store.login(credentials)?;
        self.publish();
        Ok(user)
    }

    pub fn logout(&self) -> SessionResult<()> {
        self.inner.store.logout()?;
        self.publish();
        Ok(())
    }

    pub fn mark_skipped(&self) -> SessionResult<()> {
        self.inner.store.mark_skipped()?;
        self.publish();
        Ok(())
    }

    pub fn save_profile(&self, name: &str, background: Background) -> SessionResult<UserRecord> {
        let user = self.inner.store.save_profile(name, background)?;
        self.publish();
        Ok(user)
    }

    pub fn remember(&self, user: UserRecord) -> SessionResult<UserRecord> {
        let user = self.inner.store.remember(user)?;
        self.publish();
        Ok(user)
    }

    /// Re-read storage, e.g. after another process wrote to it.
    /// Subscribers are only woken when the snapshot actually differs.
    pub fn refresh(&self) -> Session {
        let snapshot = self.inner.store.snapshot();
        self.inner.sender.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot.clone();
                true
            }
        });
        snapshot
    }

    fn publish(&self) {
        let snapshot = self.inner.store.snapshot();
        debug!(
            "Publishing session (signed_in={}, {} subscribers)",
            snapshot.is_signed_in(),
            self.inner.sender.receiver_count()
        );
        self.inner.sender.send_replace(snapshot);
    }
}

/// Subscriber side of a [`SessionContext`].
pub struct SessionWatcher {
    receiver: watch::Receiver<Session>,
}

impl SessionWatcher {
    pub fn current(&self) -> Session {
        self.receiver.borrow().clone()
    }

    /// Whether a snapshot was published since the last `changed`/`mark_seen`.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    pub fn mark_seen(&mut self) -> Session {
        self.receiver.borrow_and_update().clone()
    }

    /// Waits for the next publish. `None` once every context handle is gone.
    pub async fn changed(&mut self) -> Option<Session> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
