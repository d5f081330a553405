mod file_store;
mod form;

use crate::{MemoryStore, SessionContext, SessionStore};

use std::sync::Arc;

use guide_core::{Background, SignupFields};

pub(crate) fn memory_session_store() -> (Arc<MemoryStore>, SessionStore) {
    let storage = Arc::new(MemoryStore::new());
    let store = SessionStore::new(storage.clone());
    (storage, store)
}

pub(crate) fn memory_context() -> SessionContext {
    let (_, store) = memory_session_store();
    SessionContext::new(store)
}

pub(crate) fn valid_signup(email: &str, background: Background) -> SignupFields {
    SignupFields::new(email, "longenough1")
        .with_name("Reader")
        .with_background(background)
}
