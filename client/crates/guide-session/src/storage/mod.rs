pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use error::{Result as StorageResult, StorageError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// Storage entry names shared by every widget.
pub mod keys {
    /// JSON array of signed-up accounts
    pub const USERS: &str = "betterAuth_users";
    /// JSON record of the signed-in user
    pub const CURRENT_USER: &str = "betterAuth_currentUser";
    /// `"true"` once the signup prompt was dismissed
    pub const HAS_SKIPPED_SIGNUP: &str = "hasSkippedSignup";
    /// Current-user record written by older profile modals; read-only fallback
    pub const LEGACY_USER: &str = "user";
}

/// Durable string key-value storage, the counterpart of browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
