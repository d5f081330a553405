//! Persistent current-user and account-list handling.

use crate::storage::keys;
use crate::{KeyValueStore, Session, SessionError, SessionResult, StorageError};

use std::sync::{Arc, Mutex, MutexGuard};

use guide_core::{Background, Credentials, FieldValidator, SignupFields, UserRecord};
use log::{info, warn};
use serde::de::DeserializeOwned;

const SKIPPED_VALUE: &str = "true";

/// Owns the persisted identity record and the account list.
///
/// Passwords are validated on the way in but never written to storage, and
/// `login` only checks that an account exists for the email.
///
/// Clones share one accounts lock, so `signup`, `login` and `remember` never
/// interleave their read-modify-write of the account list.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    validator: FieldValidator,
    accounts_lock: Arc<Mutex<()>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_validator(storage, FieldValidator::default())
    }

    pub fn with_validator(storage: Arc<dyn KeyValueStore>, validator: FieldValidator) -> Self {
        Self {
            storage,
            validator,
            accounts_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn validator(&self) -> FieldValidator {
        self.validator
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Current user, or `None` when absent, corrupt or unreadable.
    pub fn current_user(&self) -> Option<UserRecord> {
        self.read_lenient(keys::CURRENT_USER)
            .or_else(|| self.read_lenient(keys::LEGACY_USER))
    }

    /// All signed-up accounts. A corrupt list reads as empty.
    pub fn accounts(&self) -> Vec<UserRecord> {
        self.read_lenient(keys::USERS).unwrap_or_default()
    }

    pub fn find_account(&self, email: &str) -> Option<UserRecord> {
        self.accounts().into_iter().find(|u| u.has_email(email))
    }

    pub fn has_skipped(&self) -> bool {
        match self.storage.get(keys::HAS_SKIPPED_SIGNUP) {
            Ok(value) => value.as_deref() == Some(SKIPPED_VALUE),
            Err(e) => {
                warn!("Could not read skip flag: {e}");
                false
            }
        }
    }

    pub fn should_show_prompt(&self) -> bool {
        self.snapshot().should_show_prompt()
    }

    pub fn snapshot(&self) -> Session {
        Session {
            user: self.current_user(),
            has_skipped: self.has_skipped(),
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Create an account and make it current.
    ///
    /// The current user is written before the account list. If the list write
    /// fails the new user stays current without an account, and a retry with
    /// the same email succeeds.
    pub fn signup(&self, fields: SignupFields) -> SessionResult<UserRecord> {
        self.validator.validate_signup(&fields)?;

        let email = fields.email.trim().to_string();
        let _guard = self.lock_accounts()?;
        let mut accounts = self.load_accounts()?;

        if accounts.iter().any(|u| u.has_email(&email)) {
            return Err(SessionError::duplicate_account(email));
        }

        let name = fields
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from);
        let user = UserRecord::account(name, email, fields.background_or_default());

        self.write_json(keys::CURRENT_USER, &user)?;
        accounts.push(user.clone());
        self.write_json(keys::USERS, &accounts)?;

        info!("Created account {} ({})", user.id, user.background);
        Ok(user)
    }

    /// Promote the account matching `credentials.email` to current.
    pub fn login(&self, credentials: Credentials) -> SessionResult<UserRecord> {
        self.validator.validate_credentials(&credentials)?;

        let _guard = self.lock_accounts()?;
        let user = self
            .load_accounts()?
            .into_iter()
            .find(|u| u.has_email(&credentials.email))
            .ok_or_else(|| SessionError::account_not_found(credentials.email.trim()))?;

        self.write_json(keys::CURRENT_USER, &user)?;

        info!("Signed in {}", user.id);
        Ok(user)
    }

    /// Clear the current user. Accounts and the skip flag are kept.
    pub fn logout(&self) -> SessionResult<()> {
        self.storage.remove(keys::CURRENT_USER)?;
        self.storage.remove(keys::LEGACY_USER)?;

        info!("Signed out");
        Ok(())
    }

    pub fn mark_skipped(&self) -> SessionResult<()> {
        self.storage.set(keys::HAS_SKIPPED_SIGNUP, SKIPPED_VALUE)?;
        Ok(())
    }

    /// Save a profile-only record (name + background) as current.
    pub fn save_profile(&self, name: &str, background: Background) -> SessionResult<UserRecord> {
        self.validator.validate_profile_name(name)?;

        let user = UserRecord::profile(name.trim().to_string(), background);
        self.write_json(keys::CURRENT_USER, &user)?;

        info!("Saved profile {} ({})", user.id, user.background);
        Ok(user)
    }

    /// Make an externally authenticated user current, upserting it into the
    /// account list when it has an email. An existing account keeps its id.
    pub fn remember(&self, mut user: UserRecord) -> SessionResult<UserRecord> {
        let _guard = self.lock_accounts()?;
        let accounts = match user.email.clone() {
            Some(email) => {
                let mut accounts = self.load_accounts()?;
                match accounts.iter_mut().find(|u| u.has_email(&email)) {
                    Some(existing) => {
                        user.id = existing.id;
                        user.created_at = existing.created_at;
                        *existing = user.clone();
                    }
                    None => accounts.push(user.clone()),
                }
                Some(accounts)
            }
            None => None,
        };

        self.write_json(keys::CURRENT_USER, &user)?;
        if let Some(accounts) = accounts {
            self.write_json(keys::USERS, &accounts)?;
        }

        info!("Remembered user {}", user.id);
        Ok(user)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn lock_accounts(&self) -> SessionResult<MutexGuard<'_, ()>> {
        self.accounts_lock
            .lock()
            .map_err(|_| SessionError::from(StorageError::poisoned()))
    }

    fn load_accounts(&self) -> SessionResult<Vec<UserRecord>> {
        match self.storage.get(keys::USERS)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| SessionError::corrupted(keys::USERS, e.to_string())),
        }
    }

    fn read_lenient<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("Could not read '{key}': {e}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring corrupted '{key}': {e}");
                None
            }
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) -> SessionResult<()> {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, &json)?;
        Ok(())
    }
}
