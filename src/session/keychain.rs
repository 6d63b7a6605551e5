//! Session storage in the OS keychain.
//!
//! Each session key is one `keyring` entry under a shared service name, so
//! the token never lands in a plain file.

use keyring::Entry;

use super::{SessionError, SessionKey, SessionStore};

impl From<keyring::Error> for SessionError {
    fn from(err: keyring::Error) -> Self {
        SessionError::Keychain(err.to_string())
    }
}

/// [`SessionStore`] backed by the platform credential store.
#[derive(Debug, Clone)]
pub struct KeychainSessionStore {
    service: String,
}

impl KeychainSessionStore {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, key: SessionKey) -> Result<Entry, SessionError> {
        Ok(Entry::new(&self.service, key.as_str())?)
    }
}

impl SessionStore for KeychainSessionStore {
    /// Returns `None` if no entry exists (never logged in, or logged out).
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        self.entry(key)?.set_password(value)?;
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // already gone
            Err(e) => Err(e.into()),
        }
    }
}
