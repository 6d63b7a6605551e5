//! Client-side session state.
//!
//! Four keys describe the logged-in member. They are written by the login
//! flow, read before every request, and cleared when the server reports the
//! session as invalid.

pub mod keychain;

pub use keychain::KeychainSessionStore;

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Keychain operation failed: {0}")]
    Keychain(String),
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
    #[error("Stored value for {key} is invalid: {value:?}")]
    Corrupt { key: &'static str, value: String },
}

/// The storage keys making up a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    AuthKey,
    MemberId,
    MemberName,
    MemberNickname,
}

impl SessionKey {
    pub const ALL: [SessionKey; 4] = [
        SessionKey::AuthKey,
        SessionKey::MemberId,
        SessionKey::MemberName,
        SessionKey::MemberNickname,
    ];

    /// Storage key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKey::AuthKey => "authKey",
            SessionKey::MemberId => "loginedMemberId",
            SessionKey::MemberName => "loginedMemberName",
            SessionKey::MemberNickname => "loginedMemberNickname",
        }
    }
}

/// A logged-in member, as written by the login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub auth_key: String,
    pub member_id: u64,
    pub member_name: String,
    pub member_nickname: String,
}

/// Key/value storage for the session keys.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError>;

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: SessionKey) -> Result<(), SessionError>;

    /// Remove all four session keys.
    ///
    /// Every key is attempted even if an earlier removal fails; the first
    /// failure is returned.
    fn clear(&self) -> Result<(), SessionError> {
        let mut first_err = None;
        for key in SessionKey::ALL {
            if let Err(e) = self.remove(key) {
                first_err.get_or_insert(e);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    fn auth_key(&self) -> Result<Option<String>, SessionError> {
        self.get(SessionKey::AuthKey)
    }

    /// Read the full session. `None` when no auth key is stored.
    fn load(&self) -> Result<Option<Session>, SessionError> {
        let Some(auth_key) = self.get(SessionKey::AuthKey)? else {
            return Ok(None);
        };
        let raw_id = self.get(SessionKey::MemberId)?.unwrap_or_default();
        let member_id = raw_id.parse().map_err(|_| SessionError::Corrupt {
            key: SessionKey::MemberId.as_str(),
            value: raw_id.clone(),
        })?;

        Ok(Some(Session {
            auth_key,
            member_id,
            member_name: self.get(SessionKey::MemberName)?.unwrap_or_default(),
            member_nickname: self.get(SessionKey::MemberNickname)?.unwrap_or_default(),
        }))
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        self.set(SessionKey::AuthKey, &session.auth_key)?;
        self.set(SessionKey::MemberId, &session.member_id.to_string())?;
        self.set(SessionKey::MemberName, &session.member_name)?;
        self.set(SessionKey::MemberNickname, &session.member_nickname)
    }
}

/// In-process session store. Values are zeroed when removed.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<SessionKey, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<SessionKey, String>>, SessionError> {
        self.values
            .lock()
            .map_err(|e| SessionError::Unavailable(e.to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        Ok(self.lock()?.get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        if let Some(mut old) = self.lock()?.insert(key, value.to_string()) {
            old.zeroize();
        }
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        if let Some(mut old) = self.lock()?.remove(&key) {
            old.zeroize();
        }
        Ok(())
    }
}
