//! Session persistence
//!
//! The session is whatever the chat backend returns from a successful login or
//! signup. It is cached wholesale under a single local storage key and mirrored
//! into the shared UI state.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Local storage key holding the serialized session
pub const SESSION_STORAGE_KEY: &str = "ChatApp";

/// Opaque authenticated-identity object returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(Value);

impl Session {
    /// Accept a response body as a session if it is truthy.
    ///
    /// `null`, `false`, `0` and `""` are rejected. Objects and arrays are always
    /// accepted, even when empty.
    pub fn from_response(body: Value) -> Option<Self> {
        let truthy = match &body {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        truthy.then_some(Self(body))
    }

    /// Top-level field of the session object, if any
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Best-effort name to greet the user with.
    ///
    /// Looks at `user.fullname`, `fullname`, `user.email` and `email` in that order.
    pub fn display_name(&self) -> Option<&str> {
        let user = self.field("user");
        [
            user.and_then(|u| u.get("fullname")),
            self.field("fullname"),
            user.and_then(|u| u.get("email")),
            self.field("email"),
        ]
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
    }

    pub fn to_json(&self) -> String {
        self.0.to_string()
    }

    pub fn from_json(json: &str) -> Result<Option<Self>, serde_json::Error> {
        serde_json::from_str::<Value>(json).map(Self::from_response)
    }
}

/// Storage error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Local storage is not available")]
    Unavailable,

    #[error("Failed to read key '{0}'")]
    Read(String),

    #[error("Failed to write key '{0}'")]
    Write(String),
}

/// Durable string key-value slot (browser local storage on the client)
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Shared UI state that observes the current session
pub trait SessionState {
    fn set_session(&self, session: Session);
}

/// Reads and writes the session under [`SESSION_STORAGE_KEY`]
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
    key: &'static str,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: SESSION_STORAGE_KEY,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the cached session.
    ///
    /// A missing, unreadable or corrupt entry yields `None`.
    pub fn load(&self) -> Option<Session> {
        let raw = match self.storage.get_item(self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                leptos::logging::warn!("Could not read cached session: {}", e);
                return None;
            }
        };

        match Session::from_json(&raw) {
            Ok(session) => session,
            Err(e) => {
                leptos::logging::warn!("Ignoring corrupt cached session: {}", e);
                None
            }
        }
    }

    /// Overwrite the cached session
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set_item(self.key, &session.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage(RefCell<HashMap<String, String>>);

    impl KeyValueStorage for MemoryStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.0.borrow().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write(key.to_string()))
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(Session::from_response(json!(null)).is_none());
        assert!(Session::from_response(json!(false)).is_none());
        assert!(Session::from_response(json!(0)).is_none());
        assert!(Session::from_response(json!("")).is_none());

        assert!(Session::from_response(json!(true)).is_some());
        assert!(Session::from_response(json!(1.5)).is_some());
        assert!(Session::from_response(json!("token")).is_some());
        assert!(Session::from_response(json!({})).is_some());
        assert!(Session::from_response(json!([])).is_some());
    }

    #[test]
    fn test_display_name() {
        let nested = Session::from_response(json!({
            "message": "User logged in successfully",
            "user": {"_id": "1", "fullname": "Ada Lovelace", "email": "ada@example.com"},
            "token": "t1"
        }))
        .unwrap();
        assert_eq!(nested.display_name(), Some("Ada Lovelace"));

        let flat = Session::from_response(json!({"email": "ada@example.com"})).unwrap();
        assert_eq!(flat.display_name(), Some("ada@example.com"));

        let opaque = Session::from_response(json!({"token": "t1"})).unwrap();
        assert_eq!(opaque.display_name(), None);
    }

    #[test]
    fn test_save_and_load() {
        let store = SessionStore::new(MemoryStorage::default());
        assert!(store.load().is_none());

        let session = Session::from_response(json!({"token": "t1", "user": "u"})).unwrap();
        store.save(&session).unwrap();

        assert_eq!(store.load(), Some(session));
        assert!(store.storage().0.borrow().contains_key("ChatApp"));
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let store = SessionStore::new(MemoryStorage::default());

        let first = Session::from_response(json!({"token": "t1", "extra": true})).unwrap();
        let second = Session::from_response(json!({"token": "t2"})).unwrap();
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.field("token"), Some(&json!("t2")));
        assert!(loaded.field("extra").is_none());
    }

    #[test]
    fn test_corrupt_entry_is_ignored() {
        let storage = MemoryStorage::default();
        storage.set_item(SESSION_STORAGE_KEY, "{not json").unwrap();

        assert!(SessionStore::new(storage).load().is_none());
    }

    #[test]
    fn test_broken_storage() {
        let store = SessionStore::new(BrokenStorage);
        let session = Session::from_response(json!({"token": "t1"})).unwrap();

        assert!(store.load().is_none());
        assert_eq!(
            store.save(&session),
            Err(StorageError::Write("ChatApp".to_string()))
        );
    }
}
