//! Durable session persistence with in-process change notification. The whole
//! session is written as one versioned JSON envelope under a single storage
//! key, so a reload either sees a fully populated session or nothing. Storage
//! I/O goes through [`SessionBackend`] so the store logic runs against an
//! in-memory backend in unit tests.

use crate::features::auth::types::UserProfile;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Storage key holding the serialized session envelope.
const STORAGE_KEY: &str = "bisflow.session.v1";
/// Version tag written into the envelope; payloads with any other tag are
/// treated as absent.
const STORAGE_VERSION: u32 = 1;

/// The active authentication session. Exactly one per tab.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access: String,
    pub refresh: String,
    pub user: UserProfile,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    #[serde(flatten)]
    session: &'a Session,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    #[serde(flatten)]
    session: Session,
}

fn encode(session: &Session) -> Option<String> {
    serde_json::to_string(&EnvelopeRef {
        version: STORAGE_VERSION,
        session,
    })
    .ok()
}

fn decode(raw: &str) -> Option<Session> {
    let envelope: Envelope = serde_json::from_str(raw).ok()?;
    (envelope.version == STORAGE_VERSION).then_some(envelope.session)
}

/// Minimal key-value surface the store needs from its persistence layer.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `localStorage`-backed implementation used in the browser. All operations
/// fail soft when storage is unavailable (private browsing, disabled storage).
pub struct BrowserStorage;

impl SessionBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

type Listener = Box<dyn Fn(Option<&Session>)>;

/// Persistent session store with subscriber notification on every mutation.
/// All session writes in the application flow through this store, which makes
/// it the single serialization point for concurrent callers within a tab.
pub struct SessionStore {
    backend: Box<dyn SessionBackend>,
    listeners: RefCell<Vec<Listener>>,
}

impl SessionStore {
    pub fn new(backend: Box<dyn SessionBackend>) -> Self {
        Self {
            backend,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Store over browser `localStorage`.
    pub fn browser() -> Self {
        Self::new(Box::new(BrowserStorage))
    }

    /// Reads the persisted session. Returns `None` when the envelope is
    /// absent, malformed, or carries an unknown version tag; unreadable
    /// payloads are removed so they cannot shadow a later session.
    pub fn load(&self) -> Option<Session> {
        let raw = self.backend.read(STORAGE_KEY)?;
        match decode(&raw) {
            Some(session) => Some(session),
            None => {
                log::warn!("removing unreadable session payload");
                self.backend.remove(STORAGE_KEY);
                None
            }
        }
    }

    /// Overwrites the persisted session and notifies subscribers. The whole
    /// envelope is one write, so readers never observe a partial session.
    pub fn save(&self, session: &Session) {
        match encode(session) {
            Some(raw) => {
                self.backend.write(STORAGE_KEY, &raw);
                self.notify(Some(session));
            }
            None => log::error!("failed to serialize session; keeping previous state"),
        }
    }

    /// Removes the persisted session and notifies subscribers.
    pub fn clear(&self) {
        self.backend.remove(STORAGE_KEY);
        self.notify(None);
    }

    /// Registers a listener invoked with the new state after every
    /// `save`/`clear`, letting multiple UI surfaces react to a login or
    /// logout performed elsewhere in the tab.
    pub fn subscribe(&self, listener: impl Fn(Option<&Session>) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn notify(&self, session: Option<&Session>) {
        for listener in self.listeners.borrow().iter() {
            listener(session);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    struct MemoryBackend {
        cells: RefCell<HashMap<String, String>>,
    }

    impl MemoryBackend {
        fn new() -> Self {
            Self {
                cells: RefCell::new(HashMap::new()),
            }
        }

        fn seed(self, value: &str) -> Self {
            self.cells
                .borrow_mut()
                .insert(STORAGE_KEY.to_string(), value.to_string());
            self
        }
    }

    impl SessionBackend for MemoryBackend {
        fn read(&self, key: &str) -> Option<String> {
            self.cells.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.cells
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.cells.borrow_mut().remove(key);
        }
    }

    fn sample_session() -> Session {
        Session {
            access: "access-token".to_string(),
            refresh: "refresh-token".to_string(),
            user: UserProfile {
                id: 1,
                username: "alice".to_string(),
                email: "a@b.com".to_string(),
                company_name: "Acme".to_string(),
                address: "X".to_string(),
                phone_number: "+1".to_string(),
                sector_interests: vec!["commerce".to_string()],
                is_superuser: true,
            },
        }
    }

    #[test]
    fn load_returns_none_when_empty() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        assert!(store.load().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        let session = sample_session();

        store.save(&session);

        assert_eq!(store.load(), Some(session));
    }

    #[test]
    fn save_overwrites_previous_session() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        let first = sample_session();
        let mut second = sample_session();
        second.access = "newer-token".to_string();

        store.save(&first);
        store.save(&second);

        assert_eq!(store.load(), Some(second));
    }

    #[test]
    fn clear_removes_session() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        store.save(&sample_session());

        store.clear();

        assert!(store.load().is_none());
    }

    #[test]
    fn load_rejects_malformed_payload() {
        let backend = MemoryBackend::new().seed("not json at all");
        let store = SessionStore::new(Box::new(backend));

        assert!(store.load().is_none());
        // The unreadable payload is dropped, not left to fail again.
        assert!(store.load().is_none());
    }

    #[test]
    fn load_rejects_partial_payload() {
        let backend = MemoryBackend::new().seed(r#"{"version":1,"access":"a"}"#);
        let store = SessionStore::new(Box::new(backend));

        assert!(store.load().is_none());
    }

    #[test]
    fn load_rejects_unknown_version() {
        let raw = encode(&sample_session()).expect("encode");
        let bumped = raw.replace("\"version\":1", "\"version\":2");
        let store = SessionStore::new(Box::new(MemoryBackend::new().seed(&bumped)));

        assert!(store.load().is_none());
    }

    #[test]
    fn subscribers_observe_save_and_clear() {
        let store = SessionStore::new(Box::new(MemoryBackend::new()));
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |session| {
            sink.borrow_mut()
                .push(session.map(|s| s.user.username.clone()));
        });

        store.save(&sample_session());
        store.clear();

        assert_eq!(
            *seen.borrow(),
            vec![Some("alice".to_string()), None]
        );
    }
}
