use dioxus::prelude::*;
use shared_types::Session;
use std::cell::RefCell;
use std::rc::Rc;

/// Where the current [`Session`] lives.
///
/// Every gated view and the login flow go through this capability instead of
/// touching browser storage directly, so tests can substitute
/// [`MemorySessionStore`].
pub trait SessionStore {
    /// The stored session, or `None` when absent or unreadable.
    fn get(&self) -> Option<Session>;
    fn set(&self, session: Session);
    /// Remove the stored session. A no-op when nothing is stored.
    fn clear(&self);
}

/// Keeps the serialized record in memory. Used on native targets and in
/// tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an arbitrary stored string, as if another page wrote it.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        self.raw.borrow().as_deref().and_then(Session::from_storage)
    }

    fn set(&self, session: Session) {
        *self.raw.borrow_mut() = Some(session.to_storage());
    }

    fn clear(&self) {
        self.raw.borrow_mut().take();
    }
}

/// `window.localStorage` under [`shared_types::SESSION_STORAGE_KEY`].
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageSessionStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageSessionStore {
    fn get(&self) -> Option<Session> {
        let raw = Self::storage()?
            .get_item(shared_types::SESSION_STORAGE_KEY)
            .ok()
            .flatten()?;
        Session::from_storage(&raw)
    }

    fn set(&self, session: Session) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable; session not persisted");
            return;
        };
        if storage
            .set_item(shared_types::SESSION_STORAGE_KEY, &session.to_storage())
            .is_err()
        {
            tracing::warn!("failed to write session to localStorage");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(shared_types::SESSION_STORAGE_KEY);
        }
    }
}

/// Shared handle to the platform's [`SessionStore`], provided as context.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Browser storage on the web, process memory elsewhere.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorageSessionStore)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(MemorySessionStore::new())
        }
    }

    pub fn store(&self) -> &dyn SessionStore {
        self.0.as_ref()
    }
}

/// Hook to access the session store.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}
