//! Handle to one store shared by all mounted pages.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::StoreConfig;
use crate::store::ConfigStore;

/// Cloneable handle to the session's [`ConfigStore`].
///
/// The store is created once per application session and handed to every
/// page that needs it. Clones refer to the same store.
#[derive(Debug, Clone, Default)]
pub struct SharedConfigStore {
    inner: Arc<RwLock<ConfigStore>>,
}

impl SharedConfigStore {
    /// Creates a new store with the defaults from `config`.
    pub fn new(config: &StoreConfig) -> Self {
        Self::from_store(ConfigStore::new(config))
    }

    /// Wraps an existing store.
    pub fn from_store(store: ConfigStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Locks the store for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, ConfigStore> {
        self.inner.read()
    }

    /// Locks the store for changes.
    ///
    /// Changes made through the guard are delivered to the messenger by the
    /// next [`update`](Self::update).
    pub fn write(&self) -> RwLockWriteGuard<'_, ConfigStore> {
        self.inner.write()
    }

    /// Runs `f` with read access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&ConfigStore) -> R) -> R {
        f(&*self.read())
    }

    /// Runs `f` with write access to the store.
    ///
    /// All mutations done by `f` are applied before any other page can read
    /// the store. The messenger is notified after the lock is released, so it
    /// can read the store through another handle.
    pub fn update<R>(&self, f: impl FnOnce(&mut ConfigStore) -> R) -> R {
        let (result, pending) = {
            let mut store = self.write();
            let result = f(&mut *store);
            (result, store.take_pending_changes())
        };

        pending.dispatch();
        result
    }

    /// Returns true if both handles refer to the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
