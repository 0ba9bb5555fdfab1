use std::sync::{Mutex, PoisonError};

use codecure_shared::{
    api::session::{TOKEN_KEY, USER_KEY},
    model::User,
};

/// Where the bearer token issued at sign-in lives between requests, along
/// with the user it was issued to so a reload can restore the account.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn load_user(&self) -> Option<User>;
    fn store_user(&self, user: &User);
    /// Forgets both the token and the user.
    fn clear(&self);
}

/// `window.localStorage`, so the session survives reloads.
#[derive(Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("local storage is unavailable: {:?}", e);
                None
            }
        }
    }

    fn set(key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("'{}' not persisted, no storage", key);
            return;
        };

        if let Err(e) = storage.set_item(key, value) {
            log::warn!("failed to persist '{}': {:?}", key, e);
        }
    }

    fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }
}

impl TokenStore for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::get(TOKEN_KEY)
    }

    fn store(&self, token: &str) {
        Self::set(TOKEN_KEY, token);
    }

    fn load_user(&self) -> Option<User> {
        let raw = Self::get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("stored user is unreadable: {}", e);
                None
            }
        }
    }

    fn store_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(raw) => Self::set(USER_KEY, &raw),
            Err(e) => log::warn!("failed to encode user: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            for key in [TOKEN_KEY, USER_KEY] {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("failed to remove '{}': {:?}", key, e);
                }
            }
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
    user: Mutex<Option<User>>,
}

impl MemoryStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
            ..Default::default()
        }
    }
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn load_user(&self) -> Option<User> {
        self.user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store_user(&self, user: &User) {
        *self.user.lock().unwrap_or_else(PoisonError::into_inner) = Some(user.clone());
    }

    fn clear(&self) {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert_eq!(store.load(), None);

        store.store("first");
        store.store("second");
        assert_eq!(store.load().as_deref(), Some("second"));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_memory_store_user() {
        let store = MemoryStore::with_token("t");
        assert_eq!(store.load_user(), None);

        let user = User {
            id: 3,
            name: "hanako".into(),
            email: "hanako@example.com".into(),
        };
        store.store_user(&user);
        assert_eq!(store.load_user(), Some(user));

        store.clear();
        assert_eq!(store.load(), None);
        assert_eq!(store.load_user(), None);
    }
}
