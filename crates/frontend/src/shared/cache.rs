//! Session-scoped key/value cache
//!
//! Values survive a page reload but not the browser session. Backed by
//! `window.sessionStorage`; falls back to process memory when the storage
//! is unavailable (private mode, storage disabled).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::window;

pub trait SessionCache {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, keys: &[&str]);
}

/// `sessionStorage` backed cache
pub struct BrowserSessionCache {
    storage: web_sys::Storage,
}

impl BrowserSessionCache {
    pub fn new() -> Option<Self> {
        let storage = window()?.session_storage().ok()??;
        Some(Self { storage })
    }
}

impl SessionCache for BrowserSessionCache {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::error!("sessionStorage.setItem({}) failed: {:?}", key, e);
        }
    }

    fn remove(&self, keys: &[&str]) {
        for key in keys {
            let _ = self.storage.remove_item(key);
        }
    }
}

/// In-memory cache, lives as long as the page
#[derive(Default)]
pub struct MemorySessionCache {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySessionCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCache for MemorySessionCache {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, keys: &[&str]) {
        let mut values = self.values.borrow_mut();
        for key in keys {
            values.remove(*key);
        }
    }
}

/// Browser session cache, or an in-memory one when storage is blocked
pub fn session_cache() -> Rc<dyn SessionCache> {
    match BrowserSessionCache::new() {
        Some(cache) => Rc::new(cache),
        None => {
            log::warn!("sessionStorage unavailable, drafts will not survive reload");
            Rc::new(MemorySessionCache::new())
        }
    }
}
