//! Binary asset storage contracts for values too large for the preference store.
//!
//! Assets are image references: either a remote URL or an inline `data:` URL. Inline payloads can
//! run to several megabytes, which is why they live in an object store instead of next to the
//! small JSON records.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Key under which the user's custom background image is stored.
pub const BACKGROUND_ASSET_KEY: &str = "custom_background";

/// Object-safe boxed future used by [`AssetStore`] async methods.
pub type AssetStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for durable image references keyed by name.
pub trait AssetStore {
    /// Loads the asset stored under `key`.
    fn load_asset<'a>(
        &'a self,
        key: &'a str,
    ) -> AssetStoreFuture<'a, Result<Option<String>, String>>;

    /// Stores `value` under `key`, replacing any previous asset.
    fn save_asset<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> AssetStoreFuture<'a, Result<(), String>>;

    /// Deletes the asset stored under `key`. Deleting a missing key succeeds.
    fn delete_asset<'a>(&'a self, key: &'a str) -> AssetStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Asset store for targets without durable object storage.
pub struct NoopAssetStore;

impl AssetStore for NoopAssetStore {
    fn load_asset<'a>(
        &'a self,
        _key: &'a str,
    ) -> AssetStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_asset<'a>(
        &'a self,
        _key: &'a str,
        _value: &'a str,
    ) -> AssetStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_asset<'a>(&'a self, _key: &'a str) -> AssetStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory asset store. Clones share the same backing map.
pub struct MemoryAssetStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryAssetStore {
    /// Returns the asset currently stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }
}

impl AssetStore for MemoryAssetStore {
    fn load_asset<'a>(
        &'a self,
        key: &'a str,
    ) -> AssetStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.get(key)) })
    }

    fn save_asset<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> AssetStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn delete_asset<'a>(&'a self, key: &'a str) -> AssetStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}
