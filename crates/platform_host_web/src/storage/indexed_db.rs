//! IndexedDB-backed asset store implementation.

use platform_host::{AssetStore, AssetStoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser asset store backed by the `assets` object store of the `ZenTabDB` database.
pub struct WebAssetStore;

impl AssetStore for WebAssetStore {
    fn load_asset<'a>(
        &'a self,
        key: &'a str,
    ) -> AssetStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { crate::bridge::load_asset(key).await })
    }

    fn save_asset<'a>(
        &'a self,
        key: &'a str,
        value: &'a str,
    ) -> AssetStoreFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::save_asset(key, value).await })
    }

    fn delete_asset<'a>(&'a self, key: &'a str) -> AssetStoreFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::delete_asset(key).await })
    }
}
