//! IndexedDB bridge for the asset store.
//!
//! The WASM side talks to IndexedDB through a small inline JS module. Non-WASM targets get a
//! shim with empty reads and successful writes so host-agnostic tests can link this crate.

#[cfg(target_arch = "wasm32")]
mod imp {
    use js_sys::Promise;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    #[wasm_bindgen(inline_js = r#"
const DB_NAME = 'ZenTabDB';
const DB_VERSION = 1;
const ASSET_STORE = 'assets';

function requestToPromise(req) {
  return new Promise((resolve, reject) => {
    req.onsuccess = () => resolve(req.result);
    req.onerror = () => reject(req.error || new Error('IndexedDB request failed'));
  });
}

function txDone(tx) {
  return new Promise((resolve, reject) => {
    tx.oncomplete = () => resolve();
    tx.onabort = () => reject(tx.error || new Error('IndexedDB transaction aborted'));
    tx.onerror = () => reject(tx.error || new Error('IndexedDB transaction error'));
  });
}

async function openDb() {
  if (typeof indexedDB === 'undefined') {
    throw new Error('IndexedDB is unavailable in this browser context');
  }
  return await new Promise((resolve, reject) => {
    const req = indexedDB.open(DB_NAME, DB_VERSION);
    req.onupgradeneeded = () => {
      const db = req.result;
      if (!db.objectStoreNames.contains(ASSET_STORE)) {
        db.createObjectStore(ASSET_STORE);
      }
    };
    req.onsuccess = () => resolve(req.result);
    req.onerror = () => reject(req.error || new Error('Failed to open IndexedDB'));
  });
}

async function withAssets(mode, fn) {
  const db = await openDb();
  const tx = db.transaction(ASSET_STORE, mode);
  const result = await fn(tx.objectStore(ASSET_STORE));
  await txDone(tx);
  return result;
}

export async function jsAssetGet(key) {
  const value = await withAssets('readonly', (store) => requestToPromise(store.get(key)));
  return typeof value === 'string' ? value : null;
}

export async function jsAssetPut(key, value) {
  await withAssets('readwrite', (store) => requestToPromise(store.put(value, key)));
  return null;
}

export async function jsAssetDelete(key) {
  await withAssets('readwrite', (store) => requestToPromise(store.delete(key)));
  return null;
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsAssetGet)]
        fn js_asset_get(key: &str) -> Promise;
        #[wasm_bindgen(js_name = jsAssetPut)]
        fn js_asset_put(key: &str, value: &str) -> Promise;
        #[wasm_bindgen(js_name = jsAssetDelete)]
        fn js_asset_delete(key: &str) -> Promise;
    }

    async fn await_promise(promise: Promise) -> Result<JsValue, String> {
        JsFuture::from(promise).await.map_err(js_error_to_string)
    }

    pub(crate) fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    pub async fn load_asset(key: &str) -> Result<Option<String>, String> {
        let value = await_promise(js_asset_get(key)).await?;
        if value.is_null() || value.is_undefined() {
            Ok(None)
        } else {
            value
                .as_string()
                .map(Some)
                .ok_or_else(|| "IndexedDB returned a non-string asset".to_string())
        }
    }

    pub async fn save_asset(key: &str, value: &str) -> Result<(), String> {
        let _ = await_promise(js_asset_put(key, value)).await?;
        Ok(())
    }

    pub async fn delete_asset(key: &str) -> Result<(), String> {
        let _ = await_promise(js_asset_delete(key)).await?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub async fn load_asset(_key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    pub async fn save_asset(_key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    pub async fn delete_asset(_key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) use imp::js_error_to_string;

pub async fn load_asset(key: &str) -> Result<Option<String>, String> {
    imp::load_asset(key).await
}

pub async fn save_asset(key: &str, value: &str) -> Result<(), String> {
    imp::save_asset(key, value).await
}

pub async fn delete_asset(key: &str) -> Result<(), String> {
    imp::delete_asset(key).await
}
