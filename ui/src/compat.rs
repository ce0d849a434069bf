// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use dioxus_logger::tracing::warn;
    use model::prefs::storage::MemoryStorage;
    use model::prefs::storage::PrefsStorage;
    use model::prefs::storage::StorageError;
    use wasm_bindgen::JsValue;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// The browser's `window.localStorage`.
    pub struct LocalStorage(web_sys::Storage);

    impl LocalStorage {
        pub fn open() -> Option<Self> {
            web_sys::window()?.local_storage().ok().flatten().map(Self)
        }
    }

    fn js_error(e: JsValue) -> StorageError {
        StorageError::Unavailable(format!("{:?}", e))
    }

    impl PrefsStorage for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key).map_err(js_error)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set_item(key, value).map_err(js_error)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove_item(key).map_err(js_error)
        }
    }

    /// localStorage when the browser allows it, otherwise a session-only map.
    pub fn prefs_storage() -> Box<dyn PrefsStorage> {
        match LocalStorage::open() {
            Some(storage) => Box::new(storage),
            None => {
                warn!("localStorage unavailable; preferences will not survive a reload");
                Box::new(MemoryStorage::new())
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use dioxus_logger::tracing::info;
    use model::prefs::storage::FileStorage;
    use model::prefs::storage::PrefsStorage;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// A JSON file in the data directory chosen by the environment.
    pub fn prefs_storage() -> Box<dyn PrefsStorage> {
        let storage = FileStorage::from_env();
        info!("preferences stored in {}", storage.path().display());
        Box::new(storage)
    }
}
