//! LocalStorage 会话存储
//!
//! token 与店铺 ID 以原始字符串保存（不经 JSON 编码），键名与后台约定一致。

use gloo_storage::{LocalStorage, Storage};
use wavescan::SessionStore;
use wavescan_shared::{STORAGE_STORE_ID_KEY, STORAGE_TOKEN_KEY, Session};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

fn get_raw(key: &str) -> Option<String> {
    LocalStorage::raw()
        .get_item(key)
        .ok()
        .flatten()
        .filter(|v| !v.is_empty())
}

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<Session> {
        let token = get_raw(STORAGE_TOKEN_KEY)?;
        let store_id = get_raw(STORAGE_STORE_ID_KEY)?;
        Some(Session::new(token, store_id))
    }

    fn save(&self, session: &Session) {
        let storage = LocalStorage::raw();
        let saved = storage
            .set_item(STORAGE_TOKEN_KEY, &session.token)
            .and_then(|_| storage.set_item(STORAGE_STORE_ID_KEY, &session.store_id));
        if saved.is_err() {
            log::warn!("failed to persist session to localStorage");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(STORAGE_TOKEN_KEY);
        LocalStorage::delete(STORAGE_STORE_ID_KEY);
    }
}
