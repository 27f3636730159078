//! お気に入り状態の管理
//!
//! 料理IDごとのお気に入りフラグを一元管理し、変更のたびに
//! ストレージへ書き込む。画面側はここを通してのみ状態を読み書きする。

use std::collections::HashMap;

use crate::constants::STORAGE_KEY;
use crate::utils::storage::KeyValueStore;

/// お気に入りフラグのストア
///
/// メモリ上のマップが唯一の書き込み先で、ストレージには
/// マップ全体をJSONとして丸ごと保存する。キーが無いIDは未登録扱い。
#[derive(Debug, Clone)]
pub struct FavoritesStore<S: KeyValueStore> {
    favorites: HashMap<u32, bool>,
    storage: S,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S) -> Self {
        FavoritesStore {
            favorites: HashMap::new(),
            storage,
        }
    }

    /// ストレージから状態を復元する
    ///
    /// 未保存・壊れたデータはどちらも空のマップとして扱い、
    /// エラーを呼び出し側へ伝えない。書き込みは行わない。
    pub fn hydrate(&mut self) {
        self.favorites = self
            .storage
            .get(STORAGE_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();
    }

    /// 指定IDがお気に入りかどうか。未登録はfalse
    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.get(&id).copied().unwrap_or(false)
    }

    /// 指定IDのフラグを反転し、マップ全体をストレージへ保存する
    ///
    /// 戻り値は保存に成功したかどうか。保存に失敗しても
    /// メモリ上の状態は反転済みで、このセッション内では機能し続ける。
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        let flipped = !self.is_favorite(id);
        self.favorites.insert(id, flipped);
        match serde_json::to_string(&self.favorites) {
            Ok(json) => self.storage.set(STORAGE_KEY, &json),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// テスト用のメモリ上キーバリューストア
    #[derive(Clone, Default)]
    struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        fn with_value(key: &str, value: &str) -> Self {
            let store = MemoryStore::default();
            store
                .values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> bool {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }
    }

    /// 常に読み書きが失敗するストア（ストレージ無効環境の再現）
    #[derive(Clone, Copy, Default)]
    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_unknown_id_is_not_favorite() {
        let mut store = FavoritesStore::new(MemoryStore::default());
        store.hydrate();
        assert!(!store.is_favorite(1));
        assert!(!store.is_favorite(999));
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut store = FavoritesStore::new(MemoryStore::default());
        store.hydrate();

        store.toggle_favorite(1);
        assert!(store.is_favorite(1));

        store.toggle_favorite(1);
        assert!(!store.is_favorite(1));
    }

    #[test]
    fn test_toggle_writes_whole_map() {
        let backend = MemoryStore::default();
        let mut store = FavoritesStore::new(backend.clone());
        store.hydrate();

        store.toggle_favorite(1);
        store.toggle_favorite(3);
        store.toggle_favorite(3); // 3はfalseに戻る

        let json = backend.get(STORAGE_KEY).expect("保存されているはず");
        let saved: HashMap<u32, bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(saved.get(&1), Some(&true));
        assert_eq!(saved.get(&3), Some(&false));
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_hydrate_restores_saved_state() {
        let backend = MemoryStore::with_value(STORAGE_KEY, r#"{"2": true}"#);
        let mut store = FavoritesStore::new(backend);
        store.hydrate();

        assert!(store.is_favorite(2));
        assert!(!store.is_favorite(5));
    }

    #[test]
    fn test_hydrate_without_saved_data() {
        let mut store = FavoritesStore::new(MemoryStore::default());
        store.hydrate();
        assert!(!store.is_favorite(1));
    }

    #[test]
    fn test_hydrate_with_corrupt_data() {
        let backend = MemoryStore::with_value(STORAGE_KEY, "これはJSONではない");
        let mut store = FavoritesStore::new(backend);
        store.hydrate();
        assert!(!store.is_favorite(1));
    }

    #[test]
    fn test_second_store_sees_persisted_toggles() {
        let backend = MemoryStore::default();

        let mut first = FavoritesStore::new(backend.clone());
        first.hydrate();
        first.toggle_favorite(2);

        // ページ再読み込み相当: 同じストレージから別のストアを作る
        let mut second = FavoritesStore::new(backend);
        second.hydrate();
        assert!(second.is_favorite(2));
        assert!(!second.is_favorite(1));
    }

    #[test]
    fn test_toggle_survives_unavailable_storage() {
        let mut store = FavoritesStore::new(UnavailableStore);
        store.hydrate();

        let persisted = store.toggle_favorite(1);
        assert!(!persisted);
        // 保存に失敗してもメモリ上では反転している
        assert!(store.is_favorite(1));
    }
}
