//! キーバリューストレージ抽象
//!
//! 本番ではブラウザのLocalStorageを使い、テストではメモリ実装に差し替える。

use crate::utils::log;

/// 永続化に使うキーバリューストア
pub trait KeyValueStore {
    /// キーに対応する値を取得する。未保存・ストレージ不可はNone
    fn get(&self, key: &str) -> Option<String>;

    /// 値を保存する。保存できたらtrue
    fn set(&self, key: &str, value: &str) -> bool;
}

/// window.localStorageを使う本番実装
///
/// ストレージが無効な環境（プライベートブラウズ等）や容量超過では
/// 読み書きとも失敗するが、呼び出し側を落とさないよう値で返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(key, value).is_ok() {
                    return true;
                }
            }
        }
        log::warn("storage", &format!("LocalStorageへ保存できませんでした: key={}", key));
        false
    }
}
