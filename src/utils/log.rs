//! コンソールログ出力
//!
//! カテゴリ付きでブラウザコンソールへ出力する軽量ヘルパー。

/// 情報ログ
pub fn info(category: &str, message: &str) {
    web_sys::console::log_1(&format!("[{}] {}", category, message).into());
}

/// 警告ログ
pub fn warn(category: &str, message: &str) {
    web_sys::console::warn_1(&format!("[{}] {}", category, message).into());
}
