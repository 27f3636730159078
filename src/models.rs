//! データ構造体モジュール

use serde::{Deserialize, Serialize};

// ============================================
// カタログデータ構造
// ============================================

/// 料理1件分のカタログエントリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: u32,
    pub title: String,
    pub detail: String,
}

// ============================================
// 画面モード
// ============================================

/// 表示する画面
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// 一覧画面（ルート）
    List,
    /// 詳細画面。IDはURLから文字列のまま受け取る
    Detail { id_param: String },
}

impl Route {
    /// URLハッシュから画面モードを決定する
    ///
    /// `#/detail/{id}` なら詳細画面、それ以外はすべて一覧画面。
    /// IDの数値変換はここでは行わず、詳細画面側に任せる。
    pub fn from_hash(hash: &str) -> Route {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let mut segments = path.split('/');
        match segments.next() {
            Some("detail") => match segments.next() {
                Some(id_param) if !id_param.is_empty() => Route::Detail {
                    id_param: id_param.to_string(),
                },
                _ => Route::List,
            },
            _ => Route::List,
        }
    }
}
