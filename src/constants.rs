//! アプリケーション定数

/// アプリタイトル
pub const APP_TITLE: &str = "日本食一覧";

/// アプリ説明文
pub const APP_DESCRIPTION: &str = "日本の伝統料理とその特徴を紹介するアプリケーション";

/// お気に入り保存先のLocalStorageキー
pub const STORAGE_KEY: &str = "japaneseFoodFavorites";

/// 料理が見つからない場合のメッセージ
pub const ERROR_MESSAGE: &str = "料理が見つかりません";

/// 一覧画面へ戻るリンクの文言
pub const BACK_TO_LIST: &str = "一覧に戻る";

/// お気に入りを保存できなかった場合の通知文言
pub const SAVE_FAILED_NOTICE: &str =
    "お気に入りを保存できませんでした。このページを開いている間だけ記憶します";
