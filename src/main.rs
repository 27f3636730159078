//! 日本食一覧アプリ
//!
//! 日本の伝統料理のカタログを表示するクライアントサイドアプリ。
//! URLハッシュで一覧画面と詳細画面を切り替え、お気に入りは
//! LocalStorageに保存してページ再読み込み後も保持する。

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod components;
mod constants;
mod data;
mod models;
mod utils;
mod views;

use models::Route;
use utils::log;
use views::{DetailView, ListView};

/// 現在のURLハッシュを取得する
fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

// ============================================
// メインアプリ（画面切り替え）
// ============================================

#[component]
fn App() -> impl IntoView {
    let (route, set_route) = create_signal(Route::from_hash(&current_hash()));

    // hashchangeイベントで画面を切り替える
    let on_hashchange = Closure::wrap(Box::new(move || {
        set_route.set(Route::from_hash(&current_hash()));
    }) as Box<dyn FnMut()>);
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(
            "hashchange",
            on_hashchange.as_ref().unchecked_ref(),
        );
    }
    on_hashchange.forget();

    view! {
        <div class="app">
            <main class="container">
                {move || match route.get() {
                    Route::List => view! { <ListView /> }.into_view(),
                    Route::Detail { id_param } => view! {
                        <DetailView id_param=id_param />
                    }
                    .into_view(),
                }}
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    log::info("app", "起動しました");
    mount_to_body(App);
}
