//! お気に入りボタンコンポーネント

use leptos::*;

/// お気に入り状態を表示するトグルボタン
///
/// 状態は持たず、現在値の表示とクリックの通知だけを行う。
/// 実際の切り替えは呼び出し側がコールバック内で行う。
#[component]
pub fn FavoriteButton(
    #[prop(into)] is_favorite: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="favorite-button"
            aria-label=move || {
                if is_favorite.get() {
                    "お気に入りから削除"
                } else {
                    "お気に入りに追加"
                }
            }
            on:click=move |_| on_toggle.call(())
        >
            {move || if is_favorite.get() { "❤️" } else { "🤍" }}
        </button>
    }
}
