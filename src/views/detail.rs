//! 詳細画面
//!
//! URLから受け取ったIDで料理を検索し、タイトル・説明文・
//! お気に入りボタンを表示する。

use leptos::*;

use crate::components::FavoriteButton;
use crate::constants::{BACK_TO_LIST, ERROR_MESSAGE, SAVE_FAILED_NOTICE};
use crate::data::resolve_dish;
use crate::utils::favorites::FavoritesStore;
use crate::utils::log;
use crate::utils::storage::BrowserStorage;

/// 料理の詳細画面
///
/// IDはURLから文字列のまま渡ってくる。該当する料理が無い場合は
/// 固定のエラーメッセージと一覧への戻りリンクを表示する。
#[component]
pub fn DetailView(id_param: String) -> impl IntoView {
    let (favorites, set_favorites) = create_signal(FavoritesStore::new(BrowserStorage));
    let (save_notice, set_save_notice) = create_signal(false);

    // マウント時にLocalStorageからお気に入りを復元
    create_effect(move |_| {
        set_favorites.update(|store| store.hydrate());
    });

    let dish = match resolve_dish(&id_param) {
        Some(dish) => dish,
        None => {
            log::warn("catalog", &format!("該当する料理がありません: id={}", id_param));
            return view! {
                <div class="detail-view">
                    <h1>{ERROR_MESSAGE}</h1>
                    <a href="#/">{BACK_TO_LIST}</a>
                </div>
            }
            .into_view();
        }
    };

    let id = dish.id;
    let toggle = move |_: ()| {
        let mut persisted = true;
        set_favorites.update(|store| persisted = store.toggle_favorite(id));
        if !persisted {
            set_save_notice.set(true);
            // 3秒後に通知を消す
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(3000).await;
                set_save_notice.set(false);
            });
        }
    };

    view! {
        <div class="detail-view">
            <div class="detail-header">
                <h1>{dish.title.clone()}</h1>
                <FavoriteButton
                    is_favorite=Signal::derive(move || {
                        favorites.with(|store| store.is_favorite(id))
                    })
                    on_toggle=Callback::new(toggle)
                />
            </div>

            {move || save_notice.get().then(|| view! {
                <p class="status warning">{SAVE_FAILED_NOTICE}</p>
            })}

            <p class="detail-text">{dish.detail.clone()}</p>

            <a href="#/">{BACK_TO_LIST}</a>
        </div>
    }
    .into_view()
}
