//! 一覧画面
//!
//! カタログ全件を表示順に並べ、各料理へ詳細リンクと
//! お気に入りボタンを付ける。

use leptos::*;

use crate::components::FavoriteButton;
use crate::constants::{APP_TITLE, SAVE_FAILED_NOTICE};
use crate::data::all_dishes;
use crate::utils::favorites::FavoritesStore;
use crate::utils::storage::BrowserStorage;

/// 料理の一覧画面
#[component]
pub fn ListView() -> impl IntoView {
    let (favorites, set_favorites) = create_signal(FavoritesStore::new(BrowserStorage));
    let (save_notice, set_save_notice) = create_signal(false);

    // マウント時にLocalStorageからお気に入りを復元
    create_effect(move |_| {
        set_favorites.update(|store| store.hydrate());
    });

    let toggle = move |id: u32| {
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
        <div class="list-view">
            <h1>{APP_TITLE}</h1>

            {move || save_notice.get().then(|| view! {
                <p class="status warning">{SAVE_FAILED_NOTICE}</p>
            })}

            <ol class="dish-list">
                {all_dishes().into_iter().map(|dish| {
                    let id = dish.id;
                    view! {
                        <li class="dish-item">
                            <a href=format!("#/detail/{}", id)>{dish.title}</a>
                            <FavoriteButton
                                is_favorite=Signal::derive(move || {
                                    favorites.with(|store| store.is_favorite(id))
                                })
                                on_toggle=Callback::new(move |_: ()| toggle(id))
                            />
                        </li>
                    }
                }).collect_view()}
            </ol>
        </div>
    }
}
