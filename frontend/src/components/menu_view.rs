use crate::auth::use_auth;
use crate::components::icons::AlertCircle;
use crate::components::menu_card::MenuCard;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wavescan::menu::{MenuPage, count_label};

/// 公开菜单页（扫码进入，无需登录）
#[component]
pub fn MenuViewPage(store_id: String) -> impl IntoView {
    let auth = use_auth();
    let (page, set_page) = signal(MenuPage::Loading);

    let load = move |store_id: String| {
        set_page.set(MenuPage::Loading);
        spawn_local(async move {
            let next = match auth.api().get_menu(&store_id).await {
                Ok(menu) => MenuPage::from_menu(menu),
                Err(e) => {
                    log::error!("failed to load menu for {}: {}", store_id, e);
                    MenuPage::Failed(e.user_message())
                }
            };
            set_page.set(next);
        });
    };
    load(store_id.clone());

    move || match page.get() {
        MenuPage::Loading => view! {
            <div class="flex flex-col items-center justify-center gap-4 p-12">
                <span class="loading loading-spinner loading-lg text-success"></span>
                <p class="text-base-content/60 text-sm">"Loading menus..."</p>
            </div>
        }
        .into_any(),
        MenuPage::Failed(msg) => {
            let store_id = store_id.clone();
            view! {
                <div role="alert" class="alert alert-error m-6">
                    <AlertCircle attr:class="h-5 w-5" />
                    <div>
                        <h3 class="font-semibold">"Error Loading Menus"</h3>
                        <p class="text-sm">{msg}</p>
                        <button class="link text-sm mt-2" on:click=move |_| load(store_id.clone())>
                            "Try Again"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
        MenuPage::Empty => view! {
            <div class="card bg-base-100 shadow m-6">
                <div class="card-body items-center text-center">
                    <h3 class="card-title">"No Menus Yet"</h3>
                    <p class="text-base-content/50 text-sm">"This store has not published a menu"</p>
                </div>
            </div>
        }
        .into_any(),
        MenuPage::Ready(menu) => {
            let label = count_label(menu.categories.len());
            view! {
                <div class="min-h-screen bg-base-200 p-6">
                    <div class="badge badge-info badge-lg mb-4">{menu.name}</div>
                    <div class="mb-4">
                        <span class="badge badge-success">{label}</span>
                    </div>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                        {menu.categories.into_iter().map(|category| view! {
                            <MenuCard category=category />
                        }).collect_view()}
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
