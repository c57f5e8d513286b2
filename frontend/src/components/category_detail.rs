use crate::auth::use_auth;
use crate::components::icons::{AlertCircle, ArrowLeft};
use crate::components::menu_card::StatusBadge;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wavescan::menu::{price_label, updated_label};
use wavescan_shared::Category;

/// 分类详情（只读）
#[component]
pub fn CategoryDetailPage(id: String) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (category, set_category) = signal(Option::<Category>::None);
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);

    let load = move |id: String| {
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            match auth.api().get_category(&id).await {
                Ok(c) => set_category.set(Some(c)),
                Err(e) => {
                    log::error!("failed to load category {}: {}", id, e);
                    set_load_error.set(Some(e.user_message()));
                }
            }
            set_loading.set(false);
        });
    };
    load(id.clone());

    let back = move |_| router.back();

    view! {
        <div class="min-h-screen bg-base-200 flex justify-center px-4 py-10">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="flex flex-col items-center gap-3 text-base-content/60">
                            <span class="loading loading-spinner"></span>
                            <p class="text-sm">"Loading menu details..."</p>
                            <button class="link link-primary" on:click=back>"Go Back"</button>
                        </div>
                    }
                    .into_any();
                }
                if let Some(msg) = load_error.get() {
                    let id = id.clone();
                    return view! {
                        <div role="alert" class="alert alert-error max-w-md h-fit">
                            <AlertCircle attr:class="h-5 w-5" />
                            <div>
                                <h3 class="font-semibold">"Error Loading Menu"</h3>
                                <p class="text-sm">{msg}</p>
                                <div class="flex gap-3 mt-2">
                                    <button class="link text-sm" on:click=move |_| load(id.clone())>
                                        "Try Again"
                                    </button>
                                    <button class="link text-sm" on:click=back>"Go Back"</button>
                                </div>
                            </div>
                        </div>
                    }
                    .into_any();
                }
                let Some(c) = category.get() else {
                    return view! {
                        <div class="flex flex-col items-center gap-3 text-base-content/60">
                            <p class="text-sm">"Category not found."</p>
                            <button class="link link-primary" on:click=back>"Go Back"</button>
                        </div>
                    }
                    .into_any();
                };
                let updated = updated_label(&c);
                let empty = c.products.is_empty();
                view! {
                    <div class="card bg-base-100 w-full max-w-4xl shadow-md">
                        <div class="card-body">
                            <div class="flex justify-between items-center mb-4">
                                <button class="btn btn-ghost btn-sm gap-1" on:click=back>
                                    <ArrowLeft attr:class="h-4 w-4" /> "Back"
                                </button>
                                <StatusBadge status=c.status />
                            </div>
                            <h2 class="text-2xl font-semibold">{c.name}</h2>
                            <p class="text-xs text-base-content/50">{updated}</p>
                            <div class="divider"></div>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                                {c.products.into_iter().map(|p| {
                                    // 没有状态时不显示状态点
                                    let dot = p.is_active().zip(p.status.clone()).map(|(active, label)| {
                                        let class = if active { "badge badge-success badge-xs" } else { "badge badge-ghost badge-xs" };
                                        (class, label)
                                    });
                                    view! {
                                        <div class="flex justify-between items-center bg-base-200 rounded-lg px-4 py-3">
                                            <div>
                                                <p class="font-medium">{p.name}</p>
                                                <p class="text-xs text-base-content/60">{price_label(p.price)}</p>
                                            </div>
                                            {dot.map(|(class, label)| view! {
                                                <div class="flex items-center gap-2">
                                                    <span class=class></span>
                                                    <span class="text-xs text-base-content/60">{label}</span>
                                                </div>
                                            })}
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                            <Show when=move || empty>
                                <p class="text-sm text-base-content/40 text-center italic">
                                    "No products found in this category."
                                </p>
                            </Show>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
