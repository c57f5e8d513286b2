use crate::auth::use_auth;
use crate::components::icons::{LayoutGrid, QrCode};
use crate::components::menu_carousel::MenuCarousel;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wavescan::menu::{StoreStats, qr_image_src};
use wavescan_shared::StoreSummary;

#[component]
fn StatCard(title: &'static str, value: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-title">{title}</div>
            <div class="stat-value text-primary">
                {move || match value.get() {
                    Some(v) => v.to_string().into_any(),
                    None => view! { <span class="loading loading-spinner loading-sm"></span> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let (store, set_store) = signal(Option::<StoreSummary>::None);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (qr_src, set_qr_src) = signal(Option::<String>::None);
    let (qr_error, set_qr_error) = signal(Option::<String>::None);
    let (qr_loading, set_qr_loading) = signal(false);

    // 初始加载
    spawn_local(async move {
        match auth.api().get_store().await {
            Ok(summary) => set_store.set(Some(summary)),
            Err(e) => {
                log::error!("failed to load store: {}", e);
                set_load_error.set(Some(e.user_message()));
            }
        }
    });

    let stats = Signal::derive(move || store.with(|s| s.as_ref().map(StoreStats::from)));
    let total = Signal::derive(move || stats.get().map(|s| s.total_categories));
    let active = Signal::derive(move || stats.get().map(|s| s.active_categories));
    let categories = Signal::derive(move || {
        store.with(|s| s.as_ref().map(|s| s.categories.clone()).unwrap_or_default())
    });
    let store_name = move || store.with(|s| s.as_ref().map(|s| s.name.clone()).unwrap_or_default());

    let generate_qr = move |_| {
        if qr_loading.get_untracked() {
            return;
        }
        set_qr_loading.set(true);
        set_qr_error.set(None);
        spawn_local(async move {
            match auth.api().generate_qr_code().await {
                Ok(qr) => set_qr_src.set(Some(qr_image_src(&qr))),
                Err(e) => {
                    log::error!("QR generation failed: {}", e);
                    set_qr_error.set(Some(e.user_message()));
                }
            }
            set_qr_loading.set(false);
        });
    };

    let menu_route = auth.store_id().map(AppRoute::Menu);

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-8">
                <div>
                    <h1 class="text-2xl md:text-3xl font-bold">
                        "Welcome back, " <span class="text-success">{store_name}</span>
                    </h1>
                    <p class="text-base-content/60 mt-1">"Manage your digital menus"</p>
                </div>

                {move || load_error.get().map(|msg| view! {
                    <div role="alert" class="alert alert-error">{msg}</div>
                })}

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <StatCard title="Total Menus" value=total />
                    <StatCard title="Active Menus" value=active />
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">"Quick Actions"</h3>
                        <div class="flex flex-wrap gap-3">
                            <Link to=AppRoute::Categories class="btn btn-primary gap-2">
                                <LayoutGrid attr:class="h-4 w-4" /> "Category Management"
                            </Link>
                            <button class="btn btn-success gap-2" on:click=generate_qr disabled=move || qr_loading.get()>
                                <QrCode attr:class="h-4 w-4" />
                                {move || if qr_loading.get() { "Generating..." } else { "Generate Menu QR-Code" }}
                            </button>
                            {menu_route.map(|to| view! {
                                <Link to=to class="btn btn-outline">"View Public Menu"</Link>
                            })}
                        </div>
                        {move || qr_error.get().map(|msg| view! {
                            <p class="text-error text-sm">{msg}</p>
                        })}
                        {move || qr_src.get().map(|src| view! {
                            <div class="flex flex-col items-center gap-2 mt-4">
                                <img src=src.clone() alt="Menu QR code" class="w-48 h-48" />
                                <a href=src download="menu-qr.png" class="link link-primary text-sm">"Download"</a>
                            </div>
                        })}
                    </div>
                </div>

                <div>
                    <h2 class="text-xl md:text-2xl font-semibold mb-4">"My Menus"</h2>
                    <MenuCarousel items=categories />
                </div>
            </div>
        </div>
    }
}
