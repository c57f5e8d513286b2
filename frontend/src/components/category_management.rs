use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, ArrowRight, PlusCircle, Trash2};
use crate::components::notice_toast::NoticeToast;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use crate::web::{GlooHttpClient, SignalCell, confirm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wavescan::menu::price_label;
use wavescan::{CatalogManager, CatalogState, ProductDraft};
use wavescan_shared::{Category, Product};

type Manager = CatalogManager<GlooHttpClient, SignalCell>;

/// 在后台执行一次视图模型操作；错误已转为通知，这里只需丢弃结果
fn run<F, Fut, T>(manager: &Manager, op: F)
where
    F: FnOnce(Manager) -> Fut,
    Fut: Future<Output = wavescan::MenuResult<T>> + 'static,
{
    let fut = op(manager.clone());
    spawn_local(async move {
        let _ = fut.await;
    });
}

#[component]
fn CategoryItem(category: Category, manager: Manager, state: RwSignal<CatalogState>) -> impl IntoView {
    let id = category.id.clone();
    let is_active = {
        let id = id.clone();
        move || state.with(|s| s.active_category.as_deref() == Some(id.as_str()))
    };
    let count = {
        let id = id.clone();
        move || state.with(|s| s.product_count(&id))
    };
    let deleting = {
        let id = id.clone();
        move || state.with(|s| s.is_deleting_category(&id))
    };

    let on_select = {
        let (manager, id) = (manager.clone(), id.clone());
        move |_| {
            let id = id.clone();
            run(&manager, move |m| async move { m.select_category(&id).await });
        }
    };
    let on_delete = {
        let (manager, id) = (manager.clone(), id.clone());
        move |_| {
            let id = id.clone();
            run(&manager, move |m| async move {
                m.delete_category(&id, |c| {
                    confirm(&format!("Are you sure you want to delete the category \"{}\"?", c.name))
                })
                .await
            });
        }
    };

    view! {
        <li class="flex items-center justify-between gap-2">
            <button
                class=move || if is_active() { "btn btn-primary btn-sm flex-1 justify-between" } else { "btn btn-ghost btn-sm flex-1 justify-between" }
                on:click=on_select
            >
                <span>{category.name.clone()}</span>
                <span class="badge badge-sm">{move || format!("{} Products", count())}</span>
            </button>
            <Link to=AppRoute::CategoryDetail(id.clone()) class="btn btn-ghost btn-sm btn-square">
                <ArrowRight attr:class="h-4 w-4" />
            </Link>
            <button class="btn btn-ghost btn-sm btn-square text-error" on:click=on_delete disabled=deleting>
                <Trash2 attr:class="h-4 w-4" />
            </button>
        </li>
    }
}

#[component]
fn ProductItem(product: Product, manager: Manager, state: RwSignal<CatalogState>) -> impl IntoView {
    let id = product.id.clone();
    let deleting = {
        let id = id.clone();
        move || state.with(|s| s.is_deleting_product(&id))
    };
    let on_delete = move |_| {
        let id = id.clone();
        run(&manager, move |m| async move {
            m.delete_product(&id, |p| {
                confirm(&format!("Are you sure you want to delete \"{}\"?", p.name))
            })
            .await
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body p-5 flex-row items-center justify-between">
                <div>
                    <h3 class="font-semibold">{product.name.clone()}</h3>
                    <p class="text-sm text-base-content/60">{price_label(product.price)}</p>
                    {product.description.clone().map(|d| view! { <p class="text-xs text-base-content/50">{d}</p> })}
                </div>
                <button class="btn btn-ghost btn-sm btn-square text-error" on:click=on_delete disabled=deleting>
                    <Trash2 attr:class="h-4 w-4" />
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn CategoryManagementPage() -> impl IntoView {
    let auth = use_auth();
    let cell = SignalCell::new();
    let state = cell.signal();
    let manager = CatalogManager::new(auth.api(), cell);

    run(&manager, |m| async move { m.list_categories().await });

    let new_category = RwSignal::new(String::new());
    let product_name = RwSignal::new(String::new());
    let product_price = RwSignal::new(String::new());
    let product_description = RwSignal::new(String::new());

    let on_add_category = {
        let manager = manager.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let name = new_category.get_untracked();
            run(&manager, move |m| async move {
                let created = m.add_category(&name).await;
                if created.is_ok() {
                    new_category.set(String::new());
                }
                created
            });
        }
    };

    let on_add_product = {
        let manager = manager.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let draft = ProductDraft {
                name: product_name.get_untracked(),
                price: product_price.get_untracked(),
                description: product_description.get_untracked(),
            };
            run(&manager, move |m| async move {
                let created = m.add_product(&draft).await;
                if created.is_ok() {
                    product_name.set(String::new());
                    product_price.set(String::new());
                    product_description.set(String::new());
                }
                created
            });
        }
    };

    let dismiss = {
        let manager = manager.clone();
        move |id: uuid::Uuid| manager.dismiss_notice(id)
    };
    let notice = Signal::derive(move || state.with(|s| s.notice.clone()));
    let active_name = move || state.with(|s| s.active().map(|c| c.name.clone()));

    let category_manager = manager.clone();
    let product_manager = manager.clone();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <NoticeToast notice=notice on_dismiss=dismiss />
            <div class="max-w-6xl mx-auto space-y-6">
                <Link to=AppRoute::Dashboard class="btn btn-ghost btn-sm gap-2">
                    <ArrowLeft attr:class="h-4 w-4" /> "Dashboard"
                </Link>
                <h1 class="text-3xl font-bold text-center">"Manage Restaurant Menu"</h1>

                <div class="grid md:grid-cols-3 gap-6">
                    // 分类列表
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">"Categories"</h2>
                            <form class="join w-full" on:submit=on_add_category>
                                <input
                                    class="input input-bordered input-sm join-item flex-1"
                                    placeholder="Enter new category name"
                                    on:input=move |ev| new_category.set(event_target_value(&ev))
                                    prop:value=new_category
                                />
                                <button
                                    class="btn btn-primary btn-sm join-item gap-1"
                                    disabled=move || state.with(CatalogState::is_adding_category)
                                >
                                    <PlusCircle attr:class="h-4 w-4" /> "Add"
                                </button>
                            </form>

                            <Show when=move || state.with(CatalogState::is_loading_categories)>
                                <div class="text-center py-4"><span class="loading loading-spinner"></span></div>
                            </Show>
                            <ul class="space-y-2 mt-2">
                                <For
                                    each=move || state.with(|s| s.categories.clone())
                                    key=|c| c.id.clone()
                                    children=move |category| {
                                        view! { <CategoryItem category=category manager=category_manager.clone() state=state /> }
                                    }
                                />
                            </ul>
                            <Show when=move || state.with(|s| s.categories.is_empty() && !s.is_loading_categories())>
                                <p class="text-sm text-base-content/50 text-center">"No categories yet"</p>
                            </Show>
                        </div>
                    </div>

                    // 当前分类的商品
                    <div class="md:col-span-2 space-y-4">
                        {move || match active_name() {
                            Some(name) => view! {
                                <h2 class="text-2xl font-bold">{format!("Products in {}", name)}</h2>
                            }.into_any(),
                            None => view! {
                                <p class="text-base-content/60">"Select or create a category to manage its products"</p>
                            }.into_any(),
                        }}

                        <form class="flex flex-wrap gap-3 bg-base-100 rounded-xl shadow p-4" on:submit=on_add_product>
                            <input
                                type="text"
                                placeholder="Product name"
                                class="input input-bordered input-sm flex-1"
                                on:input=move |ev| product_name.set(event_target_value(&ev))
                                prop:value=product_name
                            />
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                placeholder="Price"
                                class="input input-bordered input-sm w-32"
                                on:input=move |ev| product_price.set(event_target_value(&ev))
                                prop:value=product_price
                            />
                            <input
                                type="text"
                                placeholder="Description (optional)"
                                class="input input-bordered input-sm flex-1"
                                on:input=move |ev| product_description.set(event_target_value(&ev))
                                prop:value=product_description
                            />
                            <button
                                class="btn btn-primary btn-sm gap-1"
                                disabled=move || state.with(|s| s.is_adding_product() || s.active_category.is_none())
                            >
                                <PlusCircle attr:class="h-4 w-4" /> "Add"
                            </button>
                        </form>

                        <Show when=move || state.with(CatalogState::is_loading_products)>
                            <div class="text-center py-4"><span class="loading loading-spinner"></span></div>
                        </Show>
                        <div class="grid md:grid-cols-2 gap-4">
                            <For
                                each=move || state.with(|s| s.products.clone())
                                key=|p| p.id.clone()
                                children=move |product| {
                                    view! { <ProductItem product=product manager=product_manager.clone() state=state /> }
                                }
                            />
                        </div>
                        <Show when=move || state.with(|s| s.active_category.is_some() && s.products.is_empty() && !s.is_loading_products())>
                            <p class="text-sm text-base-content/50 text-center italic">"No products in this category yet"</p>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
