use crate::components::icons::{ChevronLeft, ChevronRight};
use crate::components::menu_card::MenuCard;
use crate::web::route::AppRoute;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wavescan::Carousel;
use wavescan::config::CAROUSEL_INTERVAL;
use wavescan_shared::Category;

/// 菜单卡片轮播
///
/// 条目多于一个时挂一个周期定时器；条目数变化时旧定时器被丢弃并按新数量重新挂载，
/// 组件卸载时定时器随 effect 一起释放。手动切换不影响定时器的节奏。
#[component]
pub fn MenuCarousel(#[prop(into)] items: Signal<Vec<Category>>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::default());

    Effect::new(move |armed: Option<Option<Interval>>| {
        let len = items.with(Vec::len);
        let changed = carousel
            .try_update(|c| c.set_len(len))
            .unwrap_or(false);
        let armed = armed.flatten();
        if !changed && armed.is_some() {
            return armed;
        }
        drop(armed);

        carousel.with_untracked(Carousel::auto_rotates).then(|| {
            Interval::new(CAROUSEL_INTERVAL.as_millis() as u32, move || {
                carousel.update(Carousel::tick);
            })
        })
    });

    let current = move || {
        let index = carousel.with(Carousel::index);
        items.with(|list| list.get(index).cloned())
    };
    let loops = move || carousel.with(Carousel::loops);

    view! {
        <div class="relative overflow-hidden rounded-lg shadow-md bg-base-100">
            {move || match current() {
                Some(category) => {
                    let detail = AppRoute::CategoryDetail(category.id.clone());
                    view! { <MenuCard category=category detail=detail /> }.into_any()
                }
                None => view! {
                    <div class="p-8 text-center text-base-content/50">"No menus yet"</div>
                }
                .into_any(),
            }}

            <Show when=loops>
                <button
                    class="btn btn-circle btn-sm absolute left-2 top-1/2 -translate-y-1/2"
                    on:click=move |_| carousel.update(Carousel::previous)
                >
                    <ChevronLeft attr:class="h-4 w-4" />
                </button>
                <button
                    class="btn btn-circle btn-sm absolute right-2 top-1/2 -translate-y-1/2"
                    on:click=move |_| carousel.update(Carousel::advance)
                >
                    <ChevronRight attr:class="h-4 w-4" />
                </button>
                <div class="flex justify-center gap-2 pb-3">
                    {move || {
                        let active = carousel.with(Carousel::index);
                        (0..carousel.with(Carousel::len))
                            .map(|i| {
                                let class = if i == active { "badge badge-primary badge-xs" } else { "badge badge-ghost badge-xs" };
                                view! {
                                    <button class=class on:click=move |_| carousel.update(|c| c.jump_to(i))></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
