use crate::components::icons::ArrowRight;
use crate::web::route::AppRoute;
use crate::web::router::Link;
use leptos::prelude::*;
use wavescan::menu::updated_label;
use wavescan_shared::Category;

/// 分类状态徽章
#[component]
pub fn StatusBadge(status: wavescan_shared::CategoryStatus) -> impl IntoView {
    let class = if status.is_active() {
        "badge badge-success badge-outline"
    } else {
        "badge badge-ghost"
    };
    view! { <span class=class>{status.label()}</span> }
}

/// 菜单（分类）摘要卡片
#[component]
pub fn MenuCard(
    category: Category,
    /// 详情页链接；公开菜单不需要
    #[prop(optional)]
    detail: Option<AppRoute>,
) -> impl IntoView {
    let items = category.product_count();
    let updated = updated_label(&category);

    view! {
        <div class="card bg-base-100 border border-base-300 hover:shadow-md transition-shadow">
            <div class="card-body p-6">
                <h3 class="card-title">{category.name}</h3>
                <div class="flex items-center gap-4 text-xs text-base-content/60">
                    <span>{format!("{} items", items)}</span>
                    <StatusBadge status=category.status />
                </div>
                <div class="flex items-center justify-between mt-2">
                    <span class="text-xs text-base-content/50">{updated}</span>
                    {detail.map(|to| view! {
                        <Link to=to class="btn btn-ghost btn-xs gap-1">
                            "View" <ArrowRight attr:class="h-3 w-3" />
                        </Link>
                    })}
                </div>
            </div>
        </div>
    }
}
