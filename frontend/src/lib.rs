//! WaveScan 管理端前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层
//!
//! 业务状态与请求逻辑都在 `wavescan` 核心库中，这里只负责渲染与浏览器适配。

mod auth;
mod components {
    pub mod category_detail;
    pub mod category_management;
    pub mod dashboard;
    mod icons;
    mod menu_card;
    mod menu_carousel;
    pub mod menu_view;
    mod notice_toast;
    pub mod sign_in;
    pub mod sign_up;
}
pub mod web;

use crate::auth::{AuthContext, init_auth};
use crate::components::category_detail::CategoryDetailPage;
use crate::components::category_management::CategoryManagementPage;
use crate::components::dashboard::DashboardPage;
use crate::components::menu_view::MenuViewPage;
use crate::components::sign_in::SignInPage;
use crate::components::sign_up::SignUpPage;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::SignIn => view! { <SignInPage /> }.into_any(),
        AppRoute::SignUp => view! { <SignUpPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Categories => view! { <CategoryManagementPage /> }.into_any(),
        AppRoute::CategoryDetail(id) => view! { <CategoryDetailPage id=id /> }.into_any(),
        AppRoute::Menu(store_id) => view! { <MenuViewPage store_id=store_id /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 从 LocalStorage 恢复会话（必须早于路由器初始化，首屏守卫依赖它）
    init_auth(&auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
