//! 浏览器平台适配层
//!
//! 核心库只依赖抽象接口，这里提供它们在浏览器中的实现：
//! HTTP (gloo-net)、会话存储 (gloo-storage)、响应式状态容器、日志与路由。

mod http;
pub mod logger;
pub mod route;
pub mod router;
mod state;
mod storage;

pub use http::GlooHttpClient;
pub use state::SignalCell;
pub use storage::LocalStorageSessionStore;

/// 原生确认框；无法弹出时按“取消”处理
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
