//! WaveScan 管理端核心库
//!
//! 与平台无关的部分：HTTP 抽象、类型化 API 客户端、认证流程、
//! 分类/商品视图模型、轮播状态。浏览器端的适配器在 `wavescan-frontend` 中。

pub mod api;
pub mod auth;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod menu;
pub mod notice;
pub mod request;
pub mod session;

pub use api::WavescanApi;
pub use auth::{AuthFlow, SignInForm, SignUpForm};
pub use carousel::Carousel;
pub use catalog::{CatalogManager, CatalogState, Operation, ProductDraft, StateCell};
pub use config::ApiConfig;
pub use error::{MenuError, MenuResult, ValidationError};
pub use notice::{Notice, NoticeKind};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use session::{MemorySessionStore, SessionStore};

#[cfg(not(target_arch = "wasm32"))]
pub use request::ReqwestHttpClient;

pub use wavescan_shared as shared;
