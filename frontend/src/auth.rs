//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::web::{GlooHttpClient, LocalStorageSessionStore};
use leptos::prelude::*;
use wavescan::{
    ApiConfig, AuthFlow, MenuResult, SessionStore, SignInForm, SignUpForm, WavescanApi,
};
use wavescan_shared::Session;

pub type Api = WavescanApi<GlooHttpClient>;

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前会话（只读）
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (session, set_session) = signal(None);
        Self {
            session,
            set_session,
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Option::is_some))
    }

    /// 带上当前会话的 API 客户端
    pub fn api(&self) -> Api {
        let api = WavescanApi::new(GlooHttpClient, ApiConfig::from_env());
        match self.session.get_untracked() {
            Some(session) => api.with_session(session),
            None => api,
        }
    }

    pub fn store_id(&self) -> Option<String> {
        self.session.with_untracked(|s| s.as_ref().map(|s| s.store_id.clone()))
    }

    fn flow(&self) -> AuthFlow<GlooHttpClient, LocalStorageSessionStore> {
        AuthFlow::new(
            WavescanApi::new(GlooHttpClient, ApiConfig::from_env()),
            LocalStorageSessionStore,
        )
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 恢复上次保存的会话。token 不做过期校验。
pub fn init_auth(ctx: &AuthContext) {
    if let Some(session) = LocalStorageSessionStore.load() {
        log::debug!("restored session for store {}", session.store_id);
        ctx.set_session.set(Some(session));
    }
}

/// 登录；成功后会话已持久化，路由服务会根据认证信号自动跳转
pub async fn sign_in(ctx: AuthContext, form: SignInForm) -> MenuResult<()> {
    let session = ctx.flow().sign_in(&form).await?;
    ctx.set_session.set(Some(session));
    Ok(())
}

pub async fn sign_up(ctx: AuthContext, form: SignUpForm) -> MenuResult<()> {
    let session = ctx.flow().sign_up(&form).await?;
    ctx.set_session.set(Some(session));
    Ok(())
}
