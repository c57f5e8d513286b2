//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    SignIn,
    SignUp,
    /// 控制面板 (需要认证)
    Dashboard,
    /// 分类与商品管理 (需要认证)
    Categories,
    /// 分类详情 (需要认证)
    CategoryDetail(String),
    /// 公开菜单，扫码后访问
    Menu(String),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();
        match segments.as_slice() {
            [] | ["signin"] => Self::SignIn,
            ["signup"] => Self::SignUp,
            ["dashboard"] => Self::Dashboard,
            ["categories"] => Self::Categories,
            ["categories", id] if !id.is_empty() => Self::CategoryDetail(id.to_string()),
            ["menu", store_id] if !store_id.is_empty() => Self::Menu(store_id.to_string()),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::SignIn => "/signin".to_string(),
            Self::SignUp => "/signup".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Categories => "/categories".to_string(),
            Self::CategoryDetail(id) => format!("/categories/{}", id),
            Self::Menu(store_id) => format!("/menu/{}", store_id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Categories | Self::CategoryDetail(_)
        )
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::SignIn | Self::SignUp)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::SignIn
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_path(""), AppRoute::SignIn);
        assert_eq!(AppRoute::from_path("/signin"), AppRoute::SignIn);
        assert_eq!(AppRoute::from_path("/signup"), AppRoute::SignUp);
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/categories"), AppRoute::Categories);
    }

    #[test]
    fn test_parse_parameterised_routes() {
        assert_eq!(
            AppRoute::from_path("/categories/c1"),
            AppRoute::CategoryDetail("c1".into())
        );
        assert_eq!(
            AppRoute::from_path("/menu/store-9"),
            AppRoute::Menu("store-9".into())
        );
        assert_eq!(AppRoute::from_path("/menu"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/categories/c1/x"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_path_roundtrip() {
        for route in [
            AppRoute::SignUp,
            AppRoute::Dashboard,
            AppRoute::CategoryDetail("abc".into()),
            AppRoute::Menu("s1".into()),
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_guards() {
        assert!(AppRoute::CategoryDetail("c".into()).requires_auth());
        assert!(!AppRoute::Menu("s".into()).requires_auth());
        assert!(!AppRoute::Menu("s".into()).should_redirect_when_authenticated());
        assert!(AppRoute::SignUp.should_redirect_when_authenticated());
    }
}
