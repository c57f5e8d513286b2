//! 运行时配置
//!
//! 浏览器中没有进程环境变量，因此 API 地址只能在编译期通过
//! `WAVESCAN_API_BASE` 覆盖，未设置时使用默认后端。

use std::time::Duration;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const DEFAULT_API_BASE: &str = "https://wavescan-backend.vercel.app/api";

/// 轮播自动切换间隔
pub const CAROUSEL_INTERVAL: Duration = Duration::from_secs(10);

/// 通知自动消失时间
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// 注册时密码的最小字符数
pub const MIN_PASSWORD_LEN: usize = 8;

/// API 客户端配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// 读取编译期配置，缺省回落到 [`DEFAULT_API_BASE`]
    pub fn from_env() -> Self {
        match option_env!("WAVESCAN_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://localhost:3000/api///");
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.url("/auth/login"), "http://localhost:3000/api/auth/login");
        assert_eq!(config.url("store/1"), "http://localhost:3000/api/store/1");
    }

    #[test]
    fn test_default_base() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE);
    }
}
