use serde::Deserialize;
use thiserror::Error;

// =========================================================
// 校验错误 (本地，请求发出前)
// =========================================================

/// 本地校验失败：请求不会被发出
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    EmptyField(&'static str),
    #[error("price must be a number, got \"{0}\"")]
    InvalidPrice(String),
    #[error("price cannot be negative")]
    NegativePrice,
    #[error("select a category first")]
    NoActiveCategory,
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("category still has {count} product(s); delete them first")]
    CategoryNotEmpty { count: usize },
    #[error("request already in progress")]
    AlreadyPending,
    #[error("not signed in")]
    MissingSession,
}

// =========================================================
// 核心错误类型
// =========================================================

/// 所有操作共用的错误分类
///
/// - `Validation`: 本地拦截，未发出请求
/// - `Network`: 请求未能完成
/// - `Server`: 非 2xx 状态，或成功响应无法解析
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({status}){}", server_suffix(.message))]
    Server { status: u16, message: Option<String> },
}

fn server_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

pub type MenuResult<T> = Result<T, MenuError>;

pub const GENERIC_NETWORK_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// 服务端错误体的常见形态：`{"message": ..}` 或 `{"error": ..}`
#[derive(Deserialize)]
struct ServerErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl MenuError {
    pub fn network(message: impl Into<String>) -> Self {
        MenuError::Network(message.into())
    }

    /// 由非 2xx 响应构造，尽量提取服务端提供的消息
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ServerErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty());
        MenuError::Server { status, message }
    }

    /// 成功响应但无法解析
    pub fn decode(status: u16, err: &serde_json::Error) -> Self {
        MenuError::Server {
            status,
            message: Some(format!("unexpected response: {}", err)),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, MenuError::Validation(_))
    }

    /// 展示给用户的文本
    pub fn user_message(&self) -> String {
        match self {
            MenuError::Validation(e) => e.to_string(),
            MenuError::Network(_) => GENERIC_NETWORK_MESSAGE.to_string(),
            MenuError::Server {
                message: Some(m), ..
            } => m.clone(),
            MenuError::Server {
                status,
                message: None,
            } => format!("Request failed with status {}", status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_extracted() {
        let err = MenuError::from_response(401, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.user_message(), "Invalid credentials");

        let err = MenuError::from_response(409, r#"{"error":"Email already used"}"#);
        assert_eq!(err.user_message(), "Email already used");
    }

    #[test]
    fn test_server_without_message() {
        let err = MenuError::from_response(500, "<html>oops</html>");
        assert_eq!(
            err,
            MenuError::Server {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message(), "Request failed with status 500");
        assert_eq!(err.to_string(), "server error (500)");
    }

    #[test]
    fn test_network_message_is_generic() {
        let err = MenuError::network("dns failure");
        assert_eq!(err.user_message(), GENERIC_NETWORK_MESSAGE);
        assert_eq!(err.to_string(), "network error: dns failure");
    }

    #[test]
    fn test_validation_messages() {
        let err: MenuError = ValidationError::PasswordTooShort { min: 8 }.into();
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "password must be at least 8 characters");
        assert_eq!(
            ValidationError::CategoryNotEmpty { count: 2 }.to_string(),
            "category still has 2 product(s); delete them first"
        );
    }
}
