//! 认证流程
//!
//! 表单校验在本地完成，校验失败时不会发出请求。
//! 登录/注册成功后把 token 与店铺 ID 写入会话存储。

use crate::api::WavescanApi;
use crate::config::MIN_PASSWORD_LEN;
use crate::error::{MenuResult, ValidationError};
use crate::request::HttpClient;
use crate::session::SessionStore;
use log::{error, info};
use wavescan_shared::{LoginRequest, RegisterRequest, Session};

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

// 密码不做 trim，只拒绝全空白
fn required_password(value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField("password"))
    } else {
        Ok(value.to_string())
    }
}

/// 登录表单
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        Ok(LoginRequest {
            email: required(&self.email, "email")?,
            password: required_password(&self.password)?,
        })
    }
}

/// 注册表单
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub store_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// 校验顺序：必填 -> 密码长度 -> 两次密码一致
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let first_name = required(&self.first_name, "first name")?;
        let last_name = required(&self.last_name, "last name")?;
        let store_name = required(&self.store_name, "store name")?;
        let email = required(&self.email, "email")?;
        let password = required_password(&self.password)?;

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(RegisterRequest {
            first_name,
            last_name,
            store_name,
            email,
            password,
        })
    }
}

/// 登录 / 注册服务
pub struct AuthFlow<C, S> {
    api: WavescanApi<C>,
    store: S,
}

impl<C: HttpClient, S: SessionStore> AuthFlow<C, S> {
    pub fn new(api: WavescanApi<C>, store: S) -> Self {
        Self { api, store }
    }

    /// 已持久化的会话（每个页面启动时读取）
    pub fn current(&self) -> Option<Session> {
        self.store.load()
    }

    pub async fn sign_in(&self, form: &SignInForm) -> MenuResult<Session> {
        let req = form.validate()?;
        let res = self.api.login(&req).await.inspect_err(|e| {
            error!("sign in failed: {}", e);
        })?;
        Ok(self.persist(res.into()))
    }

    pub async fn sign_up(&self, form: &SignUpForm) -> MenuResult<Session> {
        let req = form.validate()?;
        let res = self.api.register(&req).await.inspect_err(|e| {
            error!("sign up failed: {}", e);
        })?;
        Ok(self.persist(res.into()))
    }

    fn persist(&self, session: Session) -> Session {
        self.store.save(&session);
        info!("signed in to store {}", session.store_id);
        session
    }
}
