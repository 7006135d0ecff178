//! 认证能力：演示账号登录与内存会话。
//!
//! 只有一个固定账号，会话保存在进程内存中，重启即失效；会话有有效期与数量上限。

mod credentials;
mod session;

use async_trait::async_trait;

pub use credentials::DemoCredentials;
pub use session::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL, InMemorySessionStore};

/// 认证相关错误。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("session invalid")]
    SessionInvalid,
    #[error("internal error: {0}")]
    Internal(String),
}

/// 已登录用户。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// 认证能力 trait，便于替换实现与测试。
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// 校验账号并开启会话，返回用户与会话 token。
    async fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError>;
    /// 结束会话；token 不存在时返回 `SessionInvalid`。
    async fn logout(&self, token: &str) -> Result<(), AuthError>;
    async fn session(&self, token: &str) -> Result<User, AuthError>;
}

/// 演示认证服务（固定账号 + 内存会话）。
pub struct DemoAuthService {
    credentials: DemoCredentials,
    sessions: InMemorySessionStore,
}

impl DemoAuthService {
    pub fn new(credentials: DemoCredentials) -> Self {
        Self::with_session_store(credentials, InMemorySessionStore::new())
    }

    pub fn with_session_store(
        credentials: DemoCredentials,
        sessions: InMemorySessionStore,
    ) -> Self {
        Self {
            credentials,
            sessions,
        }
    }

    fn demo_user(&self) -> User {
        User {
            id: "user-1".to_string(),
            email: self.credentials.email().to_string(),
            name: "Admin".to_string(),
        }
    }
}

#[async_trait]
impl Authenticator for DemoAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        if !self.credentials.verify(email, password) {
            return Err(AuthError::InvalidCredentials);
        }
        let user = self.demo_user();
        let token = self.sessions.open(user.clone())?;
        Ok((user, token))
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        match self.sessions.close(token)? {
            Some(_) => Ok(()),
            None => Err(AuthError::SessionInvalid),
        }
    }

    async fn session(&self, token: &str) -> Result<User, AuthError> {
        self.sessions.get(token)?.ok_or(AuthError::SessionInvalid)
    }
}
