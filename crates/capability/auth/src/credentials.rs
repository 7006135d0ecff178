use subtle::ConstantTimeEq;

/// 演示账号凭据。
#[derive(Clone)]
pub struct DemoCredentials {
    email: String,
    password: String,
}

impl DemoCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// 常量时间比较；邮箱与口令都参与比较后再合并结果。
    pub fn verify(&self, email: &str, password: &str) -> bool {
        let email_ok = self.email.as_bytes().ct_eq(email.trim().as_bytes());
        let password_ok = self.password.as_bytes().ct_eq(password.as_bytes());
        (email_ok & password_ok).into()
    }
}

impl std::fmt::Debug for DemoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}
