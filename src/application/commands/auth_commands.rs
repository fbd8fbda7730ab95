//! Auth Commands

/// 管理员登录命令
#[derive(Clone)]
pub struct AdminLogin {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminLogin")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
