//! Admin Context - 管理员凭据

/// 静态管理员身份（来自配置，不落库）
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

// 不在日志中暴露哈希
impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// 用户名精确匹配
    pub fn matches_username(&self, candidate: &str) -> bool {
        !self.username.is_empty() && self.username == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_match_is_exact() {
        let admin = AdminCredentials::new("admin", "$2b$04$hash");
        assert!(admin.matches_username("admin"));
        assert!(!admin.matches_username("Admin"));
        assert!(!admin.matches_username("admin "));
        assert!(!admin.matches_username(""));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let admin = AdminCredentials::new("admin", "$2b$04$secret-hash");
        let debug = format!("{:?}", admin);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret-hash"));
    }
}
