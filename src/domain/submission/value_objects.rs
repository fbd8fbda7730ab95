//! Submission Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SubmissionError;

/// 提交记录唯一标识（由存储层分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// 解析客户端传入的标识，格式错误返回 InvalidId
    pub fn parse(raw: &str) -> Result<Self, SubmissionError> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| SubmissionError::InvalidId(raw.to_string()))
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        let id = SubmissionId::new();
        let parsed = SubmissionId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(SubmissionId::parse("not-an-id").is_err());
        assert!(SubmissionId::parse("").is_err());
        assert!(SubmissionId::parse("65f0c0ffee0123456789abcd").is_err());
    }
}
