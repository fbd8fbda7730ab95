//! Submission Context - Aggregate Root

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::SubmissionId;

/// 存储层保留的标识字段名
pub(crate) const ID_FIELD: &str = "_id";

/// 提交内容
///
/// 不变量:
/// - 请求体原样保存，不做 schema 校验
/// - 只有四个已知字段参与 CSV 导出，其余字段进入 `extra`
/// - 已知字段显式传入的 `null` 保留为 `Some(Value::Null)`，缺失才是 `None`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionFields {
    #[serde(
        rename = "fullName",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_name: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub address: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,

    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub profession: Option<Value>,

    /// 其他任意字段
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 字段存在即为 `Some`，包括 `null`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SubmissionFields {
    /// 去掉客户端携带的 `_id`，标识只能由存储层分配
    pub fn without_reserved(mut self) -> Self {
        self.extra.remove(ID_FIELD);
        self
    }

    /// 字段总数（已知字段 + 扩展字段）
    pub fn len(&self) -> usize {
        [&self.full_name, &self.address, &self.phone, &self.profession]
            .iter()
            .filter(|v| v.is_some())
            .count()
            + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Submission 聚合根
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: SubmissionId,

    #[serde(flatten)]
    pub fields: SubmissionFields,
}

impl Submission {
    pub fn new(id: SubmissionId, fields: SubmissionFields) -> Self {
        Self { id, fields }
    }
}
