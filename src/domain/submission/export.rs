//! Submission Context - CSV Export
//!
//! 固定四列导出，其余字段不参与导出

use csv::WriterBuilder;
use serde::Serialize;
use serde_json::Value;

use super::{Submission, SubmissionError};

/// 导出列（顺序固定）
pub const EXPORT_FIELDS: [&str; 4] = ["fullName", "address", "phone", "profession"];

/// 导出行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub address: String,
    pub phone: String,
    pub profession: String,
}

impl From<&Submission> for ExportRow {
    fn from(submission: &Submission) -> Self {
        let fields = &submission.fields;
        Self {
            full_name: cell(fields.full_name.as_ref()),
            address: cell(fields.address.as_ref()),
            phone: cell(fields.phone.as_ref()),
            profession: cell(fields.profession.as_ref()),
        }
    }
}

/// 单元格文本：缺失/null 为空，字符串原样，其余取紧凑 JSON 文本
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// 将记录编码为 CSV（表头 + 每条记录一行）
pub fn encode_csv(submissions: &[Submission]) -> Result<Vec<u8>, SubmissionError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    // 空集合也要输出表头
    writer.write_record(EXPORT_FIELDS)?;
    for submission in submissions {
        writer.serialize(ExportRow::from(submission))?;
    }

    writer
        .into_inner()
        .map_err(|e| SubmissionError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::submission::{SubmissionFields, SubmissionId};
    use serde_json::json;

    fn submission(body: Value) -> Submission {
        let fields: SubmissionFields = serde_json::from_value(body).unwrap();
        Submission::new(SubmissionId::new(), fields)
    }

    fn encode_to_string(submissions: &[Submission]) -> String {
        String::from_utf8(encode_csv(submissions).unwrap()).unwrap()
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(encode_to_string(&[]), "fullName,address,phone,profession\n");
    }

    #[test]
    fn test_quotes_fields_with_commas() {
        let output = encode_to_string(&[submission(json!({
            "fullName": "Jo, A",
            "address": "1 Main St, Apt 2",
            "phone": "555-1234",
            "profession": "Engineer"
        }))]);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "fullName,address,phone,profession");
        assert_eq!(lines[1], r#""Jo, A","1 Main St, Apt 2",555-1234,Engineer"#);
    }

    #[test]
    fn test_missing_fields_are_empty_and_extras_dropped() {
        let output = encode_to_string(&[submission(json!({
            "fullName": "Ada",
            "profession": "Engineer",
            "notes": "not exported"
        }))]);

        assert_eq!(output.lines().nth(1), Some("Ada,,,Engineer"));
        assert!(!output.contains("not exported"));
    }

    #[test]
    fn test_escapes_quotes_and_newlines() {
        let output = encode_to_string(&[submission(json!({
            "fullName": "The \"Boss\"",
            "address": "line one\nline two"
        }))]);

        assert!(output.contains(r#""The ""Boss""""#));
        assert!(output.contains("\"line one\nline two\""));
    }

    #[test]
    fn test_non_string_values() {
        let output = encode_to_string(&[submission(json!({
            "fullName": null,
            "phone": 5551234,
            "profession": true
        }))]);

        assert_eq!(output.lines().nth(1), Some(",,5551234,true"));
    }

    #[test]
    fn test_one_row_per_record() {
        let records: Vec<Submission> = (0..3)
            .map(|i| submission(json!({"fullName": format!("user {}", i)})))
            .collect();

        let output = encode_to_string(&records);
        assert_eq!(output.lines().count(), 4);
        assert_eq!(output.lines().nth(3), Some("user 2,,,"));
    }
}
