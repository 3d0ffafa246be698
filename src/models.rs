use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::utils::is_length_valid;

/// A person in the directory / 通讯录中的人员记录
///
/// Owned by the directory store; the search engine only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: i64,
    pub first_name: String,
    /// Name particles such as "van der", empty when absent / 姓氏前缀，可为空
    pub prefixes: String,
    pub last_name: String,
}

impl PersonRecord {
    pub fn new(id: i64, first_name: &str, prefixes: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            prefixes: prefixes.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// Full display name, skipping empty prefixes / 完整显示名
    pub fn full_name(&self) -> String {
        if self.prefixes.is_empty() {
            format!("{} {}", self.first_name, self.last_name)
        } else {
            format!("{} {} {}", self.first_name, self.prefixes, self.last_name)
        }
    }
}

/// Person to be inserted, id is assigned by the store / 待插入的人员
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPerson {
    pub first_name: String,
    #[serde(default)]
    pub prefixes: String,
    pub last_name: String,
}

impl NewPerson {
    pub fn new(first_name: &str, prefixes: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            prefixes: prefixes.to_string(),
            last_name: last_name.to_string(),
        }
    }

    /// Check name lengths before storing / 存储前校验姓名长度
    pub fn validate(&self) -> Result<(), ErrorCode> {
        if !is_length_valid(&self.first_name, 2, 255) {
            return Err(ErrorCode::InvalidLengthFirstName);
        }
        if !is_length_valid(&self.last_name, 2, 255) {
            return Err(ErrorCode::InvalidLengthLastName);
        }
        if !is_length_valid(&self.prefixes, 0, 20) {
            return Err(ErrorCode::InvalidLengthPrefixes);
        }
        Ok(())
    }
}
