/// 提交快照 - 成功提交时表单值的不可变副本，仅用于渲染摘要

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::fields::FormValues;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    name: String,
    mail: String,
    age: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    guest_name: Option<String>,
    submitted_at: DateTime<Utc>,
    sequence: u64,
}

impl Snapshot {
    /// 从已通过校验的表单值生成快照
    ///
    /// 只有在携带客人且客人姓名非空时才记录客人姓名。
    pub(crate) fn capture(values: &FormValues, age: u8, attending: bool, sequence: u64) -> Self {
        let guest_name = if attending && !values.guest_name.is_empty() {
            Some(values.guest_name.clone())
        } else {
            None
        };

        Self {
            name: values.name.clone(),
            mail: values.mail.clone(),
            age,
            guest_name,
            submitted_at: Utc::now(),
            sequence,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mail(&self) -> &str {
        &self.mail
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn guest_name(&self) -> Option<&str> {
        self.guest_name.as_deref()
    }

    /// 自启动以来第几次成功提交
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// 摘要行：(标签, 值)。没有客人时不输出客人行。
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![
            ("Name", self.name.clone()),
            ("Email", self.mail.clone()),
            ("Age", self.age.to_string()),
        ];
        if let Some(guest_name) = &self.guest_name {
            lines.push(("Guest Name", guest_name.clone()));
        }
        lines
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
