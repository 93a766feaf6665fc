/// 字段注册表
///
/// 声明表单的全部输入字段：标签、占位提示、输入类型以及按顺序执行的校验规则。
/// 参加标志（是否携带客人）不是文本字段，由 `attendance` 模块单独管理。

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::Rule;

/// 字段标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Name,
    Mail,
    Age,
    GuestName,
}

impl FieldId {
    /// 按渲染顺序排列的所有字段
    pub const ALL: [FieldId; 4] = [FieldId::Name, FieldId::Mail, FieldId::Age, FieldId::GuestName];

    /// 字段的稳定键名
    pub fn key(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Mail => "mail",
            FieldId::Age => "age",
            FieldId::GuestName => "guestName",
        }
    }

    /// 获取字段的注册信息
    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            FieldId::Name => &FIELD_REGISTRY[0],
            FieldId::Mail => &FIELD_REGISTRY[1],
            FieldId::Age => &FIELD_REGISTRY[2],
            FieldId::GuestName => &FIELD_REGISTRY[3],
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 输入控件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
}

/// 单条校验规则及其失败提示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: &'static str,
}

impl FieldRule {
    pub const fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }
}

/// 字段注册信息
#[derive(Debug)]
pub struct FieldSpec {
    pub id: FieldId,
    /// 控件ID
    pub html_id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_kind: InputKind,
    /// 为true时仅在携带客人时参与校验和渲染
    pub conditional: bool,
    /// 按顺序执行，第一条失败的规则决定错误信息
    pub rules: &'static [FieldRule],
}

impl FieldSpec {
    /// 当前参加状态下该字段是否参与校验
    pub fn is_active(&self, attending: bool) -> bool {
        !self.conditional || attending
    }
}

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email id is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const AGE_INVALID: &str = "Please enter a valid age";
pub const GUEST_NAME_REQUIRED: &str = "Guest Name is required";

/// 文本字段的最大长度
pub const MAX_NAME_LENGTH: usize = 30;

pub static FIELD_REGISTRY: [FieldSpec; 4] = [
    FieldSpec {
        id: FieldId::Name,
        html_id: "name",
        label: "Name",
        placeholder: "Enter your name",
        input_kind: InputKind::Text,
        conditional: false,
        rules: &[
            FieldRule::new(Rule::Required, NAME_REQUIRED),
            FieldRule::new(Rule::MaxLength(MAX_NAME_LENGTH), NAME_REQUIRED),
        ],
    },
    FieldSpec {
        id: FieldId::Mail,
        html_id: "email",
        label: "Email",
        placeholder: "Enter your Email id",
        input_kind: InputKind::Text,
        conditional: false,
        rules: &[
            FieldRule::new(Rule::Required, EMAIL_REQUIRED),
            FieldRule::new(Rule::EmailPattern, EMAIL_INVALID),
        ],
    },
    FieldSpec {
        id: FieldId::Age,
        html_id: "age",
        label: "Age",
        placeholder: "Age",
        input_kind: InputKind::Number,
        conditional: false,
        rules: &[
            FieldRule::new(Rule::Required, AGE_INVALID),
            FieldRule::new(Rule::Integer, AGE_INVALID),
            FieldRule::new(Rule::Min(1), AGE_INVALID),
            FieldRule::new(Rule::Max(99), AGE_INVALID),
        ],
    },
    FieldSpec {
        id: FieldId::GuestName,
        html_id: "guestName",
        label: "Guest Name",
        placeholder: "Guest Name",
        input_kind: InputKind::Text,
        conditional: true,
        rules: &[
            FieldRule::new(Rule::Required, GUEST_NAME_REQUIRED),
            FieldRule::new(Rule::MaxLength(MAX_NAME_LENGTH), GUEST_NAME_REQUIRED),
        ],
    },
];

/// 参加问题的文案
pub const ATTENDANCE_QUESTION: &str = "Are you coming with a guest?";

/// 表单当前的原始输入值
///
/// `age` 保存用户键入的原始文本，校验和生成快照时再解析为整数。
/// `qn` 是参加问题的登记值，界面从不写入它，始终为空。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub mail: String,
    pub age: String,
    pub guest_name: String,
    pub qn: String,
}

impl FormValues {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Mail => &self.mail,
            FieldId::Age => &self.age,
            FieldId::GuestName => &self.guest_name,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Mail => &mut self.mail,
            FieldId::Age => &mut self.age,
            FieldId::GuestName => &mut self.guest_name,
        };
        *slot = value.into();
    }

    /// 恢复为默认的空值
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_matches_field_ids() {
        for (index, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(FIELD_REGISTRY[index].id, *field);
            assert_eq!(field.spec().id, *field);
        }
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(FieldId::GuestName.to_string(), "guestName");
        assert_eq!(FieldId::Mail.to_string(), "mail");
    }

    #[test]
    fn test_only_guest_name_is_conditional() {
        assert!(FieldId::GuestName.spec().is_active(true));
        assert!(!FieldId::GuestName.spec().is_active(false));
        assert!(FieldId::Name.spec().is_active(false));
    }

    #[test]
    fn test_values_get_set_clear() {
        let mut values = FormValues::default();
        values.set(FieldId::Age, "42");
        values.set(FieldId::GuestName, "Bob");
        assert_eq!(values.get(FieldId::Age), "42");
        assert_eq!(values.guest_name, "Bob");

        values.clear();
        assert_eq!(values, FormValues::default());
    }

    #[test]
    fn test_values_serialize_with_form_keys() {
        let mut values = FormValues::default();
        values.set(FieldId::GuestName, "Bob");
        let json = serde_json::to_value(&values).expect("serialize");
        assert_eq!(json["guestName"], "Bob");
        assert_eq!(json["qn"], "");
    }
}
