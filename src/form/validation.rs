/// 校验引擎
///
/// 逐字段执行注册表中的规则，生成 字段 -> 错误 的映射。
/// 校验结果只用于展示和拦截提交，不会阻止输入。

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

use super::fields::{FieldId, FormValues};

/// 邮箱格式：本地部分@域名.至少两位字母的顶级域
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(EMAIL_PATTERN).expect("邮箱正则表达式无效");
}

/// 校验规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 非空
    Required,
    /// 最大字符数
    MaxLength(usize),
    /// 邮箱格式
    EmailPattern,
    /// 整数
    Integer,
    /// 最小值（含）
    Min(i64),
    /// 最大值（含）
    Max(i64),
}

impl Rule {
    /// 检查输入是否满足规则，失败时返回规则本身
    pub fn check(&self, input: &str) -> Result<(), Rule> {
        let satisfied = match self {
            Rule::Required => !input.is_empty(),
            Rule::MaxLength(max) => input.chars().count() <= *max,
            Rule::EmailPattern => EMAIL_REGEX.is_match(input),
            Rule::Integer => parse_integer(input).is_some(),
            Rule::Min(min) => parse_integer(input).map_or(false, |value| value >= *min),
            Rule::Max(max) => parse_integer(input).map_or(false, |value| value <= *max),
        };

        if satisfied {
            Ok(())
        } else {
            Err(*self)
        }
    }
}

fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

/// 单个字段的校验失败信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub rule: Rule,
    pub message: &'static str,
}

/// 字段错误映射，存在即表示该字段无效
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<FieldId, FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).map(|error| error.message)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn insert(&mut self, field: FieldId, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn remove(&mut self, field: FieldId) -> Option<FieldError> {
        self.errors.remove(&field)
    }

    /// 写入单个字段的校验结果：有错误则记录，无错误则移除旧记录
    pub fn apply(&mut self, field: FieldId, result: Option<FieldError>) {
        match result {
            Some(error) => self.insert(field, error),
            None => {
                self.remove(field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.errors.keys().map(|field| field.key()).collect();
        write!(f, "{}", keys.join(", "))
    }
}

/// 校验单个字段。字段在当前参加状态下未激活时视为有效。
pub fn validate_field(field: FieldId, values: &FormValues, attending: bool) -> Option<FieldError> {
    let spec = field.spec();
    if !spec.is_active(attending) {
        return None;
    }

    let input = values.get(field);
    spec.rules.iter().find_map(|field_rule| {
        field_rule
            .rule
            .check(input)
            .err()
            .map(|rule| FieldError { rule, message: field_rule.message })
    })
}

/// 校验所有激活的字段
pub fn validate_all(values: &FormValues, attending: bool) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in FieldId::ALL {
        if let Some(error) = validate_field(field, values, attending) {
            errors.insert(field, error);
        }
    }
    errors
}
