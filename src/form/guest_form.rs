use std::collections::BTreeSet;

use crate::config::FormConfig;

use super::attendance::{Attendance, AttendanceController, GuestFieldVisibility, VisibilityTransition};
use super::fields::{FieldId, FormValues, AGE_INVALID};
use super::snapshot::Snapshot;
use super::validation::{validate_all, validate_field, ErrorMap, FieldError, Rule};

/// 提交错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("表单校验失败: {0}")]
    Invalid(ErrorMap),
}

impl SubmitError {
    pub fn errors(&self) -> &ErrorMap {
        match self {
            SubmitError::Invalid(errors) => errors,
        }
    }
}

/// 宾客表单
///
/// 持有全部表单状态：字段值、已展示的错误、参加标志和最近一次提交的快照。
/// 所有修改都发生在单个事件处理函数内，处理完毕后才处理下一个事件。
#[derive(Debug, Clone, Default)]
pub struct GuestForm {
    values: FormValues,
    // 只包含已触碰字段的错误，未触碰的字段不展示错误
    errors: ErrorMap,
    touched: BTreeSet<FieldId>,
    attendance: AttendanceController,
    snapshot: Option<Snapshot>,
    submissions: u64,
    reset_clears_attendance: bool,
}

impl GuestForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self {
            reset_clears_attendance: config.reset_clears_attendance,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(field)
    }

    /// 当前展示的错误
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_message(&self, field: FieldId) -> Option<&'static str> {
        self.errors.message(field)
    }

    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_attending(&self) -> bool {
        self.attendance.is_attending()
    }

    pub fn is_guest_field_visible(&self) -> bool {
        self.attendance.visibility() == GuestFieldVisibility::Visible
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// 整个表单当前是否可以提交
    pub fn is_valid(&self) -> bool {
        validate_all(&self.values, self.is_attending()).is_empty()
    }

    /// 字段内容变化 - 写入新值并立即校验该字段
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.set(field, value);
        self.touched.insert(field);
        self.revalidate(field);
        self.discard_stale_snapshot();
    }

    /// 字段失去焦点 - 标记为已触碰并校验
    pub fn blur(&mut self, field: FieldId) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// 选择是否携带客人
    pub fn select_attendance(&mut self, attendance: Attendance) {
        match self.attendance.select(attendance) {
            Some(VisibilityTransition::Hidden) => {
                // 隐藏后客人姓名不再校验，已输入的值保留
                self.errors.remove(FieldId::GuestName);
                log::debug!("客人姓名字段已隐藏");
            }
            Some(VisibilityTransition::Shown) => {
                if self.is_touched(FieldId::GuestName) {
                    self.revalidate(FieldId::GuestName);
                }
                log::debug!("客人姓名字段已显示");
            }
            None => return,
        }
        self.discard_stale_snapshot();
    }

    /// 提交表单
    ///
    /// 自行校验所有激活的规则，不依赖外部拦截。校验失败时展示全部错误并清除旧快照。
    pub fn submit(&mut self) -> Result<&Snapshot, SubmitError> {
        let attending = self.is_attending();
        let mut errors = validate_all(&self.values, attending);

        let age = self.values.age.trim().parse::<u8>().ok();
        if age.is_none() && !errors.contains(FieldId::Age) {
            errors.insert(FieldId::Age, FieldError { rule: Rule::Integer, message: AGE_INVALID });
        }

        let age = match age {
            Some(age) if errors.is_empty() => age,
            _ => {
                self.touched.extend(FieldId::ALL.iter().filter(|field| field.spec().is_active(attending)));
                self.errors = errors.clone();
                self.snapshot = None;
                log::warn!("提交被拒绝，无效字段: {}", errors);
                return Err(SubmitError::Invalid(errors));
            }
        };

        self.errors.clear();
        self.submissions += 1;
        let snapshot = Snapshot::capture(&self.values, age, attending, self.submissions);
        match snapshot.to_json() {
            Ok(json) => log::info!("提交成功: {}", json),
            Err(e) => log::warn!("快照序列化失败: {}", e),
        }
        let snapshot: &Snapshot = self.snapshot.insert(snapshot);
        Ok(snapshot)
    }

    /// 重置表单 - 清空字段值、错误和快照
    ///
    /// 默认不改变参加标志，配置 `reset_clears_attendance` 后一并复位。
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.touched.clear();
        self.snapshot = None;
        if self.reset_clears_attendance {
            self.attendance.reset();
        }
        log::info!("表单已重置");
    }

    fn revalidate(&mut self, field: FieldId) {
        let result = validate_field(field, &self.values, self.is_attending());
        self.errors.apply(field, result);
    }

    // 快照只在表单整体仍然有效时保留
    fn discard_stale_snapshot(&mut self) {
        if self.snapshot.is_some() && !self.is_valid() {
            log::debug!("表单已失效，清除提交快照");
            self.snapshot = None;
        }
    }
}
