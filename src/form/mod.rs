/// 宾客表单核心 - 字段注册、校验、条件字段和提交/重置逻辑
///
/// 不依赖任何界面库，GUI 只负责把用户操作转换为事件交给这里处理。

pub mod attendance;
pub mod fields;
pub mod guest_form;
pub mod snapshot;
pub mod validation;

pub use attendance::{Attendance, AttendanceController, GuestFieldVisibility, VisibilityTransition};
pub use fields::{FieldId, FieldRule, FieldSpec, FormValues, InputKind, ATTENDANCE_QUESTION, FIELD_REGISTRY};
pub use guest_form::{GuestForm, SubmitError};
pub use snapshot::Snapshot;
pub use validation::{validate_all, validate_field, ErrorMap, FieldError, Rule, EMAIL_PATTERN};
