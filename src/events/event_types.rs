use crate::form::{Attendance, FieldId};

/// 表单事件类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// 字段内容变化
    Input { field: FieldId, value: String },
    /// 字段失去焦点
    Blur(FieldId),
    /// 选择参加单选框
    AttendanceSelected(Attendance),
    /// 点击 SUBMIT
    Submit,
    /// 点击 RESET
    Reset,
}

impl FormEvent {
    pub fn input(field: FieldId, value: impl Into<String>) -> Self {
        FormEvent::Input { field, value: value.into() }
    }

    /// 获取事件类型的字符串表示
    pub fn type_name(&self) -> &'static str {
        match self {
            FormEvent::Input { .. } => "Input",
            FormEvent::Blur(_) => "Blur",
            FormEvent::AttendanceSelected(_) => "AttendanceSelected",
            FormEvent::Submit => "Submit",
            FormEvent::Reset => "Reset",
        }
    }
}

/// 事件结构体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_type: FormEvent,
    /// 毫秒时间戳
    pub timestamp: u64,
    pub source: String,
}

impl Event {
    pub fn new(event_type: FormEvent, source: impl Into<String>) -> Self {
        let timestamp = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        Self {
            event_type,
            timestamp,
            source: source.into(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.event_type.type_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let event = Event::new(FormEvent::input(FieldId::Name, "Ada"), "test");
        assert_eq!(event.source, "test");
        assert!(event.timestamp > 0);
        assert_eq!(event.type_name(), "Input");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(FormEvent::Submit.type_name(), "Submit");
        assert_eq!(FormEvent::Blur(FieldId::Age).type_name(), "Blur");
        assert_eq!(FormEvent::AttendanceSelected(Attendance::No).type_name(), "AttendanceSelected");
    }
}
