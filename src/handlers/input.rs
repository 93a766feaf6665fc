use crate::events::{Event, FormEvent};
use crate::form::GuestForm;
use super::HandlerOutcome;

/// 处理字段输入事件
pub fn handle_input(event: &Event, form: &mut GuestForm) -> HandlerOutcome {
    if let FormEvent::Input { field, value } = &event.event_type {
        form.set_field(*field, value.as_str());
        if let Some(message) = form.error_message(*field) {
            log::debug!("字段 {} 校验失败: {}", field, message);
        }
        HandlerOutcome::Updated
    } else {
        HandlerOutcome::Ignored
    }
}

/// 处理失去焦点事件
pub fn handle_blur(event: &Event, form: &mut GuestForm) -> HandlerOutcome {
    if let FormEvent::Blur(field) = &event.event_type {
        form.blur(*field);
        HandlerOutcome::Updated
    } else {
        HandlerOutcome::Ignored
    }
}

/// 处理参加单选框事件
pub fn handle_attendance(event: &Event, form: &mut GuestForm) -> HandlerOutcome {
    if let FormEvent::AttendanceSelected(attendance) = &event.event_type {
        form.select_attendance(*attendance);
        HandlerOutcome::Updated
    } else {
        HandlerOutcome::Ignored
    }
}
