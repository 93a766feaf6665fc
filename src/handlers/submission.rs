use crate::events::{Event, FormEvent};
use crate::form::GuestForm;
use super::HandlerOutcome;

/// 处理提交事件
pub fn handle_submit(event: &Event, form: &mut GuestForm) -> HandlerOutcome {
    if event.event_type != FormEvent::Submit {
        return HandlerOutcome::Ignored;
    }

    match form.submit() {
        Ok(snapshot) => {
            log::info!("第 {} 次提交成功 (来源: {})", snapshot.sequence(), event.source);
            HandlerOutcome::SubmissionAccepted
        }
        Err(e) => {
            log::warn!("{}", e);
            HandlerOutcome::SubmissionRejected
        }
    }
}

/// 处理重置事件
pub fn handle_reset(event: &Event, form: &mut GuestForm) -> HandlerOutcome {
    if event.event_type != FormEvent::Reset {
        return HandlerOutcome::Ignored;
    }

    form.reset();
    HandlerOutcome::Reset
}
