use crate::form::GuestForm;
use crate::handlers::{self, HandlerOutcome};
use super::event_queue::FormEventQueue;
use super::event_types::{Event, FormEvent};

/// 分发统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchStats {
    pub published: u64,
    pub processed: u64,
    pub submissions_accepted: u64,
    pub submissions_rejected: u64,
    pub resets: u64,
}

/// 事件分发器 - 按发布顺序逐个处理事件
///
/// 每个事件处理完毕后才处理下一个，保证表单状态不会交错修改。
pub struct FormEventDispatcher {
    queue: FormEventQueue,
    stats: DispatchStats,
}

impl FormEventDispatcher {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: FormEventQueue::new(capacity),
            stats: DispatchStats::default(),
        }
    }

    /// 发布事件
    pub fn publish(&mut self, event: Event) {
        self.queue.publish(event);
        self.stats.published = self.queue.published();
    }

    /// 以指定来源发布事件
    pub fn emit(&mut self, event_type: FormEvent, source: &str) {
        self.publish(Event::new(event_type, source));
    }

    /// 处理单个事件
    pub fn process_next_event(&mut self, form: &mut GuestForm) -> bool {
        match self.queue.pop() {
            Some(event) => {
                let outcome = dispatch(&event, form);
                self.record(outcome);
                true
            }
            None => false,
        }
    }

    /// 处理所有待处理事件，返回处理数量
    pub fn process_all_events(&mut self, form: &mut GuestForm) -> usize {
        let mut processed = 0;
        while self.process_next_event(form) {
            processed += 1;
        }
        processed
    }

    pub fn has_pending_events(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    fn record(&mut self, outcome: HandlerOutcome) {
        self.stats.processed += 1;
        match outcome {
            HandlerOutcome::SubmissionAccepted => self.stats.submissions_accepted += 1,
            HandlerOutcome::SubmissionRejected => self.stats.submissions_rejected += 1,
            HandlerOutcome::Reset => self.stats.resets += 1,
            HandlerOutcome::Updated | HandlerOutcome::Ignored => {}
        }
    }
}

/// 把事件路由到对应的处理函数
pub fn dispatch(event: &Event, form: &mut GuestForm) -> HandlerOutcome {
    handlers::global::handle_global_event(event);

    match &event.event_type {
        FormEvent::Input { .. } => handlers::input::handle_input(event, form),
        FormEvent::Blur(_) => handlers::input::handle_blur(event, form),
        FormEvent::AttendanceSelected(_) => handlers::input::handle_attendance(event, form),
        FormEvent::Submit => handlers::submission::handle_submit(event, form),
        FormEvent::Reset => handlers::submission::handle_reset(event, form),
    }
}
