use crate::core::RingBuffer;
use super::event_types::Event;

/// 待处理事件队列 - 在RingBuffer基础上保证事件的严格顺序
///
/// 每个用户操作都必须被处理，队列满时扩容而不丢弃事件。
pub struct FormEventQueue {
    events: RingBuffer<Event>,
    published: u64,
}

impl FormEventQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: RingBuffer::new(capacity),
            published: 0,
        }
    }

    /// 发布事件到队列
    pub fn publish(&mut self, event: Event) {
        self.published += 1;
        let capacity = self.events.capacity();
        self.events.push(event);
        if self.events.capacity() != capacity {
            log::debug!("事件队列扩容: {} -> {}", capacity, self.events.capacity());
        }
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn published(&self) -> u64 {
        self.published
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::FormEvent;

    #[test]
    fn test_full_queue_keeps_every_event() {
        let mut queue = FormEventQueue::new(2);
        queue.publish(Event::new(FormEvent::Submit, "test"));
        queue.publish(Event::new(FormEvent::Reset, "test"));
        queue.publish(Event::new(FormEvent::Submit, "test"));

        assert_eq!(queue.published(), 3);
        assert_eq!(queue.pop().map(|e| e.event_type), Some(FormEvent::Submit));
        assert_eq!(queue.pop().map(|e| e.event_type), Some(FormEvent::Reset));
        assert_eq!(queue.pop().map(|e| e.event_type), Some(FormEvent::Submit));
        assert!(queue.is_empty());
    }
}
