use crate::events::{Event, FormEvent};

/// 全局事件处理器 - 在具体处理器之前记录每个事件
pub fn handle_global_event(event: &Event) {
    match &event.event_type {
        // 输入内容可能包含个人信息，只记录字段名
        FormEvent::Input { field, value } => {
            log::debug!(
                "事件: Input 字段: {} 长度: {} 来源: {} 时间: {}",
                field,
                value.chars().count(),
                event.source,
                event.timestamp
            );
        }
        other => {
            log::debug!("事件: {} 来源: {} 时间: {}", other.type_name(), event.source, event.timestamp);
        }
    }
}
