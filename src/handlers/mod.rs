pub mod input;
pub mod submission;
pub mod global;

/// 事件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// 字段值或参加状态已更新
    Updated,
    /// 提交成功，已生成快照
    SubmissionAccepted,
    /// 提交被校验拦截
    SubmissionRejected,
    /// 表单已重置
    Reset,
    /// 事件与处理器不匹配
    Ignored,
}
