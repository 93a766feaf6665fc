/// 条件字段控制器 - 根据参加标志显示或隐藏客人姓名字段

use serde::{Deserialize, Serialize};

/// 单选框的取值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    Yes,
    No,
}

impl Attendance {
    pub fn label(&self) -> &'static str {
        match self {
            Attendance::Yes => "Yes",
            Attendance::No => "No",
        }
    }

    pub fn is_attending(&self) -> bool {
        matches!(self, Attendance::Yes)
    }
}

/// 客人姓名字段的可见状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GuestFieldVisibility {
    #[default]
    Hidden,
    Visible,
}

/// 状态迁移结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityTransition {
    Shown,
    Hidden,
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceController {
    visibility: GuestFieldVisibility,
}

impl AttendanceController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择是否携带客人。状态未变化时返回 None。
    pub fn select(&mut self, attendance: Attendance) -> Option<VisibilityTransition> {
        let next = if attendance.is_attending() {
            GuestFieldVisibility::Visible
        } else {
            GuestFieldVisibility::Hidden
        };

        if next == self.visibility {
            return None;
        }

        self.visibility = next;
        Some(match next {
            GuestFieldVisibility::Visible => VisibilityTransition::Shown,
            GuestFieldVisibility::Hidden => VisibilityTransition::Hidden,
        })
    }

    pub fn visibility(&self) -> GuestFieldVisibility {
        self.visibility
    }

    pub fn is_attending(&self) -> bool {
        self.visibility == GuestFieldVisibility::Visible
    }

    /// 回到初始状态
    pub fn reset(&mut self) -> Option<VisibilityTransition> {
        self.select(Attendance::No)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_hidden() {
        let controller = AttendanceController::new();
        assert_eq!(controller.visibility(), GuestFieldVisibility::Hidden);
        assert!(!controller.is_attending());
    }

    #[test]
    fn test_transitions() {
        let mut controller = AttendanceController::new();
        assert_eq!(controller.select(Attendance::Yes), Some(VisibilityTransition::Shown));
        assert!(controller.is_attending());

        // 重复选择不产生迁移
        assert_eq!(controller.select(Attendance::Yes), None);

        assert_eq!(controller.select(Attendance::No), Some(VisibilityTransition::Hidden));
        assert_eq!(controller.visibility(), GuestFieldVisibility::Hidden);
        assert_eq!(controller.select(Attendance::No), None);
    }
}
