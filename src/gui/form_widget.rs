use eframe::egui;

use crate::events::{FormEvent, FormEventDispatcher};
use crate::form::{Attendance, FieldId, FieldSpec, FormValues, GuestForm, InputKind, Snapshot, ATTENDANCE_QUESTION};

/// 事件来源标识
const EVENT_SOURCE: &str = "gui";

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
const INPUT_WIDTH: f32 = 280.0;

/// 宾客表单组件
///
/// 只负责渲染和收集用户操作。编辑中的文本保存在 `drafts` 中，
/// 每次事件处理完后与表单状态同步。
pub struct GuestFormWidget {
    drafts: FormValues,
}

impl GuestFormWidget {
    pub fn new() -> Self {
        Self {
            drafts: FormValues::default(),
        }
    }

    /// 用表单的权威值覆盖编辑缓冲（例如重置之后）
    pub fn sync(&mut self, values: &FormValues) {
        if &self.drafts != values {
            self.drafts = values.clone();
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, form: &GuestForm, dispatcher: &mut FormEventDispatcher) {
        self.show_text_field(ui, FieldId::Name.spec(), form, dispatcher);
        self.show_text_field(ui, FieldId::Mail.spec(), form, dispatcher);
        self.show_text_field(ui, FieldId::Age.spec(), form, dispatcher);

        self.show_attendance(ui, form, dispatcher);

        if form.is_guest_field_visible() {
            self.show_text_field(ui, FieldId::GuestName.spec(), form, dispatcher);
        }

        if let Some(snapshot) = form.snapshot() {
            show_summary(ui, snapshot);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let submit = egui::Button::new(egui::RichText::new("SUBMIT").strong().color(egui::Color32::WHITE))
                .fill(egui::Color32::BLACK);
            if ui.add(submit).clicked() {
                dispatcher.emit(FormEvent::Submit, EVENT_SOURCE);
            }

            let reset = egui::Button::new(egui::RichText::new("RESET").strong().color(egui::Color32::BLACK))
                .fill(egui::Color32::from_gray(209));
            if ui.add(reset).clicked() {
                dispatcher.emit(FormEvent::Reset, EVENT_SOURCE);
            }
        });
    }

    fn show_text_field(
        &mut self,
        ui: &mut egui::Ui,
        spec: &FieldSpec,
        form: &GuestForm,
        dispatcher: &mut FormEventDispatcher,
    ) {
        let error = form.error_message(spec.id);

        ui.add_space(6.0);
        ui.label(egui::RichText::new(spec.label).strong());

        let draft = match spec.id {
            FieldId::Name => &mut self.drafts.name,
            FieldId::Mail => &mut self.drafts.mail,
            FieldId::Age => &mut self.drafts.age,
            FieldId::GuestName => &mut self.drafts.guest_name,
        };

        let mut edit = egui::TextEdit::singleline(draft)
            .id_source(spec.html_id)
            .hint_text(spec.placeholder)
            .desired_width(INPUT_WIDTH);
        if spec.input_kind == InputKind::Number {
            edit = edit.horizontal_align(egui::Align::Max);
        }

        // 无效字段加红色边框
        let stroke = if error.is_some() {
            egui::Stroke::new(1.5, ERROR_COLOR)
        } else {
            egui::Stroke::NONE
        };
        let response = egui::Frame::none()
            .stroke(stroke)
            .rounding(3.0)
            .inner_margin(1.0)
            .show(ui, |ui| ui.add(edit))
            .inner;

        if response.changed() {
            dispatcher.emit(FormEvent::input(spec.id, draft.clone()), EVENT_SOURCE);
        }
        if response.lost_focus() {
            dispatcher.emit(FormEvent::Blur(spec.id), EVENT_SOURCE);
        }

        if let Some(message) = error {
            ui.label(egui::RichText::new(message).color(ERROR_COLOR).italics().small());
        }
    }

    fn show_attendance(&mut self, ui: &mut egui::Ui, form: &GuestForm, dispatcher: &mut FormEventDispatcher) {
        ui.add_space(6.0);
        ui.label(egui::RichText::new(ATTENDANCE_QUESTION).strong());
        ui.horizontal(|ui| {
            for attendance in [Attendance::Yes, Attendance::No] {
                let checked = form.is_attending() == attendance.is_attending();
                if ui.radio(checked, attendance.label()).clicked() {
                    dispatcher.emit(FormEvent::AttendanceSelected(attendance), EVENT_SOURCE);
                }
            }
        });
    }
}

impl Default for GuestFormWidget {
    fn default() -> Self {
        Self::new()
    }
}

/// 提交摘要
fn show_summary(ui: &mut egui::Ui, snapshot: &Snapshot) {
    ui.add_space(10.0);
    ui.heading("Summary:");
    for (label, value) in snapshot.summary_lines() {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("{}:", label)).strong());
            ui.label(value);
        });
    }
}
