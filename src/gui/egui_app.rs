use eframe::egui;

use crate::config::AppConfig;
use crate::events::FormEventDispatcher;
use crate::form::GuestForm;
use crate::gui::GuestFormWidget;

pub struct GuestFormApp {
    form: GuestForm,
    dispatcher: FormEventDispatcher,
    form_widget: GuestFormWidget,
}

impl GuestFormApp {
    pub fn new(config: &AppConfig) -> Self {
        log::info!("创建宾客表单窗口: {}", config.gui.title);

        Self {
            form: GuestForm::from_config(&config.form),
            dispatcher: FormEventDispatcher::new(config.form.event_buffer_size),
            form_widget: GuestFormWidget::new(),
        }
    }
}

impl eframe::App for GuestFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::symmetric(24.0, 18.0))
                    .show(ui, |ui| {
                        self.form_widget.show(ui, &self.form, &mut self.dispatcher);
                    });
            });
        });

        // 本帧收集的事件按顺序处理，然后把结果同步回编辑缓冲
        if self.dispatcher.has_pending_events() {
            self.dispatcher.process_all_events(&mut self.form);
            self.form_widget.sync(self.form.values());
            ctx.request_repaint();
        }
    }
}

impl Drop for GuestFormApp {
    fn drop(&mut self) {
        let stats = self.dispatcher.stats();
        log::info!(
            "窗口关闭 - 事件: {} 已处理: {} 提交成功: {} 提交失败: {} 重置: {}",
            stats.published,
            stats.processed,
            stats.submissions_accepted,
            stats.submissions_rejected,
            stats.resets
        );
    }
}
