/// GUI模块 - 基于egui的宾客表单窗口
pub mod egui_app;
pub mod form_widget;

pub use egui_app::GuestFormApp;
pub use form_widget::GuestFormWidget;
