use eframe::egui;
use guest_rsvp::config::ConfigManager;
use guest_rsvp::gui::GuestFormApp;

fn main() -> Result<(), eframe::Error> {
    // 配置文件是可选的，缺失时使用默认值
    let mut manager = ConfigManager::new();
    let load_error = manager.load_or_default();
    let config = manager.config().clone();

    if let Err(e) = guest_rsvp::init_logging(&config.logging) {
        eprintln!("日志初始化失败: {}", e);
    }
    // 日志就绪后再报告配置回退，否则警告会丢失
    if let Some(e) = load_error {
        log::warn!("配置 {} 加载失败，使用默认值: {}", manager.path().display(), e);
    }
    log::info!("guest_rsvp v{} 启动", guest_rsvp::VERSION);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.gui.title.clone())
            .with_inner_size([config.gui.width, config.gui.height]),
        ..Default::default()
    };

    let title = config.gui.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Box::new(GuestFormApp::new(&config))),
    )
}
