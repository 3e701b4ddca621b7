mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Image Generator");

    iced::application(
        app::ImageGeneratorApp::build,
        app::ImageGeneratorApp::handle_update,
        app::ImageGeneratorApp::render_view,
    )
    .title(app::ImageGeneratorApp::title)
    .theme(app::ImageGeneratorApp::theme)
    .window(iced::window::Settings {
        size: iced::Size::new(1100.0, 860.0),
        ..Default::default()
    })
    .run()
}
