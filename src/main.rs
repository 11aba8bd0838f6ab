use product_console::config::CONFIG;
use product_console::App;

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Product Console starting... (API: {})", CONFIG.api_url());

    yew::Renderer::<App>::new().render();
}
