fn main() {
    dioxus_logger::init(*codecure::config::LOG_LEVEL).expect("failed to init logger");
    log::info!("backend at {}", codecure::config::API_ORIGIN.as_str());

    #[cfg(target_arch = "wasm32")]
    dioxus_web::launch(codecure::App);

    #[cfg(not(target_arch = "wasm32"))]
    log::error!("codecure runs in the browser, build it for wasm32-unknown-unknown");
}
