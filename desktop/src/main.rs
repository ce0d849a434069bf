use dioxus::prelude::*;

const WINDOW_TITLE: &str = "Poultry Farm Management";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::Config;
        use dioxus::desktop::LogicalSize;
        use dioxus::desktop::WindowBuilder;

        let window = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(1280.0, 840.0));
        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(window))
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus_logger::tracing::info!("{} starting without a native window config", WINDOW_TITLE);
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    ui::App()
}
