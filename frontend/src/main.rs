use crate::app::App;

mod app;
mod components;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed.
    console_log::init_with_level(log::Level::Debug).ok();

    yew::Renderer::<App>::new().render();
}
