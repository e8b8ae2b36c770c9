mod components;
mod content;
mod model;
mod state;
mod storage;
mod util;

use components::app::App;

fn main() {
    util::init_logging(log::LevelFilter::Info);
    log::info!("mounting container guide");
    yew::Renderer::<App>::new().render();
}
