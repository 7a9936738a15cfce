mod components;
mod model;
mod state;
mod storage;
mod util;

use components::App;

fn main() {
    util::init_logging(log::LevelFilter::Info);
    log::info!("swipe-arrows starting");
    yew::Renderer::<App>::new().render();
}
