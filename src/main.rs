mod components;
mod config;
mod error;
mod input;
mod model;
mod render;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
