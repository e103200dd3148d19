use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod pages;
mod session;
mod tops_sheet;
mod url_state;

fn main() {
    yew::Renderer::<App>::new().render();
}
