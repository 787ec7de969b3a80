mod components;
mod content;
mod engine;
mod hooks;
mod pages;

use yew::prelude::*;

use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
