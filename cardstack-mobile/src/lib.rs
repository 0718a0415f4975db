//! Card Stack Mobile UI
//!
//! Touch-optimized mobile screen built with Yew. Presents the virtual and
//! physical payment cards as a stack the user drags vertically to swap,
//! with a spring snapping the stack into place on release.

mod components;

use components::CardStackScreen;
use yew::prelude::*;

/// Main mobile application component
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="mobile-app">
            <CardStackScreen />
        </div>
    }
}

/// Entry point for WASM
#[cfg(target_arch = "wasm32")]
pub fn run_app() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("card stack screen starting");
    yew::Renderer::<App>::new().render();
}
