use yew::Callback;

mod components;
mod config;
mod error;
mod layout;
mod model;
mod renderer;

use components::App;
use components::app::AppProps;
use renderer::RendererHandle;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
        }
    }
    log::info!("Circle Clicker starting");

    // Debug builds log the renderer as it attaches.
    let on_renderer_ready = cfg!(debug_assertions).then(|| {
        Callback::from(|handle: RendererHandle| {
            log::debug!(
                "renderer attached: {} frames, target at {:?}",
                handle.frames(),
                handle.target_position()
            );
        })
    });
    yew::Renderer::<App>::with_props(AppProps { on_renderer_ready }).render();
}
