use super::{
    error_fallback::ErrorFallback, footer::Footer, header::Header, pause_overlay::PauseOverlay,
    play_area::PlayArea, score_panel::ScorePanel,
};
use crate::config::GameConfig;
use crate::error::SetupError;
use crate::layout::{ScreenDimensions, compute_dimensions, viewport_dimensions};
use crate::model::{GameAction, GameState};
use crate::renderer::RendererHandle;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    /// Receives the renderer once it is up; lets a test driver find the target
    /// without reaching for globals.
    #[prop_or_default]
    pub on_renderer_ready: Option<Callback<RendererHandle>>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = use_memo((), |_| GameConfig::load());
    let game = {
        let initial = config.initial.clone();
        use_reducer(move || GameState::initialize(Some(&initial)))
    };
    let dimensions = {
        let layout = config.layout;
        use_state_eq(move || {
            // Fallback used only when the window can't be read
            viewport_dimensions(&layout).unwrap_or_else(|| compute_dimensions(800.0, 700.0, &layout))
        })
    };
    let setup_error = use_state(|| None::<SetupError>);

    // Window resize and the canvas' own resize notification share this
    let recompute: Callback<()> = {
        let dimensions = dimensions.clone();
        let layout = config.layout;
        Callback::from(move |()| {
            if let Some(d) = viewport_dimensions(&layout) {
                log::debug!("dimensions {}x{} scale {:.2}", d.width, d.height, d.scale);
                dimensions.set(d);
                if let Some(win) = web_sys::window() {
                    win.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
        })
    };

    // Window listeners: resize and Space to pause/resume
    {
        let recompute = recompute.clone();
        let dispatcher = game.dispatcher();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                recompute.emit(());
            }) as Box<dyn FnMut(_)>);
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.code() == "Space" {
                    e.prevent_default();
                    dispatcher.dispatch(GameAction::TogglePause);
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                for (name, cb) in [
                    ("resize", resize_cb.as_ref()),
                    ("keydown", key_cb.as_ref()),
                ] {
                    if let Err(e) = win.add_event_listener_with_callback(name, cb.unchecked_ref()) {
                        log::warn!("failed to listen for {}: {:?}", name, e);
                    }
                }
            }
            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(resize_cb);
                drop(key_cb);
            }
        });
    }

    if let Some(err) = &*setup_error {
        return html! { <ErrorFallback message={err.to_string()} /> };
    }

    let on_error = {
        let setup_error = setup_error.clone();
        Callback::from(move |e: SetupError| {
            log::error!("setup failed: {}", e);
            setup_error.set(Some(e));
        })
    };
    let toggle_pause = {
        let game = game.clone();
        Callback::from(move |()| game.dispatch(GameAction::TogglePause))
    };
    let reset = {
        let game = game.clone();
        Callback::from(move |()| game.dispatch(GameAction::Reset))
    };

    let status = game.status();
    let dims: ScreenDimensions = *dimensions;
    html! {<div id="app-container" style="display:flex; flex-direction:column; width:100vw; height:100vh; overflow:hidden; background:#0d1117;">
        <Header {status} on_toggle_pause={toggle_pause} />
        <div id="game-play-area" style="position:relative; flex:1; overflow:hidden;">
            <PlayArea
                game={game.clone()}
                dimensions={dims}
                on_surface_resize={recompute}
                {on_error}
                on_renderer_ready={props.on_renderer_ready.clone()}
            />
            <ScorePanel score={game.score} {status} />
            <PauseOverlay show={!game.is_playing} />
        </div>
        <Footer score={game.score} {status} on_reset={reset} />
    </div>}
}
