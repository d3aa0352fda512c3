use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent, ResizeObserver};
use yew::prelude::*;

use crate::error::SetupError;
use crate::layout::{PlayArea as Area, ScreenDimensions, click_action};
use crate::model::GameState;
use crate::renderer::{Renderer, RendererHandle};

#[derive(Properties, PartialEq, Clone)]
pub struct PlayAreaProps {
    pub game: UseReducerHandle<GameState>,
    pub dimensions: ScreenDimensions,
    /// Fired by the canvas' own resize notification.
    pub on_surface_resize: Callback<()>,
    pub on_error: Callback<SetupError>,
    #[prop_or_default]
    pub on_renderer_ready: Option<Callback<RendererHandle>>,
}

#[function_component]
pub fn PlayArea(props: &PlayAreaProps) -> Html {
    let canvas_ref = use_node_ref();
    let renderer = use_mut_ref(|| None::<Rc<Renderer>>);

    // Mount: build the renderer once and watch the canvas size
    {
        let canvas_ref = canvas_ref.clone();
        let renderer = renderer.clone();
        let on_surface_resize = props.on_surface_resize.clone();
        let on_error = props.on_error.clone();
        let on_ready = props.on_renderer_ready.clone();
        use_effect_with((), move |_| {
            let mut observer: Option<(ResizeObserver, Closure<dyn FnMut(js_sys::Array, ResizeObserver)>)> =
                None;
            match canvas_ref.cast::<HtmlCanvasElement>() {
                None => on_error.emit(SetupError::CanvasMissing),
                Some(canvas) => match Renderer::new(canvas.clone()) {
                    Err(e) => on_error.emit(e),
                    Ok(r) => {
                        let r = Rc::new(r);
                        *renderer.borrow_mut() = Some(r.clone());
                        log::info!("renderer ready");
                        if let Some(cb) = on_ready {
                            cb.emit(RendererHandle::new(&r));
                        }
                        let resize_cb = Closure::wrap(Box::new(
                            move |_entries: js_sys::Array, _obs: ResizeObserver| {
                                on_surface_resize.emit(());
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, ResizeObserver)>);
                        match ResizeObserver::new(resize_cb.as_ref().unchecked_ref()) {
                            Ok(obs) => {
                                obs.observe(&canvas);
                                observer = Some((obs, resize_cb));
                            }
                            // Window resize still drives layout without it.
                            Err(e) => log::warn!("ResizeObserver unavailable: {:?}", e),
                        }
                    }
                },
            }
            move || {
                if let Some((obs, _keep_alive)) = observer {
                    obs.disconnect();
                }
            }
        });
    }

    // Redraw whenever the state or the dimensions change
    {
        let renderer = renderer.clone();
        let state = (*props.game).clone();
        let dims = props.dimensions;
        use_effect_with((state, dims), move |(state, dims)| {
            if let Some(r) = &*renderer.borrow() {
                r.resize(dims);
                r.draw(state, &Area::new(dims));
            }
            || ()
        });
    }

    let onclick = {
        let game = props.game.clone();
        let dims = props.dimensions;
        Callback::from(move |e: MouseEvent| {
            if let Some(action) = click_action(&game, &dims, e.offset_x() as f64, e.offset_y() as f64) {
                game.dispatch(action);
            }
        })
    };

    let cursor = if props.game.is_playing { "pointer" } else { "default" };
    html! {
        <canvas ref={canvas_ref} id="game-canvas" aria-label="Clickable target" {onclick}
            style={format!("display:block; width:{}px; height:{}px; cursor:{};", props.dimensions.width, props.dimensions.height, cursor)}></canvas>
    }
}
