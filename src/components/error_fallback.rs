use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorFallbackProps {
    pub message: String,
}

/// Shown instead of the game when setup fails. The only recovery is a full reload.
#[function_component]
pub fn ErrorFallback(props: &ErrorFallbackProps) -> Html {
    let reload = Callback::from(|_| {
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().reload() {
                log::error!("reload failed: {:?}", e);
            }
        }
    });
    html! {
        <div class="error-container" style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Something went wrong:"}</h2>
            <pre style="white-space:pre-wrap;">{ props.message.clone() }</pre>
            <button onclick={reload}>{"Try again"}</button>
        </div>
    }
}
