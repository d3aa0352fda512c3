use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PauseOverlayProps {
    pub show: bool,
}

#[function_component]
pub fn PauseOverlay(props: &PauseOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    html! {
        <div id="pause-overlay" style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.8); pointer-events:none;">
            <div style="background:#21262d; border-radius:20px; padding:32px 48px; display:flex; flex-direction:column; align-items:center; gap:12px;">
                <span style="font-size:64px; color:#ffa500;">{"⏸️"}</span>
                <span style="font-size:28px; font-weight:bold; color:#fff;">{"GAME PAUSED"}</span>
            </div>
        </div>
    }
}
