use yew::prelude::*;

use crate::model::PlayStatus;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub status: PlayStatus,
    pub on_toggle_pause: Callback<()>,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let pause_cb = {
        let cb = props.on_toggle_pause.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let status = props.status;
    let aria = match status {
        PlayStatus::Playing => "Pause Game",
        PlayStatus::Paused => "Resume Game",
    };
    html! {<div id="game-header" style="height:50px; box-sizing:border-box; background:#21262d; display:flex; justify-content:space-between; align-items:center; padding:0 24px;">
        <div style="display:flex; flex-direction:column; align-items:flex-start; gap:2px;">
            <span style="font-size:20px; font-weight:bold; color:#fff;">{"Circle Clicker"}</span>
            <span id="game-status" style={format!("font-size:12px; color:{};", status.color())}>{ status.header_label() }</span>
        </div>
        <button id="pause-button" class={format!("game-button pause-button {}", status.button_class())} aria-label={aria} onclick={pause_cb}
            style="width:100px; height:36px; border-radius:8px;">
            { status.pause_button_label() }
        </button>
    </div>}
}
