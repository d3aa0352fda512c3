use yew::prelude::*;

use crate::model::PlayStatus;

#[derive(Properties, PartialEq, Clone)]
pub struct FooterProps {
    pub score: u64,
    pub status: PlayStatus,
    pub on_reset: Callback<()>,
}

#[function_component]
pub fn Footer(props: &FooterProps) -> Html {
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let text_style = "font-size:12px; flex:1;";
    html! {<div id="game-footer" style="height:50px; box-sizing:border-box; background:#21262d; display:flex; align-items:center; padding:0 20px; gap:12px;">
        <span id="total-clicks" style={format!("{} color:#7d8590;", text_style)}>{ format!("Total Clicks: {}", props.score) }</span>
        <button id="reset-button" class="game-button reset-button" aria-label="Reset Game" onclick={reset_cb}
            style="width:140px; height:36px; border-radius:12px;">
            {"🔄 Reset Game"}
        </button>
        <span style={format!("{} color:#58a6ff; text-align:center;", text_style)}>{"Built with Rust + Yew"}</span>
        <span id="footer-status" style={format!("{} text-align:right; color:{};", text_style, props.status.color())}>{ props.status.footer_label() }</span>
    </div>}
}
